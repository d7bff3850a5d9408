//! 类型定义模块

mod field;

pub use field::{Field, TextField, GENDER_CHOICES};

// Re-export wire types from the client library
pub use contact_form_client::{ContactMethod, FormRecord, Hobby, StoreReply};
