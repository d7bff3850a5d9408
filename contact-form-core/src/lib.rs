//! Contact Form Core Library
//!
//! 联系表单客户端的核心业务逻辑，与界面无关：
//! - 草稿状态与字段更新（[`draft`]）
//! - 提交前校验（[`validation`]）
//! - 列表/表单会话状态机（[`session`]）
//! - 远程记录存储服务（[`services`]）
//!
//! 存储层通过 [`contact_form_client::RecordStore`] trait 注入。

pub mod draft;
pub mod error;
pub mod services;
pub mod session;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use draft::{Draft, FieldUpdate};
pub use error::{CoreError, CoreResult};
pub use services::{FormService, ServiceContext};
pub use session::{Command, Completion, Notice, Session, SubmitOutcome, Transition, ViewMode};
pub use validation::{validate, ValidationErrors};

pub use contact_form_client::{HttpRecordStore, RecordStore, DEFAULT_BASE_URL};
