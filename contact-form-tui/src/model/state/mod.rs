//! 界面状态模块
//!
//! 定义表单、列表与弹窗的界面状态数据结构

mod form;
mod list;
mod modal;

pub use form::FormState;
pub use list::ListState;
pub use modal::{Modal, ModalState};
