//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 表单草稿、已提交记录和视图模式都由 core 的 `Session` 持有，
//! 这里只补充纯界面相关的状态（焦点、列表选中项、弹窗、状态栏）。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 表单焦点（字段 / 提交按钮）
//!         pub mod state;      // 表单、列表、弹窗的界面状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub session: Session,               // 草稿 + 记录 + 视图模式（core）
//!             pub form: FormState,                // 表单焦点
//!             pub list: ListState,                // 列表选中项、加载状态
//!             pub modal: ModalState,              // 弹窗状态
//!             pub status_message: Option<String>, // 状态栏消息
//!             pub outbox: Vec<Command>,           // 待执行的远程命令
//!         }
//!
//!     outbox 由主循环取走并交给 Backend 执行，
//!     执行结果以 `AppMessage::Backend(Completion)` 的形式回到 Update 层。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Modal 枚举：每种弹窗都是一个变体，携带该弹窗的所有数据
//!             - Alert { title, message, is_error }
//!             - ConfirmDelete { item_id, item_name, focus }
//!             - Help
//!
//!         ModalState 容器：
//!             - active: Option<Modal>    // None = 无弹窗, Some = 有弹窗
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FormFocus;
pub use state::{FormState, ListState, Modal, ModalState};
