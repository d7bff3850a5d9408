//!
//! src/event/mod.rs
//! Event 层：输入处理
//!
//! 将 crossterm 的原始终端事件翻译成 Message。
//!
//!     handler.rs      轮询事件并按当前状态（弹窗 / 视图 / 焦点）分发
//!     keymap.rs       快捷键定义
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
