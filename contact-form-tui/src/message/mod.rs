//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作和后台结果都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod form;           // 表单视图子消息
//!         mod list;           // 列表视图子消息
//!         mod modal;          // 弹窗子消息
//!
//!
//!     主消息 AppMessage 除了承载按键翻译出的子消息外，
//!     还有一个特殊变体 Backend(Completion)：
//!     它不来自 Event 层，而是主循环从 Backend 的结果通道中取出后构造的。
//!
//!         pub enum AppMessage {
//!             Quit,                       // 退出应用
//!             ToggleView,                 // 表单 ↔ 列表
//!             Form(FormMessage),          // 表单子消息
//!             List(ListMessage),          // 列表子消息
//!             Modal(ModalMessage),        // 弹窗子消息
//!             Backend(Completion),        // 远程操作结果
//!             ShowHelp,                   // 显示帮助
//!             Noop,                       // 无操作，用于代替 Option::None
//!         }
//!

mod app;
mod form;
mod list;
mod modal;

pub use app::AppMessage;
pub use form::FormMessage;
pub use list::ListMessage;
pub use modal::ModalMessage;
