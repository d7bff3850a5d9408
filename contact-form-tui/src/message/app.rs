//! 应用主消息枚举

use contact_form_core::Completion;

use super::{FormMessage, ListMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 在表单与列表之间切换
    ToggleView,

    /// 表单视图相关消息
    Form(FormMessage),

    /// 列表视图相关消息
    List(ListMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 远程操作完成
    Backend(Completion),

    /// 显示帮助
    ShowHelp,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
