//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,
    /// 切换按钮焦点
    SwitchFocus,
    /// 确认/执行操作
    Confirm,
}
