//! 列表视图消息类型

/// 列表视图相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// 编辑选中的表单
    Edit,
    /// 删除选中的表单（先确认）
    Delete,
    /// 重新获取列表
    Refresh,
}
