//! 表单视图消息类型

/// 表单视图相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 下一个字段
    NextField,
    /// 上一个字段
    PrevField,
    /// 输入字符（文本字段）
    Input(char),
    /// 删除字符（文本字段）
    Backspace,
    /// 切换（复选框 / 光标处的爱好）
    Toggle,
    /// 上一个选项（单选 / 爱好光标）
    OptionPrev,
    /// 下一个选项（单选 / 爱好光标）
    OptionNext,
    /// 提交
    Submit,
    /// 取消编辑
    CancelEdit,
}
