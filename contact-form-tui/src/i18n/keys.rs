//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **视图内容归对应视图**：`form.*`, `list.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 校验错误消息来自 core，不在此翻译。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 表单视图文本
    pub form: FormTexts,
    /// 列表视图文本
    pub list: ListTexts,
    /// 弹窗文本（所有弹窗的内容）
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub cancel: &'static str,
    pub close: &'static str,
    pub quit: &'static str,
    pub error: &'static str,
    pub success: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub space: &'static str,
    pub arrows_lr: &'static str, // "←→"
    pub arrows_ud: &'static str, // "↑↓"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub next_field: &'static str,    // "下一项" / "Next field"
    pub choose: &'static str,        // "选择" / "Choose"
    pub toggle: &'static str,        // "勾选" / "Toggle"
    pub submit: &'static str,        // "提交" / "Submit"
    pub cancel_edit: &'static str,   // "取消编辑" / "Cancel edit"
    pub select: &'static str,        // "选择" / "Select"
    pub switch_view: &'static str,   // "切换视图" / "Switch view"
    pub refresh: &'static str,       // "刷新" / "Refresh"
    pub help: &'static str,          // "帮助" / "Help"
}

// ============================================================================
// 视图文本
// ============================================================================

/// 表单视图文本
pub struct FormTexts {
    /// 新建模式标题
    pub title_create: &'static str,
    /// 编辑模式标题
    pub title_edit: &'static str,
    /// 新建模式按钮
    pub submit: &'static str,
    /// 编辑模式按钮
    pub update: &'static str,
    /// 提交中按钮
    pub submitting: &'static str,
    /// 字段标签
    pub labels: FieldLabels,
    /// 单选 / 多选项显示名称
    pub choices: ChoiceTexts,
    /// 未选择
    pub none_selected: &'static str,
}

/// 字段标签
pub struct FieldLabels {
    pub name: &'static str,
    pub email: &'static str,
    pub mobile_number: &'static str,
    pub address: &'static str,
    pub state: &'static str,
    pub city: &'static str,
    pub age: &'static str,
    pub gender: &'static str,
    pub terms: &'static str,
    pub contact_method: &'static str,
    pub hobbies: &'static str,
    pub message: &'static str,
}

/// 选项显示名称
pub struct ChoiceTexts {
    pub male: &'static str,
    pub female: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub reading: &'static str,
    pub travelling: &'static str,
    pub sports: &'static str,
    pub coding: &'static str,
}

/// 列表视图文本
pub struct ListTexts {
    pub title: &'static str,
    pub no_forms: &'static str,
    pub no_forms_hint: &'static str,
    pub column_name: &'static str,
    pub column_email: &'static str,
    pub column_address: &'static str,
    /// 上次刷新时间前缀
    pub last_refreshed: &'static str,
    pub never_refreshed: &'static str,
}

// ============================================================================
// 弹窗文本
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub confirm_delete: ConfirmDeleteTexts,
    pub alerts: AlertTexts,
    pub press_to_close: &'static str,
}

/// 确认删除弹窗
pub struct ConfirmDeleteTexts {
    pub title: &'static str,
    pub prompt: &'static str,
    pub unnamed: &'static str,
}

/// 提示弹窗内容
pub struct AlertTexts {
    /// 服务端未返回消息时的默认成功文本
    pub submitted: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    /// 失败提示
    pub submit_failed: &'static str,
    pub delete_failed: &'static str,
    pub edit_failed: &'static str,
}

// ============================================================================
// 状态栏 / 帮助
// ============================================================================

/// 状态栏文本
pub struct StatusBarTexts {
    pub loading: &'static str,
    pub submitting: &'static str,
    pub already_submitting: &'static str,
    pub deleting: &'static str,
    pub refresh_failed: &'static str,
    /// 后接错误字段数量
    pub invalid_fields: &'static str,
    pub edit_cancelled: &'static str,
}

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub form: &'static str,
    pub list: &'static str,
    pub actions: HelpActionTexts,
}

/// 帮助弹窗中的动作描述
pub struct HelpActionTexts {
    pub toggle_view: &'static str,
    pub quit: &'static str,
    pub show_help: &'static str,
    pub move_field: &'static str,
    pub choose_option: &'static str,
    pub toggle_check: &'static str,
    pub submit_form: &'static str,
    pub cancel_edit: &'static str,
    pub select_row: &'static str,
    pub edit_row: &'static str,
    pub delete_row: &'static str,
    pub refresh_list: &'static str,
}
