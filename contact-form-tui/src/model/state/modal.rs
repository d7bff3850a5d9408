//! 弹窗/对话框状态

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 操作结果提示（成功或失败）
    Alert {
        title: String,
        message: String,
        is_error: bool,
    },
    /// 确认删除
    ConfirmDelete {
        /// 记录 ID
        item_id: String,
        /// 显示名称
        item_name: String,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 帮助
    Help,
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示确认删除弹窗（默认焦点在取消）
    pub fn show_confirm_delete(&mut self, item_id: &str, item_name: &str) {
        self.active = Some(Modal::ConfirmDelete {
            item_id: item_id.to_string(),
            item_name: item_name.to_string(),
            focus: 0,
        });
    }

    /// 显示成功提示
    pub fn show_info(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Alert {
            title: title.to_string(),
            message: message.to_string(),
            is_error: false,
        });
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Alert {
            title: title.to_string(),
            message: message.to_string(),
            is_error: true,
        });
    }
}
