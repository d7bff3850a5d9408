//! 应用主状态结构

use contact_form_core::{Command, Session};

use super::{FormState, ListState, ModalState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 表单会话（草稿、已提交记录、视图模式）
    pub session: Session,

    // === 界面状态 ===
    /// 表单焦点
    pub form: FormState,
    /// 列表选中项与加载状态
    pub list: ListState,
    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 待交给 Backend 执行的命令
    pub outbox: Vec<Command>,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            should_quit: false,
            session: Session::new(),
            form: FormState::new(),
            list: ListState::new(),
            modal: ModalState::new(),
            status_message: None,
            outbox: Vec::new(),
        }
    }

    /// 排队一个远程命令
    pub fn dispatch(&mut self, command: Command) {
        match &command {
            Command::Refresh => self.list.loading = true,
            Command::Delete { id } => self.list.deleting = Some(id.clone()),
            Command::Create(_) | Command::Update { .. } => {}
        }
        self.outbox.push(command);
    }

    /// 取走所有待执行命令
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.outbox)
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
