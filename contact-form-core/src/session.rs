//! 会话状态机
//!
//! `Session` 是表单客户端的全部状态：草稿、已提交记录的本地镜像、当前视图。
//! 所有转换都是同步的纯状态变更，需要访问远程存储时返回 [`Command`]，
//! 由调用方执行后把结果以 [`Completion`] 交回 [`Session::complete`]。

use crate::draft::{Draft, FieldUpdate};
use crate::error::{CoreError, CoreResult};
use crate::types::{FormRecord, StoreReply};

/// 视图模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// 已提交记录列表
    List,
    /// 表单
    #[default]
    Form,
}

/// 需要远程存储执行的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 重新获取列表
    Refresh,
    /// 新建记录
    Create(FormRecord),
    /// 更新记录
    Update { id: String, record: FormRecord },
    /// 删除记录
    Delete { id: String },
}

impl Command {
    /// 简短名称（用于日志）
    pub fn name(&self) -> &'static str {
        match self {
            Command::Refresh => "refresh",
            Command::Create(_) => "create",
            Command::Update { .. } => "update",
            Command::Delete { .. } => "delete",
        }
    }
}

/// 远程操作的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Listed(CoreResult<Vec<FormRecord>>),
    /// `target` 为 `None` 表示新建
    Saved {
        target: Option<String>,
        result: CoreResult<StoreReply>,
    },
    Deleted {
        id: String,
        result: CoreResult<StoreReply>,
    },
}

/// 需要告知用户的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// 提交成功（携带存储返回的消息）
    Saved { message: String, updated: bool },
    /// 提交失败，草稿保持不变
    SaveFailed(CoreError),
    /// 删除成功
    Deleted { message: String },
    /// 删除失败，列表保持不变
    DeleteFailed(CoreError),
    /// 刷新失败，列表保持上一次的内容
    RefreshFailed(CoreError),
}

impl Notice {
    /// 是否需要阻塞式提示（弹窗）
    pub fn is_alert(&self) -> bool {
        !matches!(self, Notice::RefreshFailed(_))
    }
}

/// `complete` 的输出
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub notice: Option<Notice>,
    pub follow_up: Option<Command>,
}

/// `submit` 的输出
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 校验通过，需要执行该命令
    Queued(Command),
    /// 校验失败，错误已写入草稿
    Invalid,
}

/// 会话状态
#[derive(Debug, Clone, Default)]
pub struct Session {
    mode: ViewMode,
    draft: Draft,
    records: Vec<FormRecord>,
    saving: bool,
}

impl Session {
    /// 初始状态：表单视图、空白草稿、空列表
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// 本地记录镜像（只读）
    pub fn records(&self) -> &[FormRecord] {
        &self.records
    }

    /// 是否有提交正在进行
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// 更新草稿字段
    pub fn apply(&mut self, update: FieldUpdate) {
        self.draft.apply(update);
    }

    /// 切换视图；切到列表时需要刷新
    pub fn toggle_view(&mut self) -> Option<Command> {
        match self.mode {
            ViewMode::Form => {
                self.mode = ViewMode::List;
                Some(Command::Refresh)
            }
            ViewMode::List => {
                self.mode = ViewMode::Form;
                None
            }
        }
    }

    /// 校验并生成提交命令
    ///
    /// 已有提交在进行中时返回 `CoreError::Busy`，不会再次校验。
    pub fn submit(&mut self) -> CoreResult<SubmitOutcome> {
        if self.saving {
            return Err(CoreError::Busy);
        }

        if !self.draft.validate() {
            log::debug!(
                "Submission blocked by {} invalid field(s)",
                self.draft.errors.len()
            );
            return Ok(SubmitOutcome::Invalid);
        }

        self.saving = true;
        let record = self.draft.record.clone();
        let command = match &self.draft.target {
            Some(id) => Command::Update {
                id: id.clone(),
                record,
            },
            None => Command::Create(record),
        };
        Ok(SubmitOutcome::Queued(command))
    }

    /// 将列表中的记录载入草稿并切到表单视图
    pub fn edit(&mut self, id: &str) -> CoreResult<()> {
        let draft = self
            .records
            .iter()
            .find(|record| record.id.as_deref() == Some(id))
            .and_then(Draft::editing)
            .ok_or_else(|| CoreError::RecordNotFound(id.to_string()))?;

        self.draft = draft;
        self.mode = ViewMode::Form;
        Ok(())
    }

    /// 放弃当前草稿（包括编辑模式）
    pub fn cancel_edit(&mut self) {
        self.draft.reset();
    }

    /// 生成删除命令
    pub fn request_delete(&self, id: &str) -> Command {
        Command::Delete { id: id.to_string() }
    }

    /// 应用远程操作的结果
    pub fn complete(&mut self, completion: Completion) -> Transition {
        match completion {
            Completion::Listed(Ok(records)) => {
                self.records = records;
                Transition::default()
            }
            Completion::Listed(Err(e)) => {
                log_failure("refresh", &e);
                Transition {
                    notice: Some(Notice::RefreshFailed(e)),
                    follow_up: None,
                }
            }

            Completion::Saved { target, result } => {
                self.saving = false;
                match result {
                    Ok(reply) => {
                        self.draft.reset();
                        self.mode = ViewMode::List;
                        Transition {
                            notice: Some(Notice::Saved {
                                message: reply.message,
                                updated: target.is_some(),
                            }),
                            follow_up: Some(Command::Refresh),
                        }
                    }
                    Err(e) => {
                        log_failure(if target.is_some() { "update" } else { "create" }, &e);
                        Transition {
                            notice: Some(Notice::SaveFailed(e)),
                            follow_up: None,
                        }
                    }
                }
            }

            Completion::Deleted { id, result } => match result {
                Ok(reply) => {
                    self.records
                        .retain(|record| record.id.as_deref() != Some(id.as_str()));
                    // 被删除的记录不能再更新，草稿转为新建
                    if self.draft.target.as_deref() == Some(id.as_str()) {
                        log::info!("Record {id} deleted while being edited, draft detached");
                        self.draft.target = None;
                    }
                    Transition {
                        notice: Some(Notice::Deleted {
                            message: reply.message,
                        }),
                        follow_up: Some(Command::Refresh),
                    }
                }
                Err(e) => {
                    log_failure("delete", &e);
                    Transition {
                        notice: Some(Notice::DeleteFailed(e)),
                        follow_up: None,
                    }
                }
            },
        }
    }
}

// 失败已由 FormService 按级别记录，这里只留调试信息
fn log_failure(operation: &str, error: &CoreError) {
    log::debug!("Session saw {operation} failure: {error}");
}
