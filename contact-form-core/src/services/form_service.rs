//! 表单记录服务

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::session::{Command, Completion};
use crate::types::{FormRecord, StoreReply};

/// 表单记录服务
///
/// 对 [`RecordStore`](contact_form_client::RecordStore) 的薄封装：
/// 统一错误类型与日志，并把 [`Command`] 翻译成具体调用。
#[derive(Clone)]
pub struct FormService {
    ctx: Arc<ServiceContext>,
}

impl FormService {
    /// 创建表单服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 获取全部已提交的表单
    pub async fn list(&self) -> CoreResult<Vec<FormRecord>> {
        match self.ctx.store.list().await {
            Ok(records) => {
                log::debug!("Fetched {} form(s)", records.len());
                Ok(records)
            }
            Err(e) => Err(self.ctx.handle_store_error("list", e)),
        }
    }

    /// 新建表单（记录不应带 ID）
    pub async fn create(&self, record: &FormRecord) -> CoreResult<StoreReply> {
        match self.ctx.store.create(&record.without_id()).await {
            Ok(reply) => {
                log::info!("Form submitted");
                Ok(reply)
            }
            Err(e) => Err(self.ctx.handle_store_error("create", e)),
        }
    }

    /// 整体替换指定表单
    pub async fn update(&self, id: &str, record: &FormRecord) -> CoreResult<StoreReply> {
        match self.ctx.store.update(id, &record.without_id()).await {
            Ok(reply) => {
                log::info!("Form {id} updated");
                Ok(reply)
            }
            Err(e) => Err(self.ctx.handle_store_error("update", e)),
        }
    }

    /// 删除指定表单
    pub async fn delete(&self, id: &str) -> CoreResult<StoreReply> {
        match self.ctx.store.delete(id).await {
            Ok(reply) => {
                log::info!("Form {id} deleted");
                Ok(reply)
            }
            Err(e) => Err(self.ctx.handle_store_error("delete", e)),
        }
    }

    /// 执行会话产生的命令
    pub async fn execute(&self, command: Command) -> Completion {
        match command {
            Command::Refresh => Completion::Listed(self.list().await),
            Command::Create(record) => Completion::Saved {
                target: None,
                result: self.create(&record).await,
            },
            Command::Update { id, record } => {
                let result = self.update(&id, &record).await;
                Completion::Saved {
                    target: Some(id),
                    result,
                }
            }
            Command::Delete { id } => {
                let result = self.delete(&id).await;
                Completion::Deleted { id, result }
            }
        }
    }
}
