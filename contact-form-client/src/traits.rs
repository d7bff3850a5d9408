use async_trait::async_trait;

use crate::error::Result;
use crate::types::{FormRecord, StoreReply};

/// 远程表单记录集合
///
/// 每个方法对应一次用户操作，只尝试一次，失败时返回 `TransportError`。
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// 存储标识符（用于日志）
    fn id(&self) -> &'static str;

    /// 获取所有已提交的表单（按存储返回的顺序）
    async fn list(&self) -> Result<Vec<FormRecord>>;

    /// 提交新表单，由存储分配 ID
    async fn create(&self, record: &FormRecord) -> Result<StoreReply>;

    /// 用草稿内容替换已有表单的字段
    async fn update(&self, id: &str, record: &FormRecord) -> Result<StoreReply>;

    /// 删除表单
    async fn delete(&self, id: &str) -> Result<StoreReply>;
}
