//! 业务逻辑服务层

mod form_service;

pub use form_service::FormService;

use std::sync::Arc;

use contact_form_client::RecordStore;

use crate::error::{CoreError, TransportError};

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入具体的记录存储实现。
pub struct ServiceContext {
    /// 远程记录存储
    pub store: Arc<dyn RecordStore>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// 记录存储错误并转换为 `CoreError`
    pub fn handle_store_error(&self, operation: &str, err: TransportError) -> CoreError {
        let err = CoreError::from(err);
        if err.is_expected() {
            log::warn!("[{}] {operation} rejected: {err}", self.store.id());
        } else {
            log::error!("[{}] {operation} failed: {err}", self.store.id());
        }
        err
    }
}
