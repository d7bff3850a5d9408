//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use contact_form_client::{RecordStore, Result as TransportResult, TransportError};
use tokio::sync::RwLock;

use crate::services::{FormService, ServiceContext};
use crate::types::{FormRecord, StoreReply};

// ===== MockRecordStore =====

pub struct MockRecordStore {
    records: RwLock<Vec<FormRecord>>,
    created: RwLock<Vec<FormRecord>>,
    /// 如果 Some，下一次调用返回此错误
    next_error: RwLock<Option<TransportError>>,
    list_calls: AtomicUsize,
    next_id: AtomicUsize,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<FormRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            created: RwLock::new(Vec::new()),
            next_error: RwLock::new(None),
            list_calls: AtomicUsize::new(0),
            next_id: AtomicUsize::new(100),
        }
    }

    pub async fn fail_next(&self, err: TransportError) {
        *self.next_error.write().await = Some(err);
    }

    pub async fn created(&self) -> Vec<FormRecord> {
        self.created.read().await.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    async fn take_error(&self) -> TransportResult<()> {
        match self.next_error.write().await.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list(&self) -> TransportResult<Vec<FormRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.take_error().await?;
        Ok(self.records.read().await.clone())
    }

    async fn create(&self, record: &FormRecord) -> TransportResult<StoreReply> {
        self.take_error().await?;
        self.created.write().await.push(record.clone());
        let mut stored = record.clone();
        stored.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst).to_string());
        self.records.write().await.push(stored);
        Ok(StoreReply {
            message: "Form submitted".to_string(),
        })
    }

    async fn update(&self, id: &str, record: &FormRecord) -> TransportResult<StoreReply> {
        self.take_error().await?;
        let mut records = self.records.write().await;
        if let Some(existing) = records.iter_mut().find(|r| r.id.as_deref() == Some(id)) {
            *existing = FormRecord {
                id: Some(id.to_string()),
                ..record.clone()
            };
        }
        Ok(StoreReply {
            message: "Form updated".to_string(),
        })
    }

    async fn delete(&self, id: &str) -> TransportResult<StoreReply> {
        self.take_error().await?;
        self.records
            .write()
            .await
            .retain(|r| r.id.as_deref() != Some(id));
        Ok(StoreReply {
            message: "Form deleted".to_string(),
        })
    }
}

// ===== 工厂方法 =====

pub fn create_test_service(store: Arc<MockRecordStore>) -> FormService {
    FormService::new(Arc::new(ServiceContext::new(store)))
}

pub fn sample_record(id: &str) -> FormRecord {
    FormRecord {
        id: Some(id.to_string()),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        address: "1 Main St".to_string(),
        state: "CA".to_string(),
        city: "Springfield".to_string(),
        age: "36".to_string(),
        gender: "female".to_string(),
        mobile_number: "1234567890".to_string(),
        message: "Hello".to_string(),
        terms_accepted: true,
        ..FormRecord::default()
    }
}
