//! HTTP `RecordStore` implementation

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};

use crate::error::{Result, TransportError};
use crate::http_client::HttpUtils;
use crate::traits::RecordStore;
use crate::types::{FormRecord, StoreReply};
use crate::utils::log_sanitizer::mask_email;

/// Store name used as the log prefix.
pub(crate) const STORE_NAME: &str = "record-store";

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Record store backed by the form service's REST API.
///
/// | Operation | Request |
/// |-----------|---------|
/// | list | `GET {base}/forms` |
/// | create | `POST {base}/submit-form` |
/// | update | `PUT {base}/update-form/{id}` |
/// | delete | `DELETE {base}/delete-form/{id}` |
#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl HttpRecordStore {
    /// Create a store client for `base_url` with a default `reqwest::Client`.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a store client reusing an existing `reqwest::Client`.
    pub fn with_client(client: Client, base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.as_ref())?;
        Ok(Self { client, base_url })
    }

    /// Normalized base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// 以 JSON 发送记录并解析 `{ message }` 回复
    async fn send_record(
        &self,
        method: reqwest::Method,
        path: &str,
        record: &FormRecord,
    ) -> Result<StoreReply> {
        let body = HttpUtils::encode_json(record)?;
        let request = self
            .client
            .request(method.clone(), self.endpoint(path))
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        let (_, text) =
            HttpUtils::execute_request(request, STORE_NAME, method.as_str(), path).await?;
        parse_reply(&text)
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    fn id(&self) -> &'static str {
        STORE_NAME
    }

    async fn list(&self) -> Result<Vec<FormRecord>> {
        let path = "/forms";
        let request = self.client.get(self.endpoint(path));
        let (_, text) = HttpUtils::execute_request(request, STORE_NAME, "GET", path).await?;
        let records: Vec<FormRecord> = HttpUtils::parse_json(&text, STORE_NAME)?;
        log::debug!("[{STORE_NAME}] Listed {} forms", records.len());
        Ok(records)
    }

    async fn create(&self, record: &FormRecord) -> Result<StoreReply> {
        log::debug!(
            "[{STORE_NAME}] Submitting form for {}",
            mask_email(&record.email)
        );
        self.send_record(reqwest::Method::POST, "/submit-form", record)
            .await
    }

    async fn update(&self, id: &str, record: &FormRecord) -> Result<StoreReply> {
        let path = format!("/update-form/{}", urlencoding::encode(id));
        self.send_record(reqwest::Method::PUT, &path, record).await
    }

    async fn delete(&self, id: &str) -> Result<StoreReply> {
        let path = format!("/delete-form/{}", urlencoding::encode(id));
        let request = self.client.delete(self.endpoint(&path));
        let (_, text) = HttpUtils::execute_request(request, STORE_NAME, "DELETE", &path).await?;
        parse_reply(&text)
    }
}

/// 空响应体视为没有消息的成功回复
fn parse_reply(text: &str) -> Result<StoreReply> {
    if text.trim().is_empty() {
        return Ok(StoreReply::default());
    }
    HttpUtils::parse_json(text, STORE_NAME)
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| TransportError::InvalidUrl {
        detail: format!("{trimmed}: {e}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(TransportError::InvalidUrl {
            detail: format!("unsupported scheme: {}", url.scheme()),
        });
    }
    Ok(trimmed.to_string())
}
