//! Generic HTTP client tools
//!
//! Every store call goes through the same flow: send, log, read the body,
//! reject non-2xx, parse JSON. Calls are made exactly once; there is no retry
//! or backoff, a failed call is reported back to the user instead.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{Result, TransportError};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `store_name` - store name (for logging)
    /// * `method_name` - request method name such as "GET" (for logging)
    /// * `path` - request path (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - on any 2xx response
    /// * `Err(TransportError::Network)` - the request could not be sent or the body read
    /// * `Err(TransportError::Status)` - the store answered with a non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        store_name: &str,
        method_name: &str,
        path: &str,
    ) -> Result<(u16, String)> {
        log::debug!("[{store_name}] {method_name} {path}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| TransportError::Network {
                detail: e.to_string(),
            })?;

        let status = response.status();
        log::debug!("[{store_name}] Response Status: {}", status.as_u16());

        let response_text = response
            .text()
            .await
            .map_err(|e| TransportError::Network {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{store_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: response_text,
            });
        }

        Ok((status.as_u16(), response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(TransportError::Parse)` - parsing failed
    pub fn parse_json<T>(response_text: &str, store_name: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{store_name}] JSON parse failed: {e}");
            log::error!(
                "[{store_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            TransportError::Parse {
                detail: e.to_string(),
            }
        })
    }

    /// Encode a request body as JSON bytes
    pub fn encode_json<T>(body: &T) -> Result<Vec<u8>>
    where
        T: serde::Serialize,
    {
        serde_json::to_vec(body).map_err(|e| TransportError::Serialization {
            detail: e.to_string(),
        })
    }
}
