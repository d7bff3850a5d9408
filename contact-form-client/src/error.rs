use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::log_sanitizer::truncate_for_log;

/// Failure of a single record store call.
///
/// Every variant means the same thing to the form: the operation did not happen
/// and the local draft is untouched. The variants only matter for logging.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "code")]
pub enum TransportError {
    /// Connection refused, DNS failure, reset, or the body could not be read.
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The store answered with a non-2xx status.
    #[error("HTTP {status}: {}", truncate_for_log(.body))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The response body was not the JSON we expected.
    #[error("Failed to parse response: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// The request body could not be encoded.
    #[error("Failed to serialize request: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The configured base URL is unusable.
    #[error("Invalid store URL: {detail}")]
    InvalidUrl {
        /// Details about the URL problem.
        detail: String,
    },
}

impl TransportError {
    /// 是否为预期行为（4xx，通常是请求内容或记录不存在），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Status { status, .. } if (400..500).contains(status))
    }
}

/// Result alias for record store calls.
pub type Result<T> = std::result::Result<T, TransportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_expected() {
        let e = TransportError::Status {
            status: 404,
            body: "not found".into(),
        };
        assert!(e.is_expected());
    }

    #[test]
    fn server_and_network_errors_are_not_expected() {
        let server = TransportError::Status {
            status: 500,
            body: String::new(),
        };
        let network = TransportError::Network {
            detail: "connection refused".into(),
        };
        assert!(!server.is_expected());
        assert!(!network.is_expected());
    }

    #[test]
    fn display_truncates_long_bodies() {
        let e = TransportError::Status {
            status: 502,
            body: "x".repeat(1000),
        };
        let text = e.to_string();
        assert!(text.starts_with("HTTP 502: "));
        assert!(text.contains("[truncated, total 1000 bytes]"));
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = TransportError::Parse {
            detail: "eof".into(),
        };
        let value = serde_json::to_value(&e).unwrap();
        assert_eq!(value["code"], "Parse");
        assert_eq!(value["detail"], "eof");
    }
}
