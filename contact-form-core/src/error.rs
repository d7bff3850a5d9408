//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use contact_form_client::TransportError;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Record store call failed
    #[error("{0}")]
    Transport(#[from] TransportError),

    /// A create/update is still in flight
    #[error("A submission is already in progress")]
    Busy,

    /// Edit requested for a record that is not in the local list
    #[error("Record not found: {0}")]
    RecordNotFound(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Busy | Self::RecordNotFound(_) => true,
            Self::Transport(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_keep_their_level() {
        let not_found: CoreError = TransportError::Status {
            status: 404,
            body: String::new(),
        }
        .into();
        let refused: CoreError = TransportError::Network {
            detail: "refused".into(),
        }
        .into();
        assert!(not_found.is_expected());
        assert!(!refused.is_expected());
        assert!(CoreError::Busy.is_expected());
    }
}
