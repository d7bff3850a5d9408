//! # contact-form-client
//!
//! Client for the remote collection that stores submitted contact forms.
//!
//! ## Endpoints
//!
//! | Operation | Request | Reply |
//! |-----------|---------|-------|
//! | [`RecordStore::list`] | `GET /forms` | array of [`FormRecord`] (with `_id`) |
//! | [`RecordStore::create`] | `POST /submit-form` | [`StoreReply`] |
//! | [`RecordStore::update`] | `PUT /update-form/{id}` | [`StoreReply`] |
//! | [`RecordStore::delete`] | `DELETE /delete-form/{id}` | [`StoreReply`] |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use contact_form_client::{FormRecord, HttpRecordStore, RecordStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = HttpRecordStore::new("http://localhost:5001")?;
//!
//!     let reply = store
//!         .create(&FormRecord {
//!             name: "Ada".to_string(),
//!             email: "ada@example.com".to_string(),
//!             ..FormRecord::default()
//!         })
//!         .await?;
//!     println!("{}", reply.message);
//!
//!     for record in store.list().await? {
//!         println!("{:?} {}", record.id, record.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, TransportError>`](TransportError):
//!
//! - [`TransportError::Network`]: the request never got an answer
//! - [`TransportError::Status`]: any non-2xx response
//! - [`TransportError::Parse`]: the body was not the expected JSON
//!
//! Calls are never retried.

mod error;
mod http_client;
mod store;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{Result, TransportError};

// Re-export the store trait and its HTTP implementation
pub use store::{DEFAULT_BASE_URL, HttpRecordStore};
pub use traits::RecordStore;

// Re-export types
pub use types::{ContactMethod, FormRecord, Hobby, StoreReply};

pub use utils::mask_email;
