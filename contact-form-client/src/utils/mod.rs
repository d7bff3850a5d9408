//! Utility functions

pub(crate) mod log_sanitizer;

pub use log_sanitizer::mask_email;
