//! # Centralized Error Handling
//!
//! [`PresentationError`] is returned by every platform adapter (storage,
//! environment probes, DOM access) and by configuration parsing.
//!
//! None of these errors ever reaches the user. Controllers log them and fall
//! back to a safe default: the light theme, a skipped marquee frame, or an
//! immediate reveal.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{PresentationError, Result};
//!
//! fn read_flag(raw: Option<&str>) -> Result<&str> {
//!     raw.ok_or_else(|| PresentationError::Storage("localStorage unavailable".to_string()))
//! }
//!
//! assert!(read_flag(None).is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, PresentationError>`.
pub type Result<T> = std::result::Result<T, PresentationError>;

#[derive(Debug, Error)]
pub enum PresentationError {
    /// Persistent key-value storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// An environment capability (window, media query, observer) is missing.
    #[error("Environment error: {0}")]
    Environment(String),

    /// Presentation configuration failed to parse or validate.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A DOM node could not be found or mutated.
    #[error("DOM error: {0}")]
    Dom(String),
}

impl PresentationError {
    /// Storage failure with the platform's error value attached.
    pub fn storage(context: &str, detail: impl std::fmt::Debug) -> Self {
        PresentationError::Storage(format!("{}: {:?}", context, detail))
    }

    /// DOM failure with the platform's error value attached.
    pub fn dom(context: &str, detail: impl std::fmt::Debug) -> Self {
        PresentationError::Dom(format!("{}: {:?}", context, detail))
    }
}

impl From<serde_json::Error> for PresentationError {
    fn from(err: serde_json::Error) -> Self {
        PresentationError::Config(err.to_string())
    }
}
