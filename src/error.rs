//! Crate-level error types.
//!
//! [`GrocerError`] covers the ambient failures around the order-line core
//! (configuration, file access, JSON). The grouping and classification
//! functions themselves never fail.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GrocerError>;

/// Top-level error type returned by all fallible public APIs.
#[derive(Debug, thiserror::Error)]
pub enum GrocerError {
    /// Configuration was missing, inconsistent, or could not be read.
    #[error("configuration error: {0}")]
    Config(String),

    /// An input file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
