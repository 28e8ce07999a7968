//! Crate-level error types.
//!
//! [`KachingError`] unifies every error source of the outer surfaces
//! (configuration, file input, JSON, analysis) behind a single enum so
//! callers can match on the variant they care about while still using the
//! `?` operator for easy propagation.

use crate::analysis::AnalysisError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KachingError>;

/// Top-level error type returned by the loading and configuration APIs.
#[derive(Debug, thiserror::Error)]
pub enum KachingError {
    /// An environment variable or command-line override was invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// An input file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The analysis pipeline rejected its input.
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),
}
