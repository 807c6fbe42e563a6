//! Error types for audience condition handling

use thiserror::Error;

/// Main error type for building and validating audience conditions
///
/// Evaluation never produces one of these: missing or mistyped attributes
/// resolve to [`TriBool::Unknown`](crate::condition::TriBool::Unknown).
#[derive(Error, Debug)]
pub enum AudienceError {
    #[error("Invalid condition: {0}")]
    InvalidCondition(String),

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unsupported attribute value: {0}")]
    UnsupportedAttribute(String),
}

/// Result type alias for audience condition operations
pub type Result<T> = std::result::Result<T, AudienceError>;
