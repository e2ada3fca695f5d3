//! Error types for the analytics engine.

use thiserror::Error;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur during analytics operations.
#[derive(Error, Debug, Clone)]
pub enum AnalyticsError {
    /// Invalid input parameter.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AnalyticsError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}
