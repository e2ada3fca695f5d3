//! Error types for core operations.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur during core operations.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Calendar dates are inconsistently ordered.
    #[error("Invalid date range: {reason}")]
    InvalidDateRange {
        /// Description of the ordering violation.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an invalid date range error.
    #[must_use]
    pub fn invalid_date_range(reason: impl Into<String>) -> Self {
        Self::InvalidDateRange {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date_range("settlement before last coupon");
        assert!(err.to_string().contains("settlement before last coupon"));
    }
}
