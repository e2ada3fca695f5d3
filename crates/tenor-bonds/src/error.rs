//! Error types for bond operations.

use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone)]
pub enum BondError {
    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Degenerate cash-flow schedule (zero periods).
    #[error("Invalid schedule: {reason}")]
    InvalidSchedule {
        /// Description of the degenerate schedule.
        reason: String,
    },

    /// Risk metric would divide by a zero base price.
    #[error("Degenerate bond: {reason}")]
    DegenerateBond {
        /// Description of the degeneracy.
        reason: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    CoreError(#[from] tenor_core::CoreError),

    /// Math library error.
    #[error("Math error: {0}")]
    MathError(#[from] tenor_math::MathError),
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }

    /// Creates a degenerate bond error.
    #[must_use]
    pub fn degenerate_bond(reason: impl Into<String>) -> Self {
        Self::DegenerateBond {
            reason: reason.into(),
        }
    }
}
