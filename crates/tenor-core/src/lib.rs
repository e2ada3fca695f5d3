//! # Tenor Core
//!
//! Core types and conventions for the Tenor fixed income valuation library.
//!
//! This crate provides the foundational building blocks used throughout Tenor:
//!
//! - **Compounding Conventions**: Discrete, continuous, and simple-interest
//!   discount/growth factors
//! - **Day Count Helpers**: Actual/actual day counting over calendar dates
//! - **Errors**: The shared input-validation error type
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Every function is a pure transform of its inputs
//! - **Fail Fast**: Structural input errors are signaled immediately,
//!   never smuggled out as sentinel zeros or NaN
//! - **Explicit Over Implicit**: Rates are unitless decimals (5% = 0.05);
//!   percentage conversion belongs to the caller
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::types::Compounding;
//!
//! // Semi-annual discounting of a 5% rate over 2 years
//! let df = Compounding::Discrete(2).discount_factor(0.05, 2.0);
//! assert!((df - 0.905951).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unreadable_literal)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{accrual_fraction, days_between};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::Compounding;
}

// Re-export commonly used items at crate root
pub use error::{CoreError, CoreResult};
pub use types::Compounding;
