//! # Tenor Analytics
//!
//! Financing analytics for the Tenor fixed income valuation library.
//!
//! This crate provides the short-horizon, money-market style calculations
//! that sit next to the bond pricer: repo repayment, forward price with
//! financing and coupon adjustment, carry, roll-down, and repo-adjusted
//! yield. It consumes pricing-engine outputs (a dirty price) as plain
//! inputs and shares the library's discounting conventions.
//!
//! ## Example
//!
//! ```rust
//! use tenor_analytics::financing::repo_repayment;
//! use rust_decimal_macros::dec;
//!
//! // Fund 1mm for 30 days at 3.5%
//! let repayment = repo_repayment(dec!(1000000), dec!(0.035), 30).unwrap();
//! assert_eq!(repayment.round_dp(2), dec!(1002916.67));
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
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unreadable_literal)]

pub mod error;
pub mod financing;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::financing::{
        carry, forward_price, repo_adjusted_yield, repo_economics, repo_repayment, roll_down,
        FinancingTerms, RepoEconomics, BOND_BASIS, MONEY_MARKET_BASIS,
    };
}

pub use error::{AnalyticsError, AnalyticsResult};
