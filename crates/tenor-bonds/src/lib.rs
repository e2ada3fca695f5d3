//! # Tenor Bonds
//!
//! Bond pricing, yield solving, and risk metrics for the Tenor fixed income
//! valuation library.
//!
//! This crate provides:
//!
//! - **Instruments**: [`BondSpec`], the validated terms of a fixed coupon bond
//! - **Cash Flows**: Coupon schedule generation and accrued interest
//! - **Pricing**: Present value, future value, bond and zero-coupon prices
//! - **Yield**: Newton-Raphson yield-to-maturity inversion with explicit
//!   convergence reporting
//! - **Risk**: PV01, PVBP, and convexity by finite differences
//!
//! ## Example
//!
//! ```rust
//! use tenor_bonds::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! // 5% semi-annual coupon, 5 years to maturity
//! let spec = BondSpec::new(dec!(1000), dec!(0.05), 5.0, 2).unwrap();
//!
//! // Price at a 6% yield
//! let price = pricing::price_at_yield(&spec, 0.06).unwrap();
//! assert!((price - 957.35).abs() < 0.01);
//!
//! // Invert back to the yield
//! let result = YieldSolver::new().solve(&spec, dec!(957.35)).unwrap();
//! assert!(result.converged);
//! assert!((result.yield_value - 0.06).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]

pub mod cashflows;
pub mod error;
pub mod pricing;
pub mod risk;
pub mod spec;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{accrued_interest, CashFlow, CashFlowSchedule};
    pub use crate::error::{BondError, BondResult};
    pub use crate::pricing;
    pub use crate::pricing::yield_solver::{YieldSolveResult, YieldSolver};
    pub use crate::risk::{self, RiskMetrics, BASIS_POINT};
    pub use crate::spec::BondSpec;
}

pub use error::{BondError, BondResult};
pub use pricing::yield_solver::{YieldSolveResult, YieldSolver};
pub use spec::BondSpec;
