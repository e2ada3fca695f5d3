//! # Tenor Math
//!
//! Root-finding utilities for the Tenor fixed income valuation library.
//!
//! This crate provides the one iterative numerical procedure the library
//! needs: Newton-Raphson iteration with either an analytic derivative or a
//! central finite-difference estimate, plus the shared numerical constants
//! (tolerance, iteration cap, differentiation step) that keep every caller
//! consistent.
//!
//! ## Design Philosophy
//!
//! - **Bounded**: the iteration cap is an intrinsic per-call latency bound
//! - **Numerical Stability**: flat-derivative regions are reported as
//!   errors, never retried indefinitely

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        newton_raphson, newton_raphson_numerical, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
