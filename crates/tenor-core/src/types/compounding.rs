//! Compounding conventions and their discount/growth factors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compounding convention for discounting and growing cash flows.
///
/// Each variant defines its own discount-factor function of `(rate, time)`:
///
/// | Variant | Discount factor |
/// |---------|-----------------|
/// | `Discrete(m)` | `(1 + r/m)^(-m*T)` |
/// | `Continuous` | `e^(-r*T)` |
/// | `Simple` | `1 / (1 + r*T)` |
///
/// `Discrete(m)` converges to `Continuous` in the limit `m -> infinity`;
/// this agreement is documented, not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compounding {
    /// Discrete compounding with `m` periods per year (`m >= 1`).
    Discrete(u32),
    /// Continuous compounding.
    Continuous,
    /// Simple interest (no compounding).
    Simple,
}

impl Default for Compounding {
    fn default() -> Self {
        // Semi-annual is the dominant convention for coupon bonds.
        Compounding::Discrete(2)
    }
}

impl Compounding {
    /// Returns the discount factor for the given annualized rate and
    /// time in years.
    ///
    /// At `time = 0` the discount factor is exactly 1 for every variant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tenor_core::types::Compounding;
    ///
    /// let df = Compounding::Continuous.discount_factor(0.05, 2.0);
    /// assert!((df - (-0.1f64).exp()).abs() < 1e-15);
    /// ```
    #[must_use]
    pub fn discount_factor(&self, rate: f64, time: f64) -> f64 {
        match self {
            Compounding::Discrete(m) => {
                let m = f64::from(*m);
                (1.0 + rate / m).powf(-m * time)
            }
            Compounding::Continuous => (-rate * time).exp(),
            Compounding::Simple => 1.0 / (1.0 + rate * time),
        }
    }

    /// Returns the growth (compound) factor, the reciprocal of
    /// [`discount_factor`](Self::discount_factor).
    #[must_use]
    pub fn compound_factor(&self, rate: f64, time: f64) -> f64 {
        match self {
            Compounding::Discrete(m) => {
                let m = f64::from(*m);
                (1.0 + rate / m).powf(m * time)
            }
            Compounding::Continuous => (rate * time).exp(),
            Compounding::Simple => 1.0 + rate * time,
        }
    }

    /// Returns the number of compounding periods per year.
    ///
    /// Returns 0 for `Simple` and `Continuous`, which have no period grid.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Compounding::Discrete(m) => *m,
            Compounding::Continuous | Compounding::Simple => 0,
        }
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compounding::Discrete(m) => write!(f, "Discrete({m}x/year)"),
            Compounding::Continuous => write!(f, "Continuous"),
            Compounding::Simple => write!(f, "Simple"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_discount_factor_at_zero_time() {
        for conv in [
            Compounding::Discrete(1),
            Compounding::Discrete(2),
            Compounding::Discrete(12),
            Compounding::Continuous,
            Compounding::Simple,
        ] {
            assert_relative_eq!(conv.discount_factor(0.07, 0.0), 1.0);
        }
    }

    #[test]
    fn test_discrete_discount_factor() {
        // (1 + 0.05/2)^(-2*2) = 1.025^-4
        let df = Compounding::Discrete(2).discount_factor(0.05, 2.0);
        assert_relative_eq!(df, 1.025f64.powi(-4), epsilon = 1e-15);
    }

    #[test]
    fn test_simple_discount_factor() {
        let df = Compounding::Simple.discount_factor(0.05, 2.0);
        assert_relative_eq!(df, 1.0 / 1.10, epsilon = 1e-15);
    }

    #[test]
    fn test_discrete_approaches_continuous() {
        // Daily compounding should be close to continuous
        let daily = Compounding::Discrete(365).discount_factor(0.05, 2.0);
        let continuous = Compounding::Continuous.discount_factor(0.05, 2.0);
        assert_relative_eq!(daily, continuous, epsilon = 1e-4);
    }

    #[test]
    fn test_compound_is_reciprocal_of_discount() {
        for conv in [
            Compounding::Discrete(4),
            Compounding::Continuous,
            Compounding::Simple,
        ] {
            let df = conv.discount_factor(0.06, 3.5);
            let cf = conv.compound_factor(0.06, 3.5);
            assert_relative_eq!(df * cf, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let conv = Compounding::Discrete(2);
        let json = serde_json::to_string(&conv).unwrap();
        let back: Compounding = serde_json::from_str(&json).unwrap();
        assert_eq!(conv, back);
    }

    proptest! {
        #[test]
        fn prop_discount_factor_in_unit_interval(
            rate in 0.001f64..0.5,
            time in 0.01f64..30.0,
            m in 1u32..=12,
        ) {
            for conv in [Compounding::Discrete(m), Compounding::Continuous, Compounding::Simple] {
                let df = conv.discount_factor(rate, time);
                prop_assert!(df > 0.0 && df < 1.0);
            }
        }

        #[test]
        fn prop_discount_factor_decreasing_in_rate(
            rate in 0.001f64..0.4,
            time in 0.1f64..30.0,
            m in 1u32..=12,
        ) {
            for conv in [Compounding::Discrete(m), Compounding::Continuous, Compounding::Simple] {
                let lo = conv.discount_factor(rate, time);
                let hi = conv.discount_factor(rate + 0.01, time);
                prop_assert!(hi < lo);
            }
        }
    }
}
