//! Risk metrics: PV01, PVBP, and convexity by finite differences.
//!
//! All three metrics bump the pricing engine by the same named
//! [`BASIS_POINT`] constant so the bump size can be tuned in one place
//! without touching the formulas. Metrics are recomputed on demand and
//! never cached.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{BondError, BondResult};
use crate::pricing::price_at_yield;
use crate::spec::BondSpec;

/// One basis point (0.01%), the shared finite-difference bump size.
pub const BASIS_POINT: f64 = 0.0001;

/// [`BASIS_POINT`] as a decimal, for coupon-rate bumps.
pub const BASIS_POINT_DECIMAL: Decimal = dec!(0.0001);

/// Price sensitivities of a bond, all in currency-cents per basis point
/// except convexity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Price decline (in cents) from a 1bp yield increase.
    pub pv01: f64,
    /// Price change (in cents) from a 1bp coupon increase.
    pub pvbp: f64,
    /// Second-order price sensitivity to yield.
    pub convexity: f64,
}

impl RiskMetrics {
    /// Computes all three metrics at the given yield.
    pub fn calculate(spec: &BondSpec, ytm: f64) -> BondResult<Self> {
        Ok(Self {
            pv01: pv01(spec, ytm)?,
            pvbp: pvbp(spec, ytm)?,
            convexity: convexity(spec, ytm)?,
        })
    }
}

/// PV01: the price decline from a 1-basis-point yield increase, in cents.
///
/// # Formula
///
/// ```text
/// pv01 = (price(ytm) - price(ytm + 1bp)) * 100
/// ```
pub fn pv01(spec: &BondSpec, ytm: f64) -> BondResult<f64> {
    let base = price_at_yield(spec, ytm)?;
    let shifted = price_at_yield(spec, ytm + BASIS_POINT)?;
    Ok((base - shifted) * 100.0)
}

/// PVBP: the price change from a 1-basis-point coupon increase, in cents.
///
/// # Formula
///
/// ```text
/// pvbp = (price(coupon + 1bp) - price(coupon)) * 100
/// ```
pub fn pvbp(spec: &BondSpec, ytm: f64) -> BondResult<f64> {
    let bumped = BondSpec::new(
        spec.face_value(),
        spec.coupon_rate() + BASIS_POINT_DECIMAL,
        spec.years_to_maturity(),
        spec.frequency(),
    )?;

    let base = price_at_yield(spec, ytm)?;
    let shifted = price_at_yield(&bumped, ytm)?;
    Ok((shifted - base) * 100.0)
}

/// Convexity: curvature of the price-yield relationship.
///
/// # Formula
///
/// ```text
/// convexity = (price(ytm+1bp) + price(ytm-1bp) - 2*price(ytm)) * 100
///             / (price(ytm) * (1bp)^2)
/// ```
///
/// # Errors
///
/// Fails with [`BondError::DegenerateBond`] when the base price is
/// numerically zero, rather than returning inf or NaN.
pub fn convexity(spec: &BondSpec, ytm: f64) -> BondResult<f64> {
    let base = price_at_yield(spec, ytm)?;
    if base.abs() < f64::EPSILON {
        return Err(BondError::degenerate_bond(format!(
            "base price is numerically zero at yield {ytm}"
        )));
    }

    let up = price_at_yield(spec, ytm + BASIS_POINT)?;
    let down = price_at_yield(spec, ytm - BASIS_POINT)?;
    Ok((up + down - 2.0 * base) * 100.0 / (base * BASIS_POINT * BASIS_POINT))
}

/// Price impact (in currency units) of a parallel yield shift in basis
/// points. Positive for a rally (negative shift), negative for a sell-off.
pub fn price_impact(spec: &BondSpec, ytm: f64, bp_change: f64) -> BondResult<f64> {
    let base = price_at_yield(spec, ytm)?;
    let shifted = price_at_yield(spec, ytm + bp_change * BASIS_POINT)?;
    Ok(shifted - base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn five_year_five_pct() -> BondSpec {
        BondSpec::new(dec!(1000), dec!(0.05), 5.0, 2).unwrap()
    }

    #[test]
    fn test_pv01_positive_for_vanilla_bond() {
        let spec = five_year_five_pct();
        let pv01 = pv01(&spec, 0.06).unwrap();

        // Roughly duration * price * 1bp, in cents: ~4.3 * 957 * 0.0001 * 100
        assert!(pv01 > 0.0);
        assert_relative_eq!(pv01, 40.0, epsilon = 5.0);
    }

    #[test]
    fn test_pvbp_positive_for_vanilla_bond() {
        // A richer coupon raises the price
        let spec = five_year_five_pct();
        let pvbp = pvbp(&spec, 0.06).unwrap();
        assert!(pvbp > 0.0);
    }

    #[test]
    fn test_convexity_positive_at_scenario_a() {
        let spec = five_year_five_pct();
        let convexity = convexity(&spec, 0.06).unwrap();
        assert!(convexity > 0.0);
    }

    #[test]
    fn test_degenerate_price_is_an_error() {
        // An absurd yield underflows every discount factor to zero
        let spec = five_year_five_pct();
        let result = convexity(&spec, 1e12);
        assert!(matches!(result, Err(BondError::DegenerateBond { .. })));
    }

    #[test]
    fn test_price_impact_signs() {
        let spec = five_year_five_pct();
        let rally = price_impact(&spec, 0.06, -10.0).unwrap();
        let selloff = price_impact(&spec, 0.06, 10.0).unwrap();

        assert!(rally > 0.0);
        assert!(selloff < 0.0);
        // Convexity: the rally gains more than the sell-off loses
        assert!(rally > -selloff);
    }

    #[test]
    fn test_calculate_bundles_all_metrics() {
        let spec = five_year_five_pct();
        let metrics = RiskMetrics::calculate(&spec, 0.06).unwrap();

        assert_relative_eq!(metrics.pv01, pv01(&spec, 0.06).unwrap());
        assert_relative_eq!(metrics.pvbp, pvbp(&spec, 0.06).unwrap());
        assert_relative_eq!(metrics.convexity, convexity(&spec, 0.06).unwrap());
    }

    proptest! {
        #[test]
        fn prop_convexity_non_negative_for_vanilla_bonds(
            coupon_bp in 0u32..1000,
            years in 1.0f64..30.0,
            frequency in 1u32..=4,
            ytm in 0.001f64..0.3,
        ) {
            let coupon = Decimal::from(coupon_bp) / dec!(10000);
            let spec = BondSpec::new(dec!(100), coupon, years, frequency).unwrap();
            let convexity = convexity(&spec, ytm).unwrap();
            prop_assert!(convexity >= 0.0);
        }

        #[test]
        fn prop_pv01_positive(
            coupon_bp in 0u32..1000,
            years in 1.0f64..30.0,
            frequency in 1u32..=4,
            ytm in 0.001f64..0.3,
        ) {
            let coupon = Decimal::from(coupon_bp) / dec!(10000);
            let spec = BondSpec::new(dec!(100), coupon, years, frequency).unwrap();
            prop_assert!(pv01(&spec, ytm).unwrap() > 0.0);
        }
    }
}
