//! Pricing engine: present/future value transforms and bond prices.
//!
//! A bond price is the sum of its discounted cash flows. For all-positive
//! cash flows the price is strictly decreasing in the discount rate; this
//! monotonicity is what makes yield inversion well-posed and it is
//! property-tested below.

pub mod yield_solver;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use tenor_core::types::Compounding;

use crate::cashflows::CashFlowSchedule;
use crate::error::BondResult;
use crate::spec::BondSpec;

/// Prices a cash-flow schedule at the given rate.
///
/// # Formula
///
/// ```text
/// price = sum over flows of amount * discount_factor(rate, time)
/// ```
#[must_use]
pub fn price(schedule: &CashFlowSchedule, rate: f64, compounding: Compounding) -> f64 {
    schedule
        .iter()
        .map(|cf| cf.amount().to_f64().unwrap_or(0.0) * compounding.discount_factor(rate, cf.time()))
        .sum()
}

/// Prices a bond at the given yield using its own coupon frequency as the
/// discrete compounding grid.
///
/// # Errors
///
/// Fails when the schedule cannot be generated (zero rounded periods).
pub fn price_at_yield(spec: &BondSpec, ytm: f64) -> BondResult<f64> {
    let schedule = CashFlowSchedule::generate(spec)?;
    Ok(price(&schedule, ytm, spec.compounding()))
}

/// Present value of a single future cash flow.
#[must_use]
pub fn present_value(future_amount: f64, rate: f64, time: f64, compounding: Compounding) -> f64 {
    future_amount * compounding.discount_factor(rate, time)
}

/// Future value of a single present cash flow.
#[must_use]
pub fn future_value(present_amount: f64, rate: f64, time: f64, compounding: Compounding) -> f64 {
    present_amount * compounding.compound_factor(rate, time)
}

/// Price of a zero-coupon bond under annual compounding.
///
/// # Formula
///
/// ```text
/// price = face_value / (1 + ytm)^years
/// ```
#[must_use]
pub fn zero_coupon_price(face_value: Decimal, ytm: f64, years: f64) -> f64 {
    let face = face_value.to_f64().unwrap_or(0.0);
    face * Compounding::Discrete(1).discount_factor(ytm, years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_scenario_a_semi_annual_coupon_bond() {
        // 1000 face, 5% coupon, 6% yield, 5 years, semi-annual: ~957.35
        let spec = BondSpec::new(dec!(1000), dec!(0.05), 5.0, 2).unwrap();
        let price = price_at_yield(&spec, 0.06).unwrap();
        assert_relative_eq!(price, 957.35, epsilon = 0.01);
    }

    #[test]
    fn test_scenario_b_future_value_conventions() {
        // 100 at 5% over 2 years
        let discrete = future_value(100.0, 0.05, 2.0, Compounding::Discrete(2));
        let continuous = future_value(100.0, 0.05, 2.0, Compounding::Continuous);
        let simple = future_value(100.0, 0.05, 2.0, Compounding::Simple);

        assert_relative_eq!(discrete, 110.38, epsilon = 0.01);
        assert_relative_eq!(continuous, 110.52, epsilon = 0.01);
        assert_relative_eq!(simple, 110.00, epsilon = 0.01);
    }

    #[test]
    fn test_scenario_c_zero_coupon_price() {
        // 1000 face, 5% yield, 5 years: ~783.53
        let price = zero_coupon_price(dec!(1000), 0.05, 5.0);
        assert_relative_eq!(price, 783.53, epsilon = 0.01);

        // The schedule route agrees with the closed form
        let spec = BondSpec::zero_coupon(dec!(1000), 5.0).unwrap();
        let via_schedule = price_at_yield(&spec, 0.05).unwrap();
        assert_relative_eq!(price, via_schedule, epsilon = 1e-9);
    }

    #[test]
    fn test_par_bond_prices_at_face() {
        // Yield equal to coupon rate prices the bond at par
        let spec = BondSpec::new(dec!(100), dec!(0.05), 10.0, 2).unwrap();
        let price = price_at_yield(&spec, 0.05).unwrap();
        assert_relative_eq!(price, 100.0, epsilon = 1e-9);
    }

    proptest! {
        #[test]
        fn prop_price_strictly_decreasing_in_rate(
            coupon in 0.0f64..0.12,
            years in 1.0f64..30.0,
            frequency in 1u32..=4,
            rate in 0.001f64..0.4,
        ) {
            let coupon = Decimal::from_f64_retain(coupon).unwrap();
            let spec = BondSpec::new(dec!(100), coupon.round_dp(6), years, frequency).unwrap();
            let lo = price_at_yield(&spec, rate).unwrap();
            let hi = price_at_yield(&spec, rate + 0.005).unwrap();
            prop_assert!(hi < lo);
        }

        #[test]
        fn prop_pv_fv_roundtrip_discrete(
            pv in 1.0f64..10_000.0,
            rate in 0.001f64..0.5,
            time in 0.1f64..30.0,
            m in 1u32..=12,
        ) {
            let conv = Compounding::Discrete(m);
            let back = present_value(future_value(pv, rate, time, conv), rate, time, conv);
            prop_assert!((back - pv).abs() < 1e-6 * pv);
        }

        #[test]
        fn prop_pv_fv_roundtrip_continuous(
            pv in 1.0f64..10_000.0,
            rate in 0.001f64..0.5,
            time in 0.1f64..30.0,
        ) {
            let conv = Compounding::Continuous;
            let back = present_value(future_value(pv, rate, time, conv), rate, time, conv);
            prop_assert!((back - pv).abs() < 1e-6 * pv);
        }

        #[test]
        fn prop_pv_fv_roundtrip_simple(
            pv in 1.0f64..10_000.0,
            rate in 0.001f64..0.5,
            time in 0.1f64..30.0,
        ) {
            let conv = Compounding::Simple;
            let back = present_value(future_value(pv, rate, time, conv), rate, time, conv);
            prop_assert!((back - pv).abs() < 1e-6 * pv);
        }
    }
}
