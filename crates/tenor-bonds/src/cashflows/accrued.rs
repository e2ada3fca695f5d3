//! Accrued interest.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use tenor_core::daycounts::accrual_fraction;

use crate::error::{BondError, BondResult};

/// Calculates accrued interest at settlement.
///
/// Uses actual/actual day counts within the current coupon period:
///
/// ```text
/// accrued = coupon_payment * days_accrued / days_in_period
/// ```
///
/// where `coupon_payment = face_value * coupon_rate / frequency`.
///
/// # Errors
///
/// Fails with [`BondError::InvalidSpec`] when `frequency` is zero, and
/// with an invalid-date-range error when `settlement < last_coupon`,
/// `next_coupon <= last_coupon`, or the coupon period has zero days.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use tenor_bonds::cashflows::accrued_interest;
///
/// let accrued = accrued_interest(
///     dec!(1000),
///     dec!(0.06),
///     2,
///     NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
/// )
/// .unwrap();
/// // 90 of 181 days accrued on a 30.00 coupon
/// assert_eq!(accrued.round_dp(4), dec!(14.9171));
/// ```
pub fn accrued_interest(
    face_value: Decimal,
    coupon_rate: Decimal,
    frequency: u32,
    settlement: NaiveDate,
    last_coupon: NaiveDate,
    next_coupon: NaiveDate,
) -> BondResult<Decimal> {
    if frequency == 0 {
        return Err(BondError::invalid_spec("frequency must be at least 1"));
    }

    let fraction = accrual_fraction(settlement, last_coupon, next_coupon)?;
    let coupon_payment = face_value * coupon_rate / Decimal::from(frequency);
    Ok(coupon_payment * fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tenor_core::CoreError;

    use crate::error::BondError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_accrued_half_period() {
        // Exactly half of a 180-day period on a 25.00 semi-annual coupon
        let accrued = accrued_interest(
            dec!(1000),
            dec!(0.05),
            2,
            date(2025, 4, 15),
            date(2025, 1, 15),
            date(2025, 7, 14),
        )
        .unwrap();
        assert_eq!(accrued, dec!(12.50));
    }

    #[test]
    fn test_accrued_zero_on_coupon_date() {
        let accrued = accrued_interest(
            dec!(1000),
            dec!(0.05),
            2,
            date(2025, 1, 15),
            date(2025, 1, 15),
            date(2025, 7, 15),
        )
        .unwrap();
        assert_eq!(accrued, Decimal::ZERO);
    }

    #[test]
    fn test_zero_frequency_rejected() {
        let result = accrued_interest(
            dec!(1000),
            dec!(0.05),
            0,
            date(2025, 4, 15),
            date(2025, 1, 15),
            date(2025, 7, 15),
        );
        assert!(matches!(result, Err(BondError::InvalidSpec { .. })));
    }

    #[test]
    fn test_bad_date_ordering_propagates() {
        let result = accrued_interest(
            dec!(1000),
            dec!(0.05),
            2,
            date(2024, 12, 1),
            date(2025, 1, 15),
            date(2025, 7, 15),
        );
        assert!(matches!(
            result,
            Err(BondError::CoreError(CoreError::InvalidDateRange { .. }))
        ));
    }
}
