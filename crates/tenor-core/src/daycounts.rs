//! Actual/actual day count helpers.
//!
//! Day counts are actual calendar days; dates have day-level resolution.
//! The accrual fraction here follows the ACT/ACT convention used for
//! coupon accrual: actual days accrued over actual days in the coupon
//! period.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult};

/// Returns the number of actual calendar days from `start` to `end`.
///
/// Negative when `end` precedes `start`.
#[must_use]
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Returns the accrued fraction of the current coupon period.
///
/// # Formula
///
/// ```text
/// fraction = days(last_coupon, settlement) / days(last_coupon, next_coupon)
/// ```
///
/// # Errors
///
/// Fails with [`CoreError::InvalidDateRange`] when the settlement date
/// precedes the last coupon date, when the next coupon does not follow the
/// last coupon, or when the coupon period has zero days.
pub fn accrual_fraction(
    settlement: NaiveDate,
    last_coupon: NaiveDate,
    next_coupon: NaiveDate,
) -> CoreResult<Decimal> {
    if settlement < last_coupon {
        return Err(CoreError::invalid_date_range(format!(
            "settlement {settlement} precedes last coupon date {last_coupon}"
        )));
    }
    if next_coupon <= last_coupon {
        return Err(CoreError::invalid_date_range(format!(
            "next coupon date {next_coupon} does not follow last coupon date {last_coupon}"
        )));
    }

    let days_in_period = days_between(last_coupon, next_coupon);
    if days_in_period == 0 {
        return Err(CoreError::invalid_date_range(
            "coupon period has zero days",
        ));
    }

    let days_accrued = days_between(last_coupon, settlement);
    Ok(Decimal::from(days_accrued) / Decimal::from(days_in_period))
}
