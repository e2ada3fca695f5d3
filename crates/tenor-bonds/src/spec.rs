//! Validated bond terms.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tenor_core::types::Compounding;

use crate::error::{BondError, BondResult};

/// The terms of a fixed coupon bond.
///
/// Immutable once constructed; validation happens in [`BondSpec::new`] so
/// every downstream calculation can assume well-formed terms.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::spec::BondSpec;
/// use rust_decimal_macros::dec;
///
/// let spec = BondSpec::new(dec!(1000), dec!(0.05), 5.0, 2).unwrap();
/// assert_eq!(spec.period_count(), 10);
/// assert_eq!(spec.coupon_payment(), dec!(25));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondSpec {
    /// Face (par) value, in currency units.
    face_value: Decimal,
    /// Annualized coupon rate as a unitless decimal (5% = 0.05).
    coupon_rate: Decimal,
    /// Time to maturity in years.
    years_to_maturity: f64,
    /// Coupon/compounding periods per year.
    frequency: u32,
}

impl BondSpec {
    /// Creates a validated bond specification.
    ///
    /// # Errors
    ///
    /// Fails with [`BondError::InvalidSpec`] when the face value or years
    /// to maturity is not positive, the coupon rate is negative, or the
    /// frequency is zero.
    pub fn new(
        face_value: Decimal,
        coupon_rate: Decimal,
        years_to_maturity: f64,
        frequency: u32,
    ) -> BondResult<Self> {
        if face_value <= Decimal::ZERO {
            return Err(BondError::invalid_spec(format!(
                "face value must be positive, got {face_value}"
            )));
        }
        if coupon_rate < Decimal::ZERO {
            return Err(BondError::invalid_spec(format!(
                "coupon rate must be non-negative, got {coupon_rate}"
            )));
        }
        if years_to_maturity <= 0.0 || !years_to_maturity.is_finite() {
            return Err(BondError::invalid_spec(format!(
                "years to maturity must be positive, got {years_to_maturity}"
            )));
        }
        if frequency == 0 {
            return Err(BondError::invalid_spec(
                "frequency must be at least 1 period per year",
            ));
        }

        Ok(Self {
            face_value,
            coupon_rate,
            years_to_maturity,
            frequency,
        })
    }

    /// Creates a zero-coupon specification with annual compounding.
    pub fn zero_coupon(face_value: Decimal, years_to_maturity: f64) -> BondResult<Self> {
        Self::new(face_value, Decimal::ZERO, years_to_maturity, 1)
    }

    /// Face (par) value.
    #[must_use]
    pub fn face_value(&self) -> Decimal {
        self.face_value
    }

    /// Annualized coupon rate (unitless decimal).
    #[must_use]
    pub fn coupon_rate(&self) -> Decimal {
        self.coupon_rate
    }

    /// Time to maturity in years.
    #[must_use]
    pub fn years_to_maturity(&self) -> f64 {
        self.years_to_maturity
    }

    /// Coupon periods per year.
    #[must_use]
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// The coupon paid each period: `face * rate / frequency`.
    #[must_use]
    pub fn coupon_payment(&self) -> Decimal {
        self.face_value * self.coupon_rate / Decimal::from(self.frequency)
    }

    /// Number of coupon periods to maturity, rounded to the nearest whole
    /// period.
    #[must_use]
    pub fn period_count(&self) -> i64 {
        (f64::from(self.frequency) * self.years_to_maturity).round() as i64
    }

    /// The discounting convention implied by the coupon frequency.
    #[must_use]
    pub fn compounding(&self) -> Compounding {
        Compounding::Discrete(self.frequency)
    }

    /// Coupon rate as `f64`, the default initial guess for yield solving.
    #[must_use]
    pub(crate) fn coupon_rate_f64(&self) -> f64 {
        self.coupon_rate.to_f64().unwrap_or(0.0)
    }
}
