//! Coupon and principal schedule generation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BondError, BondResult};
use crate::spec::BondSpec;

/// A single bond cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Time offset from valuation, in years. Strictly positive.
    time: f64,
    /// Payment amount; the final flow includes the face value.
    amount: Decimal,
}

impl CashFlow {
    /// Time offset from valuation in years.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Payment amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// The ordered sequence of cash flows for a bond.
///
/// Times are strictly increasing; the last amount includes the face value.
/// Never mutated after creation.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::cashflows::CashFlowSchedule;
/// use tenor_bonds::spec::BondSpec;
/// use rust_decimal_macros::dec;
///
/// let spec = BondSpec::new(dec!(1000), dec!(0.05), 5.0, 2).unwrap();
/// let schedule = CashFlowSchedule::generate(&spec).unwrap();
/// assert_eq!(schedule.len(), 10);
/// assert_eq!(schedule.flows().last().unwrap().amount(), dec!(1025));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSchedule {
    flows: Vec<CashFlow>,
}

impl CashFlowSchedule {
    /// Builds the coupon + principal schedule for the given bond terms.
    ///
    /// The period count is `round(frequency * years_to_maturity)`; each
    /// period pays `face * rate / frequency` at `i / frequency` years, and
    /// the final payment additionally returns the face value.
    ///
    /// # Errors
    ///
    /// Fails with [`BondError::InvalidSchedule`] when the rounded period
    /// count is not positive.
    pub fn generate(spec: &BondSpec) -> BondResult<Self> {
        let periods = spec.period_count();
        if periods <= 0 {
            return Err(BondError::invalid_schedule(format!(
                "rounded period count must be positive, got {periods}"
            )));
        }

        let coupon = spec.coupon_payment();
        let frequency = f64::from(spec.frequency());

        let mut flows = Vec::with_capacity(periods as usize);
        for i in 1..=periods {
            let amount = if i == periods {
                coupon + spec.face_value()
            } else {
                coupon
            };
            flows.push(CashFlow {
                time: i as f64 / frequency,
                amount,
            });
        }

        Ok(Self { flows })
    }

    /// The cash flows in payment order.
    #[must_use]
    pub fn flows(&self) -> &[CashFlow] {
        &self.flows
    }

    /// Number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Whether the schedule has no flows. Generated schedules never do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Iterates over the cash flows.
    pub fn iter(&self) -> std::slice::Iter<'_, CashFlow> {
        self.flows.iter()
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.flows.iter()
    }
}
