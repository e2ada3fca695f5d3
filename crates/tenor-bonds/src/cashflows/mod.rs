//! Cash flow generation and accrual.

mod accrued;
mod schedule;

pub use accrued::accrued_interest;
pub use schedule::{CashFlow, CashFlowSchedule};
