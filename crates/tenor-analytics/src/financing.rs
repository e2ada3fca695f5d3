//! Repo financing, forward price, carry, and roll-down.
//!
//! Money-market interest accrues on an actual/360 basis
//! ([`MONEY_MARKET_BASIS`]); the repo-adjusted yield converts the
//! financing advantage to a bond-basis yield pickup via [`BOND_BASIS`].
//!
//! Invalid financing inputs (non-positive principal or horizon, negative
//! repo rate) are rejected with an explicit error rather than mapped to a
//! zero result a caller could mistake for a real repayment. Horizon-free
//! pass-throughs that are economically meaningful keep their value
//! semantics: a forward with no horizon is the spot, an empty yield
//! history rolls down by zero, and a riskless position takes no repo
//! adjustment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Day-count basis for money-market interest (actual/360).
pub const MONEY_MARKET_BASIS: u32 = 360;

/// Day-count basis for bond-yield conversions (actual/365).
pub const BOND_BASIS: u32 = 365;

/// The terms of a repo financing trade.
///
/// All fields are non-negative; `days > 0` is required for nontrivial
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancingTerms {
    /// Cash principal lent against the collateral.
    pub principal: Decimal,
    /// Annualized repo rate (unitless decimal).
    pub repo_rate: Decimal,
    /// Financing horizon in days.
    pub days: i64,
    /// Coupon payment falling inside the horizon, if any.
    pub coupon: Decimal,
    /// Days until that coupon pays; 0 when there is none.
    pub days_to_coupon: i64,
}

impl FinancingTerms {
    /// Creates validated financing terms.
    ///
    /// # Errors
    ///
    /// Fails with [`AnalyticsError::InvalidInput`] when the principal or
    /// horizon is not positive, or any rate/amount is negative.
    pub fn new(
        principal: Decimal,
        repo_rate: Decimal,
        days: i64,
        coupon: Decimal,
        days_to_coupon: i64,
    ) -> AnalyticsResult<Self> {
        if principal <= Decimal::ZERO {
            return Err(AnalyticsError::invalid_input(format!(
                "principal must be positive, got {principal}"
            )));
        }
        if repo_rate < Decimal::ZERO {
            return Err(AnalyticsError::invalid_input(format!(
                "repo rate must be non-negative, got {repo_rate}"
            )));
        }
        if days <= 0 {
            return Err(AnalyticsError::invalid_input(format!(
                "financing horizon must be positive, got {days} days"
            )));
        }
        if coupon < Decimal::ZERO || days_to_coupon < 0 {
            return Err(AnalyticsError::invalid_input(
                "coupon amount and days to coupon must be non-negative",
            ));
        }

        Ok(Self {
            principal,
            repo_rate,
            days,
            coupon,
            days_to_coupon,
        })
    }
}

/// The combined economics of financing a position to a forward date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepoEconomics {
    /// Repo repayment (principal plus financing interest).
    pub repayment: Decimal,
    /// Forward dirty price of the collateral.
    pub forward_price: Decimal,
    /// Carry: forward price minus spot dirty price.
    pub carry: Decimal,
}

/// Repayment of a repo transaction: principal plus actual/360 interest.
///
/// # Formula
///
/// ```text
/// repayment = principal * (1 + repo_rate * days / 360)
/// ```
///
/// # Errors
///
/// Fails with [`AnalyticsError::InvalidInput`] for a non-positive
/// principal or horizon, or a negative repo rate.
pub fn repo_repayment(
    principal: Decimal,
    repo_rate: Decimal,
    days: i64,
) -> AnalyticsResult<Decimal> {
    if principal <= Decimal::ZERO {
        return Err(AnalyticsError::invalid_input(format!(
            "principal must be positive, got {principal}"
        )));
    }
    if repo_rate < Decimal::ZERO {
        return Err(AnalyticsError::invalid_input(format!(
            "repo rate must be non-negative, got {repo_rate}"
        )));
    }
    if days <= 0 {
        return Err(AnalyticsError::invalid_input(format!(
            "financing horizon must be positive, got {days} days"
        )));
    }

    let basis = Decimal::from(MONEY_MARKET_BASIS);
    let interest = principal * repo_rate * Decimal::from(days) / basis;
    Ok(principal + interest)
}

/// Forward dirty price under financing and coupon adjustment.
///
/// The spot dirty price is grown at the repo rate; a coupon paying
/// strictly inside the horizon is subtracted at its forward value
/// (reinvested at the repo rate for the remaining days).
///
/// A non-positive horizon returns the spot price unchanged: the forward
/// of an immediate delivery is the spot.
///
/// # Formula
///
/// ```text
/// forward = dirty * (1 + r * days / 360)
///         - coupon * (1 + r * (days - days_to_coupon) / 360)   [if 0 < days_to_coupon < days]
/// ```
#[must_use]
pub fn forward_price(
    dirty_price: Decimal,
    repo_rate: Decimal,
    days_to_forward: i64,
    coupon: Decimal,
    days_to_coupon: i64,
) -> Decimal {
    if days_to_forward <= 0 {
        return dirty_price;
    }

    let basis = Decimal::from(MONEY_MARKET_BASIS);
    let financed = dirty_price
        * (Decimal::ONE + repo_rate * Decimal::from(days_to_forward) / basis);

    let coupon_fv = if days_to_coupon > 0 && days_to_coupon < days_to_forward {
        let reinvest_days = Decimal::from(days_to_forward - days_to_coupon);
        coupon * (Decimal::ONE + repo_rate * reinvest_days / basis)
    } else {
        Decimal::ZERO
    };

    financed - coupon_fv
}

/// Carry: the P&L from holding the position to the forward date.
#[must_use]
pub fn carry(spot_price: Decimal, forward_price: Decimal) -> Decimal {
    forward_price - spot_price
}

/// Roll-down: yield change from the bond aging along a static curve.
///
/// Compares the current yield against the most recent historical yield;
/// an empty history rolls down by zero.
#[must_use]
pub fn roll_down(current_yield: f64, historical_yields: &[f64]) -> f64 {
    match historical_yields.last() {
        Some(last) => current_yield - last,
        None => 0.0,
    }
}

/// Repo-adjusted yield: the special-collateral yield plus the financing
/// advantage converted to yield terms through PV01.
///
/// A non-positive PV01 or holding period means there is nothing to
/// adjust; the input yield is returned unchanged.
///
/// # Formula
///
/// ```text
/// adjusted = special_yield + (gc_rate - special_rate) * 365 * holding_days
///                            / (360 * pv01 * 100)
/// ```
#[must_use]
pub fn repo_adjusted_yield(
    special_yield: f64,
    gc_rate: f64,
    special_rate: f64,
    holding_days: i64,
    pv01: f64,
) -> f64 {
    if pv01 <= 0.0 || holding_days <= 0 {
        return special_yield;
    }

    let adjustment = (gc_rate - special_rate) * f64::from(BOND_BASIS) * holding_days as f64
        / (f64::from(MONEY_MARKET_BASIS) * pv01 * 100.0);
    special_yield + adjustment
}

/// Prices the whole financing trade in one call: repayment, forward price
/// of the collateral, and carry against the spot dirty price.
///
/// # Errors
///
/// Fails with [`AnalyticsError::InvalidInput`] when the dirty price is
/// not positive (terms are validated at construction).
pub fn repo_economics(
    terms: &FinancingTerms,
    dirty_price: Decimal,
) -> AnalyticsResult<RepoEconomics> {
    if dirty_price <= Decimal::ZERO {
        return Err(AnalyticsError::invalid_input(format!(
            "dirty price must be positive, got {dirty_price}"
        )));
    }

    let repayment = repo_repayment(terms.principal, terms.repo_rate, terms.days)?;
    let forward = forward_price(
        dirty_price,
        terms.repo_rate,
        terms.days,
        terms.coupon,
        terms.days_to_coupon,
    );

    Ok(RepoEconomics {
        repayment,
        forward_price: forward,
        carry: carry(dirty_price, forward),
    })
}
