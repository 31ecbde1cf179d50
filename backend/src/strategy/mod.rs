//! Debt Prioritization Strategies
//!
//! A strategy decides which unpaid debt is the *priority debt*: the one that
//! receives the extra monthly payment plus every minimum payment freed by
//! debts already paid off.
//!
//! Available strategies:
//! 1. **Avalanche**: highest APR first (minimizes interest)
//! 2. **Snowball**: smallest balance first (fastest first win)
//!
//! # Ordering Rules
//!
//! Both orderings are stable sorts over a copy of the input. Debts with equal
//! keys keep their input order; there is no secondary key. The caller's slice
//! is never reordered.

use crate::models::debt::DebtForPayoff;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unknown strategy name supplied at a parsing boundary
#[derive(Debug, Error, PartialEq)]
#[error("Unknown payoff strategy '{0}' (expected 'avalanche' or 'snowball')")]
pub struct UnknownStrategy(pub String);

/// Debt prioritization strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffStrategy {
    /// APR descending
    Avalanche,
    /// Balance ascending
    Snowball,
}

impl PayoffStrategy {
    /// Both strategies, in comparison order
    pub const ALL: [PayoffStrategy; 2] = [PayoffStrategy::Avalanche, PayoffStrategy::Snowball];

    /// Return a copy of `debts` in this strategy's priority order
    pub fn order(self, debts: &[DebtForPayoff]) -> Vec<DebtForPayoff> {
        match self {
            PayoffStrategy::Avalanche => sort_for_avalanche(debts),
            PayoffStrategy::Snowball => sort_for_snowball(debts),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PayoffStrategy::Avalanche => "avalanche",
            PayoffStrategy::Snowball => "snowball",
        }
    }
}

impl fmt::Display for PayoffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoffStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avalanche" => Ok(PayoffStrategy::Avalanche),
            "snowball" => Ok(PayoffStrategy::Snowball),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

/// Stable sort by APR, highest first
///
/// # Example
/// ```
/// use finance_engine_core_rs::DebtForPayoff;
/// use finance_engine_core_rs::strategy::sort_for_avalanche;
///
/// let debts = vec![
///     DebtForPayoff::new("car", "Car Loan", 200_000.0, 0.14, 8_000.0),
///     DebtForPayoff::new("cc", "Credit Card", 50_000.0, 0.42, 5_000.0),
/// ];
/// let ordered = sort_for_avalanche(&debts);
/// assert_eq!(ordered[0].id, "cc");
/// assert_eq!(debts[0].id, "car"); // input untouched
/// ```
pub fn sort_for_avalanche(debts: &[DebtForPayoff]) -> Vec<DebtForPayoff> {
    let mut ordered = debts.to_vec();
    ordered.sort_by(|a, b| cmp_or_equal(b.apr, a.apr));
    ordered
}

/// Stable sort by balance, smallest first
pub fn sort_for_snowball(debts: &[DebtForPayoff]) -> Vec<DebtForPayoff> {
    let mut ordered = debts.to_vec();
    ordered.sort_by(|a, b| cmp_or_equal(a.balance, b.balance));
    ordered
}

// NaN keys compare equal so they never disturb the stable order
fn cmp_or_equal(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
