//! Debt snapshot supplied by the collaborator layer
//!
//! A `DebtForPayoff` is a read-only view of one liability at the moment a
//! simulation is requested. The simulator never mutates it; running balances
//! live in the simulator's own state.
//!
//! # Critical Invariants
//!
//! 1. **Balance**: `balance >= 0`
//! 2. **APR**: annual decimal fraction in `[0, 1]`
//! 3. **Minimum payment**: `min_payment > 0`
//!
//! The engines assume these hold. `validate()` exists for boundaries (CLI,
//! FFI) that receive untrusted input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a snapshot or setting is outside its documented range
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Debt '{id}': balance must be non-negative and finite, got {value}")]
    InvalidBalance { id: String, value: f64 },

    #[error("Debt '{id}': apr must be within [0, 1], got {value}")]
    InvalidApr { id: String, value: f64 },

    #[error("Debt '{id}': minimum payment must be positive, got {value}")]
    InvalidMinPayment { id: String, value: f64 },

    #[error("Extra monthly payment must be non-negative and finite, got {0}")]
    InvalidExtraPayment(f64),

    #[error("Target allocation must sum to 100, got {0}")]
    AllocationTargetSum(f64),

    #[error("Setting '{field}' must be non-negative and finite, got {value}")]
    InvalidSetting { field: &'static str, value: f64 },
}

/// One debt as seen by the payoff simulator
///
/// # Example
/// ```
/// use finance_engine_core_rs::DebtForPayoff;
///
/// let card = DebtForPayoff::new("cc-1", "Credit Card", 50_000.0, 0.42, 5_000.0);
/// assert!(card.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtForPayoff {
    pub id: String,
    pub name: String,
    /// Outstanding balance (currency units)
    pub balance: f64,
    /// Annual percentage rate as a decimal fraction
    pub apr: f64,
    /// Contractual minimum monthly payment (currency units)
    pub min_payment: f64,
}

impl DebtForPayoff {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        balance: f64,
        apr: f64,
        min_payment: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            apr,
            min_payment,
        }
    }

    /// Check the snapshot against its documented ranges
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.balance.is_finite() || self.balance < 0.0 {
            return Err(ValidationError::InvalidBalance {
                id: self.id.clone(),
                value: self.balance,
            });
        }
        if !(0.0..=1.0).contains(&self.apr) {
            return Err(ValidationError::InvalidApr {
                id: self.id.clone(),
                value: self.apr,
            });
        }
        if !self.min_payment.is_finite() || self.min_payment <= 0.0 {
            return Err(ValidationError::InvalidMinPayment {
                id: self.id.clone(),
                value: self.min_payment,
            });
        }
        Ok(())
    }

    /// True when the minimum payment cannot even cover the first month's interest
    pub fn is_negatively_amortizing(&self) -> bool {
        self.min_payment * crate::core::MONTHS_PER_YEAR <= self.balance * self.apr
            && self.balance > 0.0
    }
}

/// Validate a whole debt set plus the extra payment, stopping at the first error
pub fn validate_debts(debts: &[DebtForPayoff], extra_payment: f64) -> Result<(), ValidationError> {
    if !extra_payment.is_finite() || extra_payment < 0.0 {
        return Err(ValidationError::InvalidExtraPayment(extra_payment));
    }
    debts.iter().try_for_each(DebtForPayoff::validate)
}
