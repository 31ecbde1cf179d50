//! Payoff simulation output records
//!
//! These are ephemeral, JSON-serializable results handed back to the
//! collaborator layer. Currency fields are already rounded to 2 decimals when
//! a record is built; nothing here does arithmetic on them again.

use crate::strategy::PayoffStrategy;
use serde::{Deserialize, Serialize};

/// One row of a debt's monthly breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffMonth {
    /// 1-based month index
    pub month: u32,
    /// Balance after this month's payment
    pub balance: f64,
    pub principal: f64,
    pub interest: f64,
    pub payment: f64,
}

/// Per-debt outcome of a simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffDebtResult {
    pub debt_id: String,
    pub debt_name: String,
    /// Month in which the balance reached zero, or the last simulated month
    /// when `paid_off` is false
    pub payoff_month: u32,
    /// False when the month cap was reached with a balance still outstanding
    pub paid_off: bool,
    pub total_paid: f64,
    pub total_interest: f64,
    pub months: Vec<PayoffMonth>,
}

impl PayoffDebtResult {
    /// Balance left after the last recorded month (0.0 when no rows exist)
    pub fn final_balance(&self) -> f64 {
        self.months.last().map(|m| m.balance).unwrap_or(0.0)
    }
}

/// Complete result of one strategy run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffSimulation {
    pub strategy: PayoffStrategy,
    pub extra_payment: f64,
    /// Debts in strategy order
    pub debts: Vec<PayoffDebtResult>,
    pub total_months: u32,
    pub total_interest_paid: f64,
    /// Months saved against the minimum-payment baseline (never negative)
    pub months_saved: u32,
    /// Interest saved against the minimum-payment baseline (never negative)
    pub interest_saved: f64,
}

impl PayoffSimulation {
    /// Zero-valued simulation returned for an empty debt set
    pub fn empty(strategy: PayoffStrategy, extra_payment: f64) -> Self {
        Self {
            strategy,
            extra_payment,
            debts: Vec::new(),
            total_months: 0,
            total_interest_paid: 0.0,
            months_saved: 0,
            interest_saved: 0.0,
        }
    }

    /// True when every debt reached zero before the month cap
    pub fn is_debt_free(&self) -> bool {
        self.debts.iter().all(|d| d.paid_off)
    }

    /// Sum of every payment made across all debts
    pub fn total_paid(&self) -> f64 {
        crate::core::round2(self.debts.iter().map(|d| d.total_paid).sum())
    }

    /// Debt ids in the order they are paid off
    ///
    /// Debts finishing in the same month keep strategy order. Debts that never
    /// finish come last.
    pub fn payoff_order(&self) -> Vec<&str> {
        let mut indexed: Vec<&PayoffDebtResult> = self.debts.iter().collect();
        indexed.sort_by_key(|d| (!d.paid_off, d.payoff_month));
        indexed.into_iter().map(|d| d.debt_id.as_str()).collect()
    }
}
