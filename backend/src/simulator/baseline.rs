//! Minimum-payment baseline
//!
//! Reference point for savings metrics: every debt paid on its own with only
//! its minimum payment, no extra payment and no cascading. Never presented as
//! a plan in its own right.

use crate::core::round2;
use crate::models::debt::DebtForPayoff;
use crate::simulator::config::PayoffConfig;
use crate::simulator::engine::replay_isolated;
use serde::{Deserialize, Serialize};

/// Totals of the minimum-payment-only reference run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineTotals {
    /// Latest payoff month across debts (the cap for debts that never clear)
    pub total_months: u32,
    /// Interest summed across every isolated run, rounded to 2 decimals
    pub total_interest: f64,
}

impl BaselineTotals {
    /// Months saved by a plan finishing in `plan_months` (never negative)
    pub fn months_saved(&self, plan_months: u32) -> u32 {
        self.total_months.saturating_sub(plan_months)
    }

    /// Interest saved by a plan paying `plan_interest` (never negative)
    pub fn interest_saved(&self, plan_interest: f64) -> f64 {
        round2((self.total_interest - plan_interest).max(0.0))
    }
}

/// Simulate each debt alone at its minimum payment
pub fn compute_baseline(debts: &[DebtForPayoff], config: &PayoffConfig) -> BaselineTotals {
    let mut total_months = 0;
    let mut total_interest = 0.0;

    for debt in debts {
        let (state, months) = replay_isolated(debt, debt.min_payment, config);
        total_months = total_months.max(state.payoff_month().unwrap_or(months));
        total_interest += state.total_interest();
    }

    BaselineTotals {
        total_months,
        total_interest: round2(total_interest),
    }
}
