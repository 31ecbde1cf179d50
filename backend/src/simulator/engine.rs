//! Payoff Simulator Engine
//!
//! Month-by-month amortization of a debt set under one prioritization
//! strategy, with cascading reallocation of freed payments.
//!
//! # Month Loop
//!
//! ```text
//! For each month m (until every debt is paid or the month cap):
//! 1. freed    = Σ min_payment of debts paid before month m
//! 2. priority = first unpaid debt in strategy order
//! 3. For each unpaid debt, in strategy order:
//!    a. interest = balance × apr / 12   (added to total interest)
//!    b. budget   = min_payment (+ extra + freed for the priority debt)
//!    c. payment  = min(budget, balance + interest)
//!    d. balance  = max(0, balance − (payment − interest))
//!    e. paid when balance ≤ 0.01
//! ```
//!
//! # Critical Invariants
//!
//! 1. **No overpayment**: a month's payment never exceeds balance + interest
//! 2. **Single priority**: extra and freed payments go to exactly one debt
//! 3. **Bounded**: at most `max_months` iterations, regardless of input
//! 4. **Total**: never fails; an unpayable debt ends at the cap with
//!    `paid_off = false`

use crate::core::{monthly_interest, round2};
use crate::models::debt::DebtForPayoff;
use crate::models::payoff::{PayoffDebtResult, PayoffMonth, PayoffSimulation};
use crate::simulator::baseline::{compute_baseline, BaselineTotals};
use crate::simulator::comparison::{compare_outcomes, StrategyComparison};
use crate::simulator::config::{BreakdownSource, PayoffConfig};
use crate::strategy::PayoffStrategy;
use log::{debug, warn};

// ============================================================================
// Per-debt running state
// ============================================================================

/// Running state of one debt during a simulation
#[derive(Debug, Clone)]
pub(crate) struct DebtState {
    balance: f64,
    paid: bool,
    payoff_month: Option<u32>,
    total_paid: f64,
    total_interest: f64,
    months: Vec<PayoffMonth>,
}

impl DebtState {
    pub(crate) fn new(debt: &DebtForPayoff, epsilon: f64) -> Self {
        // A debt that starts at zero is paid before month 1 and frees its
        // minimum payment immediately
        let already_paid = debt.balance <= epsilon;
        Self {
            balance: if already_paid { 0.0 } else { debt.balance },
            paid: already_paid,
            payoff_month: if already_paid { Some(0) } else { None },
            total_paid: 0.0,
            total_interest: 0.0,
            months: Vec::new(),
        }
    }

    pub(crate) fn is_paid(&self) -> bool {
        self.paid
    }

    pub(crate) fn payoff_month(&self) -> Option<u32> {
        self.payoff_month
    }

    pub(crate) fn total_interest(&self) -> f64 {
        self.total_interest
    }

    /// Accrue interest and apply up to `budget`; returns the interest accrued
    pub(crate) fn apply_month(&mut self, month: u32, apr: f64, budget: f64, epsilon: f64) -> f64 {
        let interest = monthly_interest(self.balance, apr);
        let payment = budget.min(self.balance + interest);
        let principal = payment - interest;

        self.balance = (self.balance - principal).max(0.0);
        self.total_paid += payment;
        self.total_interest += interest;

        if self.balance <= epsilon {
            self.balance = 0.0;
            self.paid = true;
            self.payoff_month = Some(month);
        }

        self.months.push(PayoffMonth {
            month,
            balance: round2(self.balance),
            principal: round2(principal),
            interest: round2(interest),
            payment: round2(payment),
        });

        interest
    }

    /// Freeze into an output record; unpaid debts report `last_month`
    pub(crate) fn into_result(self, debt: &DebtForPayoff, last_month: u32) -> PayoffDebtResult {
        PayoffDebtResult {
            debt_id: debt.id.clone(),
            debt_name: debt.name.clone(),
            payoff_month: self.payoff_month.unwrap_or(last_month),
            paid_off: self.paid,
            total_paid: round2(self.total_paid),
            total_interest: round2(self.total_interest),
            months: self.months,
        }
    }
}

/// Simulate one debt on its own with a fixed monthly budget
///
/// No cascading: nothing is freed or received from other debts. Returns the
/// debt's final state and the number of months simulated.
pub(crate) fn replay_isolated(
    debt: &DebtForPayoff,
    monthly_budget: f64,
    config: &PayoffConfig,
) -> (DebtState, u32) {
    let mut state = DebtState::new(debt, config.paid_off_epsilon);
    let mut month = 0;
    while !state.is_paid() && month < config.max_months {
        month += 1;
        state.apply_month(month, debt.apr, monthly_budget, config.paid_off_epsilon);
    }
    (state, month)
}

// ============================================================================
// Simulator
// ============================================================================

/// Debt payoff simulator
///
/// Stateless between calls; holds only its configuration.
///
/// # Example
///
/// ```rust
/// use finance_engine_core_rs::{DebtForPayoff, PayoffSimulator, PayoffStrategy};
///
/// let debts = vec![
///     DebtForPayoff::new("cc", "Credit Card", 3_000.0, 0.24, 150.0),
///     DebtForPayoff::new("car", "Car Loan", 8_000.0, 0.07, 250.0),
/// ];
///
/// let simulator = PayoffSimulator::default();
/// let plan = simulator.simulate(&debts, PayoffStrategy::Avalanche, 200.0);
///
/// assert_eq!(plan.debts[0].debt_id, "cc");
/// assert!(plan.is_debt_free());
/// assert!(plan.months_saved > 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayoffSimulator {
    config: PayoffConfig,
}

impl PayoffSimulator {
    pub fn new(config: PayoffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PayoffConfig {
        &self.config
    }

    /// Run the cascading simulation for one strategy
    ///
    /// # Arguments
    ///
    /// * `debts` - Debt snapshots (any order; never mutated)
    /// * `strategy` - Prioritization strategy
    /// * `extra_monthly_payment` - Fixed amount on top of all minimums
    ///
    /// # Returns
    ///
    /// A `PayoffSimulation` with debts listed in strategy order. An empty
    /// debt set yields a zero-valued simulation without iterating.
    pub fn simulate(
        &self,
        debts: &[DebtForPayoff],
        strategy: PayoffStrategy,
        extra_monthly_payment: f64,
    ) -> PayoffSimulation {
        if debts.is_empty() {
            return PayoffSimulation::empty(strategy, extra_monthly_payment);
        }

        for debt in debts.iter().filter(|d| d.is_negatively_amortizing()) {
            warn!(
                "Debt '{}': minimum payment {:.2} does not cover monthly interest",
                debt.id, debt.min_payment
            );
        }

        let ordered = strategy.order(debts);
        let (states, loop_months, total_interest) =
            self.run_cascading(&ordered, extra_monthly_payment);

        let (results, total_months) = match self.config.breakdown {
            BreakdownSource::Cascading => {
                let results: Vec<PayoffDebtResult> = ordered
                    .iter()
                    .zip(states)
                    .map(|(debt, state)| state.into_result(debt, loop_months))
                    .collect();
                (results, loop_months)
            }
            BreakdownSource::IsolatedReplay => {
                self.isolated_breakdown(&ordered, extra_monthly_payment)
            }
        };

        let baseline = compute_baseline(debts, &self.config);
        let total_interest_paid = round2(total_interest);

        if results.iter().any(|r| !r.paid_off) {
            warn!(
                "{} payoff hit the {}-month cap with debts outstanding",
                strategy, self.config.max_months
            );
        }
        debug!(
            "{} payoff: {} debts, {} months, interest {:.2} (baseline {} months, {:.2})",
            strategy,
            ordered.len(),
            total_months,
            total_interest_paid,
            baseline.total_months,
            baseline.total_interest,
        );

        PayoffSimulation {
            strategy,
            extra_payment: extra_monthly_payment,
            debts: results,
            total_months,
            total_interest_paid,
            months_saved: baseline.months_saved(total_months),
            interest_saved: baseline.interest_saved(total_interest_paid),
        }
    }

    /// Run both strategies with the same extra payment and recommend one
    pub fn compare(&self, debts: &[DebtForPayoff], extra_monthly_payment: f64) -> StrategyComparison {
        let avalanche = self.simulate(debts, PayoffStrategy::Avalanche, extra_monthly_payment);
        let snowball = self.simulate(debts, PayoffStrategy::Snowball, extra_monthly_payment);
        compare_outcomes(avalanche, snowball, self.config.recommendation_threshold)
    }

    /// Minimum-payment-only reference totals for `debts`
    pub fn baseline(&self, debts: &[DebtForPayoff]) -> BaselineTotals {
        compute_baseline(debts, &self.config)
    }

    /// Cascading loop over debts already in strategy order
    ///
    /// Returns the per-debt states, the number of months simulated and the
    /// unrounded total interest.
    fn run_cascading(&self, ordered: &[DebtForPayoff], extra: f64) -> (Vec<DebtState>, u32, f64) {
        let epsilon = self.config.paid_off_epsilon;
        let mut states: Vec<DebtState> = ordered
            .iter()
            .map(|debt| DebtState::new(debt, epsilon))
            .collect();
        let mut total_interest = 0.0;
        let mut month = 0;

        while month < self.config.max_months && states.iter().any(|s| !s.is_paid()) {
            month += 1;

            // Freed payments and the priority debt are fixed at the start of
            // the month; a debt cleared this month cascades from next month
            let freed: f64 = ordered
                .iter()
                .zip(&states)
                .filter(|(_, state)| state.is_paid())
                .map(|(debt, _)| debt.min_payment)
                .sum();
            let priority = states.iter().position(|s| !s.is_paid());

            for (idx, (debt, state)) in ordered.iter().zip(states.iter_mut()).enumerate() {
                if state.is_paid() {
                    continue;
                }
                let budget = if Some(idx) == priority {
                    debt.min_payment + extra + freed
                } else {
                    debt.min_payment
                };
                total_interest += state.apply_month(month, debt.apr, budget, epsilon);
            }
        }

        (states, month, total_interest)
    }

    /// Per-debt rows from isolated replays; `total_months` is their maximum
    fn isolated_breakdown(
        &self,
        ordered: &[DebtForPayoff],
        extra: f64,
    ) -> (Vec<PayoffDebtResult>, u32) {
        let mut total_months = 0;
        let results = ordered
            .iter()
            .enumerate()
            .map(|(idx, debt)| {
                let budget = if idx == 0 {
                    debt.min_payment + extra
                } else {
                    debt.min_payment
                };
                let (state, months) = replay_isolated(debt, budget, &self.config);
                let result = state.into_result(debt, months);
                total_months = total_months.max(result.payoff_month);
                result
            })
            .collect();
        (results, total_months)
    }
}

/// Simulate with the default configuration
///
/// Convenience wrapper over `PayoffSimulator::default().simulate(..)`.
pub fn simulate_payoff(
    debts: &[DebtForPayoff],
    strategy: PayoffStrategy,
    extra_monthly_payment: f64,
) -> PayoffSimulation {
    PayoffSimulator::default().simulate(debts, strategy, extra_monthly_payment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_month_caps_payment_at_balance_plus_interest() {
        let debt = DebtForPayoff::new("a", "A", 100.0, 0.12, 500.0);
        let mut state = DebtState::new(&debt, 0.01);
        let interest = state.apply_month(1, debt.apr, 500.0, 0.01);

        assert_eq!(interest, 1.0);
        assert!(state.is_paid());
        assert_eq!(state.months[0].payment, 101.0);
        assert_eq!(state.months[0].principal, 100.0);
        assert_eq!(state.months[0].balance, 0.0);
    }

    #[test]
    fn test_apply_month_negative_amortization_grows_balance() {
        let debt = DebtForPayoff::new("a", "A", 1_000.0, 0.24, 10.0);
        let mut state = DebtState::new(&debt, 0.01);
        state.apply_month(1, debt.apr, 10.0, 0.01);

        // interest 20, payment 10, principal -10
        assert_eq!(state.months[0].principal, -10.0);
        assert_eq!(state.months[0].balance, 1_010.0);
        assert!(!state.is_paid());
    }

    #[test]
    fn test_zero_balance_debt_is_paid_before_month_one() {
        let debt = DebtForPayoff::new("a", "A", 0.0, 0.2, 50.0);
        let (state, months) = replay_isolated(&debt, 50.0, &PayoffConfig::default());
        assert_eq!(months, 0);
        assert_eq!(state.payoff_month(), Some(0));
        assert!(state.months.is_empty());
    }

    #[test]
    fn test_replay_isolated_respects_cap() {
        let config = PayoffConfig {
            max_months: 24,
            ..PayoffConfig::default()
        };
        let debt = DebtForPayoff::new("a", "A", 10_000.0, 0.30, 50.0);
        let (state, months) = replay_isolated(&debt, debt.min_payment, &config);
        assert_eq!(months, 24);
        assert_eq!(state.payoff_month(), None);
        assert_eq!(state.months.len(), 24);
    }

    #[test]
    fn test_freed_payment_starts_the_month_after_payoff() {
        // Debt a clears in month 1; its 100 min payment joins b from month 2
        let debts = vec![
            DebtForPayoff::new("a", "A", 50.0, 0.0, 100.0),
            DebtForPayoff::new("b", "B", 1_000.0, 0.0, 100.0),
        ];
        let simulator = PayoffSimulator::default();
        let plan = simulator.simulate(&debts, PayoffStrategy::Snowball, 0.0);

        let b = &plan.debts[1];
        assert_eq!(b.months[0].payment, 100.0);
        assert_eq!(b.months[1].payment, 200.0);
    }
}
