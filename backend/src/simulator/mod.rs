//! Debt payoff simulation
//!
//! - **engine**: Cascading month-by-month `PayoffSimulator`
//! - **baseline**: Minimum-payment-only reference totals
//! - **comparison**: Avalanche vs. snowball with a recommendation
//! - **config**: `PayoffConfig` and the named constants behind it

pub mod baseline;
pub mod comparison;
pub mod config;
pub mod engine;

#[cfg(test)]
mod tests;

pub use baseline::{compute_baseline, BaselineTotals};
pub use comparison::{compare_strategies, recommend, StrategyComparison};
pub use config::{
    BreakdownSource, PayoffConfig, MAX_SIMULATION_MONTHS, PAID_OFF_EPSILON,
    RECOMMENDATION_THRESHOLD,
};
pub use engine::{simulate_payoff, PayoffSimulator};
