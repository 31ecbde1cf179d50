//! Finance Engine Core - Rust Engine
//!
//! Debt payoff simulation and rule-based financial-health alerts over plain,
//! immutable snapshots supplied by the surrounding application.
//!
//! # Architecture
//!
//! - **core**: Amortization math and output rounding
//! - **models**: Domain types (DebtForPayoff, PayoffSimulation, Alert)
//! - **strategy**: Avalanche / snowball debt ordering
//! - **simulator**: Cascading payoff simulation, baseline, strategy comparison
//! - **alerts**: Financial context, rule catalogue, rule engine
//! - **config**: JSON configuration loading
//!
//! # Critical Invariants
//!
//! 1. Engines never return errors to their caller; they degrade to zero,
//!    infinite or partial results
//! 2. Every loop is bounded (month cap, fixed rule catalogue)
//! 3. No I/O and no shared mutable state

// Module declarations
pub mod alerts;
pub mod config;
pub mod core;
pub mod models;
pub mod simulator;
pub mod strategy;

// Re-exports for convenience
pub use alerts::{
    evaluate_alerts, AlertThresholds, FinancialContext, FinancialSettings, MonthlyAggregates,
    RuleEngine,
};
pub use config::ConfigError;
pub use crate::core::{calculate_runway, estimate_monthly_interest_burn, monthly_interest};
pub use models::{
    alert::{Alert, Severity},
    debt::{validate_debts, DebtForPayoff, ValidationError},
    payoff::{PayoffDebtResult, PayoffMonth, PayoffSimulation},
};
pub use simulator::{
    compare_strategies, simulate_payoff, BaselineTotals, PayoffConfig, PayoffSimulator,
    StrategyComparison,
};
pub use strategy::{sort_for_avalanche, sort_for_snowball, PayoffStrategy};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn finance_engine_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::engine::simulate_payoff, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::engine::compare_strategies, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::engine::evaluate_alerts, m)?)?;
    Ok(())
}
