//! Domain models for the finance engine

pub mod alert;
pub mod debt;
pub mod payoff;

// Re-exports
pub use alert::{sort_by_severity, Alert, Severity};
pub use debt::{validate_debts, DebtForPayoff, ValidationError};
pub use payoff::{PayoffDebtResult, PayoffMonth, PayoffSimulation};
