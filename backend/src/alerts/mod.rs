//! Financial-health alerts
//!
//! - **context**: `FinancialContext` snapshot and its builder
//! - **settings**: User targets (`FinancialSettings`)
//! - **thresholds**: Severity cutoffs (`AlertThresholds`)
//! - **rules**: The alert catalogue
//! - **engine**: `RuleEngine` with per-rule fault isolation

pub mod context;
pub mod engine;
pub mod rules;
pub mod settings;
pub mod thresholds;

pub use context::{allocation_percentages, FinancialContext, MonthlyAggregates};
pub use engine::{evaluate_alerts, RuleEngine, RuleOutcome};
pub use rules::{default_catalogue, AlertRule, RuleError};
pub use settings::FinancialSettings;
pub use thresholds::AlertThresholds;
