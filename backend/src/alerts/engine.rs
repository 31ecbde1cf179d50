//! Rule Engine
//!
//! Evaluates the rule catalogue in registry order and returns the alerts
//! stable-sorted by severity.
//!
//! # Fault Isolation
//!
//! Every rule runs inside its own `RuleOutcome`:
//!
//! ```text
//! Ok(Some(alert)) → Triggered(alert)
//! Ok(None)        → Clear
//! Err(e) / panic  → Failed(e)     (logged, contributes nothing)
//! ```
//!
//! A failing rule never stops the rules after it.

use crate::alerts::context::FinancialContext;
use crate::alerts::rules::{default_catalogue, AlertRule, RuleError};
use crate::alerts::thresholds::AlertThresholds;
use crate::models::alert::{sort_by_severity, Alert};
use log::{debug, warn};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Result of evaluating one rule
#[derive(Debug, PartialEq)]
pub enum RuleOutcome {
    Triggered(Alert),
    Clear,
    Failed(RuleError),
}

impl RuleOutcome {
    pub fn into_alert(self) -> Option<Alert> {
        match self {
            RuleOutcome::Triggered(alert) => Some(alert),
            _ => None,
        }
    }
}

/// Alert rule engine
///
/// Holds an ordered rule list fixed at construction. Evaluation keeps no
/// state between calls.
///
/// # Example
///
/// ```rust
/// use finance_engine_core_rs::alerts::{FinancialContext, RuleEngine};
/// use finance_engine_core_rs::Severity;
///
/// let context = FinancialContext {
///     total_monthly_income: 50_000.0,
///     total_monthly_expenses: 60_000.0,
///     liquid_assets: 600_000.0,
///     ..FinancialContext::default()
/// };
///
/// let alerts = RuleEngine::default().evaluate(&context);
/// assert_eq!(alerts.len(), 1);
/// assert_eq!(alerts[0].id, "negative-cashflow");
/// assert_eq!(alerts[0].severity, Severity::High);
/// ```
pub struct RuleEngine {
    rules: Vec<Box<dyn AlertRule>>,
    thresholds: AlertThresholds,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(AlertThresholds::default())
    }
}

impl RuleEngine {
    /// Built-in catalogue with the given severity cutoffs
    pub fn new(thresholds: AlertThresholds) -> Self {
        Self::with_rules(default_catalogue(), thresholds)
    }

    /// Custom rule list, evaluated in the given order
    pub fn with_rules(rules: Vec<Box<dyn AlertRule>>, thresholds: AlertThresholds) -> Self {
        Self { rules, thresholds }
    }

    pub fn thresholds(&self) -> &AlertThresholds {
        &self.thresholds
    }

    /// Rule ids in registry order
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }

    /// Evaluate every rule and return its outcome, in registry order
    pub fn evaluate_outcomes(&self, context: &FinancialContext) -> Vec<(&'static str, RuleOutcome)> {
        self.rules
            .iter()
            .map(|rule| (rule.id(), self.run_rule(rule.as_ref(), context)))
            .collect()
    }

    /// Evaluate every rule and return the alerts, high severity first
    pub fn evaluate(&self, context: &FinancialContext) -> Vec<Alert> {
        let mut alerts: Vec<Alert> = self
            .evaluate_outcomes(context)
            .into_iter()
            .filter_map(|(_, outcome)| outcome.into_alert())
            .collect();
        sort_by_severity(&mut alerts);

        debug!(
            "Evaluated {} rules, {} alerts raised",
            self.rules.len(),
            alerts.len()
        );
        alerts
    }

    fn run_rule(&self, rule: &dyn AlertRule, context: &FinancialContext) -> RuleOutcome {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            rule.evaluate(context, &self.thresholds)
        }))
        .unwrap_or_else(|payload| {
            Err(RuleError::Panicked {
                rule: rule.id().to_string(),
                message: panic_message(payload.as_ref()),
            })
        });

        match result {
            Ok(Some(alert)) => RuleOutcome::Triggered(alert),
            Ok(None) => RuleOutcome::Clear,
            Err(err) => {
                warn!("Skipping alert rule '{}': {}", rule.id(), err);
                RuleOutcome::Failed(err)
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Evaluate the built-in catalogue with default cutoffs
pub fn evaluate_alerts(context: &FinancialContext) -> Vec<Alert> {
    RuleEngine::default().evaluate(context)
}
