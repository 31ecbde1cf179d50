//! Severity cutoffs for the alert catalogue
//!
//! User targets (what counts as "too much") live in `FinancialSettings`.
//! These cutoffs decide how bad a breach is and are fixed product constants,
//! kept as fields so tests can tune them.

use crate::config::{self, ConfigError};
use serde::{Deserialize, Serialize};

/// Cutoffs used by the built-in rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    /// Runway below this many months is high severity
    pub emergency_high_months: f64,
    /// Runway below this many months is medium severity
    pub emergency_medium_months: f64,

    /// Credit-card balance above this % of income is high severity
    pub cc_high_pct: f64,
    /// Credit-card balance above this % of income is medium severity
    pub cc_medium_pct: f64,

    /// EMI above this % of income is high severity
    pub emi_high_pct: f64,
    /// EMI above this % of income is medium severity
    pub emi_medium_pct: f64,

    /// APR (fraction) above which debt should be cleared before investing
    pub high_apr: f64,

    /// Savings rate (%) below which the low-savings rule fires
    pub savings_target_pct: f64,
    /// Savings rate (%) below which the low-savings rule is medium severity
    pub savings_medium_pct: f64,

    /// Allocation drift (percentage points) that triggers a rebalance alert
    pub drift_points: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            emergency_high_months: 3.0,
            emergency_medium_months: 5.0,
            cc_high_pct: 100.0,
            cc_medium_pct: 50.0,
            emi_high_pct: 50.0,
            emi_medium_pct: 40.0,
            high_apr: 0.15,
            savings_target_pct: 20.0,
            savings_medium_pct: 5.0,
            drift_points: 10.0,
        }
    }
}

impl AlertThresholds {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        config::from_json_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_default_cutoffs() {
        let thresholds =
            AlertThresholds::from_json_str(r#"{"drift_points": 15, "high_apr": 0.2}"#).unwrap();
        assert_eq!(thresholds.drift_points, 15.0);
        assert_eq!(thresholds.high_apr, 0.2);
        assert_eq!(thresholds.savings_target_pct, 20.0);
        assert_eq!(thresholds.emergency_high_months, 3.0);
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        assert!(matches!(
            AlertThresholds::from_json_str(r#"{"cc_high_pct": "lots"}"#),
            Err(ConfigError::Parse(_))
        ));
    }
}
