//! User-configured financial targets
//!
//! These come from the collaborator's settings store and are copied into
//! every `FinancialContext`. Percentages are whole-number percents (40.0 =
//! 40%), not fractions.

use crate::config::{self, ConfigError};
use crate::models::debt::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tolerance when checking that target allocation sums to 100
pub const ALLOCATION_SUM_TOLERANCE: f64 = 0.5;

/// User thresholds and target allocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancialSettings {
    /// Months of expenses + EMIs the emergency fund should cover
    pub emergency_fund_target_months: f64,

    /// Maximum acceptable EMI-to-income ratio (%)
    pub max_emi_to_income_pct: f64,

    /// Maximum acceptable credit-card balance relative to income (%)
    pub max_cc_utilization_pct: f64,

    /// Asset class → target share of the portfolio (%), summing to 100
    pub target_allocation: BTreeMap<String, f64>,
}

impl Default for FinancialSettings {
    fn default() -> Self {
        let target_allocation = [("equity", 60.0), ("debt", 30.0), ("gold", 10.0)]
            .into_iter()
            .map(|(class, pct)| (class.to_string(), pct))
            .collect();

        Self {
            emergency_fund_target_months: 6.0,
            max_emi_to_income_pct: 40.0,
            max_cc_utilization_pct: 30.0,
            target_allocation,
        }
    }
}

impl FinancialSettings {
    /// Load from JSON, filling missing fields with defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        config::from_json_str(json)
    }

    /// Check ranges and that a non-empty target allocation sums to 100
    pub fn validate(&self) -> Result<(), ValidationError> {
        let scalars = [
            ("emergency_fund_target_months", self.emergency_fund_target_months),
            ("max_emi_to_income_pct", self.max_emi_to_income_pct),
            ("max_cc_utilization_pct", self.max_cc_utilization_pct),
        ];
        for (field, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidSetting { field, value });
            }
        }

        if self.target_allocation.is_empty() {
            return Ok(());
        }
        let sum: f64 = self.target_allocation.values().sum();
        if (sum - 100.0).abs() > ALLOCATION_SUM_TOLERANCE {
            return Err(ValidationError::AllocationTargetSum(sum));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(FinancialSettings::default().validate().is_ok());
    }

    #[test]
    fn test_allocation_must_sum_to_100() {
        let mut settings = FinancialSettings::default();
        settings.target_allocation.insert("crypto".to_string(), 15.0);
        assert_eq!(
            settings.validate(),
            Err(ValidationError::AllocationTargetSum(115.0))
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            FinancialSettings::from_json_str(r#"{"emergencyFundTargetMonths": 3}"#).unwrap();
        assert_eq!(settings.emergency_fund_target_months, 3.0);
        assert_eq!(settings.max_emi_to_income_pct, 40.0);
        assert_eq!(settings.target_allocation.len(), 3);
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let settings = FinancialSettings {
            max_cc_utilization_pct: -1.0,
            ..FinancialSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::InvalidSetting {
                field: "max_cc_utilization_pct",
                ..
            })
        ));
    }
}
