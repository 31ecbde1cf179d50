//! Payoff simulation configuration

use crate::config::{self, ConfigError};
use serde::{Deserialize, Serialize};

/// Hard cap on simulated months (safety limit, 50 years)
pub const MAX_SIMULATION_MONTHS: u32 = 600;

/// A balance at or below this amount counts as paid off
pub const PAID_OFF_EPSILON: f64 = 0.01;

/// Snowball must cost more than this much extra interest before avalanche is recommended
pub const RECOMMENDATION_THRESHOLD: f64 = 1000.0;

/// Where per-debt monthly rows, payoff months and `total_months` come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakdownSource {
    /// Rows recorded inside the cascading loop; the loop's month counter is
    /// the single source of truth for `total_months`
    #[default]
    Cascading,

    /// Each debt replayed alone with its minimum payment (plus the extra
    /// payment for the first debt in strategy order). Totals for interest
    /// still come from the cascading loop, so the two can diverge.
    IsolatedReplay,
}

/// Tunables for `PayoffSimulator`
///
/// # Example
/// ```
/// use finance_engine_core_rs::simulator::{BreakdownSource, PayoffConfig};
///
/// let config = PayoffConfig::from_json_str(r#"{"breakdown": "isolated_replay"}"#).unwrap();
/// assert_eq!(config.breakdown, BreakdownSource::IsolatedReplay);
/// assert_eq!(config.max_months, 600);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoffConfig {
    /// Simulation stops after this many months even with debts outstanding
    pub max_months: u32,

    /// Balance threshold treated as zero
    pub paid_off_epsilon: f64,

    /// Interest gap (snowball − avalanche) above which avalanche is recommended
    pub recommendation_threshold: f64,

    pub breakdown: BreakdownSource,
}

impl Default for PayoffConfig {
    fn default() -> Self {
        Self {
            max_months: MAX_SIMULATION_MONTHS,
            paid_off_epsilon: PAID_OFF_EPSILON,
            recommendation_threshold: RECOMMENDATION_THRESHOLD,
            breakdown: BreakdownSource::Cascading,
        }
    }
}

impl PayoffConfig {
    /// Load from JSON, filling missing fields with defaults, then validate
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let parsed: Self = config::from_json_str(json)?;
        parsed.validate()?;
        Ok(parsed)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_months == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_months",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.paid_off_epsilon.is_finite() || self.paid_off_epsilon < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "paid_off_epsilon",
                reason: format!("must be non-negative, got {}", self.paid_off_epsilon),
            });
        }
        if !self.recommendation_threshold.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "recommendation_threshold",
                reason: "must be finite".to_string(),
            });
        }
        Ok(())
    }
}
