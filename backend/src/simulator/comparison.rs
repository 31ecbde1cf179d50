//! Strategy comparison
//!
//! Avalanche is recommended only when snowball would cost more than
//! `RECOMMENDATION_THRESHOLD` in extra interest. Below that, snowball wins
//! for its early payoffs. Raw interest ordering between the two is not
//! guaranteed for every debt set; only the threshold rule is.

use crate::core::round2;
use crate::models::debt::DebtForPayoff;
use crate::models::payoff::PayoffSimulation;
use crate::simulator::engine::PayoffSimulator;
use crate::strategy::PayoffStrategy;
use serde::{Deserialize, Serialize};

/// Side-by-side result of both strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyComparison {
    pub avalanche: PayoffSimulation,
    pub snowball: PayoffSimulation,
    /// snowball.total_interest_paid − avalanche.total_interest_paid
    pub interest_difference: f64,
    /// snowball.total_months − avalanche.total_months
    pub months_difference: i64,
    pub recommended: PayoffStrategy,
}

impl StrategyComparison {
    /// The simulation for the recommended strategy
    pub fn recommended_plan(&self) -> &PayoffSimulation {
        match self.recommended {
            PayoffStrategy::Avalanche => &self.avalanche,
            PayoffStrategy::Snowball => &self.snowball,
        }
    }
}

/// Recommendation rule on its own
///
/// # Example
/// ```
/// use finance_engine_core_rs::simulator::recommend;
/// use finance_engine_core_rs::PayoffStrategy;
///
/// assert_eq!(recommend(1000.01, 1000.0), PayoffStrategy::Avalanche);
/// assert_eq!(recommend(1000.0, 1000.0), PayoffStrategy::Snowball);
/// ```
pub fn recommend(interest_difference: f64, threshold: f64) -> PayoffStrategy {
    if interest_difference > threshold {
        PayoffStrategy::Avalanche
    } else {
        PayoffStrategy::Snowball
    }
}

pub(crate) fn compare_outcomes(
    avalanche: PayoffSimulation,
    snowball: PayoffSimulation,
    threshold: f64,
) -> StrategyComparison {
    let interest_difference = round2(snowball.total_interest_paid - avalanche.total_interest_paid);
    let months_difference = i64::from(snowball.total_months) - i64::from(avalanche.total_months);

    StrategyComparison {
        recommended: recommend(interest_difference, threshold),
        avalanche,
        snowball,
        interest_difference,
        months_difference,
    }
}

/// Compare both strategies with the default configuration
pub fn compare_strategies(debts: &[DebtForPayoff], extra_monthly_payment: f64) -> StrategyComparison {
    PayoffSimulator::default().compare(debts, extra_monthly_payment)
}
