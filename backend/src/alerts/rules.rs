//! Alert Rule Catalogue
//!
//! Each rule is an independent predicate over a `FinancialContext`. A rule
//! returns `Ok(Some(alert))` when it fires, `Ok(None)` when the context is
//! healthy, and `Err(RuleError)` when its inputs are unusable (NaN or
//! infinite where a finite figure is required).
//!
//! Registry order (also the tie order among equal severities):
//!
//! 1. `emergency-fund`
//! 2. `cc-utilization`
//! 3. `emi-to-income`
//! 4. `high-apr-investments`
//! 5. `negative-cashflow`
//! 6. `low-savings-rate`
//! 7. `allocation-drift`
//! 8. `no-income`

use crate::alerts::context::FinancialContext;
use crate::alerts::thresholds::AlertThresholds;
use crate::core::round1;
use crate::models::alert::{Alert, Severity};
use thiserror::Error;

/// Reasons a rule could not be evaluated
#[derive(Debug, Error, PartialEq)]
pub enum RuleError {
    #[error("Rule '{rule}': field '{field}' is not a finite number ({value})")]
    NonFiniteInput {
        rule: &'static str,
        field: &'static str,
        value: f64,
    },

    #[error("Rule '{rule}' panicked: {message}")]
    Panicked { rule: String, message: String },
}

/// A single financial-health predicate
pub trait AlertRule: Send + Sync {
    /// Stable id, also used as the emitted alert's id
    fn id(&self) -> &'static str;

    fn evaluate(
        &self,
        context: &FinancialContext,
        thresholds: &AlertThresholds,
    ) -> Result<Option<Alert>, RuleError>;
}

/// The built-in catalogue in registry order
pub fn default_catalogue() -> Vec<Box<dyn AlertRule>> {
    vec![
        Box::new(EmergencyFundRule),
        Box::new(CcUtilizationRule),
        Box::new(EmiToIncomeRule),
        Box::new(HighAprInvestmentsRule),
        Box::new(NegativeCashflowRule),
        Box::new(LowSavingsRateRule),
        Box::new(AllocationDriftRule),
        Box::new(NoIncomeRule),
    ]
}

fn finite(rule: &'static str, field: &'static str, value: f64) -> Result<f64, RuleError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RuleError::NonFiniteInput { rule, field, value })
    }
}

/// Map a value to a severity given "worse than" cutoffs (higher is worse)
fn tier_above(value: f64, high: f64, medium: f64) -> Severity {
    if value > high {
        Severity::High
    } else if value > medium {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Map a value to a severity given "worse than" cutoffs (lower is worse)
fn tier_below(value: f64, high: f64, medium: f64) -> Severity {
    if value < high {
        Severity::High
    } else if value < medium {
        Severity::Medium
    } else {
        Severity::Low
    }
}

// ============================================================================
// Rules
// ============================================================================

/// Liquid assets cover fewer months of burn than the user's target
pub struct EmergencyFundRule;

impl AlertRule for EmergencyFundRule {
    fn id(&self) -> &'static str {
        "emergency-fund"
    }

    fn evaluate(
        &self,
        ctx: &FinancialContext,
        thresholds: &AlertThresholds,
    ) -> Result<Option<Alert>, RuleError> {
        let id = self.id();
        finite(id, "liquid_assets", ctx.liquid_assets)?;
        finite(id, "total_monthly_expenses", ctx.total_monthly_expenses)?;
        finite(id, "total_monthly_emi", ctx.total_monthly_emi)?;
        let target = finite(id, "emergency_fund_target_months", ctx.settings.emergency_fund_target_months)?;

        // Infinite runway (no burn) never fires
        let runway = ctx.runway_months();
        if !runway.is_finite() || runway >= target {
            return Ok(None);
        }

        let severity = tier_below(
            runway,
            thresholds.emergency_high_months,
            thresholds.emergency_medium_months,
        );
        Ok(Some(Alert::new(
            id,
            severity,
            "Emergency fund below target",
            format!(
                "Your liquid savings cover {:.1} months of expenses and EMIs; your target is {:.0} months.",
                runway, target
            ),
            format!(
                "Build liquid savings toward {:.0} to reach your emergency-fund target.",
                ctx.emergency_reserve()
            ),
        )))
    }
}

/// Credit-card balance is large relative to monthly income
pub struct CcUtilizationRule;

impl AlertRule for CcUtilizationRule {
    fn id(&self) -> &'static str {
        "cc-utilization"
    }

    fn evaluate(
        &self,
        ctx: &FinancialContext,
        thresholds: &AlertThresholds,
    ) -> Result<Option<Alert>, RuleError> {
        let id = self.id();
        let balance = finite(id, "credit_card_balance", ctx.credit_card_balance)?;
        let income = finite(id, "total_monthly_income", ctx.total_monthly_income)?;
        let limit = finite(id, "max_cc_utilization_pct", ctx.settings.max_cc_utilization_pct)?;
        if balance <= 0.0 || income <= 0.0 {
            return Ok(None);
        }

        let utilization = ctx.cc_utilization_pct();
        if utilization <= limit {
            return Ok(None);
        }

        let severity = tier_above(utilization, thresholds.cc_high_pct, thresholds.cc_medium_pct);
        Ok(Some(Alert::new(
            id,
            severity,
            "High credit card balance",
            format!(
                "Your credit card balance is {:.0}% of monthly income, above your {:.0}% limit.",
                utilization, limit
            ),
            "Pay down card balances before taking on new spending; card debt is usually your costliest.",
        )))
    }
}

/// EMIs take too large a share of income
pub struct EmiToIncomeRule;

impl AlertRule for EmiToIncomeRule {
    fn id(&self) -> &'static str {
        "emi-to-income"
    }

    fn evaluate(
        &self,
        ctx: &FinancialContext,
        thresholds: &AlertThresholds,
    ) -> Result<Option<Alert>, RuleError> {
        let id = self.id();
        let income = finite(id, "total_monthly_income", ctx.total_monthly_income)?;
        finite(id, "total_monthly_emi", ctx.total_monthly_emi)?;
        let limit = finite(id, "max_emi_to_income_pct", ctx.settings.max_emi_to_income_pct)?;
        if income <= 0.0 {
            return Ok(None);
        }

        let ratio = ctx.emi_to_income_pct();
        if ratio <= limit {
            return Ok(None);
        }

        let severity = tier_above(ratio, thresholds.emi_high_pct, thresholds.emi_medium_pct);
        Ok(Some(Alert::new(
            id,
            severity,
            "EMI burden too high",
            format!(
                "Loan EMIs take {:.1}% of your income, above your {:.0}% limit.",
                ratio, limit
            ),
            "Avoid new loans and consider prepaying or refinancing the costliest ones.",
        )))
    }
}

/// Expensive debt outstanding while cash beyond the emergency reserve sits idle
pub struct HighAprInvestmentsRule;

impl AlertRule for HighAprInvestmentsRule {
    fn id(&self) -> &'static str {
        "high-apr-investments"
    }

    fn evaluate(
        &self,
        ctx: &FinancialContext,
        thresholds: &AlertThresholds,
    ) -> Result<Option<Alert>, RuleError> {
        let id = self.id();
        let apr = finite(id, "highest_debt_apr", ctx.highest_debt_apr)?;
        finite(id, "liquid_assets", ctx.liquid_assets)?;
        if apr <= thresholds.high_apr {
            return Ok(None);
        }

        let surplus = finite(id, "investable_surplus", ctx.investable_surplus())?;
        if surplus <= 0.0 {
            return Ok(None);
        }

        Ok(Some(Alert::new(
            id,
            Severity::Medium,
            "Expensive debt while holding surplus cash",
            format!(
                "You carry debt at {:.1}% APR while holding {:.0} beyond your emergency reserve.",
                apr * 100.0,
                surplus
            ),
            "Use surplus cash to prepay the highest-APR debt; few investments reliably beat that rate.",
        )))
    }
}

/// Spending and EMIs exceed income
pub struct NegativeCashflowRule;

impl AlertRule for NegativeCashflowRule {
    fn id(&self) -> &'static str {
        "negative-cashflow"
    }

    fn evaluate(
        &self,
        ctx: &FinancialContext,
        _thresholds: &AlertThresholds,
    ) -> Result<Option<Alert>, RuleError> {
        let free = finite(self.id(), "free_cashflow", ctx.free_cashflow())?;
        if free >= 0.0 {
            return Ok(None);
        }

        Ok(Some(Alert::new(
            self.id(),
            Severity::High,
            "Spending exceeds income",
            format!(
                "Expenses and EMIs exceed income by {:.0} this month.",
                -free
            ),
            "Cut discretionary spending or restructure EMIs to stop drawing down savings.",
        )))
    }
}

/// Savings rate between zero and the target
///
/// Negative cashflow is left to `negative-cashflow`. With no income the rate
/// is 0.0, so the rule fires at medium beside `no-income`.
pub struct LowSavingsRateRule;

impl AlertRule for LowSavingsRateRule {
    fn id(&self) -> &'static str {
        "low-savings-rate"
    }

    fn evaluate(
        &self,
        ctx: &FinancialContext,
        thresholds: &AlertThresholds,
    ) -> Result<Option<Alert>, RuleError> {
        let id = self.id();
        finite(id, "total_monthly_income", ctx.total_monthly_income)?;
        let free = finite(id, "free_cashflow", ctx.free_cashflow())?;
        if free < 0.0 {
            return Ok(None);
        }

        let rate = ctx.savings_rate();
        if rate < 0.0 || rate >= thresholds.savings_target_pct {
            return Ok(None);
        }

        let severity = if rate < thresholds.savings_medium_pct {
            Severity::Medium
        } else {
            Severity::Low
        };
        Ok(Some(Alert::new(
            id,
            severity,
            "Low savings rate",
            format!(
                "You save {}% of your income; aim for at least {:.0}%.",
                round1(rate),
                thresholds.savings_target_pct
            ),
            "Automate a fixed transfer to savings on payday and trim recurring expenses.",
        )))
    }
}

/// Portfolio allocation has drifted from target; reports the largest drift only
pub struct AllocationDriftRule;

impl AlertRule for AllocationDriftRule {
    fn id(&self) -> &'static str {
        "allocation-drift"
    }

    fn evaluate(
        &self,
        ctx: &FinancialContext,
        thresholds: &AlertThresholds,
    ) -> Result<Option<Alert>, RuleError> {
        // No holdings, nothing to rebalance
        if ctx.actual_allocation.is_empty() {
            return Ok(None);
        }

        let mut worst: Option<(&str, f64)> = None;
        for (class, target) in &ctx.settings.target_allocation {
            let target = finite(self.id(), "target_allocation", *target)?;
            let actual = ctx.actual_allocation.get(class).copied().unwrap_or(0.0);
            let actual = finite(self.id(), "actual_allocation", actual)?;
            let drift = actual - target;

            // Strictly greater keeps the first class on equal magnitudes
            let is_worse = worst.map_or(true, |(_, w)| drift.abs() > w.abs());
            if drift.abs() > thresholds.drift_points && is_worse {
                worst = Some((class.as_str(), drift));
            }
        }

        let Some((class, drift)) = worst else {
            return Ok(None);
        };
        let direction = if drift > 0.0 { "above" } else { "below" };
        Ok(Some(Alert::new(
            self.id(),
            Severity::Low,
            "Portfolio needs rebalancing",
            format!(
                "Your {} allocation is {:.1} points {} target.",
                class,
                drift.abs(),
                direction
            ),
            format!("Rebalance {} back toward its target allocation.", class),
        )))
    }
}

/// No income recorded for the month
pub struct NoIncomeRule;

impl AlertRule for NoIncomeRule {
    fn id(&self) -> &'static str {
        "no-income"
    }

    fn evaluate(
        &self,
        ctx: &FinancialContext,
        _thresholds: &AlertThresholds,
    ) -> Result<Option<Alert>, RuleError> {
        let income = finite(self.id(), "total_monthly_income", ctx.total_monthly_income)?;
        if income != 0.0 {
            return Ok(None);
        }

        Ok(Some(Alert::new(
            self.id(),
            Severity::Medium,
            "No income recorded",
            "No income has been recorded this month, so ratio-based checks are skipped.",
            "Add your income sources to get complete financial health checks.",
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::settings::FinancialSettings;

    fn healthy() -> FinancialContext {
        FinancialContext {
            total_monthly_income: 100_000.0,
            total_monthly_expenses: 50_000.0,
            total_monthly_emi: 10_000.0,
            liquid_assets: 400_000.0,
            highest_debt_apr: 0.09,
            settings: FinancialSettings::default(),
            ..FinancialContext::default()
        }
    }

    fn eval(rule: &dyn AlertRule, ctx: &FinancialContext) -> Option<Alert> {
        rule.evaluate(ctx, &AlertThresholds::default()).unwrap()
    }

    #[test]
    fn test_emergency_fund_tiers() {
        // burn = 60_000
        let mut ctx = healthy();
        ctx.liquid_assets = 120_000.0; // 2 months
        assert_eq!(eval(&EmergencyFundRule, &ctx).unwrap().severity, Severity::High);

        ctx.liquid_assets = 240_000.0; // 4 months
        assert_eq!(eval(&EmergencyFundRule, &ctx).unwrap().severity, Severity::Medium);

        ctx.liquid_assets = 330_000.0; // 5.5 months
        assert_eq!(eval(&EmergencyFundRule, &ctx).unwrap().severity, Severity::Low);

        ctx.liquid_assets = 360_000.0; // exactly 6, at target
        assert!(eval(&EmergencyFundRule, &ctx).is_none());
    }

    #[test]
    fn test_emergency_fund_zero_burn_never_fires() {
        let ctx = FinancialContext {
            total_monthly_income: 10_000.0,
            ..FinancialContext::default()
        };
        assert!(eval(&EmergencyFundRule, &ctx).is_none());
    }

    #[test]
    fn test_cc_utilization_tiers() {
        let mut ctx = healthy();
        ctx.credit_card_balance = 20_000.0; // 20%, under 30% limit
        assert!(eval(&CcUtilizationRule, &ctx).is_none());

        ctx.credit_card_balance = 40_000.0;
        assert_eq!(eval(&CcUtilizationRule, &ctx).unwrap().severity, Severity::Low);

        ctx.credit_card_balance = 75_000.0;
        assert_eq!(eval(&CcUtilizationRule, &ctx).unwrap().severity, Severity::Medium);

        ctx.credit_card_balance = 150_000.0;
        assert_eq!(eval(&CcUtilizationRule, &ctx).unwrap().severity, Severity::High);
    }

    #[test]
    fn test_emi_to_income_tiers() {
        let mut ctx = healthy();
        ctx.settings.max_emi_to_income_pct = 30.0;

        ctx.total_monthly_emi = 35_000.0;
        ctx.total_monthly_expenses = 10_000.0;
        assert_eq!(eval(&EmiToIncomeRule, &ctx).unwrap().severity, Severity::Low);

        ctx.total_monthly_emi = 45_000.0;
        assert_eq!(eval(&EmiToIncomeRule, &ctx).unwrap().severity, Severity::Medium);

        ctx.total_monthly_emi = 55_000.0;
        assert_eq!(eval(&EmiToIncomeRule, &ctx).unwrap().severity, Severity::High);
    }

    #[test]
    fn test_high_apr_needs_surplus() {
        let mut ctx = healthy();
        ctx.highest_debt_apr = 0.36;
        // reserve = 6 × 60_000 = 360_000; surplus 40_000
        let alert = eval(&HighAprInvestmentsRule, &ctx).unwrap();
        assert_eq!(alert.severity, Severity::Medium);
        assert!(alert.message.contains("36.0% APR"));

        ctx.liquid_assets = 300_000.0;
        assert!(eval(&HighAprInvestmentsRule, &ctx).is_none());
    }

    #[test]
    fn test_apr_at_threshold_does_not_fire() {
        let mut ctx = healthy();
        ctx.highest_debt_apr = 0.15;
        assert!(eval(&HighAprInvestmentsRule, &ctx).is_none());
    }

    #[test]
    fn test_low_savings_tiers() {
        let mut ctx = healthy();
        assert!(eval(&LowSavingsRateRule, &ctx).is_none()); // 40%

        ctx.total_monthly_expenses = 80_000.0; // 10%
        assert_eq!(eval(&LowSavingsRateRule, &ctx).unwrap().severity, Severity::Low);

        ctx.total_monthly_expenses = 87_000.0; // 3%
        assert_eq!(eval(&LowSavingsRateRule, &ctx).unwrap().severity, Severity::Medium);

        ctx.total_monthly_expenses = 90_000.0; // exactly 0%
        assert_eq!(eval(&LowSavingsRateRule, &ctx).unwrap().severity, Severity::Medium);

        ctx.total_monthly_expenses = 95_000.0; // negative, ceded
        assert!(eval(&LowSavingsRateRule, &ctx).is_none());
    }

    #[test]
    fn test_low_savings_compares_unrounded_rate() {
        let mut ctx = healthy();
        ctx.total_monthly_emi = 0.0;

        ctx.total_monthly_expenses = 80_040.0; // 19.96%
        let alert = eval(&LowSavingsRateRule, &ctx).unwrap();
        assert_eq!(alert.severity, Severity::Low);
        assert!(alert.message.contains("20%"));

        ctx.total_monthly_expenses = 95_040.0; // 4.96%
        assert_eq!(eval(&LowSavingsRateRule, &ctx).unwrap().severity, Severity::Medium);
    }

    #[test]
    fn test_low_savings_fires_without_income() {
        let ctx = FinancialContext {
            liquid_assets: 1_000.0,
            ..FinancialContext::default()
        };
        assert_eq!(eval(&LowSavingsRateRule, &ctx).unwrap().severity, Severity::Medium);
    }

    #[test]
    fn test_allocation_drift_reports_largest() {
        let mut ctx = healthy();
        ctx.actual_allocation = [("equity", 82.0), ("debt", 15.0), ("gold", 3.0)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        // equity +22, debt -15, gold -7
        let alert = eval(&AllocationDriftRule, &ctx).unwrap();
        assert_eq!(alert.severity, Severity::Low);
        assert!(alert.message.contains("equity"));
        assert!(alert.message.contains("22.0 points above"));
    }

    #[test]
    fn test_allocation_missing_class_counts_as_zero() {
        let mut ctx = healthy();
        ctx.actual_allocation = [("equity", 55.0), ("debt", 45.0)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        // equity -5, debt +15, gold -10 (not beyond 10)
        let alert = eval(&AllocationDriftRule, &ctx).unwrap();
        assert!(alert.message.contains("debt"));
    }

    #[test]
    fn test_allocation_within_band_is_silent() {
        let mut ctx = healthy();
        ctx.actual_allocation = [("equity", 65.0), ("debt", 25.0), ("gold", 10.0)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert!(eval(&AllocationDriftRule, &ctx).is_none());
    }

    #[test]
    fn test_no_income_and_nan_income() {
        let ctx = FinancialContext::default();
        assert_eq!(eval(&NoIncomeRule, &ctx).unwrap().severity, Severity::Medium);

        let ctx = FinancialContext {
            total_monthly_income: f64::NAN,
            ..FinancialContext::default()
        };
        assert!(matches!(
            NoIncomeRule.evaluate(&ctx, &AlertThresholds::default()),
            Err(RuleError::NonFiniteInput {
                rule: "no-income",
                field: "total_monthly_income",
                ..
            })
        ));
    }

    #[test]
    fn test_catalogue_order() {
        let ids: Vec<&str> = default_catalogue().iter().map(|r| r.id()).collect();
        assert_eq!(
            ids,
            vec![
                "emergency-fund",
                "cc-utilization",
                "emi-to-income",
                "high-apr-investments",
                "negative-cashflow",
                "low-savings-rate",
                "allocation-drift",
                "no-income",
            ]
        );
    }
}
