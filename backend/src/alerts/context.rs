//! Financial Context
//!
//! Read-only snapshot the alert rules evaluate against. Raw monthly figures
//! come from the collaborator layer as `MonthlyAggregates`; the builder turns
//! holdings into allocation percentages and attaches the user's settings.
//!
//! Derived figures (free cashflow, savings rate, runway, ratios) are computed
//! on demand so the snapshot stays plain, serializable data.
//!
//! # Division Guards
//!
//! - zero income → ratios and savings rate are 0.0
//! - zero burn (expenses + EMI) → runway is `f64::INFINITY`
//! - zero holdings → empty actual allocation

use crate::alerts::settings::FinancialSettings;
use crate::core::{calculate_runway, highest_apr};
use crate::models::debt::DebtForPayoff;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Monthly aggregates supplied by the collaborator layer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MonthlyAggregates {
    pub total_monthly_income: f64,
    pub total_monthly_expenses: f64,
    pub total_monthly_emi: f64,
    pub liquid_assets: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub short_term_liabilities: f64,
    /// Highest APR across open debts (fraction)
    pub highest_debt_apr: f64,
    pub credit_card_balance: f64,
    /// Asset class → current market value
    pub holdings_by_class: BTreeMap<String, f64>,
}

impl MonthlyAggregates {
    /// Take the highest APR from a debt set instead of a precomputed figure
    pub fn with_debts(mut self, debts: &[DebtForPayoff]) -> Self {
        self.highest_debt_apr = highest_apr(debts);
        self
    }
}

/// Snapshot evaluated by the rule engine
///
/// # Example
///
/// ```rust
/// use finance_engine_core_rs::alerts::{FinancialContext, FinancialSettings, MonthlyAggregates};
///
/// let aggregates = MonthlyAggregates {
///     total_monthly_income: 100_000.0,
///     total_monthly_expenses: 60_000.0,
///     total_monthly_emi: 20_000.0,
///     liquid_assets: 240_000.0,
///     ..MonthlyAggregates::default()
/// };
///
/// let context = FinancialContext::build(&aggregates, &FinancialSettings::default());
/// assert_eq!(context.free_cashflow(), 20_000.0);
/// assert_eq!(context.savings_rate(), 20.0);
/// assert_eq!(context.runway_months(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancialContext {
    pub total_monthly_income: f64,
    pub total_monthly_expenses: f64,
    pub total_monthly_emi: f64,
    pub liquid_assets: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub short_term_liabilities: f64,
    pub highest_debt_apr: f64,
    pub credit_card_balance: f64,
    /// Asset class → actual share of holdings (%)
    pub actual_allocation: BTreeMap<String, f64>,
    pub settings: FinancialSettings,
}

impl FinancialContext {
    /// Assemble a context from aggregates and settings
    pub fn build(aggregates: &MonthlyAggregates, settings: &FinancialSettings) -> Self {
        Self {
            total_monthly_income: aggregates.total_monthly_income,
            total_monthly_expenses: aggregates.total_monthly_expenses,
            total_monthly_emi: aggregates.total_monthly_emi,
            liquid_assets: aggregates.liquid_assets,
            total_assets: aggregates.total_assets,
            total_liabilities: aggregates.total_liabilities,
            short_term_liabilities: aggregates.short_term_liabilities,
            highest_debt_apr: aggregates.highest_debt_apr,
            credit_card_balance: aggregates.credit_card_balance,
            actual_allocation: allocation_percentages(&aggregates.holdings_by_class),
            settings: settings.clone(),
        }
    }

    /// Expenses plus EMIs
    pub fn monthly_burn(&self) -> f64 {
        self.total_monthly_expenses + self.total_monthly_emi
    }

    /// Income left after expenses and EMIs (may be negative)
    pub fn free_cashflow(&self) -> f64 {
        self.total_monthly_income - self.monthly_burn()
    }

    /// Free cashflow as % of income (unrounded); 0.0 when there is no income
    pub fn savings_rate(&self) -> f64 {
        percent_of_income(self.free_cashflow(), self.total_monthly_income)
    }

    /// Months of burn covered by liquid assets; infinite with zero burn
    pub fn runway_months(&self) -> f64 {
        calculate_runway(
            self.liquid_assets,
            self.total_monthly_expenses,
            self.total_monthly_emi,
        )
    }

    /// EMI as % of income; 0.0 when there is no income
    pub fn emi_to_income_pct(&self) -> f64 {
        percent_of_income(self.total_monthly_emi, self.total_monthly_income)
    }

    /// Credit-card balance as % of monthly income; 0.0 when there is no income
    pub fn cc_utilization_pct(&self) -> f64 {
        percent_of_income(self.credit_card_balance, self.total_monthly_income)
    }

    /// Liquid assets needed to cover the emergency-fund target
    pub fn emergency_reserve(&self) -> f64 {
        self.settings.emergency_fund_target_months * self.monthly_burn()
    }

    /// Liquid assets above the emergency reserve (may be negative)
    pub fn investable_surplus(&self) -> f64 {
        self.liquid_assets - self.emergency_reserve()
    }

    pub fn net_worth(&self) -> f64 {
        self.total_assets - self.total_liabilities
    }

    /// Liabilities over assets; 0.0 with no assets
    pub fn debt_to_asset_ratio(&self) -> f64 {
        if self.total_assets <= 0.0 {
            return 0.0;
        }
        self.total_liabilities / self.total_assets
    }
}

fn percent_of_income(amount: f64, income: f64) -> f64 {
    if income <= 0.0 {
        return 0.0;
    }
    amount / income * 100.0
}

/// Convert holdings by class into percentage shares
///
/// Returns an empty map when the total is zero or negative.
pub fn allocation_percentages(holdings: &BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    let total: f64 = holdings.values().sum();
    if total <= 0.0 {
        return BTreeMap::new();
    }
    holdings
        .iter()
        .map(|(class, value)| (class.clone(), value * 100.0 / total))
        .collect()
}
