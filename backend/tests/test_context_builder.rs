//! Tests for building a `FinancialContext` from monthly aggregates

use finance_engine_core_rs::alerts::{FinancialContext, FinancialSettings, MonthlyAggregates};
use finance_engine_core_rs::DebtForPayoff;
use std::collections::BTreeMap;

fn holdings(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(class, value)| (class.to_string(), *value))
        .collect()
}

fn salaried_household() -> MonthlyAggregates {
    MonthlyAggregates {
        total_monthly_income: 100_000.0,
        total_monthly_expenses: 60_000.0,
        total_monthly_emi: 20_000.0,
        liquid_assets: 240_000.0,
        total_assets: 2_000_000.0,
        total_liabilities: 500_000.0,
        short_term_liabilities: 30_000.0,
        highest_debt_apr: 0.18,
        credit_card_balance: 45_000.0,
        holdings_by_class: holdings(&[("equity", 700_000.0), ("debt", 200_000.0), ("gold", 100_000.0)]),
    }
}

// ============================================================================
// Derived figures
// ============================================================================

#[test]
fn test_cashflow_and_savings_rate() {
    let ctx = FinancialContext::build(&salaried_household(), &FinancialSettings::default());
    assert_eq!(ctx.monthly_burn(), 80_000.0);
    assert_eq!(ctx.free_cashflow(), 20_000.0);
    assert_eq!(ctx.savings_rate(), 20.0);
}

#[test]
fn test_runway_and_reserve() {
    let ctx = FinancialContext::build(&salaried_household(), &FinancialSettings::default());
    assert_eq!(ctx.runway_months(), 3.0);
    assert_eq!(ctx.emergency_reserve(), 480_000.0);
    assert_eq!(ctx.investable_surplus(), -240_000.0);
}

#[test]
fn test_income_ratios() {
    let ctx = FinancialContext::build(&salaried_household(), &FinancialSettings::default());
    assert_eq!(ctx.emi_to_income_pct(), 20.0);
    assert_eq!(ctx.cc_utilization_pct(), 45.0);
}

#[test]
fn test_balance_sheet_figures() {
    let ctx = FinancialContext::build(&salaried_household(), &FinancialSettings::default());
    assert_eq!(ctx.net_worth(), 1_500_000.0);
    assert_eq!(ctx.debt_to_asset_ratio(), 0.25);
}

#[test]
fn test_raw_fields_are_copied() {
    let aggregates = salaried_household();
    let ctx = FinancialContext::build(&aggregates, &FinancialSettings::default());
    assert_eq!(ctx.total_monthly_income, aggregates.total_monthly_income);
    assert_eq!(ctx.short_term_liabilities, 30_000.0);
    assert_eq!(ctx.highest_debt_apr, 0.18);
}

// ============================================================================
// Allocation and settings
// ============================================================================

#[test]
fn test_actual_allocation_in_percent() {
    let ctx = FinancialContext::build(&salaried_household(), &FinancialSettings::default());
    assert_eq!(ctx.actual_allocation["equity"], 70.0);
    assert_eq!(ctx.actual_allocation["debt"], 20.0);
    assert_eq!(ctx.actual_allocation["gold"], 10.0);
}

#[test]
fn test_no_holdings_gives_empty_allocation() {
    let aggregates = MonthlyAggregates {
        holdings_by_class: BTreeMap::new(),
        ..salaried_household()
    };
    let ctx = FinancialContext::build(&aggregates, &FinancialSettings::default());
    assert!(ctx.actual_allocation.is_empty());
}

#[test]
fn test_settings_travel_with_context() {
    let settings = FinancialSettings {
        emergency_fund_target_months: 3.0,
        ..FinancialSettings::default()
    };
    let ctx = FinancialContext::build(&salaried_household(), &settings);
    assert_eq!(ctx.settings, settings);
    assert_eq!(ctx.emergency_reserve(), 240_000.0);
    assert_eq!(ctx.investable_surplus(), 0.0);
}

#[test]
fn test_highest_apr_from_debt_snapshots() {
    let debts = vec![
        DebtForPayoff::new("home", "Home Loan", 5_000_000.0, 0.085, 50_000.0),
        DebtForPayoff::new("cc", "Credit Card", 50_000.0, 0.42, 5_000.0),
    ];
    let aggregates = salaried_household().with_debts(&debts);
    let ctx = FinancialContext::build(&aggregates, &FinancialSettings::default());
    assert_eq!(ctx.highest_debt_apr, 0.42);
}

// ============================================================================
// Guards and JSON input
// ============================================================================

#[test]
fn test_zero_income_and_zero_burn() {
    let ctx = FinancialContext::build(&MonthlyAggregates::default(), &FinancialSettings::default());
    assert_eq!(ctx.savings_rate(), 0.0);
    assert_eq!(ctx.emi_to_income_pct(), 0.0);
    assert_eq!(ctx.runway_months(), f64::INFINITY);
    assert_eq!(ctx.free_cashflow(), 0.0);
}

#[test]
fn test_aggregates_from_partial_json() {
    let aggregates: MonthlyAggregates = serde_json::from_str(
        r#"{"totalMonthlyIncome": 50000, "holdingsByClass": {"equity": 1000}}"#,
    )
    .unwrap();
    assert_eq!(aggregates.total_monthly_income, 50_000.0);
    assert_eq!(aggregates.total_monthly_expenses, 0.0);

    let ctx = FinancialContext::build(&aggregates, &FinancialSettings::default());
    assert_eq!(ctx.actual_allocation["equity"], 100.0);
    assert_eq!(ctx.savings_rate(), 100.0);
}
