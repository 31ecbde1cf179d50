//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyList).
//! Python callers use the same camelCase keys as the JSON interface.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use std::collections::BTreeMap;

use crate::alerts::{FinancialSettings, MonthlyAggregates};
use crate::models::alert::Alert;
use crate::models::debt::DebtForPayoff;
use crate::models::payoff::{PayoffDebtResult, PayoffSimulation};
use crate::simulator::StrategyComparison;

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a required field from a Python dict with clear error messages.
///
/// # Errors
/// Returns PyValueError if the field is missing or has the wrong type.
fn extract_required<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Missing required field '{}'",
                key
            ))
        })?
        .extract()
}

/// Extract a field with a default value if missing.
fn extract_with_default<'py, T>(dict: &Bound<'py, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

// ========================================================================
// Input Parsers
// ========================================================================

/// Convert a Python list of dicts into debt snapshots
pub fn parse_debts(py_debts: &Bound<'_, PyList>) -> PyResult<Vec<DebtForPayoff>> {
    py_debts
        .iter()
        .map(|item| {
            let dict = item.downcast_into::<PyDict>()?;
            Ok(DebtForPayoff {
                id: extract_required(&dict, "id")?,
                name: extract_with_default(&dict, "name", String::new())?,
                balance: extract_required(&dict, "balance")?,
                apr: extract_required(&dict, "apr")?,
                min_payment: extract_required(&dict, "minPayment")?,
            })
        })
        .collect()
}

/// Convert a Python dict into monthly aggregates; missing figures are 0
pub fn parse_aggregates(dict: &Bound<'_, PyDict>) -> PyResult<MonthlyAggregates> {
    Ok(MonthlyAggregates {
        total_monthly_income: extract_with_default(dict, "totalMonthlyIncome", 0.0)?,
        total_monthly_expenses: extract_with_default(dict, "totalMonthlyExpenses", 0.0)?,
        total_monthly_emi: extract_with_default(dict, "totalMonthlyEmi", 0.0)?,
        liquid_assets: extract_with_default(dict, "liquidAssets", 0.0)?,
        total_assets: extract_with_default(dict, "totalAssets", 0.0)?,
        total_liabilities: extract_with_default(dict, "totalLiabilities", 0.0)?,
        short_term_liabilities: extract_with_default(dict, "shortTermLiabilities", 0.0)?,
        highest_debt_apr: extract_with_default(dict, "highestDebtApr", 0.0)?,
        credit_card_balance: extract_with_default(dict, "creditCardBalance", 0.0)?,
        holdings_by_class: extract_with_default(dict, "holdingsByClass", BTreeMap::new())?,
    })
}

/// Convert a Python dict into settings, keeping defaults for missing keys
pub fn parse_settings(dict: &Bound<'_, PyDict>) -> PyResult<FinancialSettings> {
    let defaults = FinancialSettings::default();
    Ok(FinancialSettings {
        emergency_fund_target_months: extract_with_default(
            dict,
            "emergencyFundTargetMonths",
            defaults.emergency_fund_target_months,
        )?,
        max_emi_to_income_pct: extract_with_default(
            dict,
            "maxEmiToIncomePct",
            defaults.max_emi_to_income_pct,
        )?,
        max_cc_utilization_pct: extract_with_default(
            dict,
            "maxCcUtilizationPct",
            defaults.max_cc_utilization_pct,
        )?,
        target_allocation: extract_with_default(
            dict,
            "targetAllocation",
            defaults.target_allocation,
        )?,
    })
}

// ========================================================================
// Output Converters
// ========================================================================

fn debt_result_to_py<'py>(py: Python<'py>, result: &PayoffDebtResult) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("debtId", &result.debt_id)?;
    dict.set_item("debtName", &result.debt_name)?;
    dict.set_item("payoffMonth", result.payoff_month)?;
    dict.set_item("paidOff", result.paid_off)?;
    dict.set_item("totalPaid", result.total_paid)?;
    dict.set_item("totalInterest", result.total_interest)?;

    let months = PyList::empty_bound(py);
    for row in &result.months {
        let py_row = PyDict::new_bound(py);
        py_row.set_item("month", row.month)?;
        py_row.set_item("balance", row.balance)?;
        py_row.set_item("principal", row.principal)?;
        py_row.set_item("interest", row.interest)?;
        py_row.set_item("payment", row.payment)?;
        months.append(py_row)?;
    }
    dict.set_item("months", months)?;
    Ok(dict)
}

/// Convert a PayoffSimulation into a Python dict
pub fn simulation_to_py<'py>(py: Python<'py>, sim: &PayoffSimulation) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("strategy", sim.strategy.as_str())?;
    dict.set_item("extraPayment", sim.extra_payment)?;
    dict.set_item("totalMonths", sim.total_months)?;
    dict.set_item("totalInterestPaid", sim.total_interest_paid)?;
    dict.set_item("monthsSaved", sim.months_saved)?;
    dict.set_item("interestSaved", sim.interest_saved)?;

    let debts = PyList::empty_bound(py);
    for result in &sim.debts {
        debts.append(debt_result_to_py(py, result)?)?;
    }
    dict.set_item("debts", debts)?;
    Ok(dict)
}

/// Convert a StrategyComparison into a Python dict
pub fn comparison_to_py<'py>(
    py: Python<'py>,
    comparison: &StrategyComparison,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("avalanche", simulation_to_py(py, &comparison.avalanche)?)?;
    dict.set_item("snowball", simulation_to_py(py, &comparison.snowball)?)?;
    dict.set_item("interestDifference", comparison.interest_difference)?;
    dict.set_item("monthsDifference", comparison.months_difference)?;
    dict.set_item("recommended", comparison.recommended.as_str())?;
    Ok(dict)
}

/// Convert an Alert into a Python dict
pub fn alert_to_py<'py>(py: Python<'py>, alert: &Alert) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("id", &alert.id)?;
    dict.set_item("severity", alert.severity.as_str())?;
    dict.set_item("title", &alert.title)?;
    dict.set_item("message", &alert.message)?;
    dict.set_item("action", &alert.action)?;
    Ok(dict)
}
