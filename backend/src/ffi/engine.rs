//! Python-facing engine functions
//!
//! # Example (from Python)
//!
//! ```python
//! from finance_engine_core_rs import simulate_payoff, evaluate_alerts
//!
//! plan = simulate_payoff(
//!     [{"id": "cc", "name": "Card", "balance": 50_000, "apr": 0.42, "minPayment": 5_000}],
//!     "avalanche",
//!     2_000,
//! )
//! print(plan["totalMonths"], plan["interestSaved"])
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{
    alert_to_py, comparison_to_py, parse_aggregates, parse_debts, parse_settings,
    simulation_to_py,
};
use crate::alerts::FinancialContext;
use crate::models::debt::validate_debts;
use crate::strategy::PayoffStrategy;

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Run the cascading payoff simulation for one strategy
///
/// Raises ValueError for unknown strategies or out-of-range debts.
#[pyfunction]
#[pyo3(signature = (debts, strategy = "avalanche", extra_payment = 0.0))]
pub fn simulate_payoff<'py>(
    py: Python<'py>,
    debts: &Bound<'py, PyList>,
    strategy: &str,
    extra_payment: f64,
) -> PyResult<Bound<'py, PyDict>> {
    let strategy: PayoffStrategy = strategy.parse().map_err(value_error)?;
    let debts = parse_debts(debts)?;
    validate_debts(&debts, extra_payment).map_err(value_error)?;

    let simulation = crate::simulator::simulate_payoff(&debts, strategy, extra_payment);
    simulation_to_py(py, &simulation)
}

/// Run both strategies and return the comparison with a recommendation
#[pyfunction]
#[pyo3(signature = (debts, extra_payment = 0.0))]
pub fn compare_strategies<'py>(
    py: Python<'py>,
    debts: &Bound<'py, PyList>,
    extra_payment: f64,
) -> PyResult<Bound<'py, PyDict>> {
    let debts = parse_debts(debts)?;
    validate_debts(&debts, extra_payment).map_err(value_error)?;

    let comparison = crate::simulator::compare_strategies(&debts, extra_payment);
    comparison_to_py(py, &comparison)
}

/// Build a financial context and evaluate the alert catalogue
#[pyfunction]
#[pyo3(signature = (aggregates, settings = None))]
pub fn evaluate_alerts<'py>(
    py: Python<'py>,
    aggregates: &Bound<'py, PyDict>,
    settings: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyList>> {
    let aggregates = parse_aggregates(aggregates)?;
    let settings = match settings {
        Some(dict) => parse_settings(dict)?,
        None => Default::default(),
    };
    settings.validate().map_err(value_error)?;

    let context = FinancialContext::build(&aggregates, &settings);
    let alerts = crate::alerts::evaluate_alerts(&context);

    let py_alerts = PyList::empty_bound(py);
    for alert in &alerts {
        py_alerts.append(alert_to_py(py, alert)?)?;
    }
    Ok(py_alerts)
}
