//! Amortization model
//!
//! APR is always stored as an annual decimal fraction (0.12 = 12%).
//! The monthly rate is `apr / 12`; there is no compounding inside a month.

use crate::models::debt::DebtForPayoff;

/// Months in a year, used to convert APR into a monthly rate
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Interest accrued on `balance` over one month at annual rate `apr`
///
/// Total function: a zero balance yields zero regardless of `apr`.
///
/// # Example
/// ```
/// use finance_engine_core_rs::core::monthly_interest;
///
/// assert_eq!(monthly_interest(12_000.0, 0.12), 120.0);
/// assert_eq!(monthly_interest(0.0, 0.99), 0.0);
/// ```
pub fn monthly_interest(balance: f64, apr: f64) -> f64 {
    if balance == 0.0 {
        return 0.0;
    }
    balance * apr / MONTHS_PER_YEAR
}

/// Sum of one month's interest across all debts at their current balances
pub fn estimate_monthly_interest_burn(debts: &[DebtForPayoff]) -> f64 {
    debts
        .iter()
        .map(|debt| monthly_interest(debt.balance, debt.apr))
        .sum()
}

/// Highest APR in the set, or 0.0 when there are no debts
pub fn highest_apr(debts: &[DebtForPayoff]) -> f64 {
    debts.iter().map(|debt| debt.apr).fold(0.0, f64::max)
}

/// Sum of every debt's contractual minimum payment
pub fn total_minimum_payments(debts: &[DebtForPayoff]) -> f64 {
    debts.iter().map(|debt| debt.min_payment).sum()
}

/// Months of fixed burn (expenses + EMIs) covered by liquid assets
///
/// Assumes zero income. A zero (or negative) burn rate returns
/// `f64::INFINITY` rather than dividing by zero.
///
/// # Example
/// ```
/// use finance_engine_core_rs::core::calculate_runway;
///
/// assert_eq!(calculate_runway(60_000.0, 8_000.0, 2_000.0), 6.0);
/// assert_eq!(calculate_runway(60_000.0, 0.0, 0.0), f64::INFINITY);
/// ```
pub fn calculate_runway(liquid_assets: f64, monthly_expenses: f64, monthly_emi: f64) -> f64 {
    let burn = monthly_expenses + monthly_emi;
    if burn <= 0.0 {
        return f64::INFINITY;
    }
    liquid_assets / burn
}
