//! Output rounding
//!
//! Internal arithmetic runs on unrounded `f64`. Rounding happens only when a
//! value crosses into an output record:
//!
//! - currency fields → 2 decimals (`round2`)
//! - rate, percentage and month-count fields → 1 decimal (`round1`)
//!
//! Both use `f64::round`, which rounds half away from zero.

/// Round a currency amount to 2 decimals
///
/// # Example
/// ```
/// use finance_engine_core_rs::core::round2;
///
/// assert_eq!(round2(1234.5678), 1234.57);
/// assert_eq!(round2(-0.125), -0.13);
/// ```
pub fn round2(value: f64) -> f64 {
    round_to(value, 100.0)
}

/// Round a rate or percentage to 1 decimal
///
/// # Example
/// ```
/// use finance_engine_core_rs::core::round1;
///
/// assert_eq!(round1(33.333), 33.3);
/// ```
pub fn round1(value: f64) -> f64 {
    round_to(value, 10.0)
}

fn round_to(value: f64, scale: f64) -> f64 {
    // Infinity and NaN pass through untouched
    if !value.is_finite() {
        return value;
    }
    (value * scale).round() / scale
}
