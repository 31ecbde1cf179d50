//! Core numeric building blocks
//!
//! - **amortization**: Monthly interest and portfolio-level debt helpers
//! - **rounding**: Output rounding for currency and rate fields

pub mod amortization;
pub mod rounding;

pub use amortization::{
    calculate_runway, estimate_monthly_interest_burn, highest_apr, monthly_interest,
    total_minimum_payments, MONTHS_PER_YEAR,
};
pub use rounding::{round1, round2};
