//! Calculation logic for the sickness benefit engine.
//!
//! This module contains the calculation functions for a 傷病手当金 estimate:
//! standard monthly remuneration lookup, social insurance premiums, income
//! and resident tax, normal take-home income, the payment schedule, the
//! benefit itself and the income maintenance rate. [`calculate_sickness`]
//! chains them into a single result.
//!
//! All amounts are whole yen. Every fractional intermediate is truncated
//! toward negative infinity.

mod current_income;
mod engine;
mod maintenance_rate;
mod payment_schedule;
mod sickness_benefit;
mod social_insurance;
mod standard_remuneration;
mod tax;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

pub use current_income::{assemble_current_income, calculate_current_income};
pub use engine::{calculate_sickness, calculate_sickness_with_audit};
pub use maintenance_rate::{calculate_maintenance_rate, round_percentage};
pub use payment_schedule::calculate_payment_schedule;
pub use sickness_benefit::calculate_sickness_benefit;
pub use social_insurance::{calculate_social_insurance, employee_share, premiums_for_grade};
pub use standard_remuneration::resolve_standard_remuneration;
pub use tax::{
    MONTHS_PER_YEAR, TaxBreakdown, annual_income_tax, annual_resident_tax, calculate_tax,
    salary_income_deduction,
};

/// Truncates a decimal amount to whole yen, rounding toward negative infinity.
pub(crate) fn floor_to_yen(amount: Decimal) -> i64 {
    amount.floor().to_i64().unwrap_or(if amount.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
