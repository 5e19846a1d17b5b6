//! Maintenance rate: benefit-period net income as a share of normal net income.

use crate::error::{EngineError, EngineResult};
use crate::models::{CurrentIncome, SicknessBenefit};

/// Computes `round(net_monthly_benefit / net_income * 100)`.
///
/// Halves round towards positive infinity. The result is not clamped.
///
/// # Errors
///
/// Returns [`EngineError::ZeroNetIncome`] when normal net income is zero.
pub fn calculate_maintenance_rate(
    current: &CurrentIncome,
    benefit: &SicknessBenefit,
) -> EngineResult<i64> {
    round_percentage(benefit.net_monthly_benefit, current.net_income).ok_or(
        EngineError::ZeroNetIncome {
            gross_salary: current.gross_salary,
        },
    )
}

/// Returns `floor(part * 100 / whole + 1/2)` in exact integer arithmetic,
/// or `None` when `whole` is zero.
///
/// # Examples
///
/// ```
/// use sickness_benefit_engine::calculation::round_percentage;
///
/// assert_eq!(round_percentage(138464, 238484), Some(58));
/// assert_eq!(round_percentage(1, 8), Some(13));   // 12.5 rounds up
/// assert_eq!(round_percentage(-1, 8), Some(-12)); // -12.5 rounds up too
/// assert_eq!(round_percentage(1, 0), None);
/// ```
pub fn round_percentage(part: i64, whole: i64) -> Option<i64> {
    if whole == 0 {
        return None;
    }

    let numerator = 200 * i128::from(part) + i128::from(whole);
    let denominator = 2 * i128::from(whole);
    let rounded = if denominator < 0 {
        (-numerator).div_euclid(-denominator)
    } else {
        numerator.div_euclid(denominator)
    };

    i64::try_from(rounded).ok()
}
