//! Benefit-period models.

use serde::{Deserialize, Serialize};

use super::SocialInsurance;

/// Day counts for a leave of a given number of months.
///
/// # Example
///
/// ```
/// use sickness_benefit_engine::models::PaymentSchedule;
///
/// let schedule = PaymentSchedule {
///     total_days: 180,
///     actual_payment_days: 177,
///     waiting_period_days: 3,
///     first_payment_months: 1,
///     follow_up_payment_weeks: 2,
/// };
/// assert_eq!(schedule.total_days - schedule.waiting_period_days, schedule.actual_payment_days);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSchedule {
    /// Leave length in days (`period * 30`).
    pub total_days: i64,
    /// Days for which benefit is paid (`total_days - waiting_period_days`).
    pub actual_payment_days: i64,
    /// Unpaid days at the start of leave.
    pub waiting_period_days: i64,
    /// Approximate months from application to first payment.
    pub first_payment_months: u32,
    /// Approximate weeks between later payments.
    pub follow_up_payment_weeks: u32,
}

/// Sickness benefit amounts and the obligations that continue during leave.
///
/// `income_tax` and `resident_tax` are the pre-leave monthly figures. The
/// benefit itself is tax-exempt, but tax assessed on the previous year's
/// income keeps falling due, so those amounts are subtracted to reach
/// `net_monthly_benefit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SicknessBenefit {
    /// Statutory grade the salary resolves to.
    pub standard_monthly_remuneration: i64,
    /// `floor(grade / 30)`.
    pub standard_daily_wage: i64,
    /// `floor(standard_daily_wage * 2 / 3)`.
    pub benefit_daily_amount: i64,
    /// Benefit over all payable days.
    pub total_benefit: i64,
    /// Benefit for a 30-day month.
    pub monthly_benefit: i64,
    /// Monthly benefit after premiums and carried-over taxes.
    pub net_monthly_benefit: i64,
    /// Premiums still payable during leave.
    pub social_insurance: SocialInsurance,
    /// Income tax carried over from normal employment.
    pub income_tax: i64,
    /// Resident tax carried over from normal employment.
    pub resident_tax: i64,
}
