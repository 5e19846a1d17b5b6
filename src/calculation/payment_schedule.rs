//! Payment schedule calculation.

use crate::config::RuleSet;
use crate::models::PaymentSchedule;

/// Converts a leave duration in months into payable day counts.
///
/// A month counts as `days_per_month` days (30). The waiting period is
/// unpaid, so it is subtracted from the total.
///
/// # Examples
///
/// ```
/// use sickness_benefit_engine::calculation::calculate_payment_schedule;
/// use sickness_benefit_engine::config::ConfigLoader;
///
/// let rules = ConfigLoader::embedded().unwrap().into_rules();
/// let schedule = calculate_payment_schedule(6, &rules);
/// assert_eq!(schedule.total_days, 180);
/// assert_eq!(schedule.actual_payment_days, 177);
/// ```
pub fn calculate_payment_schedule(period_months: u32, rules: &RuleSet) -> PaymentSchedule {
    let benefit = &rules.benefit;
    let total_days = i64::from(period_months) * benefit.days_per_month;

    PaymentSchedule {
        total_days,
        actual_payment_days: total_days - benefit.waiting_period_days,
        waiting_period_days: benefit.waiting_period_days,
        first_payment_months: benefit.first_payment_months,
        follow_up_payment_weeks: benefit.follow_up_payment_weeks,
    }
}
