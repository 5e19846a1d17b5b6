//! Sickness benefit (傷病手当金) calculation.
//!
//! The daily benefit is two thirds of the standard daily wage, which is the
//! standard monthly remuneration grade divided by 30. During leave the
//! worker keeps paying social insurance premiums on the same grade, and tax
//! assessed on the previous year's income keeps falling due even though the
//! benefit itself is tax-exempt. The pre-leave monthly taxes stand in for
//! that carried-over liability.

use crate::config::RuleSet;
use crate::models::{PaymentSchedule, SicknessBenefit};

use super::current_income::calculate_current_income;
use super::social_insurance::calculate_social_insurance;
use super::standard_remuneration::resolve_standard_remuneration;

/// Computes the benefit amounts and net monthly benefit for a salary.
///
/// # Examples
///
/// ```
/// use sickness_benefit_engine::calculation::{calculate_payment_schedule, calculate_sickness_benefit};
/// use sickness_benefit_engine::config::ConfigLoader;
///
/// let rules = ConfigLoader::embedded().unwrap().into_rules();
/// let schedule = calculate_payment_schedule(6, &rules);
/// let benefit = calculate_sickness_benefit(300000, &schedule, &rules);
///
/// assert_eq!(benefit.standard_daily_wage, 10000);
/// assert_eq!(benefit.benefit_daily_amount, 6666);
/// assert_eq!(benefit.monthly_benefit, 199980);
/// assert_eq!(benefit.net_monthly_benefit, 138464);
/// ```
pub fn calculate_sickness_benefit(
    salary: i64,
    schedule: &PaymentSchedule,
    rules: &RuleSet,
) -> SicknessBenefit {
    let days_per_month = rules.benefit.days_per_month;

    let standard_monthly_remuneration =
        resolve_standard_remuneration(salary, &rules.remuneration.grades);
    let standard_daily_wage = standard_monthly_remuneration.div_euclid(days_per_month);
    let benefit_daily_amount = rules.benefit.benefit_ratio.apply_floor(standard_daily_wage);

    let total_benefit = benefit_daily_amount * schedule.actual_payment_days;
    let monthly_benefit = benefit_daily_amount * days_per_month;

    // premiums stay on the pre-leave grade; taxes lag a year behind income
    let social_insurance = calculate_social_insurance(salary, rules);
    let current = calculate_current_income(salary, rules);
    let income_tax = current.income_tax;
    let resident_tax = current.resident_tax;

    SicknessBenefit {
        standard_monthly_remuneration,
        standard_daily_wage,
        benefit_daily_amount,
        total_benefit,
        monthly_benefit,
        net_monthly_benefit: monthly_benefit - social_insurance.total - income_tax - resident_tax,
        social_insurance,
        income_tax,
        resident_tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_payment_schedule;
    use crate::config::ConfigLoader;

    fn rules() -> RuleSet {
        ConfigLoader::embedded().unwrap().into_rules()
    }

    fn benefit_for(salary: i64, period: u32) -> SicknessBenefit {
        let rules = rules();
        let schedule = calculate_payment_schedule(period, &rules);
        calculate_sickness_benefit(salary, &schedule, &rules)
    }

    #[test]
    fn test_benefit_for_300000_over_six_months() {
        let benefit = benefit_for(300000, 6);

        assert_eq!(benefit.standard_monthly_remuneration, 300000);
        assert_eq!(benefit.standard_daily_wage, 10000);
        assert_eq!(benefit.benefit_daily_amount, 6666);
        assert_eq!(benefit.total_benefit, 1179882);
        assert_eq!(benefit.monthly_benefit, 199980);
        assert_eq!(benefit.social_insurance.total, 42420);
        assert_eq!(benefit.income_tax, 6172);
        assert_eq!(benefit.resident_tax, 12924);
        assert_eq!(benefit.net_monthly_benefit, 138464);
    }

    #[test]
    fn test_benefit_for_200000_over_three_months() {
        let benefit = benefit_for(200000, 3);

        assert_eq!(benefit.standard_daily_wage, 6666);
        assert_eq!(benefit.benefit_daily_amount, 4444);
        assert_eq!(benefit.total_benefit, 386628);
        assert_eq!(benefit.monthly_benefit, 133320);
        assert_eq!(benefit.net_monthly_benefit, 94382);
    }

    #[test]
    fn test_carried_over_taxes_are_not_zeroed() {
        let rules = rules();
        let benefit = benefit_for(500000, 12);
        let current = calculate_current_income(500000, &rules);

        assert_eq!(benefit.income_tax, current.income_tax);
        assert_eq!(benefit.resident_tax, current.resident_tax);
        assert!(benefit.income_tax > 0);
    }

    #[test]
    fn test_benefit_ratio_for_every_grade() {
        let rules = rules();
        let schedule = calculate_payment_schedule(1, &rules);

        for &grade in &rules.remuneration.grades {
            let benefit = calculate_sickness_benefit(grade, &schedule, &rules);
            assert_eq!(benefit.benefit_daily_amount, (grade / 30) * 2 / 3);
            assert_eq!(benefit.monthly_benefit, benefit.benefit_daily_amount * 30);
        }
    }

    #[test]
    fn test_extreme_salary_gives_negative_net_benefit() {
        // benefit is capped by the top grade while carried-over tax is not
        let benefit = benefit_for(3000000, 18);

        assert_eq!(benefit.monthly_benefit, 926640);
        assert_eq!(benefit.net_monthly_benefit, -355170);
    }
}
