//! Normal-month net income.

use crate::config::RuleSet;
use crate::models::{CurrentIncome, SocialInsurance};

use super::social_insurance::calculate_social_insurance;
use super::tax::{TaxBreakdown, calculate_tax};

/// Computes take-home pay for a normal working month.
///
/// # Examples
///
/// ```
/// use sickness_benefit_engine::calculation::calculate_current_income;
/// use sickness_benefit_engine::config::ConfigLoader;
///
/// let rules = ConfigLoader::embedded().unwrap().into_rules();
/// let current = calculate_current_income(300000, &rules);
/// assert_eq!(current.net_income, 238484);
/// ```
pub fn calculate_current_income(salary: i64, rules: &RuleSet) -> CurrentIncome {
    let social_insurance = calculate_social_insurance(salary, rules);
    let tax = calculate_tax(salary, &social_insurance, rules);
    assemble_current_income(salary, social_insurance, &tax)
}

/// Combines already-computed premiums and taxes into a [`CurrentIncome`].
pub fn assemble_current_income(
    salary: i64,
    social_insurance: SocialInsurance,
    tax: &TaxBreakdown,
) -> CurrentIncome {
    CurrentIncome {
        gross_salary: salary,
        social_insurance,
        income_tax: tax.income_tax,
        resident_tax: tax.resident_tax,
        net_income: salary - social_insurance.total - tax.income_tax - tax.resident_tax,
    }
}
