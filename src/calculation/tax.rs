//! Income tax and resident tax calculation.
//!
//! Taxes are computed on an annualised salary: the salary-income deduction
//! (給与所得控除) is subtracted, then the basic deduction and the year's
//! social insurance premiums. Income tax applies the progressive table plus
//! the reconstruction surtax; resident tax applies a flat rate plus the
//! per-capita levy, with a smaller basic deduction. Both annual figures are
//! converted to monthly amounts by truncating division.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{DeductionAmount, RuleSet, TaxConfig};
use crate::models::SocialInsurance;

use super::floor_to_yen;

/// Months per year used to annualise and de-annualise amounts.
pub const MONTHS_PER_YEAR: i64 = 12;

/// Every intermediate figure of a tax calculation.
///
/// Only `income_tax` and `resident_tax` flow into the result; the rest is
/// kept for the audit trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Monthly salary times twelve.
    pub annual_salary: i64,
    /// Monthly premium total times twelve.
    pub annual_social_insurance: i64,
    /// Salary-income deduction for the annual salary.
    pub salary_deduction: i64,
    /// `max(0, annual_salary - salary_deduction)`.
    pub salary_income: i64,
    /// Taxable base for income tax.
    pub income_tax_base: i64,
    /// Taxable base for resident tax.
    pub resident_tax_base: i64,
    /// Annual income tax including surtax.
    pub annual_income_tax: i64,
    /// Annual resident tax including the per-capita levy.
    pub annual_resident_tax: i64,
    /// `floor(annual_income_tax / 12)`.
    pub income_tax: i64,
    /// `floor(annual_resident_tax / 12)`.
    pub resident_tax: i64,
}

/// Looks up the salary-income deduction for an annual salary.
///
/// The first bracket whose ceiling is at or above the salary applies.
/// Salaries above every ceiling receive the configured cap.
///
/// # Examples
///
/// ```
/// use sickness_benefit_engine::calculation::salary_income_deduction;
/// use sickness_benefit_engine::config::ConfigLoader;
///
/// let rules = ConfigLoader::embedded().unwrap().into_rules();
/// assert_eq!(salary_income_deduction(1_200_000, &rules.tax), 550_000);
/// assert_eq!(salary_income_deduction(3_600_000, &rules.tax), 1_160_000);
/// assert_eq!(salary_income_deduction(18_000_000, &rules.tax), 1_950_000);
/// ```
pub fn salary_income_deduction(annual_salary: i64, tax: &TaxConfig) -> i64 {
    tax.salary_deduction
        .iter()
        .find(|bracket| annual_salary <= bracket.ceiling)
        .map_or(tax.salary_deduction_cap, |bracket| match bracket.amount {
            DeductionAmount::Fixed(amount) => amount,
            DeductionAmount::Rate { rate, deduction } => {
                floor_to_yen(Decimal::from(annual_salary) * rate - Decimal::from(deduction))
            }
        })
}

/// Computes annual income tax, including the reconstruction surtax.
///
/// Returns zero for a non-positive taxable income.
///
/// # Examples
///
/// ```
/// use sickness_benefit_engine::calculation::annual_income_tax;
/// use sickness_benefit_engine::config::ConfigLoader;
///
/// let rules = ConfigLoader::embedded().unwrap().into_rules();
/// // floor(floor(1_450_960 * 0.05) * 1.021)
/// assert_eq!(annual_income_tax(1_450_960, &rules.tax), 74_071);
/// assert_eq!(annual_income_tax(0, &rules.tax), 0);
/// ```
pub fn annual_income_tax(taxable_income: i64, tax: &TaxConfig) -> i64 {
    if taxable_income <= 0 {
        return 0;
    }

    let Some(bracket) = tax
        .income_tax
        .iter()
        .find(|bracket| bracket.covers(taxable_income))
        .or(tax.income_tax.last())
    else {
        return 0;
    };

    let base_tax = floor_to_yen(
        Decimal::from(taxable_income) * bracket.rate - Decimal::from(bracket.deduction),
    );
    floor_to_yen(Decimal::from(base_tax) * (Decimal::ONE + tax.surtax_rate))
}

/// Computes annual resident tax: per-capita levy plus the flat income levy.
pub fn annual_resident_tax(taxable_income: i64, tax: &TaxConfig) -> i64 {
    let base = taxable_income.max(0);
    tax.resident_per_capita + floor_to_yen(Decimal::from(base) * tax.resident_rate)
}

/// Computes monthly income tax and resident tax for a monthly salary.
///
/// # Examples
///
/// ```
/// use sickness_benefit_engine::calculation::{calculate_social_insurance, calculate_tax};
/// use sickness_benefit_engine::config::ConfigLoader;
///
/// let rules = ConfigLoader::embedded().unwrap().into_rules();
/// let premiums = calculate_social_insurance(300000, &rules);
/// let tax = calculate_tax(300000, &premiums, &rules);
/// assert_eq!(tax.income_tax, 6172);
/// assert_eq!(tax.resident_tax, 12924);
/// ```
pub fn calculate_tax(
    monthly_salary: i64,
    social_insurance: &SocialInsurance,
    rules: &RuleSet,
) -> TaxBreakdown {
    let tax = &rules.tax;

    let annual_salary = monthly_salary * MONTHS_PER_YEAR;
    let annual_social_insurance = social_insurance.total * MONTHS_PER_YEAR;

    let salary_deduction = salary_income_deduction(annual_salary, tax);
    let salary_income = (annual_salary - salary_deduction).max(0);

    let income_tax_base =
        (salary_income - (tax.basic_deduction + annual_social_insurance)).max(0);
    let annual_income_tax = annual_income_tax(income_tax_base, tax);

    let resident_tax_base =
        (salary_income - (tax.resident_basic_deduction + annual_social_insurance)).max(0);
    let annual_resident_tax = annual_resident_tax(resident_tax_base, tax);

    TaxBreakdown {
        annual_salary,
        annual_social_insurance,
        salary_deduction,
        salary_income,
        income_tax_base,
        resident_tax_base,
        annual_income_tax,
        annual_resident_tax,
        income_tax: annual_income_tax.div_euclid(MONTHS_PER_YEAR),
        resident_tax: annual_resident_tax.div_euclid(MONTHS_PER_YEAR),
    }
}
