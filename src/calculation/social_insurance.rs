//! Social insurance premium calculation.
//!
//! Health and welfare pension premiums are charged on the standard monthly
//! remuneration grade and split evenly between employer and employee. This
//! module returns the employee half.

use rust_decimal::Decimal;

use crate::config::{RemunerationConfig, RuleSet};
use crate::models::SocialInsurance;

use super::floor_to_yen;
use super::standard_remuneration::resolve_standard_remuneration;

/// Returns `floor(grade * rate / 2)`, the employee's half of a premium.
pub fn employee_share(grade: i64, rate: Decimal) -> i64 {
    floor_to_yen(Decimal::from(grade) * rate / Decimal::TWO)
}

/// Computes the employee premiums for a gross monthly salary.
///
/// Employment insurance is always zero. The same breakdown serves both the
/// normal month and the benefit period, during which employment insurance
/// is exempt; callers interpret the zero for their context.
///
/// # Examples
///
/// ```
/// use sickness_benefit_engine::calculation::calculate_social_insurance;
/// use sickness_benefit_engine::config::ConfigLoader;
///
/// let rules = ConfigLoader::embedded().unwrap().into_rules();
/// let premiums = calculate_social_insurance(300000, &rules);
/// assert_eq!(premiums.health_insurance, 14970);
/// assert_eq!(premiums.pension_insurance, 27450);
/// assert_eq!(premiums.total, 42420);
/// ```
pub fn calculate_social_insurance(salary: i64, rules: &RuleSet) -> SocialInsurance {
    let grade = resolve_standard_remuneration(salary, &rules.remuneration.grades);
    premiums_for_grade(grade, &rules.remuneration)
}

/// Computes the employee premiums for an already-resolved grade.
pub fn premiums_for_grade(grade: i64, remuneration: &RemunerationConfig) -> SocialInsurance {
    SocialInsurance::new(
        employee_share(grade, remuneration.health_rate),
        employee_share(grade, remuneration.pension_rate),
        0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use std::str::FromStr;

    fn rules() -> RuleSet {
        ConfigLoader::embedded().unwrap().into_rules()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_employee_share_truncates() {
        // 98000 * 0.183 / 2 = 8967.0
        assert_eq!(employee_share(98000, dec("0.183")), 8967);
        // 58000 * 0.0998 / 2 = 2894.2
        assert_eq!(employee_share(58000, dec("0.0998")), 2894);
    }

    #[test]
    fn test_premiums_for_200000() {
        let premiums = calculate_social_insurance(200000, &rules());

        assert_eq!(premiums.health_insurance, 9980);
        assert_eq!(premiums.pension_insurance, 18300);
        assert_eq!(premiums.employment_insurance, 0);
        assert_eq!(premiums.total, 28280);
    }

    #[test]
    fn test_premiums_follow_the_grade_not_the_salary() {
        let rules = rules();
        // 305000 and 300000 share the 300000 grade
        assert_eq!(
            calculate_social_insurance(305000, &rules),
            calculate_social_insurance(300000, &rules)
        );
    }

    #[test]
    fn test_premiums_capped_at_top_grade() {
        let premiums = calculate_social_insurance(3000000, &rules());

        assert_eq!(premiums.health_insurance, 69361);
        assert_eq!(premiums.pension_insurance, 127185);
        assert_eq!(premiums.total, 196546);
    }

    #[test]
    fn test_employment_insurance_is_always_zero() {
        let rules = rules();
        for salary in [0, 58000, 300000, 1390000, 5000000] {
            assert_eq!(calculate_social_insurance(salary, &rules).employment_insurance, 0);
        }
    }
}
