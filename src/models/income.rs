//! Normal-month income models.

use serde::{Deserialize, Serialize};

/// Employee share of social insurance premiums for one month.
///
/// `employment_insurance` is always zero: the same figures are reused for
/// the benefit period, during which employment insurance is exempt.
///
/// # Example
///
/// ```
/// use sickness_benefit_engine::models::SocialInsurance;
///
/// let premiums = SocialInsurance::new(14970, 27450, 0);
/// assert_eq!(premiums.total, 42420);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialInsurance {
    /// Health insurance premium (employee half).
    pub health_insurance: i64,
    /// Welfare pension premium (employee half).
    pub pension_insurance: i64,
    /// Employment insurance premium.
    pub employment_insurance: i64,
    /// Sum of the three premiums.
    pub total: i64,
}

impl SocialInsurance {
    /// Builds a premium breakdown, deriving `total` from the parts.
    pub fn new(health_insurance: i64, pension_insurance: i64, employment_insurance: i64) -> Self {
        Self {
            health_insurance,
            pension_insurance,
            employment_insurance,
            total: health_insurance + pension_insurance + employment_insurance,
        }
    }
}

/// Net take-home pay for a normal working month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIncome {
    /// Gross monthly salary.
    pub gross_salary: i64,
    /// Monthly premiums.
    pub social_insurance: SocialInsurance,
    /// Monthly income tax (including surtax).
    pub income_tax: i64,
    /// Monthly resident tax.
    pub resident_tax: i64,
    /// `gross_salary - social_insurance.total - income_tax - resident_tax`.
    pub net_income: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_parts() {
        let premiums = SocialInsurance::new(9980, 18300, 0);
        assert_eq!(premiums.total, 28280);
    }

    #[test]
    fn test_current_income_uses_camel_case() {
        let income = CurrentIncome {
            gross_salary: 300000,
            social_insurance: SocialInsurance::new(14970, 27450, 0),
            income_tax: 6172,
            resident_tax: 12924,
            net_income: 238484,
        };
        let json = serde_json::to_value(income).unwrap();

        assert_eq!(json["grossSalary"], 300000);
        assert_eq!(json["socialInsurance"]["healthInsurance"], 14970);
        assert_eq!(json["socialInsurance"]["employmentInsurance"], 0);
        assert_eq!(json["netIncome"], 238484);
    }
}
