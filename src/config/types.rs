//! Configuration types for a fiscal-year rule set.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML files of a rule-set directory.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetMetadata {
    /// The fiscal year the tables belong to (e.g., 2024).
    pub fiscal_year: i32,
    /// The human-readable name of the insurer and year.
    pub name: String,
    /// The date from which the premium rates apply.
    pub effective_date: NaiveDate,
    /// URL to the published rate table.
    pub source_url: String,
}

/// Standard monthly remuneration grades and premium rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemunerationConfig {
    /// Statutory grades in strictly ascending order.
    pub grades: Vec<i64>,
    /// Full health insurance rate (employer and employee combined).
    pub health_rate: Decimal,
    /// Full welfare pension rate (employer and employee combined).
    pub pension_rate: Decimal,
}

/// How a salary-income deduction bracket computes its amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeductionAmount {
    /// A flat deduction.
    Fixed(i64),
    /// `floor(annual_salary * rate - deduction)`.
    Rate {
        /// Multiplier applied to the annual salary.
        rate: Decimal,
        /// Constant subtracted after the multiplication (negative adds).
        deduction: i64,
    },
}

/// One row of the salary-income deduction table.
///
/// Applies when the annual salary is at or below `ceiling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SalaryDeductionRow", into = "SalaryDeductionRow")]
pub struct SalaryDeductionBracket {
    /// Inclusive upper bound on annual salary.
    pub ceiling: i64,
    /// The deduction this bracket grants.
    pub amount: DeductionAmount,
}

/// Flat YAML shape of a salary-income deduction row.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SalaryDeductionRow {
    ceiling: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fixed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deduction: Option<i64>,
}

impl TryFrom<SalaryDeductionRow> for SalaryDeductionBracket {
    type Error = String;

    fn try_from(row: SalaryDeductionRow) -> Result<Self, Self::Error> {
        let amount = match (row.fixed, row.rate) {
            (Some(fixed), None) => DeductionAmount::Fixed(fixed),
            (None, Some(rate)) => DeductionAmount::Rate {
                rate,
                deduction: row.deduction.unwrap_or(0),
            },
            (Some(_), Some(_)) => {
                return Err(format!(
                    "salary deduction bracket {} sets both 'fixed' and 'rate'",
                    row.ceiling
                ));
            }
            (None, None) => {
                return Err(format!(
                    "salary deduction bracket {} needs either 'fixed' or 'rate'",
                    row.ceiling
                ));
            }
        };

        Ok(Self {
            ceiling: row.ceiling,
            amount,
        })
    }
}

impl From<SalaryDeductionBracket> for SalaryDeductionRow {
    fn from(bracket: SalaryDeductionBracket) -> Self {
        match bracket.amount {
            DeductionAmount::Fixed(fixed) => Self {
                ceiling: bracket.ceiling,
                fixed: Some(fixed),
                rate: None,
                deduction: None,
            },
            DeductionAmount::Rate { rate, deduction } => Self {
                ceiling: bracket.ceiling,
                fixed: None,
                rate: Some(rate),
                deduction: Some(deduction),
            },
        }
    }
}

/// One row of the progressive income tax table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxBracket {
    /// Inclusive upper bound on taxable income; `None` for the top bracket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling: Option<i64>,
    /// Marginal rate.
    pub rate: Decimal,
    /// Constant subtracted after the multiplication.
    pub deduction: i64,
}

impl IncomeTaxBracket {
    /// Returns true if `taxable_income` falls within this bracket's ceiling.
    pub fn covers(&self, taxable_income: i64) -> bool {
        self.ceiling.is_none_or(|ceiling| taxable_income <= ceiling)
    }
}

/// Income tax and resident tax parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxConfig {
    /// Salary-income deduction brackets, ascending by ceiling.
    pub salary_deduction: Vec<SalaryDeductionBracket>,
    /// Deduction used when annual salary exceeds every bracket.
    pub salary_deduction_cap: i64,
    /// Progressive income tax brackets, ascending by ceiling.
    pub income_tax: Vec<IncomeTaxBracket>,
    /// Reconstruction surtax levied on top of income tax.
    pub surtax_rate: Decimal,
    /// Basic deduction for income tax.
    pub basic_deduction: i64,
    /// Basic deduction for resident tax.
    pub resident_basic_deduction: i64,
    /// Flat income-based resident tax rate.
    pub resident_rate: Decimal,
    /// Fixed per-capita resident levy.
    pub resident_per_capita: i64,
}

/// An exact fraction, used for the benefit ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio {
    /// Numerator.
    pub numerator: i64,
    /// Denominator; never zero in a validated rule set.
    pub denominator: i64,
}

impl Ratio {
    /// Returns `floor(value * numerator / denominator)` for non-negative values.
    pub fn apply_floor(&self, value: i64) -> i64 {
        (value * self.numerator).div_euclid(self.denominator)
    }
}

/// Sickness benefit program constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitConfig {
    /// Unpaid days at the start of leave.
    pub waiting_period_days: i64,
    /// Days per month used for daily wage and schedule arithmetic.
    pub days_per_month: i64,
    /// Share of the standard daily wage paid as benefit.
    pub benefit_ratio: Ratio,
    /// Approximate months until the first payment (informational).
    pub first_payment_months: u32,
    /// Approximate weeks between later payments (informational).
    pub follow_up_payment_weeks: u32,
}

/// The complete rule set for one fiscal year.
///
/// Read-only once loaded; share it behind an `Arc` or a reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Rule set metadata.
    pub metadata: RuleSetMetadata,
    /// Grade table and premium rates.
    pub remuneration: RemunerationConfig,
    /// Tax tables.
    pub tax: TaxConfig,
    /// Benefit constants.
    pub benefit: BenefitConfig,
}

impl RuleSet {
    /// Checks the internal consistency of the tables.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> EngineResult<()> {
        let grades = &self.remuneration.grades;
        if grades.is_empty() {
            return Err(invalid("grade table is empty"));
        }
        if grades[0] < 0 {
            return Err(invalid("grades must be non-negative"));
        }
        if grades.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(invalid("grades must be strictly ascending"));
        }

        let rates = [
            ("health_rate", self.remuneration.health_rate),
            ("pension_rate", self.remuneration.pension_rate),
            ("surtax_rate", self.tax.surtax_rate),
            ("resident_rate", self.tax.resident_rate),
        ];
        if let Some((name, _)) = rates.iter().find(|(_, rate)| rate.is_sign_negative()) {
            return Err(invalid(&format!("{} must not be negative", name)));
        }

        let ceilings: Vec<i64> = self.tax.salary_deduction.iter().map(|b| b.ceiling).collect();
        if ceilings.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(invalid("salary deduction ceilings must be strictly ascending"));
        }

        let Some((last, rest)) = self.tax.income_tax.split_last() else {
            return Err(invalid("income tax table is empty"));
        };
        if last.ceiling.is_some() {
            return Err(invalid("the top income tax bracket must have no ceiling"));
        }
        let mut previous: Option<i64> = None;
        for bracket in rest {
            let Some(ceiling) = bracket.ceiling else {
                return Err(invalid("only the top income tax bracket may omit its ceiling"));
            };
            if previous.is_some_and(|p| p >= ceiling) {
                return Err(invalid("income tax ceilings must be strictly ascending"));
            }
            previous = Some(ceiling);
        }

        if self.tax.resident_basic_deduction > self.tax.basic_deduction {
            return Err(invalid(
                "resident basic deduction must not exceed the income tax basic deduction",
            ));
        }

        let benefit = &self.benefit;
        if benefit.benefit_ratio.denominator <= 0 || benefit.benefit_ratio.numerator < 0 {
            return Err(invalid("benefit ratio must be a non-negative fraction"));
        }
        if benefit.days_per_month <= 0 {
            return Err(invalid("days_per_month must be positive"));
        }
        if benefit.waiting_period_days < 0 {
            return Err(invalid("waiting_period_days must not be negative"));
        }

        Ok(())
    }
}

fn invalid(message: &str) -> EngineError {
    EngineError::InvalidConfig {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;

    fn rules() -> RuleSet {
        ConfigLoader::embedded().unwrap().into_rules()
    }

    fn assert_invalid(rules: &RuleSet, needle: &str) {
        match rules.validate() {
            Err(EngineError::InvalidConfig { message }) => {
                assert!(message.contains(needle), "unexpected message: {}", message);
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_embedded_rule_set_is_valid() {
        assert!(rules().validate().is_ok());
    }

    #[test]
    fn test_empty_grade_table_rejected() {
        let mut rules = rules();
        rules.remuneration.grades.clear();
        assert_invalid(&rules, "empty");
    }

    #[test]
    fn test_duplicate_grade_rejected() {
        let mut rules = rules();
        rules.remuneration.grades[1] = rules.remuneration.grades[0];
        assert_invalid(&rules, "ascending");
    }

    #[test]
    fn test_negative_rate_rejected() {
        let mut rules = rules();
        rules.tax.resident_rate = Decimal::new(-1, 2);
        assert_invalid(&rules, "resident_rate");
    }

    #[test]
    fn test_closed_top_income_tax_bracket_rejected() {
        let mut rules = rules();
        if let Some(top) = rules.tax.income_tax.last_mut() {
            top.ceiling = Some(99_999_999);
        }
        assert_invalid(&rules, "top income tax bracket");
    }

    #[test]
    fn test_open_middle_income_tax_bracket_rejected() {
        let mut rules = rules();
        rules.tax.income_tax[2].ceiling = None;
        assert_invalid(&rules, "only the top");
    }

    #[test]
    fn test_resident_deduction_above_basic_rejected() {
        let mut rules = rules();
        rules.tax.resident_basic_deduction = rules.tax.basic_deduction + 1;
        assert_invalid(&rules, "resident basic deduction");
    }

    #[test]
    fn test_zero_denominator_rejected() {
        let mut rules = rules();
        rules.benefit.benefit_ratio.denominator = 0;
        assert_invalid(&rules, "benefit ratio");
    }

    #[test]
    fn test_ratio_apply_floor_truncates() {
        let two_thirds = Ratio {
            numerator: 2,
            denominator: 3,
        };
        assert_eq!(two_thirds.apply_floor(10000), 6666);
        assert_eq!(two_thirds.apply_floor(3), 2);
        assert_eq!(two_thirds.apply_floor(0), 0);
    }

    #[test]
    fn test_income_tax_bracket_covers_ceiling_inclusively() {
        let bracket = IncomeTaxBracket {
            ceiling: Some(1949000),
            rate: Decimal::new(5, 2),
            deduction: 0,
        };
        assert!(bracket.covers(1949000));
        assert!(!bracket.covers(1949001));

        let top = IncomeTaxBracket {
            ceiling: None,
            ..bracket
        };
        assert!(top.covers(i64::MAX));
    }
}
