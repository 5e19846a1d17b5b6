//! Input validation for sickness benefit calculations.
//!
//! Validation is advisory and separate from the engine: it turns raw form
//! values into field-tagged findings. Findings with [`Severity::Error`] must
//! stop the caller from calculating; [`Severity::Warning`] findings do not.

use serde::{Deserialize, Serialize};

/// Salaries below this are flagged as likely ineligible.
pub const LOW_SALARY_THRESHOLD: i64 = 100_000;

/// Salaries above this are rejected as implausible.
pub const MAX_SALARY: i64 = 3_000_000;

/// Shortest selectable leave, in months.
pub const MIN_PERIOD_MONTHS: u32 = 1;

/// Longest selectable leave, in months.
pub const MAX_PERIOD_MONTHS: u32 = 18;

const SALARY_REQUIRED: &str = "月額総支給額を入力してください";
const SALARY_TOO_LOW: &str =
    "金額が低すぎます。傷病手当金の受給要件を満たさない可能性があります";
const SALARY_TOO_HIGH: &str = "金額が高すぎます。入力内容をご確認ください";
const PERIOD_OUT_OF_RANGE: &str = "休業期間は1ヶ月から18ヶ月の範囲で選択してください";

/// The input field a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// Gross monthly salary.
    Salary,
    /// Leave duration in months.
    Period,
}

impl InputField {
    /// Returns the wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::Salary => "salary",
            InputField::Period => "period",
        }
    }
}

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocks calculation.
    Error,
    /// Shown to the user; calculation may proceed.
    Warning,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// The field the finding is about.
    pub field: InputField,
    /// Message suitable for display next to the field.
    pub message: String,
    /// Whether the finding blocks calculation.
    pub severity: Severity,
}

impl ValidationIssue {
    fn new(field: InputField, message: &str, severity: Severity) -> Self {
        Self {
            field,
            message: message.to_string(),
            severity,
        }
    }
}

/// Validates raw salary and period values.
///
/// Salary and period are checked independently, so both fields can be
/// reported at once. `None` means the field was left empty. The period is a
/// float so that fractional months coming from a form can be rejected.
///
/// # Examples
///
/// ```
/// use sickness_benefit_engine::validation::{validate_sickness_input, InputField, Severity};
///
/// assert!(validate_sickness_input(Some(300000), Some(6.0)).is_empty());
///
/// let issues = validate_sickness_input(Some(99999), Some(19.0));
/// assert_eq!(issues.len(), 2);
/// assert_eq!(issues[0].field, InputField::Salary);
/// assert_eq!(issues[0].severity, Severity::Warning);
/// assert_eq!(issues[1].field, InputField::Period);
/// assert_eq!(issues[1].severity, Severity::Error);
/// ```
pub fn validate_sickness_input(salary: Option<i64>, period: Option<f64>) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let Some(issue) = check_salary(salary) {
        issues.push(issue);
    }
    if let Some(issue) = check_period(period) {
        issues.push(issue);
    }

    issues
}

/// Returns true if any finding blocks calculation.
pub fn has_blocking_issue(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(|issue| issue.severity == Severity::Error)
}

fn check_salary(salary: Option<i64>) -> Option<ValidationIssue> {
    match salary {
        None => Some(ValidationIssue::new(
            InputField::Salary,
            SALARY_REQUIRED,
            Severity::Error,
        )),
        Some(s) if s <= 0 => Some(ValidationIssue::new(
            InputField::Salary,
            SALARY_REQUIRED,
            Severity::Error,
        )),
        Some(s) if s < LOW_SALARY_THRESHOLD => Some(ValidationIssue::new(
            InputField::Salary,
            SALARY_TOO_LOW,
            Severity::Warning,
        )),
        Some(s) if s > MAX_SALARY => Some(ValidationIssue::new(
            InputField::Salary,
            SALARY_TOO_HIGH,
            Severity::Error,
        )),
        Some(_) => None,
    }
}

fn check_period(period: Option<f64>) -> Option<ValidationIssue> {
    let in_range = period.is_some_and(|p| {
        p.is_finite()
            && p.fract() == 0.0
            && p >= f64::from(MIN_PERIOD_MONTHS)
            && p <= f64::from(MAX_PERIOD_MONTHS)
    });

    if in_range {
        None
    } else {
        Some(ValidationIssue::new(
            InputField::Period,
            PERIOD_OUT_OF_RANGE,
            Severity::Error,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salary_issue(salary: Option<i64>) -> Option<ValidationIssue> {
        validate_sickness_input(salary, Some(6.0))
            .into_iter()
            .find(|i| i.field == InputField::Salary)
    }

    fn period_issue(period: Option<f64>) -> Option<ValidationIssue> {
        validate_sickness_input(Some(300000), period)
            .into_iter()
            .find(|i| i.field == InputField::Period)
    }

    #[test]
    fn test_typical_input_has_no_issues() {
        assert!(validate_sickness_input(Some(300000), Some(6.0)).is_empty());
    }

    #[test]
    fn test_zero_salary_is_error() {
        let issue = salary_issue(Some(0)).unwrap();
        assert_eq!(issue.severity, Severity::Error);
        assert_eq!(issue.message, SALARY_REQUIRED);
    }

    #[test]
    fn test_missing_salary_is_error() {
        let issue = salary_issue(None).unwrap();
        assert_eq!(issue.severity, Severity::Error);
    }

    #[test]
    fn test_negative_salary_is_error() {
        let issue = salary_issue(Some(-1)).unwrap();
        assert_eq!(issue.severity, Severity::Error);
    }

    #[test]
    fn test_salary_just_below_threshold_is_warning() {
        let issue = salary_issue(Some(99999)).unwrap();
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.message, SALARY_TOO_LOW);
    }

    #[test]
    fn test_salary_at_threshold_is_clean() {
        assert!(salary_issue(Some(100000)).is_none());
    }

    #[test]
    fn test_salary_at_maximum_is_clean() {
        assert!(salary_issue(Some(3000000)).is_none());
    }

    #[test]
    fn test_salary_above_maximum_is_error() {
        let issue = salary_issue(Some(3000001)).unwrap();
        assert_eq!(issue.severity, Severity::Error);
        assert_eq!(issue.message, SALARY_TOO_HIGH);
    }

    #[test]
    fn test_period_bounds() {
        assert!(period_issue(Some(1.0)).is_none());
        assert!(period_issue(Some(18.0)).is_none());

        for bad in [Some(0.0), Some(19.0), Some(2.5), Some(-3.0), None, Some(f64::NAN)] {
            let issue = period_issue(bad).unwrap_or_else(|| panic!("{:?} should fail", bad));
            assert_eq!(issue.severity, Severity::Error);
            assert_eq!(issue.message, PERIOD_OUT_OF_RANGE);
        }
    }

    #[test]
    fn test_both_fields_reported_together() {
        let issues = validate_sickness_input(Some(0), Some(0.0));
        assert_eq!(issues.len(), 2);
        assert!(has_blocking_issue(&issues));
    }

    #[test]
    fn test_warning_alone_is_not_blocking() {
        let issues = validate_sickness_input(Some(50000), Some(3.0));
        assert_eq!(issues.len(), 1);
        assert!(!has_blocking_issue(&issues));
    }

    #[test]
    fn test_issue_serializes_snake_case() {
        let issue = salary_issue(Some(99999)).unwrap();
        let json = serde_json::to_value(&issue).unwrap();

        assert_eq!(json["field"], "salary");
        assert_eq!(json["severity"], "warning");
    }
}
