//! Calculation input model.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::validation::{Severity, validate_sickness_input};

/// The two figures a calculation needs.
///
/// The engine does not re-validate these; run
/// [`validate_sickness_input`] first or build the input with
/// [`SicknessInput::try_from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SicknessInput {
    /// Gross monthly salary in yen.
    pub salary: i64,
    /// Leave duration in months (1 to 18).
    pub period: u32,
}

impl SicknessInput {
    /// Validates raw form values and converts them into an input.
    ///
    /// Warnings are ignored; the first error-severity finding is returned as
    /// [`EngineError::InvalidInput`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sickness_benefit_engine::models::SicknessInput;
    ///
    /// let input = SicknessInput::try_from_raw(Some(300000), Some(6.0)).unwrap();
    /// assert_eq!(input.period, 6);
    ///
    /// assert!(SicknessInput::try_from_raw(Some(300000), Some(2.5)).is_err());
    /// ```
    pub fn try_from_raw(salary: Option<i64>, period: Option<f64>) -> EngineResult<Self> {
        let issues = validate_sickness_input(salary, period);
        if let Some(issue) = issues.iter().find(|i| i.severity == Severity::Error) {
            return Err(EngineError::InvalidInput {
                field: issue.field.as_str().to_string(),
                message: issue.message.clone(),
            });
        }

        match (salary, period) {
            (Some(salary), Some(period)) => Ok(Self {
                salary,
                period: period as u32,
            }),
            _ => Err(EngineError::CalculationError {
                message: "validated input is missing a field".to_string(),
            }),
        }
    }
}
