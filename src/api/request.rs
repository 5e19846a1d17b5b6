//! Request types for the sickness benefit API.
//!
//! This module defines the JSON request body shared by the `/calculate` and
//! `/validate` endpoints.

use serde::{Deserialize, Serialize};

use crate::format::parse_formatted_number;

/// Request body for the `/calculate` and `/validate` endpoints.
///
/// Both fields are optional at the JSON level so that an empty form reaches
/// the validator and is reported field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Gross monthly salary, as a number or as text typed into a form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<SalaryField>,
    /// Leave duration in months.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<f64>,
}

/// A salary as sent by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SalaryField {
    /// A plain JSON integer.
    Amount(i64),
    /// Comma-formatted text such as `"300,000"`.
    Text(String),
}

impl SalaryField {
    /// Returns the salary in yen.
    ///
    /// Text is parsed with [`parse_formatted_number`], so unparseable text
    /// becomes `0` and is then rejected by validation.
    pub fn to_yen(&self) -> i64 {
        match self {
            SalaryField::Amount(amount) => *amount,
            SalaryField::Text(text) => parse_formatted_number(text),
        }
    }
}

impl CalculationRequest {
    /// Creates a request from plain numbers.
    pub fn new(salary: i64, period: u32) -> Self {
        Self {
            salary: Some(SalaryField::Amount(salary)),
            period: Some(f64::from(period)),
        }
    }

    /// Returns the salary in yen, or `None` if the field was omitted.
    pub fn raw_salary(&self) -> Option<i64> {
        self.salary.as_ref().map(SalaryField::to_yen)
    }
}
