//! Response types for the sickness benefit API.
//!
//! This module defines the success bodies of each endpoint, the error
//! response structures, and the mapping from [`EngineError`] to HTTP status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::format::{
    format_percent, format_period_days, format_period_months, format_yen,
};
use crate::models::{AuditTrace, SicknessResult};
use crate::validation::ValidationIssue;

/// Successful body of `POST /calculate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation ran.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// Fiscal year of the rule set used.
    pub fiscal_year: i32,
    /// The calculation result.
    pub result: SicknessResult,
    /// Non-blocking validation findings.
    pub warnings: Vec<ValidationIssue>,
    /// Display strings for the headline figures.
    pub summary: ReportSummary,
    /// Every rule application, with timing.
    pub audit_trace: AuditTrace,
}

/// Headline figures formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Gross monthly salary, e.g. `300,000円`.
    pub gross_salary: String,
    /// Normal take-home pay.
    pub net_income: String,
    /// Monthly benefit before deductions.
    pub monthly_benefit: String,
    /// Monthly take-home pay while on benefit.
    pub net_monthly_benefit: String,
    /// Benefit over the whole leave.
    pub total_benefit: String,
    /// Leave duration, e.g. `6ヶ月`.
    pub period: String,
    /// Payable days, e.g. `177日間`.
    pub payment_days: String,
    /// Maintenance rate, e.g. `約58%`.
    pub maintenance_rate: String,
}

impl ReportSummary {
    /// Formats the headline figures of a result.
    pub fn from_result(result: &SicknessResult) -> Self {
        Self {
            gross_salary: format_yen(result.current.gross_salary),
            net_income: format_yen(result.current.net_income),
            monthly_benefit: format_yen(result.benefit.monthly_benefit),
            net_monthly_benefit: format_yen(result.benefit.net_monthly_benefit),
            total_benefit: format_yen(result.benefit.total_benefit),
            period: format_period_months(result.input.period),
            payment_days: format_period_days(result.schedule.actual_payment_days),
            maintenance_rate: format_percent(result.maintenance_rate),
        }
    }
}

/// Body of `POST /validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when no finding blocks calculation.
    pub valid: bool,
    /// Every finding, blocking or not.
    pub issues: Vec<ValidationIssue>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Field-level findings, present for validation failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ValidationIssue>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            issues: Vec::new(),
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a validation error response carrying every finding.
    pub fn validation_failed(issues: Vec<ValidationIssue>) -> Self {
        Self {
            issues,
            ..Self::new("VALIDATION_ERROR", "Input failed validation")
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid rule set", message),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid input field '{}'", field),
                    message,
                ),
            },
            EngineError::ZeroNetIncome { gross_salary } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "ZERO_NET_INCOME",
                    "Maintenance rate is undefined",
                    format!(
                        "Normal net income is zero for a gross salary of {}",
                        format_yen(gross_salary)
                    ),
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Calculation failed",
                    message,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_sickness_input;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
        assert!(!json.contains("issues"));
    }

    #[test]
    fn test_validation_failed_carries_issues() {
        let error = ApiError::validation_failed(validate_sickness_input(Some(0), Some(19.0)));
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["issues"].as_array().unwrap().len(), 2);
        assert_eq!(json["issues"][0]["field"], "salary");
    }

    #[test]
    fn test_zero_net_income_maps_to_422() {
        let api_error: ApiErrorResponse = EngineError::ZeroNetIncome { gross_salary: 8617 }.into();

        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "ZERO_NET_INCOME");
        assert!(api_error.error.details.unwrap().contains("8,617円"));
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let api_error: ApiErrorResponse = EngineError::InvalidConfig {
            message: "grades are empty".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
