//! HTTP request handlers for the sickness benefit API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_sickness_with_audit;
use crate::models::{AuditTrace, SicknessInput};
use crate::validation::{has_blocking_issue, validate_sickness_input};

use super::request::CalculationRequest;
use super::response::{
    ApiError, ApiErrorResponse, CalculationReport, ReportSummary, ValidationReport,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/validate", post(validate_handler))
        .route("/rules", get(rules_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Validates the request, then returns a [`CalculationReport`]. Blocking
/// findings are returned as 422 with the full issue list.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let salary = request.raw_salary();
    let issues = validate_sickness_input(salary, request.period);
    if has_blocking_issue(&issues) {
        warn!(
            correlation_id = %correlation_id,
            issues = issues.len(),
            "Calculation request failed validation"
        );
        return json_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::validation_failed(issues),
        );
    }

    let input = match SicknessInput::try_from_raw(salary, request.period) {
        Ok(input) => input,
        Err(err) => return engine_error_response(correlation_id, err.into()),
    };

    let start_time = Instant::now();
    match calculate_sickness_with_audit(&input, state.rules()) {
        Ok(audited) => {
            let duration_us = start_time.elapsed().as_micros() as u64;
            info!(
                correlation_id = %correlation_id,
                salary = input.salary,
                period = input.period,
                net_monthly_benefit = audited.result.benefit.net_monthly_benefit,
                maintenance_rate = audited.result.maintenance_rate,
                duration_us,
                "Calculation completed successfully"
            );

            let report = CalculationReport {
                calculation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                fiscal_year: state.rules().metadata.fiscal_year,
                summary: ReportSummary::from_result(&audited.result),
                result: audited.result,
                warnings: issues,
                audit_trace: AuditTrace {
                    steps: audited.steps,
                    duration_us,
                },
            };
            json_response(StatusCode::OK, report)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            engine_error_response(correlation_id, err.into())
        }
    }
}

/// Handler for POST /validate endpoint.
///
/// Always answers 200 for a well-formed body; `valid` says whether a
/// calculation would be accepted.
async fn validate_handler(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let issues = validate_sickness_input(request.raw_salary(), request.period);
    let valid = !has_blocking_issue(&issues);
    info!(
        correlation_id = %correlation_id,
        valid,
        issues = issues.len(),
        "Validated input"
    );

    json_response(StatusCode::OK, ValidationReport { valid, issues })
}

/// Handler for GET /rules endpoint.
async fn rules_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.rules().clone())
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, api_error: ApiErrorResponse) -> Response {
    warn!(
        correlation_id = %correlation_id,
        code = %api_error.error.code,
        status = api_error.status.as_u16(),
        "Returning engine error"
    );
    json_response(api_error.status, api_error.error)
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::from(ConfigLoader::embedded().expect("Failed to load rules"))
    }

    fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.into()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/calculate", r#"{"salary": 300000, "period": 6}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let report: CalculationReport =
            serde_json::from_slice(&axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap())
                .unwrap();
        assert_eq!(report.fiscal_year, 2024);
        assert_eq!(report.result.maintenance_rate, 58);
        assert_eq!(report.audit_trace.steps.len(), 8);
        assert!(report.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/calculate", "{invalid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_wrong_type_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/calculate", r#"{"salary": true, "period": 6}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_blocking_issue_returns_422() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/calculate", r#"{"salary": 300000, "period": 19}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["issues"][0]["field"], "period");
    }

    #[tokio::test]
    async fn test_zero_net_income_returns_422() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/calculate", r#"{"salary": 8617, "period": 1}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["code"], "ZERO_NET_INCOME");
    }

    #[tokio::test]
    async fn test_validate_reports_warning_as_valid() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/validate", r#"{"salary": "99,999", "period": 6}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["valid"], true);
        assert_eq!(json["issues"][0]["severity"], "warning");
    }

    #[tokio::test]
    async fn test_rules_endpoint_returns_tables() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/rules")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["metadata"]["fiscal_year"], 2024);
        assert_eq!(json["remuneration"]["grades"].as_array().unwrap().len(), 50);
    }
}
