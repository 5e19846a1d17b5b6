//! HTTP API module for the sickness benefit engine.
//!
//! This module provides the REST endpoints: `POST /calculate` runs a full
//! calculation, `POST /validate` reports input findings without
//! calculating, and `GET /rules` returns the loaded rule set.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, SalaryField};
pub use response::{ApiError, ApiErrorResponse, CalculationReport, ReportSummary, ValidationReport};
pub use state::AppState;
