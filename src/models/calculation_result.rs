//! Calculation result models for the sickness benefit engine.
//!
//! This module contains the [`SicknessResult`] aggregate returned by every
//! calculation, and the audit types that record how it was reached.

use serde::{Deserialize, Serialize};

use super::{CurrentIncome, PaymentSchedule, SicknessBenefit, SicknessInput};

/// The complete result of a sickness benefit calculation.
///
/// `maintenance_rate` is `round(benefit.net_monthly_benefit / current.net_income * 100)`.
/// It is not clamped and may be negative or exceed 100 for extreme inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SicknessResult {
    /// The input the result was computed from.
    pub input: SicknessInput,
    /// Normal-month income.
    pub current: CurrentIncome,
    /// Benefit-period income.
    pub benefit: SicknessBenefit,
    /// Payment day counts.
    pub schedule: PaymentSchedule,
    /// Benefit-period net income as a whole percentage of normal net income.
    pub maintenance_rate: i64,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The statutory basis for this rule.
    pub basis: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use sickness_benefit_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// A result together with the steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditedCalculation {
    /// The calculation result.
    pub result: SicknessResult,
    /// Every rule application, in order.
    pub steps: Vec<AuditStep>,
}
