//! Core data models for the sickness benefit engine.
//!
//! Every model is an immutable value record built fresh by each calculation.
//! Amounts are whole yen held as `i64`; net figures may go negative.

mod benefit;
mod calculation_result;
mod income;
mod input;

pub use benefit::{PaymentSchedule, SicknessBenefit};
pub use calculation_result::{AuditStep, AuditTrace, AuditedCalculation, SicknessResult};
pub use income::{CurrentIncome, SocialInsurance};
pub use input::SicknessInput;
