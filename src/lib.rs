//! Sickness-leave benefit (傷病手当金) calculation engine.
//!
//! This crate estimates what an employee enrolled in Japanese employee health
//! insurance receives while on sick leave, and compares it with their normal
//! take-home pay. It covers standard monthly remuneration grading, social
//! insurance premiums, simplified income and resident tax, the benefit
//! payment schedule, and the resulting income maintenance rate.
//!
//! ```
//! use sickness_benefit_engine::calculation::calculate_sickness;
//! use sickness_benefit_engine::config::ConfigLoader;
//! use sickness_benefit_engine::models::SicknessInput;
//!
//! let rules = ConfigLoader::embedded()?.into_rules();
//! let input = SicknessInput::try_from_raw(Some(300000), Some(6.0))?;
//! let result = calculate_sickness(&input, &rules)?;
//! assert_eq!(result.benefit.monthly_benefit, 199980);
//! # Ok::<(), sickness_benefit_engine::error::EngineError>(())
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod validation;
