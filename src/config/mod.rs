//! Rule-set loading and management for the sickness benefit engine.
//!
//! A rule set bundles every fiscal-year constant the engine needs: the
//! standard monthly remuneration grades, premium rates, the salary-income
//! deduction and income tax tables, resident tax parameters, and the
//! sickness benefit constants. Rule sets are loaded from YAML files, and the
//! fiscal-2024 set is also compiled into the crate.
//!
//! # Example
//!
//! ```
//! use sickness_benefit_engine::config::ConfigLoader;
//!
//! let rules = ConfigLoader::embedded().unwrap().into_rules();
//! assert_eq!(rules.remuneration.grades[0], 58000);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BenefitConfig, DeductionAmount, IncomeTaxBracket, Ratio, RemunerationConfig, RuleSet,
    RuleSetMetadata, SalaryDeductionBracket, TaxConfig,
};
