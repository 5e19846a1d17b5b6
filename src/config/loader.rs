//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a fiscal-year
//! rule set from YAML files, or from the copy compiled into the crate.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::{BenefitConfig, RemunerationConfig, RuleSet, RuleSetMetadata, TaxConfig};

const EMBEDDED_DIR: &str = "config/fy2024";
const EMBEDDED_METADATA: &str = include_str!("../../config/fy2024/metadata.yaml");
const EMBEDDED_REMUNERATION: &str = include_str!("../../config/fy2024/remuneration.yaml");
const EMBEDDED_TAX: &str = include_str!("../../config/fy2024/tax.yaml");
const EMBEDDED_BENEFIT: &str = include_str!("../../config/fy2024/benefit.yaml");

/// Loads and provides access to a rule set.
///
/// # Directory Structure
///
/// ```text
/// config/fy2024/
/// ├── metadata.yaml      # Fiscal year, insurer, effective date
/// ├── remuneration.yaml  # Standard monthly remuneration grades and premium rates
/// ├── tax.yaml           # Salary deduction, income tax and resident tax tables
/// └── benefit.yaml       # Waiting period, benefit ratio, payment timing
/// ```
///
/// # Example
///
/// ```no_run
/// use sickness_benefit_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/fy2024").unwrap();
/// println!("Loaded rules for fiscal year {}", loader.metadata().fiscal_year);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: RuleSet,
}

impl ConfigLoader {
    /// Loads a rule set from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - The tables are inconsistent (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<RuleSetMetadata>(&path.join("metadata.yaml"))?;
        let remuneration =
            Self::load_yaml::<RemunerationConfig>(&path.join("remuneration.yaml"))?;
        let tax = Self::load_yaml::<TaxConfig>(&path.join("tax.yaml"))?;
        let benefit = Self::load_yaml::<BenefitConfig>(&path.join("benefit.yaml"))?;

        let loader = Self::from_parts(metadata, remuneration, tax, benefit)?;
        info!(
            path = %path.display(),
            fiscal_year = loader.rules.metadata.fiscal_year,
            grades = loader.rules.remuneration.grades.len(),
            "Loaded rule set"
        );
        Ok(loader)
    }

    /// Returns the fiscal-2024 rule set compiled into the crate.
    ///
    /// # Example
    ///
    /// ```
    /// use sickness_benefit_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::embedded()?;
    /// assert_eq!(loader.metadata().fiscal_year, 2024);
    /// # Ok::<(), sickness_benefit_engine::error::EngineError>(())
    /// ```
    pub fn embedded() -> EngineResult<Self> {
        let metadata = Self::parse_yaml("metadata.yaml", EMBEDDED_METADATA)?;
        let remuneration = Self::parse_yaml("remuneration.yaml", EMBEDDED_REMUNERATION)?;
        let tax = Self::parse_yaml("tax.yaml", EMBEDDED_TAX)?;
        let benefit = Self::parse_yaml("benefit.yaml", EMBEDDED_BENEFIT)?;

        Self::from_parts(metadata, remuneration, tax, benefit)
    }

    fn from_parts(
        metadata: RuleSetMetadata,
        remuneration: RemunerationConfig,
        tax: TaxConfig,
        benefit: BenefitConfig,
    ) -> EngineResult<Self> {
        let rules = RuleSet {
            metadata,
            remuneration,
            tax,
            benefit,
        };
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        debug!(path = %path_str, bytes = content.len(), "Parsing rule set file");
        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn parse_yaml<T: DeserializeOwned>(file: &str, content: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: format!("{}/{} (embedded)", EMBEDDED_DIR, file),
            message: e.to_string(),
        })
    }

    /// Returns the loaded rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Consumes the loader, returning the rule set.
    pub fn into_rules(self) -> RuleSet {
        self.rules
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &RuleSetMetadata {
        &self.rules.metadata
    }
}
