//! Application state for the sickness benefit API.

use std::sync::Arc;

use crate::config::{ConfigLoader, RuleSet};

/// Shared application state.
///
/// Holds the rule set every handler calculates against. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    rules: Arc<RuleSet>,
}

impl AppState {
    /// Creates a new application state around a validated rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// Returns the loaded rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

impl From<ConfigLoader> for AppState {
    fn from(loader: ConfigLoader) -> Self {
        Self::new(loader.into_rules())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_rules() {
        let state = AppState::from(ConfigLoader::embedded().unwrap());
        let clone = state.clone();

        assert!(std::ptr::eq(state.rules(), clone.rules()));
        assert_eq!(state.rules().metadata.fiscal_year, 2024);
    }
}
