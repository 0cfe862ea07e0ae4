//! Configuration for the typeahead index.
//!
//! By default query words are keyed exactly like indexed words and every match
//! that survives the quality filter is returned.
//! Embedding applications can override either from environment variables or
//! from their own serde-backed config files.

use crate::error::{ConfigError, ConfigResult};
use crate::keys::KeyStrategy;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable selecting the query key strategy (`index` or `search`).
pub const KEY_STRATEGY_VAR: &str = "TYPEAHEAD_KEY_STRATEGY";

/// Environment variable capping the number of returned items.
pub const MAX_RESULTS_VAR: &str = "TYPEAHEAD_MAX_RESULTS";

/// Configuration for an [`IndexStore`](crate::search::IndexStore).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// How query words are turned into keys (default: index)
    pub key_strategy: KeyStrategy,

    /// Maximum number of items returned by a search (default: unlimited)
    pub max_results: Option<usize>,
}

impl IndexConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `TYPEAHEAD_KEY_STRATEGY`: `index` or `search` (default: index)
    /// - `TYPEAHEAD_MAX_RESULTS`: positive result cap (default: unlimited)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine, a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let key_strategy = match env::var(KEY_STRATEGY_VAR) {
            Ok(val) => val
                .parse::<KeyStrategy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: KEY_STRATEGY_VAR.to_string(),
                    reason,
                })?,
            Err(_) => KeyStrategy::default(),
        };

        let max_results = Self::parse_env_limit(MAX_RESULTS_VAR)?;

        Ok(IndexConfig {
            key_strategy,
            max_results,
        })
    }

    /// Set the query key strategy.
    pub fn with_key_strategy(mut self, key_strategy: KeyStrategy) -> Self {
        self.key_strategy = key_strategy;
        self
    }

    /// Cap the number of items a search returns.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Parse an optional, strictly positive limit from the environment.
    fn parse_env_limit(var_name: &str) -> ConfigResult<Option<usize>> {
        let Ok(val) = env::var(var_name) else {
            return Ok(None);
        };

        match val.trim().parse::<usize>() {
            Ok(0) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must be greater than zero".to_string(),
            }),
            Ok(limit) => Ok(Some(limit)),
            Err(_) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }

        fn unset(&mut self, key: &str) {
            env::remove_var(key);
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = IndexConfig::default();
        assert_eq!(config.key_strategy, KeyStrategy::IndexKeys);
        assert_eq!(config.max_results, None);
    }

    #[test]
    fn test_config_builders() {
        let config = IndexConfig::default()
            .with_key_strategy(KeyStrategy::SearchKeys)
            .with_max_results(10);
        assert_eq!(config.key_strategy, KeyStrategy::SearchKeys);
        assert_eq!(config.max_results, Some(10));
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let mut guard = EnvGuard::new();
        guard.unset(KEY_STRATEGY_VAR);
        guard.unset(MAX_RESULTS_VAR);

        let config = IndexConfig::from_env().unwrap();
        assert_eq!(config, IndexConfig::default());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set(KEY_STRATEGY_VAR, "Search");
        guard.set(MAX_RESULTS_VAR, "25");

        let config = IndexConfig::from_env().unwrap();
        assert_eq!(config.key_strategy, KeyStrategy::SearchKeys);
        assert_eq!(config.max_results, Some(25));
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_strategy() {
        let mut guard = EnvGuard::new();
        guard.set(KEY_STRATEGY_VAR, "levenshtein");

        match IndexConfig::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, KEY_STRATEGY_VAR),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_zero_limit() {
        let mut guard = EnvGuard::new();
        guard.set(MAX_RESULTS_VAR, "0");

        let result = IndexConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == MAX_RESULTS_VAR
        ));
    }

    #[test]
    #[serial]
    fn test_parse_env_limit_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TYPEAHEAD_TEST_LIMIT", "lots");

        assert!(IndexConfig::parse_env_limit("TYPEAHEAD_TEST_LIMIT").is_err());
        assert_eq!(IndexConfig::parse_env_limit("TYPEAHEAD_TEST_UNSET"), Ok(None));
    }

    #[test]
    fn test_config_serde() {
        let config: IndexConfig =
            serde_json::from_str(r#"{"key_strategy":"search","max_results":5}"#).unwrap();
        assert_eq!(config.key_strategy, KeyStrategy::SearchKeys);
        assert_eq!(config.max_results, Some(5));

        let partial: IndexConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(partial, IndexConfig::default());

        let json = serde_json::to_string(&IndexConfig::default()).unwrap();
        assert_eq!(json, r#"{"key_strategy":"index","max_results":null}"#);
    }
}
