//! Run configuration
//!
//! A [`RunConfig`] names the term counts to evaluate and the summation
//! strategy. The defaults reproduce the standard report; a TOML file can
//! override either key:
//!
//! ```toml
//! terms = [1, 10, 1000]
//! strategy = "alternating"
//! ```

use crate::error::ConfigError;
use crate::series::Strategy;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Term counts evaluated when none are configured
pub const DEFAULT_TERMS: [i64; 5] = [1, 5, 10, 50, 100];

/// Configuration for a single driver run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Term counts, evaluated and reported in this order
    pub terms: Vec<i64>,

    /// Summation strategy for every term count
    pub strategy: Strategy,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            terms: DEFAULT_TERMS.to_vec(),
            strategy: Strategy::default(),
        }
    }
}

impl RunConfig {
    pub fn new() -> Self {
        RunConfig::default()
    }

    /// Replace the term counts (builder pattern)
    pub fn with_terms(mut self, terms: impl IntoIterator<Item = i64>) -> Self {
        self.terms = terms.into_iter().collect();
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Parse configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a TOML configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }
}
