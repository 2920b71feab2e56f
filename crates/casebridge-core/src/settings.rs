//! Immutable runtime settings compiled from a [`CaseConfig`].
//!
//! Built once at startup and shared as `Arc<CaseSettings>`; nothing here is
//! mutated after construction.

use std::collections::HashSet;

use regex::Regex;
use validator::Validate;

use casebridge_types::{CaseConfig, ConfigError};

use crate::casing::CaseOptions;

/// Request paths whose JSON responses bypass camelization.
#[derive(Debug, Clone, Default)]
pub struct IgnorePaths {
    exact: HashSet<String>,
    patterns: Vec<Regex>,
}

impl IgnorePaths {
    /// Compile exact paths and full-match regular expressions.
    pub fn compile<E, P>(exact: E, patterns: P) -> Result<Self, ConfigError>
    where
        E: IntoIterator,
        E::Item: Into<String>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let source = p.as_ref();
                Regex::new(&format!("^(?:{source})$")).map_err(|e| ConfigError::InvalidPattern {
                    pattern: source.to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { exact: exact.into_iter().map(Into::into).collect(), patterns })
    }

    fn from_config(config: &CaseConfig) -> Result<Self, ConfigError> {
        Self::compile(config.ignore_paths.iter().cloned(), &config.ignore_path_patterns)
    }

    pub fn matches(&self, path: &str) -> bool {
        self.exact.contains(path) || self.patterns.iter().any(|re| re.is_match(path))
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.patterns.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct CaseSettings {
    normalize_inputs: bool,
    browsable_api: bool,
    max_body_bytes: usize,
    options: CaseOptions,
    ignore_paths: IgnorePaths,
}

impl CaseSettings {
    /// Validate `config` and compile it.
    pub fn from_config(config: &CaseConfig) -> Result<Self, ConfigError> {
        config.validate().map_err(|e| ConfigError::from_validation_errors(&e))?;

        let ignore_paths = IgnorePaths::from_config(config)?;

        tracing::debug!(
            "[Casing] settings compiled: normalize_inputs={}, ignore_paths={}, patterns={}",
            config.normalize_inputs,
            config.ignore_paths.len(),
            config.ignore_path_patterns.len()
        );

        Ok(Self::assemble(config, ignore_paths))
    }

    fn assemble(config: &CaseConfig, ignore_paths: IgnorePaths) -> Self {
        Self {
            normalize_inputs: config.normalize_inputs,
            browsable_api: config.browsable_api,
            max_body_bytes: config.max_body_bytes,
            options: CaseOptions::from_config(config),
            ignore_paths,
        }
    }

    pub const fn normalize_inputs(&self) -> bool {
        self.normalize_inputs
    }

    pub const fn browsable_api(&self) -> bool {
        self.browsable_api
    }

    pub const fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }

    pub const fn options(&self) -> &CaseOptions {
        &self.options
    }

    pub const fn ignore_paths(&self) -> &IgnorePaths {
        &self.ignore_paths
    }

    pub fn is_ignored_path(&self, path: &str) -> bool {
        self.ignore_paths.matches(path)
    }
}

impl Default for CaseSettings {
    fn default() -> Self {
        let config = CaseConfig::default();
        // The default config has no patterns, so compiling cannot fail.
        let ignore_paths = IgnorePaths::from_config(&config).unwrap_or_default();
        Self::assemble(&config, ignore_paths)
    }
}
