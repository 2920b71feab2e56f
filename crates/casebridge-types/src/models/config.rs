//! Case conversion configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Upper bound accepted for `max_depth`.
pub const MAX_DEPTH_LIMIT: usize = 1024;

/// Nesting limit of `serde_json`'s parser. Anything it accepts is at most this deep.
pub const JSON_PARSE_DEPTH: usize = 128;

/// File model for the camelCase/snake_case adapter.
///
/// Loaded once at startup and compiled into immutable runtime settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[allow(
    clippy::struct_excessive_bools,
    reason = "Configuration struct - bools are intentional feature flags"
)]
pub struct CaseConfig {
    /// Underscoreize inbound query parameter keys
    #[serde(default)]
    pub normalize_inputs: bool,
    /// Keys whose values are copied without conversion
    #[serde(default)]
    pub ignore_fields: BTreeSet<String>,
    /// Keys that keep their name (values are still converted)
    #[serde(default)]
    pub ignore_keys: BTreeSet<String>,
    /// Exact request paths whose JSON responses stay snake_case
    #[serde(default)]
    pub ignore_paths: BTreeSet<String>,
    /// Regular expressions matched against the whole request path
    /// Example: ["^/v1/legacy/.*$"]
    #[serde(default)]
    pub ignore_path_patterns: Vec<String>,
    /// `key1` stays `key1` instead of becoming `key_1`
    #[serde(default)]
    pub no_underscore_before_number: bool,
    /// Nesting depth past which subtrees are left untouched
    #[validate(range(min = 1, max = 1024))]
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Largest body buffered for conversion
    #[validate(range(min = 1))]
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Serve the HTML browsable renderer to `Accept: text/html` clients
    #[serde(default)]
    pub browsable_api: bool,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            normalize_inputs: false,
            ignore_fields: BTreeSet::new(),
            ignore_keys: BTreeSet::new(),
            ignore_paths: BTreeSet::new(),
            ignore_path_patterns: Vec::new(),
            no_underscore_before_number: false,
            max_depth: default_max_depth(),
            max_body_bytes: default_max_body_bytes(),
            browsable_api: false,
        }
    }
}

// Default value functions
pub const fn default_max_depth() -> usize {
    JSON_PARSE_DEPTH
}

pub const fn default_max_body_bytes() -> usize {
    16 * 1024 * 1024
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: CaseConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CaseConfig::default());
        assert!(!config.normalize_inputs);
        assert_eq!(config.max_depth, JSON_PARSE_DEPTH);
    }

    #[test]
    fn test_partial_config() {
        let config: CaseConfig = serde_json::from_str(
            r#"{"normalize_inputs": true, "ignore_paths": ["/legacy"], "ignore_fields": ["metadata"]}"#,
        )
        .unwrap();
        assert!(config.normalize_inputs);
        assert!(config.ignore_paths.contains("/legacy"));
        assert!(config.ignore_fields.contains("metadata"));
        assert!(config.ignore_keys.is_empty());
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let config = CaseConfig { max_depth: 0, ..CaseConfig::default() };
        assert!(config.validate().is_err());

        let config = CaseConfig { max_depth: MAX_DEPTH_LIMIT + 1, ..CaseConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_is_valid() {
        assert!(CaseConfig::default().validate().is_ok());
    }
}
