//! camelCase / snake_case conversion for keys, JSON trees and query strings.

mod key;
mod query;
mod tree;

pub use key::{camelize_key, underscoreize_key};
pub use query::underscoreize_query;
pub use tree::{camelize, underscoreize};

use std::collections::HashSet;

use casebridge_types::models::default_max_depth;
use casebridge_types::CaseConfig;

/// Conversion knobs shared by every transform in this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOptions {
    pub ignore_fields: HashSet<String>,
    pub ignore_keys: HashSet<String>,
    pub no_underscore_before_number: bool,
    pub max_depth: usize,
}

impl CaseOptions {
    pub fn from_config(config: &CaseConfig) -> Self {
        Self {
            ignore_fields: config.ignore_fields.iter().cloned().collect(),
            ignore_keys: config.ignore_keys.iter().cloned().collect(),
            no_underscore_before_number: config.no_underscore_before_number,
            max_depth: config.max_depth,
        }
    }

    pub fn with_ignore_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn with_ignore_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for CaseOptions {
    fn default() -> Self {
        Self {
            ignore_fields: HashSet::new(),
            ignore_keys: HashSet::new(),
            no_underscore_before_number: false,
            max_depth: default_max_depth(),
        }
    }
}
