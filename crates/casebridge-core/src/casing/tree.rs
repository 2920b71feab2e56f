//! Recursive key renaming over `serde_json::Value` trees.

use serde_json::{Map, Value};

use super::key::{camelize_key, underscoreize_key};
use super::CaseOptions;

/// Rename every object key in `value` to camelCase.
pub fn camelize(value: Value, options: &CaseOptions) -> Value {
    convert_bounded(value, options, Direction::Camelize, 0)
}

/// Rename every object key in `value` to snake_case.
pub fn underscoreize(value: Value, options: &CaseOptions) -> Value {
    convert_bounded(value, options, Direction::Underscoreize, 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Camelize,
    Underscoreize,
}

impl Direction {
    fn rename(self, key: &str, options: &CaseOptions) -> String {
        match self {
            Self::Camelize => camelize_key(key),
            Self::Underscoreize => underscoreize_key(key, options.no_underscore_before_number),
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Camelize => "camelize",
            Self::Underscoreize => "underscoreize",
        }
    }
}

fn convert_bounded(value: Value, options: &CaseOptions, direction: Direction, depth: usize) -> Value {
    if depth > options.max_depth {
        tracing::warn!(
            "[Casing] {} depth {} exceeded limit {}, returning subtree unchanged",
            direction.label(),
            depth,
            options.max_depth
        );
        return value;
    }

    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, child) in map {
                let new_key = if options.ignore_keys.contains(&key) {
                    key.clone()
                } else {
                    direction.rename(&key, options)
                };

                // Either spelling of the key freezes the subtree.
                let frozen = options.ignore_fields.contains(&key)
                    || options.ignore_fields.contains(&new_key);
                let child =
                    if frozen { child } else { convert_bounded(child, options, direction, depth + 1) };

                let _ = out.insert(new_key, child);
            }
            Value::Object(out)
        },
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| convert_bounded(item, options, direction, depth + 1))
                .collect(),
        ),
        other => other,
    }
}
