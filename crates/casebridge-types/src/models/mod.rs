//! Configuration models.

mod config;

pub use config::{
    default_max_body_bytes, default_max_depth, CaseConfig, JSON_PARSE_DEPTH, MAX_DEPTH_LIMIT,
};
