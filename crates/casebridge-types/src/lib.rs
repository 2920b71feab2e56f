//! # casebridge Types
//!
//! Configuration model and error definitions for casebridge.
//!
//! - **`error`** - Typed error hierarchy for configuration and rendering
//! - **`models`** - The `CaseConfig` file model
//!
//! ## Architecture Role
//!
//! `casebridge-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!        casebridge-types (this crate)
//!                 │
//!                 ▼
//!          casebridge-core
//!                 │
//!                 ▼
//!         casebridge-server
//! ```

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, RenderError, Result, TypedError};

pub use models::CaseConfig;
