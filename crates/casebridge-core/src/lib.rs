//! # casebridge Core
//!
//! camelCase / snake_case adapter for axum services.
//!
//! ```text
//! casebridge-core/src/
//! ├── casing/       # key, JSON tree and query-string conversion
//! ├── render/       # Serializer trait, base serializers, camelCase renderers
//! ├── middleware/   # query normalizer + response camelizer (axum)
//! ├── extract.rs    # CamelJson<T> body extractor
//! ├── settings.rs   # immutable compiled settings
//! └── config.rs     # config file loading
//! ```
//!
//! Typical wiring:
//!
//! ```ignore
//! let settings = Arc::new(casebridge_core::config::load_settings(None)?);
//! let renderers = Arc::new(CamelCaseRenderers::new(settings.clone()));
//! let app = Router::new()
//!     .route("/api/users", get(list_users))
//!     .layer(middleware::from_fn_with_state(renderers, camelize_response_middleware))
//!     .layer(middleware::from_fn_with_state(settings, normalize_query_middleware));
//! ```

// Test-only lints: allow panic!, println!, etc. in test code
#![cfg_attr(test, allow(clippy::panic, clippy::print_stdout, clippy::unwrap_used))]

pub mod casing;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod render;
pub mod settings;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use casing::{camelize, underscoreize, CaseOptions};
pub use error::{AppError, AppResult};
pub use extract::CamelJson;
pub use middleware::{camelize_response_middleware, normalize_query_middleware};
pub use render::{
    has_json_content_type, is_json_media_type, BrowsableSerializer, CamelCaseBrowsableRenderer,
    CamelCaseJsonRenderer, CamelCaseRenderers, JsonSerializer, RenderContext, Serializer,
};
pub use settings::{CaseSettings, IgnorePaths};
