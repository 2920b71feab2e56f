//! Response renderers.
//!
//! A [`Serializer`] turns a JSON payload into response bytes. The camelCase
//! renderers wrap another serializer and rewrite the payload first:
//!
//! ```text
//! payload ──► CamelCaseJsonRenderer ──(camelize unless path ignored)──► JsonSerializer ──► bytes
//! payload ──► CamelCaseBrowsableRenderer ──(always camelize)──► BrowsableSerializer ──► bytes
//! ```

mod browsable;
mod camel;
mod json;

pub use browsable::BrowsableSerializer;
pub use camel::{CamelCaseBrowsableRenderer, CamelCaseJsonRenderer, CamelCaseRenderers};
pub use json::JsonSerializer;

use axum::http::{header, HeaderMap, StatusCode};
use bytes::Bytes;
use serde_json::Value;

use casebridge_types::RenderError;

/// What a serializer knows about the request it renders for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext<'a> {
    /// Path of the originating request, when rendering inside a request
    pub request_path: Option<&'a str>,
    /// Status code of the response being rendered
    pub status: StatusCode,
}

impl<'a> RenderContext<'a> {
    pub const fn new(status: StatusCode) -> Self {
        Self { request_path: None, status }
    }

    pub const fn for_path(path: &'a str) -> Self {
        Self { request_path: Some(path), status: StatusCode::OK }
    }

    #[must_use]
    pub const fn with_path(mut self, path: &'a str) -> Self {
        self.request_path = Some(path);
        self
    }
}

impl Default for RenderContext<'_> {
    fn default() -> Self {
        Self::new(StatusCode::OK)
    }
}

pub trait Serializer: Send + Sync {
    /// `Content-Type` of the rendered output.
    fn media_type(&self) -> &'static str;

    fn render(&self, data: &Value, ctx: &RenderContext<'_>) -> Result<Bytes, RenderError>;

    /// Render a payload the caller no longer needs.
    fn render_owned(&self, data: Value, ctx: &RenderContext<'_>) -> Result<Bytes, RenderError> {
        self.render(&data, ctx)
    }
}

/// `application/json` or any `application/*+json` type, parameters ignored.
pub fn is_json_media_type(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "application/json"
        || essence
            .strip_prefix("application/")
            .is_some_and(|subtype| subtype.len() > "+json".len() && subtype.ends_with("+json"))
}

pub fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(is_json_media_type)
}
