//! camelCase renderers composed around an inner [`Serializer`].

use std::sync::Arc;

use bytes::Bytes;
use serde_json::Value;

use casebridge_types::RenderError;

use super::{BrowsableSerializer, JsonSerializer, RenderContext, Serializer};
use crate::casing::camelize;
use crate::settings::CaseSettings;

/// Camelizes payloads before handing them to `S`, except for ignored paths.
#[derive(Debug, Clone)]
pub struct CamelCaseJsonRenderer<S = JsonSerializer> {
    inner: S,
    settings: Arc<CaseSettings>,
}

impl<S: Serializer> CamelCaseJsonRenderer<S> {
    pub fn new(inner: S, settings: Arc<CaseSettings>) -> Self {
        Self { inner, settings }
    }

    pub const fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Serializer> Serializer for CamelCaseJsonRenderer<S> {
    fn media_type(&self) -> &'static str {
        self.inner.media_type()
    }

    fn render(&self, data: &Value, ctx: &RenderContext<'_>) -> Result<Bytes, RenderError> {
        if is_ignored(&self.settings, ctx) {
            return self.inner.render(data, ctx);
        }
        self.render_owned(data.clone(), ctx)
    }

    fn render_owned(&self, data: Value, ctx: &RenderContext<'_>) -> Result<Bytes, RenderError> {
        if is_ignored(&self.settings, ctx) {
            return self.inner.render_owned(data, ctx);
        }
        self.inner.render_owned(camelize(data, self.settings.options()), ctx)
    }
}

fn is_ignored(settings: &CaseSettings, ctx: &RenderContext<'_>) -> bool {
    let Some(path) = ctx.request_path else {
        return false;
    };
    let ignored = settings.is_ignored_path(path);
    if ignored {
        tracing::debug!("[Casing] {} is an ignored path, rendering payload unchanged", path);
    }
    ignored
}

/// Always camelizes; the browsable view has no path bypass.
#[derive(Debug, Clone)]
pub struct CamelCaseBrowsableRenderer<S = BrowsableSerializer> {
    inner: S,
    settings: Arc<CaseSettings>,
}

impl<S: Serializer> CamelCaseBrowsableRenderer<S> {
    pub fn new(inner: S, settings: Arc<CaseSettings>) -> Self {
        Self { inner, settings }
    }
}

impl<S: Serializer> Serializer for CamelCaseBrowsableRenderer<S> {
    fn media_type(&self) -> &'static str {
        self.inner.media_type()
    }

    fn render(&self, data: &Value, ctx: &RenderContext<'_>) -> Result<Bytes, RenderError> {
        self.render_owned(data.clone(), ctx)
    }

    fn render_owned(&self, data: Value, ctx: &RenderContext<'_>) -> Result<Bytes, RenderError> {
        self.inner.render_owned(camelize(data, self.settings.options()), ctx)
    }
}

/// The renderer pair used by the response middleware.
#[derive(Debug, Clone)]
pub struct CamelCaseRenderers {
    json: CamelCaseJsonRenderer,
    browsable: CamelCaseBrowsableRenderer,
    settings: Arc<CaseSettings>,
}

impl CamelCaseRenderers {
    pub fn new(settings: Arc<CaseSettings>) -> Self {
        Self::with_serializers(JsonSerializer::compact(), BrowsableSerializer::default(), settings)
    }

    pub fn with_serializers(
        json: JsonSerializer,
        browsable: BrowsableSerializer,
        settings: Arc<CaseSettings>,
    ) -> Self {
        Self {
            json: CamelCaseJsonRenderer::new(json, settings.clone()),
            browsable: CamelCaseBrowsableRenderer::new(browsable, settings.clone()),
            settings,
        }
    }

    pub fn settings(&self) -> &CaseSettings {
        &self.settings
    }

    /// Pick the browsable renderer only when enabled and the client asked for HTML.
    pub fn select(&self, wants_html: bool) -> &dyn Serializer {
        if wants_html && self.settings.browsable_api() {
            &self.browsable
        } else {
            &self.json
        }
    }
}
