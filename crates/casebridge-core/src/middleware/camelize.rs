use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::render::{
    has_json_content_type, is_json_media_type, CamelCaseRenderers, RenderContext, Serializer,
};

/// Re-render JSON handler output through the camelCase renderers.
///
/// JSON means `application/json` or any `application/*+json` type. Other
/// responses, empty bodies and bodies that fail to parse pass through
/// untouched.
pub async fn camelize_response_middleware(
    State(renderers): State<Arc<CamelCaseRenderers>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let wants_html = accepts_html(request.headers());

    let response = next.run(request).await;
    if !has_json_content_type(response.headers()) {
        return response;
    }

    let serializer = renderers.select(wants_html);
    let limit = renderers.settings().max_body_bytes();
    match render_response(response, serializer, &path, limit).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

async fn render_response(
    response: Response,
    serializer: &dyn Serializer,
    path: &str,
    limit: usize,
) -> AppResult<Response> {
    let (mut parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, limit)
        .await
        .map_err(|_| AppError::ResponseTooLarge { limit })?;

    if bytes.is_empty() {
        return Ok(Response::from_parts(parts, Body::from(bytes)));
    }

    let data: Value = match serde_json::from_slice(&bytes) {
        Ok(data) => data,
        Err(e) => {
            tracing::debug!("[Casing] {} response is not valid JSON ({}), passing through", path, e);
            return Ok(Response::from_parts(parts, Body::from(bytes)));
        },
    };

    let ctx = RenderContext::new(parts.status).with_path(path);
    let rendered = serializer.render_owned(data, &ctx)?;

    let _ = parts.headers.remove(header::CONTENT_LENGTH);
    // A JSON rendering keeps the handler's own type, e.g. `application/problem+json`.
    if !is_json_media_type(serializer.media_type()) {
        let _ = parts
            .headers
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(serializer.media_type()));
    }

    Ok(Response::from_parts(parts, Body::from(rendered)))
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}
