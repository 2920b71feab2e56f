use axum::{
    extract::{Request, State},
    http::{uri::PathAndQuery, Uri},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::casing::underscoreize_query;
use crate::settings::CaseSettings;

/// Rewrite camelCase query keys to snake_case before the handler runs.
///
/// A no-op unless `normalize_inputs` is set. The response is returned as-is.
pub async fn normalize_query_middleware(
    State(settings): State<Arc<CaseSettings>>,
    mut request: Request,
    next: Next,
) -> Response {
    if !settings.normalize_inputs() {
        return next.run(request).await;
    }

    let rewritten = request
        .uri()
        .query()
        .and_then(|query| underscoreize_query(query, settings.options()))
        .map(|query| rebuild_uri(request.uri(), &query));

    match rewritten {
        Some(Ok(uri)) => {
            tracing::debug!("[Casing] normalized query: {} -> {}", request.uri(), uri);
            *request.uri_mut() = uri;
        },
        Some(Err(e)) => {
            tracing::warn!("[Casing] could not rebuild URI for {}: {}", request.uri(), e);
        },
        None => {},
    }

    next.run(request).await
}

fn rebuild_uri(uri: &Uri, query: &str) -> Result<Uri, axum::http::Error> {
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(format!("{}?{}", uri.path(), query))?);
    Ok(Uri::from_parts(parts)?)
}
