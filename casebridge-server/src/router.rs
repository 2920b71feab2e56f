use axum::{
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use casebridge_core::{camelize_response_middleware, normalize_query_middleware};

use crate::api;
use crate::state::AppState;

/// Layer order (outermost first): CORS, tracing, query normalizer,
/// response camelizer, handler.
pub fn build_router(state: AppState) -> Router {
    let settings = state.settings();
    let renderers = state.renderers();

    let api_routes = Router::<AppState>::new()
        .route("/api/users", get(api::list_users).post(api::create_user))
        .route(api::LEGACY_USERS_PATH, get(api::list_legacy_users))
        .with_state(state)
        .layer(middleware::from_fn_with_state(renderers, camelize_response_middleware))
        .layer(middleware::from_fn_with_state(settings, normalize_query_middleware));

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, axum::Json(serde_json::json!({"status": "ok"})))
}
