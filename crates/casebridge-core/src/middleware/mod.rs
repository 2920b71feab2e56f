// Middleware module - Axum middleware

pub mod camelize;
pub mod normalize;

pub use camelize::camelize_response_middleware;
pub use normalize::normalize_query_middleware;
