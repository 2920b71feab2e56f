//! Unified error type for casebridge-core.

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use casebridge_types::RenderError;

/// Errors raised while converting request and response bodies.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// A serializer could not render the payload.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Handler output exceeded the buffering limit.
    #[error("Response body exceeds {limit} bytes")]
    ResponseTooLarge { limit: usize },

    /// Request body exceeded the buffering limit.
    #[error("Request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    /// Request body is not declared as JSON.
    #[error("Expected request with `Content-Type: application/json`")]
    UnsupportedMediaType,

    /// Request body is not syntactically valid JSON.
    #[error("Failed to parse the request body as JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Converted body does not fit the target type.
    #[error("Failed to deserialize the JSON body into the target type: {0}")]
    Deserialize(#[source] serde_json::Error),
}

impl AppError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Render(_) | Self::ResponseTooLarge { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Self::Deserialize(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("[Casing] {}", self);
        } else {
            tracing::debug!("[Casing] rejected request: {}", self);
        }
        Response::builder()
            .status(status)
            .body(Body::from(self.to_string()))
            .unwrap_or_else(|_| Response::new(Body::empty()))
    }
}

/// Result type alias for casebridge-core operations.
pub type AppResult<T> = Result<T, AppError>;
