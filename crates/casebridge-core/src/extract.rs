//! `CamelJson<T>`: JSON body extractor that accepts camelCase input.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::casing::underscoreize;
use crate::error::AppError;
use crate::render::has_json_content_type;
use crate::settings::CaseSettings;

/// Reads a JSON body, underscoreizes its keys and deserializes `T`.
///
/// Conversion always runs, independent of `normalize_inputs`. The state
/// must expose `Arc<CaseSettings>` through `FromRef`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for CamelJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    Arc<CaseSettings>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(AppError::UnsupportedMediaType);
        }

        let settings = Arc::<CaseSettings>::from_ref(state);
        let limit = settings.max_body_bytes();
        let bytes = axum::body::to_bytes(req.into_body(), limit)
            .await
            .map_err(|_| AppError::BodyTooLarge { limit })?;

        let value: Value = serde_json::from_slice(&bytes).map_err(AppError::InvalidJson)?;
        let value = underscoreize(value, settings.options());
        let data = serde_json::from_value(value).map_err(AppError::Deserialize)?;
        Ok(Self(data))
    }
}
