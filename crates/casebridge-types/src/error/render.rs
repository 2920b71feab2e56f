//! Rendering errors raised by serializers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum RenderError {
    /// The payload could not be encoded
    #[error("Failed to serialize payload: {message}")]
    Serialize {
        /// Encoder message
        message: String,
    },
}

impl RenderError {
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::Serialize { message: e.to_string() }
    }
}
