use bytes::Bytes;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Value};

use casebridge_types::RenderError;

use super::{RenderContext, Serializer};

/// Machine-facing JSON encoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonSerializer {
    indent: Option<usize>,
}

impl JsonSerializer {
    pub const fn compact() -> Self {
        Self { indent: None }
    }

    pub const fn indented(width: usize) -> Self {
        Self { indent: Some(width) }
    }
}

impl Serializer for JsonSerializer {
    fn media_type(&self) -> &'static str {
        "application/json"
    }

    fn render(&self, data: &Value, _ctx: &RenderContext<'_>) -> Result<Bytes, RenderError> {
        let out = match self.indent {
            None => serde_json::to_vec(data).map_err(|e| RenderError::from_json_error(&e))?,
            Some(width) => {
                let indent = vec![b' '; width];
                let mut buf = Vec::new();
                let mut ser = serde_json::Serializer::with_formatter(
                    &mut buf,
                    PrettyFormatter::with_indent(&indent),
                );
                data.serialize(&mut ser).map_err(|e| RenderError::from_json_error(&e))?;
                buf
            },
        };
        Ok(Bytes::from(out))
    }
}
