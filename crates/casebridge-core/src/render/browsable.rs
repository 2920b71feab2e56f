use bytes::Bytes;
use serde_json::Value;

use casebridge_types::RenderError;

use super::{RenderContext, Serializer};

const DEFAULT_TITLE: &str = "casebridge API";

/// Human-facing renderer: an HTML page with the indented payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowsableSerializer {
    title: String,
}

impl BrowsableSerializer {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

impl Default for BrowsableSerializer {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl Serializer for BrowsableSerializer {
    fn media_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    fn render(&self, data: &Value, ctx: &RenderContext<'_>) -> Result<Bytes, RenderError> {
        let pretty = serde_json::to_string_pretty(data).map_err(|e| RenderError::from_json_error(&e))?;
        let title = escape_html(&self.title);
        let location = ctx.request_path.map(escape_html).unwrap_or_default();

        let page = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n\
             <body>\n<h1>{title}</h1>\n<p class=\"request-info\">{location} HTTP {status}</p>\n\
             <pre class=\"response-body\">{body}</pre>\n</body>\n</html>\n",
            status = ctx.status.as_u16(),
            body = escape_html(&pretty),
        );
        Ok(Bytes::from(page))
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_contains_escaped_payload() {
        let out = BrowsableSerializer::default()
            .render(&json!({"note": "<b>"}), &RenderContext::for_path("/api/users"))
            .unwrap();
        let page = std::str::from_utf8(&out).unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("/api/users HTTP 200"));
        assert!(page.contains("&quot;note&quot;: &quot;&lt;b&gt;&quot;"));
        assert!(!page.contains("<b>"));
    }

    #[test]
    fn test_custom_title() {
        let out = BrowsableSerializer::new("Users")
            .render(&json!([]), &RenderContext::default())
            .unwrap();
        assert!(std::str::from_utf8(&out).unwrap().contains("<title>Users</title>"));
    }
}
