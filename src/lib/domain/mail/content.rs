//! Body parts

use serde::Serialize;
use serde_json::{json, Value};

use crate::domain::wire::ToJson;

/// MIME type of a body part
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MimeType {
    /// Plain text body
    #[serde(rename = "text/plain")]
    TextPlain,

    /// HTML body
    #[serde(rename = "text/html")]
    TextHtml,
}

/// A single body part
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Content {
    /// The body text
    pub value: String,

    /// The body's MIME type
    #[serde(rename = "type")]
    pub mime_type: MimeType,
}

impl Content {
    /// Create a plain text body part
    pub fn text(value: &str) -> Self {
        Self {
            value: value.to_string(),
            mime_type: MimeType::TextPlain,
        }
    }

    /// Create an HTML body part
    pub fn html(value: &str) -> Self {
        Self {
            value: value.to_string(),
            mime_type: MimeType::TextHtml,
        }
    }
}

impl ToJson for Content {
    fn to_json(&self) -> Value {
        json!(self)
    }
}
