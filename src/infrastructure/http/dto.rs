//! Wire format of the shorten endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::ShortenedUrl;

/// Body of `POST /api/shorten/`.
#[derive(Debug, Serialize)]
pub struct ShortenRequest<'a> {
    pub url: &'a str,
}

/// Success body. Only `short_url` is required.
#[derive(Debug, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
    #[serde(default)]
    pub short_code: Option<String>,
}

impl From<ShortenResponse> for ShortenedUrl {
    fn from(response: ShortenResponse) -> Self {
        ShortenedUrl::new(response.short_url, response.short_code)
    }
}

/// Failure body. Every field is optional; anything unrecognised is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<Value>,
}

impl ErrorResponse {
    /// Extracts the service's error text.
    ///
    /// Accepts both `{"error": "text"}` and `{"error": {"message": "text"}}`.
    pub fn message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::String(message) => Some(message.clone()),
            Value::Object(fields) => fields
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned),
            _ => None,
        }
    }

    /// Parses a failure body, tolerating empty or non-JSON content.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}
