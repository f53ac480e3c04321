//! Result of a successful shortening request.

use serde::Serialize;

/// A short address issued by the shortening service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenedUrl {
    /// Absolute short address, ready to be opened or shared.
    pub short_url: String,
    /// Code part of the short address, when the service reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
}

impl ShortenedUrl {
    pub fn new(short_url: impl Into<String>, short_code: Option<String>) -> Self {
        Self {
            short_url: short_url.into(),
            short_code,
        }
    }
}
