//! Port to the remote shortening service.

use crate::domain::entities::ShortenedUrl;
use async_trait::async_trait;

/// Errors reported by a [`ShortenerGateway`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The service answered with a non-success status.
    ///
    /// `message` is the service's own `error` text, when it supplied one.
    #[error("shortening service rejected the request with status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// No usable response could be obtained.
    #[error("{0}")]
    Transport(String),
}

/// Submits normalized addresses to a shortening service.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpShortenerGateway`] - JSON over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenerGateway: Send + Sync {
    /// Requests a short address for `url`.
    ///
    /// `url` is expected to be already normalized.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Rejected`] for non-success responses and
    /// [`GatewayError::Transport`] when the request fails or the success body
    /// cannot be read.
    async fn shorten(&self, url: &str) -> Result<ShortenedUrl, GatewayError>;
}
