//! HTTP implementation of [`ShortenerGateway`].

use async_trait::async_trait;
use tracing::debug;

use super::dto::{ErrorResponse, ShortenRequest, ShortenResponse};
use crate::config::Config;
use crate::domain::entities::ShortenedUrl;
use crate::domain::ports::{GatewayError, ShortenerGateway};

/// Talks JSON to `POST {API_BASE_URL}/api/shorten/`.
///
/// The endpoint is resolved once from [`Config`] at construction. No retries
/// are attempted; a failed request is reported to the caller as is.
#[derive(Debug, Clone)]
pub struct HttpShortenerGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpShortenerGateway {
    /// Builds a gateway for the service configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.shorten_endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ShortenerGateway for HttpShortenerGateway {
    async fn shorten(&self, url: &str) -> Result<ShortenedUrl, GatewayError> {
        let response = self
            .client
            .post(self.endpoint.as_str())
            .json(&ShortenRequest { url })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        debug!(status = status.as_u16(), endpoint = %self.endpoint, "Shortening service responded");

        if !status.is_success() {
            let message = match response.bytes().await {
                Ok(body) => ErrorResponse::from_body(&body).message(),
                Err(err) => {
                    debug!(error = %err, "Failed to read error body");
                    None
                }
            };

            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .json::<ShortenResponse>()
            .await
            .map_err(|err| {
                GatewayError::Transport(format!("Unexpected response from shortening service: {err}"))
            })?;

        Ok(body.into())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        return GatewayError::Transport("Shortening service did not respond in time".to_string());
    }
    if err.is_connect() {
        return GatewayError::Transport(format!("Could not reach the shortening service: {err}"));
    }
    GatewayError::Transport(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_config() {
        let config = Config {
            api_base_url: "https://sho.rt/".to_string(),
            ..Config::default()
        };

        let gateway = HttpShortenerGateway::new(&config).unwrap();
        assert_eq!(gateway.endpoint(), "https://sho.rt/api/shorten/");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_failure() {
        let config = Config {
            // Nothing listens on the discard port.
            api_base_url: "http://127.0.0.1:9".to_string(),
            ..Config::default()
        };
        let gateway = HttpShortenerGateway::new(&config).unwrap();

        let result = gateway.shorten("https://example.com").await;

        assert!(matches!(result, Err(GatewayError::Transport(_))));
    }
}
