mod common;

use axum::http::StatusCode;
use common::{FakeService, Reply};
use serde_json::json;

use shortener_client::prelude::*;

#[tokio::test]
async fn test_posts_json_to_shorten_endpoint() {
    let service = FakeService::start(Reply::Json(
        StatusCode::CREATED,
        json!({ "short_code": "abc1234", "short_url": "https://short.ly/abc1234" }),
    ))
    .await;
    let gateway = HttpShortenerGateway::new(&service.config()).unwrap();

    let shortened = gateway.shorten("https://example.com").await.unwrap();

    assert_eq!(
        shortened,
        ShortenedUrl::new("https://short.ly/abc1234", Some("abc1234".to_string()))
    );
    assert_eq!(service.requests(), vec![json!({ "url": "https://example.com" })]);
}

#[tokio::test]
async fn test_rejection_carries_status_and_message() {
    let service = FakeService::start(Reply::Json(
        StatusCode::BAD_REQUEST,
        json!({ "error": "URL length is large" }),
    ))
    .await;
    let gateway = HttpShortenerGateway::new(&service.config()).unwrap();

    let err = gateway.shorten("https://example.com").await.unwrap_err();

    assert_eq!(
        err,
        GatewayError::Rejected {
            status: 400,
            message: Some("URL length is large".to_string()),
        }
    );
}

#[tokio::test]
async fn test_rejection_with_nested_error_object() {
    let service = FakeService::start(Reply::Json(
        StatusCode::CONFLICT,
        json!({ "error": { "code": "conflict", "message": "Code already taken", "details": {} } }),
    ))
    .await;
    let gateway = HttpShortenerGateway::new(&service.config()).unwrap();

    let err = gateway.shorten("https://example.com").await.unwrap_err();

    assert_eq!(
        err,
        GatewayError::Rejected {
            status: 409,
            message: Some("Code already taken".to_string()),
        }
    );
}

#[tokio::test]
async fn test_rejection_without_body() {
    let service = FakeService::start(Reply::Empty(StatusCode::SERVICE_UNAVAILABLE)).await;
    let gateway = HttpShortenerGateway::new(&service.config()).unwrap();

    let err = gateway.shorten("https://example.com").await.unwrap_err();

    assert_eq!(
        err,
        GatewayError::Rejected {
            status: 503,
            message: None,
        }
    );
}

#[tokio::test]
async fn test_wrong_path_is_rejected() {
    let service = FakeService::start(Reply::Json(
        StatusCode::OK,
        json!({ "short_url": "https://short.ly/abc" }),
    ))
    .await;
    let config = Config {
        api_base_url: format!("{}/v2", service.base_url),
        ..Config::default()
    };
    let gateway = HttpShortenerGateway::new(&config).unwrap();

    let err = gateway.shorten("https://example.com").await.unwrap_err();

    assert!(matches!(err, GatewayError::Rejected { status: 404, .. }));
    assert!(service.requests().is_empty());
}
