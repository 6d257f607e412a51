use anicat_lib::modules::provider::infrastructure::LibertyAdapter;
use anicat_lib::modules::provider::CatalogSource;
use anicat_lib::shared::errors::AppError;
use serde_json::json;
use std::time::Duration;

use crate::utils::stub_server::{closed_port_url, StubResponse, StubServer};

fn adapter_at(base_url: &str, timeout: Duration) -> LibertyAdapter {
    let client = crate::utils::client("AniLiberty", base_url, timeout);
    LibertyAdapter::with_client(client, "https://aniliberty.top")
}

#[tokio::test]
async fn test_upstream_error_messages_are_joined() {
    let server = StubServer::start(vec![(
        "/api/anime/popular",
        StubResponse::json(
            422,
            json!({ "errors": ["Поле perPage должно быть числом", "Поле page обязательно"] }),
        ),
    )])
    .await;

    let err = adapter_at(&server.url("/api"), Duration::from_secs(5))
        .popular(12)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AppError::UpstreamError {
            status: 422,
            message: "Поле perPage должно быть числом, Поле page обязательно".to_string(),
        }
    );
}

#[tokio::test]
async fn test_server_error_without_body_uses_reason() {
    let server = StubServer::start(vec![(
        "/api/releases",
        StubResponse::text(503, "maintenance"),
    )])
    .await;

    let err = adapter_at(&server.url("/api"), Duration::from_secs(5))
        .latest(12)
        .await
        .unwrap_err();

    match err {
        AppError::UpstreamError { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unexpected_shape_is_parse_error() {
    let server = StubServer::start(vec![(
        "/api/anime/popular",
        StubResponse::json(200, json!({ "status": "ok" })),
    )])
    .await;

    let err = tokio_test::assert_err!(
        adapter_at(&server.url("/api"), Duration::from_secs(5))
            .popular(12)
            .await
    );
    assert!(matches!(err, AppError::ParseError(_)));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let server = StubServer::start(vec![(
        "/api/anime/popular",
        StubResponse::json(200, json!({ "data": [] })).delayed(Duration::from_secs(3)),
    )])
    .await;

    let err = adapter_at(&server.url("/api"), Duration::from_millis(200))
        .popular(12)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Timeout(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_refused_connection_is_network_error() {
    let err = adapter_at(&closed_port_url("/api"), Duration::from_secs(2))
        .popular(12)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NetworkError(_)), "got {:?}", err);
    assert!(err.is_source_failure());
}
