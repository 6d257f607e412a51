use anicat_lib::modules::catalog::domain::value_objects::{ReleaseStatus, VideoQuality};
use anicat_lib::modules::provider::infrastructure::LocalAdapter;
use anicat_lib::modules::provider::{CatalogSource, SearchFilters};
use anicat_lib::shared::domain::value_objects::SourceKind;
use anicat_lib::shared::errors::AppError;
use serde_json::json;
use std::time::Duration;

use crate::utils::fixtures::local_anime;
use crate::utils::stub_server::{StubResponse, StubServer};

fn adapter(server: &StubServer) -> LocalAdapter {
    let client = crate::utils::client("Local catalog", &server.url("/api"), Duration::from_secs(5));
    LocalAdapter::with_client(client, &server.url(""))
}

#[tokio::test]
async fn test_popular_unwraps_envelope() {
    let server = StubServer::start(vec![(
        "/api/anime/popular",
        StubResponse::json(
            200,
            json!({ "success": true, "data": [local_anime("l1", "Локальный тайтл")] }),
        ),
    )])
    .await;

    let adapter = adapter(&server);
    assert_eq!(adapter.kind(), SourceKind::LocalCache);

    let anime = adapter.popular(12).await.unwrap();
    assert_eq!(anime.len(), 1);
    assert_eq!(anime[0].id, "l1");
    assert_eq!(anime[0].status, ReleaseStatus::Completed);
    assert_eq!(anime[0].rating, Some(7.9));
    assert_eq!(
        anime[0].poster_url,
        Some(format!("{}/posters/local.jpg", server.url("")))
    );
    assert_eq!(server.requests(), vec!["/api/anime/popular?limit=12"]);
}

#[tokio::test]
async fn test_latest_reads_new_episodes_route() {
    let server = StubServer::start(vec![(
        "/api/anime/new-episodes",
        StubResponse::json(200, json!({ "success": true, "data": [] })),
    )])
    .await;

    let anime = adapter(&server).latest(12).await.unwrap();
    assert!(anime.is_empty());
}

#[tokio::test]
async fn test_reported_failure_is_upstream_error() {
    let server = StubServer::start(vec![(
        "/api/anime/search",
        StubResponse::json(200, json!({ "success": false, "error": "Database unavailable" })),
    )])
    .await;

    let err = adapter(&server)
        .search("naruto", &SearchFilters::default())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AppError::UpstreamError {
            status: 200,
            message: "Database unavailable".to_string(),
        }
    );
    assert_eq!(
        server.requests(),
        vec!["/api/anime/search?q=naruto&limit=20&page=1"]
    );
}

#[tokio::test]
async fn test_record_without_id_is_skipped() {
    let server = StubServer::start(vec![(
        "/api/anime/popular",
        StubResponse::json(
            200,
            json!({
                "success": true,
                "data": [{ "title": "Без идентификатора" }, local_anime("l2", "Второй")]
            }),
        ),
    )])
    .await;

    let anime = adapter(&server).popular(12).await.unwrap();
    assert_eq!(anime.len(), 1);
    assert_eq!(anime[0].id, "l2");
}

#[tokio::test]
async fn test_browse_reads_catalog_route() {
    let server = StubServer::start(vec![(
        "/api/anime/catalog",
        StubResponse::json(200, json!({ "success": true, "data": [local_anime("l3", "Третий")] })),
    )])
    .await;

    let filters = SearchFilters::new().with_genres(vec!["Drama".to_string()]);
    let anime = adapter(&server).browse(&filters).await.unwrap();

    assert_eq!(anime[0].id, "l3");
    assert_eq!(
        server.requests(),
        vec!["/api/anime/catalog?limit=20&page=1&genres=Drama"]
    );
}

#[tokio::test]
async fn test_genres_accept_names_and_records() {
    let server = StubServer::start(vec![(
        "/api/anime/genres",
        StubResponse::json(
            200,
            json!({ "success": true, "data": ["Драма", { "name": "Фэнтези" }, { "id": 9 }] }),
        ),
    )])
    .await;

    let genres = adapter(&server).genres().await.unwrap();
    assert_eq!(genres, vec!["Драма", "Фэнтези"]);
}

#[tokio::test]
async fn test_listing_without_data_is_parse_error() {
    let server = StubServer::start(vec![(
        "/api/anime/popular",
        StubResponse::json(200, json!({ "success": true })),
    )])
    .await;

    let err = adapter(&server).popular(12).await.unwrap_err();
    assert!(matches!(err, AppError::ParseError(_)));
}

#[tokio::test]
async fn test_release_with_episode_list() {
    let mut record = local_anime("l1", "Локальный тайтл");
    record["episodesList"] = json!([{
        "id": "le1",
        "number": 1,
        "videoUrls": { "480": "/videos/le1/480.m3u8", "1080": "https://cdn.example/le1/1080.m3u8" }
    }]);

    let server = StubServer::start(vec![(
        "/api/anime/l1",
        StubResponse::json(200, json!({ "success": true, "data": record })),
    )])
    .await;

    let details = adapter(&server).release("l1", true).await.unwrap().unwrap();
    assert_eq!(details.episodes.len(), 1);

    let episode = &details.episodes[0];
    assert_eq!(episode.release_id.as_deref(), Some("l1"));
    assert_eq!(
        episode.video_urls.get(VideoQuality::Q480),
        Some(format!("{}/videos/le1/480.m3u8", server.url("")).as_str())
    );
    assert_eq!(
        episode.video_urls.select(VideoQuality::Q720),
        Some((VideoQuality::Q1080, "https://cdn.example/le1/1080.m3u8"))
    );
}

#[tokio::test]
async fn test_missing_record_is_none() {
    let server = StubServer::start(vec![(
        "/api/episode/gone",
        StubResponse::json(200, json!({ "success": true, "data": null })),
    )])
    .await;

    let adapter = adapter(&server);
    assert!(adapter.episode("gone").await.unwrap().is_none());
    assert!(adapter.release("unknown", false).await.unwrap().is_none());
}
