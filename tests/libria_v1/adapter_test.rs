use anicat_lib::modules::catalog::domain::value_objects::{ReleaseStatus, VideoQuality};
use anicat_lib::modules::provider::infrastructure::LibriaAdapter;
use anicat_lib::modules::provider::{CatalogSource, SearchFilters};
use anicat_lib::shared::domain::value_objects::SourceKind;
use anicat_lib::shared::errors::AppError;
use serde_json::json;
use std::time::Duration;

use crate::utils::fixtures::{libria_player, libria_title};
use crate::utils::stub_server::{closed_port_url, StubResponse, StubServer};

const ASSET_HOST: &str = "https://anilibria.top";

fn adapter(base_url: &str) -> LibriaAdapter {
    let client = crate::utils::client("AniLibria v1", base_url, Duration::from_secs(5));
    LibriaAdapter::with_client(client, ASSET_HOST)
}

#[tokio::test]
async fn test_popular_maps_titles() {
    let server = StubServer::start(vec![(
        "/api/v1/anime/popular",
        StubResponse::json(
            200,
            json!({
                "data": [libria_title(9988, "Кайдзю номер восемь 2", "Kaiju No. 8 Season 2")],
                "pagination": { "pages": 1, "current_page": 1, "items_per_page": 12, "total_items": 1 }
            }),
        ),
    )])
    .await;

    let adapter = adapter(&server.url("/api/v1"));
    assert_eq!(adapter.kind(), SourceKind::LegacyV1);

    let anime = adapter.popular(12).await.unwrap();
    assert_eq!(anime.len(), 1);

    let title = &anime[0];
    assert_eq!(title.id, "9988");
    assert_eq!(title.title, "Кайдзю номер восемь 2");
    assert_eq!(title.alias.as_deref(), Some("title-9988"));
    assert_eq!(title.year, Some(2025));
    assert_eq!(title.anime_type.as_deref(), Some("TV"));
    assert_eq!(title.status, ReleaseStatus::Ongoing);
    assert_eq!(
        title.poster_url.as_deref(),
        Some("https://anilibria.top/storage/releases/posters/9988/medium.jpg")
    );
    assert_eq!(title.genres, vec!["Экшен", "Сёнэн"]);
    assert_eq!(title.episode_count, Some(12));
    assert_eq!(title.duration_minutes, Some(24));
    assert_eq!(title.favorites, Some(900));
    assert!(title.updated_at.is_some());

    assert_eq!(server.requests(), vec!["/api/v1/anime/popular?limit=12"]);
}

#[tokio::test]
async fn test_latest_uses_updates_feed() {
    let server = StubServer::start(vec![(
        "/api/v1/anime/updates",
        StubResponse::json(200, json!({ "data": [libria_title(1, "Один", "One"), null] })),
    )])
    .await;

    let anime = adapter(&server.url("/api/v1")).latest(3).await.unwrap();
    assert_eq!(anime.len(), 1);
    assert_eq!(server.requests(), vec!["/api/v1/anime/updates?limit=3"]);
}

#[tokio::test]
async fn test_malformed_title_does_not_fail_page() {
    let server = StubServer::start(vec![(
        "/api/v1/anime/popular",
        StubResponse::json(
            200,
            json!({ "data": [{ "code": "no-id" }, libria_title(2, "Два", "Two"), 42] }),
        ),
    )])
    .await;

    let anime = adapter(&server.url("/api/v1")).popular(3).await.unwrap();
    assert_eq!(anime.len(), 1);
    assert_eq!(anime[0].id, "2");
}

#[tokio::test]
async fn test_search_sends_limit_and_filters() {
    let server = StubServer::start(vec![(
        "/api/v1/anime/search",
        StubResponse::json(200, json!({ "data": [] })),
    )])
    .await;

    let filters = SearchFilters::new()
        .with_genres(vec!["Экшен".to_string()])
        .with_status(ReleaseStatus::Ongoing);
    let anime = adapter(&server.url("/api/v1"))
        .search("kaiju", &filters)
        .await
        .unwrap();

    assert!(anime.is_empty());
    let request = &server.requests()[0];
    assert!(request.starts_with("/api/v1/anime/search?search=kaiju&limit=20"));
    assert!(request.contains("genres=%D0%AD%D0%BA%D1%88%D0%B5%D0%BD"));
    assert!(request.ends_with("status=ongoing"));
    assert!(!request.contains("page="));
}

#[tokio::test]
async fn test_browse_sends_filters_without_search() {
    let server = StubServer::start(vec![(
        "/api/v1/anime/catalog",
        StubResponse::json(200, json!({ "data": [libria_title(5, "Пять", "Five")] })),
    )])
    .await;

    let filters = SearchFilters::new().with_status(ReleaseStatus::Ongoing);
    let anime = adapter(&server.url("/api/v1")).browse(&filters).await.unwrap();

    assert_eq!(anime[0].id, "5");
    assert_eq!(
        server.requests(),
        vec!["/api/v1/anime/catalog?limit=20&status=ongoing"]
    );
}

#[tokio::test]
async fn test_genres_list() {
    let server = StubServer::start(vec![(
        "/api/v1/genres",
        StubResponse::json(200, json!({ "data": ["Экшен", "", "Сёнэн", null] })),
    )])
    .await;

    let genres = adapter(&server.url("/api/v1")).genres().await.unwrap();
    assert_eq!(genres, vec!["Экшен", "Сёнэн"]);
}

#[tokio::test]
async fn test_release_reads_player_episodes() {
    let mut title = libria_title(9988, "Кайдзю номер восемь 2", "Kaiju No. 8 Season 2");
    title["player"] = libria_player("cache.libria.fun");

    let server = StubServer::start(vec![(
        "/api/v1/anime/9988",
        StubResponse::json(200, json!({ "data": title })),
    )])
    .await;

    let details = adapter(&server.url("/api/v1"))
        .release("9988", true)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(server.requests(), vec!["/api/v1/anime/9988?include=player"]);
    assert_eq!(details.episodes.len(), 2);

    let first = &details.episodes[0];
    assert_eq!(first.id, "uuid-1");
    assert_eq!(first.number, Some(1.0));
    assert_eq!(first.release_id.as_deref(), Some("9988"));
    assert!(first.opening.is_some());
    assert_eq!(
        first.video_urls.get(VideoQuality::Q720),
        Some("https://cache.libria.fun/videos/media/ts/1/720/playlist.m3u8")
    );

    let second = &details.episodes[1];
    let (quality, url) = second.video_urls.select(VideoQuality::Q720).unwrap();
    assert_eq!(quality, VideoQuality::Q1080);
    assert_eq!(url, "https://cache.libria.fun/videos/media/ts/2/1080/playlist.m3u8");
}

#[tokio::test]
async fn test_release_without_episodes_skips_player() {
    let server = StubServer::start(vec![(
        "/api/v1/anime/title-1",
        StubResponse::json(200, json!({ "data": libria_title(1, "Один", "One") })),
    )])
    .await;

    let details = adapter(&server.url("/api/v1"))
        .release("title-1", false)
        .await
        .unwrap()
        .unwrap();

    assert!(details.episodes.is_empty());
    assert_eq!(server.requests(), vec!["/api/v1/anime/title-1"]);
}

#[tokio::test]
async fn test_missing_title_is_none() {
    let server = StubServer::start(Vec::new()).await;

    let details = adapter(&server.url("/api/v1"))
        .release("404", true)
        .await
        .unwrap();
    assert!(details.is_none());
}

#[tokio::test]
async fn test_field_errors_are_joined() {
    let server = StubServer::start(vec![(
        "/api/v1/anime/search",
        StubResponse::json(400, json!({ "errors": { "search": ["Слишком короткий запрос"] } })),
    )])
    .await;

    let err = adapter(&server.url("/api/v1"))
        .search("a", &SearchFilters::default())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AppError::UpstreamError {
            status: 400,
            message: "Слишком короткий запрос".to_string(),
        }
    );
}

#[tokio::test]
async fn test_refused_connection_is_network_error() {
    let err = adapter(&closed_port_url("/api/v1"))
        .latest(1)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NetworkError(_)), "got {:?}", err);
}
