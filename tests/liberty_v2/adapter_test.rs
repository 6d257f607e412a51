use anicat_lib::modules::catalog::domain::value_objects::{ReleaseStatus, VideoQuality};
use anicat_lib::modules::provider::infrastructure::LibertyAdapter;
use anicat_lib::modules::provider::{CatalogSource, SearchFilters};
use anicat_lib::shared::domain::value_objects::SourceKind;
use serde_json::json;
use std::time::Duration;

use crate::utils::fixtures::{liberty_episode, liberty_release};
use crate::utils::stub_server::{StubResponse, StubServer};

const ASSET_HOST: &str = "https://aniliberty.top";

fn adapter(server: &StubServer) -> LibertyAdapter {
    let client = crate::utils::client("AniLiberty", &server.url("/api"), Duration::from_secs(5));
    LibertyAdapter::with_client(client, ASSET_HOST)
}

#[tokio::test]
async fn test_popular_maps_paged_envelope() {
    let server = StubServer::start(vec![(
        "/api/anime/popular",
        StubResponse::json(
            200,
            json!({
                "data": [
                    liberty_release(9964, "Эта фарфоровая кукла влюбилась 2", "Sono Bisque Doll wa Koi wo Suru 2"),
                    null,
                    liberty_release(9988, "Кайдзю номер восемь 2", "Kaiju No. 8 Season 2")
                ],
                "meta": { "pagination": { "total": 2, "current_page": 1, "total_pages": 1 } }
            }),
        ),
    )])
    .await;

    let adapter = adapter(&server);
    assert_eq!(adapter.kind(), SourceKind::PrimaryV2);

    let anime = adapter.popular(12).await.unwrap();
    assert_eq!(anime.len(), 2);

    let first = &anime[0];
    assert_eq!(first.id, "9964");
    assert_eq!(first.title, "Эта фарфоровая кукла влюбилась 2");
    assert_eq!(first.title_english.as_deref(), Some("Sono Bisque Doll wa Koi wo Suru 2"));
    assert_eq!(first.alias.as_deref(), Some("release-9964"));
    assert_eq!(first.anime_type.as_deref(), Some("ТВ"));
    assert_eq!(first.status, ReleaseStatus::Ongoing);
    assert_eq!(
        first.poster_url.as_deref(),
        Some("https://aniliberty.top/storage/releases/posters/9964/preview.webp")
    );
    assert_eq!(first.genres, vec!["Комедия", "Романтика"]);
    assert_eq!(first.age_rating.as_deref(), Some("16+"));
    assert_eq!(first.season.as_deref(), Some("Лето"));
    assert_eq!(first.episode_count, Some(12));
    assert_eq!(first.rating, None);
    assert!(first.updated_at.is_some());

    assert_eq!(server.requests(), vec!["/api/anime/popular?perPage=12&page=1"]);
}

#[tokio::test]
async fn test_latest_accepts_bare_array() {
    let server = StubServer::start(vec![(
        "/api/releases",
        StubResponse::json(200, json!([liberty_release(1, "Один", "One")])),
    )])
    .await;

    let anime = adapter(&server).latest(6).await.unwrap();
    assert_eq!(anime.len(), 1);
    assert_eq!(anime[0].title, "Один");
    assert_eq!(server.requests(), vec!["/api/releases?perPage=6&page=1"]);
}

#[tokio::test]
async fn test_empty_listing_is_not_an_error() {
    let server = StubServer::start(vec![(
        "/api/anime/popular",
        StubResponse::json(200, json!({ "data": [] })),
    )])
    .await;

    let anime = adapter(&server).popular(12).await.unwrap();
    assert!(anime.is_empty());
}

#[tokio::test]
async fn test_search_sends_filters() {
    let server = StubServer::start(vec![(
        "/api/anime/search",
        StubResponse::json(200, json!({ "data": [liberty_release(7, "Фрирен", "Frieren")] })),
    )])
    .await;

    let filters = SearchFilters::new().with_year(2023).with_limit(5);
    let anime = adapter(&server).search("frieren", &filters).await.unwrap();

    assert_eq!(anime[0].title_english.as_deref(), Some("Frieren"));
    assert_eq!(
        server.requests(),
        vec!["/api/anime/search?search=frieren&perPage=5&page=1&year=2023"]
    );
}

#[tokio::test]
async fn test_release_fetches_episode_list_when_not_embedded() {
    let server = StubServer::start(vec![
        (
            "/api/anime/9000",
            StubResponse::json(200, liberty_release(9000, "Релиз", "Release")),
        ),
        (
            "/api/anime/9000/episodes",
            StubResponse::json(
                200,
                json!([liberty_episode("e1", 1.0, 9000), liberty_episode("e2", 2.0, 9000)]),
            ),
        ),
    ])
    .await;

    let details = adapter(&server).release("9000", true).await.unwrap().unwrap();

    assert_eq!(details.anime.id, "9000");
    assert_eq!(details.episodes.len(), 2);
    let second = &details.episodes[1];
    assert_eq!(second.id, "e2");
    assert_eq!(second.number, Some(2.0));
    assert_eq!(second.title, "Эпизод 2");
    assert_eq!(second.release_id.as_deref(), Some("9000"));
    assert_eq!(
        second.preview_url.as_deref(),
        Some("https://aniliberty.top/storage/episodes/e2/preview.jpg")
    );
    assert!(second.opening.is_some());
    assert!(second.ending.is_none());

    let (quality, url) = second.video_urls.select(VideoQuality::Q1080).unwrap();
    assert_eq!(quality, VideoQuality::Q720);
    assert_eq!(url, "https://cache.libria.fun/videos/e2/720/playlist.m3u8");

    assert_eq!(server.request_count(), 2);
}

#[tokio::test]
async fn test_release_with_embedded_episodes_is_one_request() {
    let mut release = liberty_release(9000, "Релиз", "Release");
    release["episodes"] = json!([liberty_episode("e1", 1.0, 9000)]);

    let server = StubServer::start(vec![(
        "/api/anime/9000",
        StubResponse::json(200, json!({ "data": release })),
    )])
    .await;

    let details = adapter(&server).release("9000", true).await.unwrap().unwrap();
    assert_eq!(details.episodes.len(), 1);
    assert_eq!(server.request_count(), 1);
}

#[tokio::test]
async fn test_unknown_release_is_none() {
    let server = StubServer::start(Vec::new()).await;

    let details = adapter(&server).release("missing", false).await.unwrap();
    assert!(details.is_none());
}

#[tokio::test]
async fn test_episode_by_id() {
    let server = StubServer::start(vec![(
        "/api/episodes/e5",
        StubResponse::json(200, json!({ "data": liberty_episode("e5", 5.0, 42) })),
    )])
    .await;

    let episode = adapter(&server).episode("e5").await.unwrap().unwrap();
    assert_eq!(episode.id, "e5");
    assert_eq!(episode.release_id.as_deref(), Some("42"));
    assert_eq!(episode.video_urls.available().len(), 2);
}

#[tokio::test]
async fn test_record_without_id_is_skipped() {
    let server = StubServer::start(vec![(
        "/api/releases",
        StubResponse::json(
            200,
            json!({
                "data": [
                    liberty_release(1, "Один", "One"),
                    { "name": { "main": "Без идентификатора" } },
                    { "id": { "nested": true }, "alias": "broken" },
                    liberty_release(3, "Три", "Three")
                ]
            }),
        ),
    )])
    .await;

    let anime = adapter(&server).latest(4).await.unwrap();
    let ids: Vec<&str> = anime.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[tokio::test]
async fn test_browse_reads_catalog_releases() {
    let server = StubServer::start(vec![(
        "/api/anime/catalog/releases",
        StubResponse::json(200, json!({ "data": [liberty_release(7, "Семь", "Seven")] })),
    )])
    .await;

    let filters = SearchFilters::new().with_year(2025).with_limit(6);
    let anime = adapter(&server).browse(&filters).await.unwrap();

    assert_eq!(anime.len(), 1);
    assert_eq!(anime[0].id, "7");
    assert_eq!(
        server.requests(),
        vec!["/api/anime/catalog/releases?perPage=6&page=1&year=2025"]
    );
}

#[tokio::test]
async fn test_genres_from_reference_list() {
    let server = StubServer::start(vec![(
        "/api/anime/catalog/references/genres",
        StubResponse::json(
            200,
            json!([
                { "id": 1, "name": "Экшен", "total_releases": 900 },
                { "id": 2, "name": " Комедия " },
                { "id": 3 },
                { "id": 4, "name": "Экшен" }
            ]),
        ),
    )])
    .await;

    let genres = adapter(&server).genres().await.unwrap();
    assert_eq!(genres, vec!["Экшен", "Комедия"]);
}
