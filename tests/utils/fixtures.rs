/// Upstream payloads shaped like the real APIs
use serde_json::{json, Value};

pub fn liberty_release(id: u64, main: &str, english: &str) -> Value {
    json!({
        "id": id,
        "alias": format!("release-{}", id),
        "name": { "main": main, "english": english, "alternative": null },
        "year": 2025,
        "type": { "value": "TV", "description": "ТВ" },
        "is_ongoing": true,
        "is_in_production": true,
        "poster": {
            "src": format!("/storage/releases/posters/{}/src.jpg", id),
            "optimized": { "preview": format!("/storage/releases/posters/{}/preview.webp", id) }
        },
        "description": "Описание",
        "episodes_total": 12,
        "genres": [{ "id": 1, "name": "Комедия" }, { "id": 2, "name": "Романтика" }],
        "age_rating": { "value": "R16_PLUS", "label": "16+" },
        "season": { "value": "summer", "description": "Лето" },
        "average_duration_of_episode": 24,
        "added_in_users_favorites": 1500,
        "updated_at": "2025-07-05T18:00:00+00:00"
    })
}

pub fn liberty_episode(id: &str, ordinal: f64, release_id: u64) -> Value {
    json!({
        "id": id,
        "ordinal": ordinal,
        "sort_order": ordinal as i64,
        "name": null,
        "name_english": null,
        "duration": 1420,
        "preview": { "src": format!("/storage/episodes/{}/preview.jpg", id) },
        "hls_480": format!("https://cache.libria.fun/videos/{}/480/playlist.m3u8", id),
        "hls_720": format!("https://cache.libria.fun/videos/{}/720/playlist.m3u8", id),
        "hls_1080": null,
        "opening": { "start": 10, "stop": 100 },
        "ending": { "start": null, "stop": null },
        "release_id": release_id
    })
}

pub fn libria_title(id: u64, ru: &str, en: &str) -> Value {
    json!({
        "id": id,
        "code": format!("title-{}", id),
        "names": { "ru": ru, "en": en, "alternative": null },
        "description": "Описание",
        "type": { "full_string": "ТВ (12 эп.), 24 мин.", "string": "TV", "code": 1, "episodes": 12, "length": 24 },
        "status": { "string": "В работе", "code": 1 },
        "season": { "string": "лето", "code": 3, "year": 2025, "week_day": 5 },
        "genres": ["Экшен", "Сёнэн"],
        "posters": {
            "small": { "url": format!("/storage/releases/posters/{}/small.jpg", id) },
            "medium": { "url": format!("/storage/releases/posters/{}/medium.jpg", id) }
        },
        "in_favorites": 900,
        "updated": 1751738400
    })
}

pub fn libria_player(host: &str) -> Value {
    json!({
        "host": host,
        "list": {
            "2": {
                "episode": 2,
                "uuid": "uuid-2",
                "created_timestamp": 1751738400,
                "hls": { "fhd": "/videos/media/ts/2/1080/playlist.m3u8", "hd": null, "sd": "/videos/media/ts/2/480/playlist.m3u8" },
                "skips": { "opening": [], "ending": [] }
            },
            "1": {
                "episode": 1,
                "uuid": "uuid-1",
                "created_timestamp": 1751133600,
                "hls": { "fhd": null, "hd": "/videos/media/ts/1/720/playlist.m3u8", "sd": null },
                "skips": { "opening": [30, 120], "ending": [] }
            }
        }
    })
}

pub fn local_anime(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "titleEnglish": null,
        "year": 2024,
        "type": "ТВ",
        "status": "Завершён",
        "poster": "/posters/local.jpg",
        "genres": ["Драма"],
        "rating": 7.9
    })
}
