// AniLibria API (`/api/v1`) models, classic title shape

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::shared::utils::lenient::{lenient, lenient_vec, RawId, SkipInvalid};

// Response envelopes
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct LibriaList<T> {
    pub data: SkipInvalid<T>,
    #[serde(default, deserialize_with = "lenient")]
    pub pagination: Option<Pagination>,
}

impl<T> LibriaList<T> {
    pub fn into_items(self) -> Vec<T> {
        self.data.into_inner()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LibriaItem<T> {
    pub data: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    #[serde(default, deserialize_with = "lenient")]
    pub pages: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub current_page: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub items_per_page: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_items: Option<u64>,
}

// Title
#[derive(Debug, Clone, Deserialize)]
pub struct Title {
    pub id: RawId,
    #[serde(default, deserialize_with = "lenient")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub names: Option<Names>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub title_type: Option<TitleType>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<Status>,
    #[serde(default, deserialize_with = "lenient")]
    pub season: Option<Season>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub posters: Option<Posters>,
    #[serde(default, deserialize_with = "lenient")]
    pub player: Option<Player>,
    #[serde(default, deserialize_with = "lenient")]
    pub in_favorites: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub age_rating: Option<String>,
    /// Unix seconds
    #[serde(default, deserialize_with = "lenient")]
    pub updated: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Names {
    #[serde(default, deserialize_with = "lenient")]
    pub ru: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub en: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub alternative: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TitleType {
    #[serde(default, deserialize_with = "lenient")]
    pub full_string: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub string: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub code: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub episodes: Option<u32>,
    /// Minutes per episode
    #[serde(default, deserialize_with = "lenient")]
    pub length: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Status {
    #[serde(default, deserialize_with = "lenient")]
    pub string: Option<String>,
    /// 1 = ongoing, 2 = finished, 3 = hidden, 4 = not ongoing
    #[serde(default, deserialize_with = "lenient")]
    pub code: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Season {
    #[serde(default, deserialize_with = "lenient")]
    pub string: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub code: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub week_day: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Posters {
    #[serde(default, deserialize_with = "lenient")]
    pub small: Option<PosterUrl>,
    #[serde(default, deserialize_with = "lenient")]
    pub medium: Option<PosterUrl>,
    #[serde(default, deserialize_with = "lenient")]
    pub original: Option<PosterUrl>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PosterUrl {
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Player {
    /// Streaming host without scheme, e.g. `cache.libria.fun`
    #[serde(default, deserialize_with = "lenient")]
    pub host: Option<String>,
    /// Episodes keyed by number (`{"1": {...}}`) or as a plain array
    #[serde(default)]
    pub list: Option<Value>,
}

impl Player {
    /// Parsable episodes ordered by number
    pub fn episodes(&self) -> Vec<PlayerEpisode> {
        let items: Vec<Value> = match &self.list {
            Some(Value::Object(map)) => map.values().cloned().collect(),
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        };

        let mut episodes: Vec<PlayerEpisode> = items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect();
        episodes.sort_by(|a, b| {
            a.episode
                .unwrap_or(f64::MAX)
                .total_cmp(&b.episode.unwrap_or(f64::MAX))
        });
        episodes
    }
}

// Episode
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerEpisode {
    #[serde(default, deserialize_with = "lenient")]
    pub uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub episode: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_timestamp: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub preview: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub skips: Option<Skips>,
    #[serde(default, deserialize_with = "lenient")]
    pub hls: Option<Hls>,
    #[serde(default, deserialize_with = "lenient")]
    pub title_id: Option<RawId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Skips {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub opening: Vec<f64>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub ending: Vec<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hls {
    #[serde(default, deserialize_with = "lenient")]
    pub fhd: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub hd: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub sd: Option<String>,
}
