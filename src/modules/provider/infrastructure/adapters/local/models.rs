// Our own backend's catalog API. Records are already presentation-shaped
// (camelCase) but still go through the same lenient parse as upstreams.

use serde::Deserialize;

use crate::shared::utils::lenient::{lenient, lenient_vec, RawId};

/// `{ success, data, error }` envelope every local route answers with
#[derive(Debug, Clone, Deserialize)]
pub struct LocalEnvelope<T> {
    #[serde(default, deserialize_with = "lenient")]
    pub success: Option<bool>,
    pub data: Option<T>,
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
}

impl<T> LocalEnvelope<T> {
    pub fn is_failure(&self) -> bool {
        self.success == Some(false)
    }

    pub fn failure_message(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "local catalog reported failure".to_string())
    }
}

/// Genre entry, either a bare name or a `{ name }` record
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LocalGenre {
    Name(String),
    Record { name: String },
}

impl LocalGenre {
    pub fn name(&self) -> &str {
        match self {
            LocalGenre::Name(name) | LocalGenre::Record { name } => name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalAnime {
    pub id: RawId,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title_english: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title_alternative: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub alias: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub year: Option<i32>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub anime_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_ongoing: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub poster: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub episodes: Option<u32>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub age_rating: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub season: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub duration: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub publish_day: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_in_production: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub favorites: Option<u64>,
    #[serde(default, alias = "fresh_at", deserialize_with = "lenient")]
    pub fresh_at: Option<String>,
    #[serde(default, alias = "updated_at", deserialize_with = "lenient")]
    pub updated_at: Option<String>,
    #[serde(default, alias = "episodesList", deserialize_with = "lenient_vec")]
    pub episode_list: Vec<LocalEpisode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalEpisode {
    pub id: RawId,
    #[serde(default, deserialize_with = "lenient")]
    pub number: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub sort_order: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title_english: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub duration: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub preview: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub video_urls: Option<LocalVideoUrls>,
    #[serde(default, deserialize_with = "lenient")]
    pub opening: Option<LocalRange>,
    #[serde(default, deserialize_with = "lenient")]
    pub ending: Option<LocalRange>,
    #[serde(default, deserialize_with = "lenient")]
    pub rutube_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub youtube_id: Option<String>,
    #[serde(default, alias = "updated_at", deserialize_with = "lenient")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub release_id: Option<RawId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalVideoUrls {
    #[serde(rename = "480", default, deserialize_with = "lenient")]
    pub q480: Option<String>,
    #[serde(rename = "720", default, deserialize_with = "lenient")]
    pub q720: Option<String>,
    #[serde(rename = "1080", default, deserialize_with = "lenient")]
    pub q1080: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalRange {
    #[serde(default, deserialize_with = "lenient")]
    pub start: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub stop: Option<f64>,
}
