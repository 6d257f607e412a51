// AniLiberty public API (`/api`) models
// Only `id` is required; every other field is parsed leniently.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::shared::utils::lenient::{lenient, lenient_vec, RawId, SkipInvalid};

// Response envelopes
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged, bound(deserialize = "T: DeserializeOwned"))]
pub enum LibertyList<T> {
    Paged {
        data: SkipInvalid<T>,
        #[serde(default, deserialize_with = "lenient")]
        meta: Option<Meta>,
    },
    Bare(SkipInvalid<T>),
}

impl<T> LibertyList<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            LibertyList::Paged { data, .. } | LibertyList::Bare(data) => data.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LibertyItem<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> LibertyItem<T> {
    pub fn into_inner(self) -> T {
        match self {
            LibertyItem::Wrapped { data } | LibertyItem::Bare(data) => data,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    #[serde(default, deserialize_with = "lenient")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    #[serde(default, deserialize_with = "lenient")]
    pub total: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub current_page: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_pages: Option<u32>,
}

// Release
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub id: RawId,
    #[serde(default, deserialize_with = "lenient")]
    pub alias: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<ReleaseName>,
    #[serde(default, deserialize_with = "lenient")]
    pub year: Option<i32>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub release_type: Option<Labeled>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_ongoing: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_in_production: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub poster: Option<Image>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub episodes_total: Option<u32>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "lenient")]
    pub age_rating: Option<Labeled>,
    #[serde(default, deserialize_with = "lenient")]
    pub season: Option<Labeled>,
    #[serde(default, deserialize_with = "lenient")]
    pub publish_day: Option<Labeled>,
    #[serde(default, deserialize_with = "lenient")]
    pub average_duration_of_episode: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub added_in_users_favorites: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub fresh_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub episodes: Vec<Episode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReleaseName {
    #[serde(default, deserialize_with = "lenient")]
    pub main: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub english: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub alternative: Option<String>,
}

/// `{ value, description }` pair used for type, season, age rating and publish day
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Labeled {
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub label: Option<String>,
}

impl Labeled {
    /// Raw `value` as text, whether the upstream sent a string or a number
    pub fn value_text(&self) -> Option<String> {
        match self.value.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<RawId>,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Image {
    #[serde(default, deserialize_with = "lenient")]
    pub src: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub preview: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub optimized: Option<OptimizedImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptimizedImage {
    #[serde(default, deserialize_with = "lenient")]
    pub src: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub preview: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub thumbnail: Option<String>,
}

// Episode
#[derive(Debug, Clone, Deserialize)]
pub struct Episode {
    pub id: RawId,
    #[serde(default, deserialize_with = "lenient")]
    pub ordinal: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub sort_order: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name_english: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub duration: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub preview: Option<Image>,
    #[serde(default, deserialize_with = "lenient")]
    pub hls_480: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub hls_720: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub hls_1080: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub opening: Option<Skip>,
    #[serde(default, deserialize_with = "lenient")]
    pub ending: Option<Skip>,
    #[serde(default, deserialize_with = "lenient")]
    pub rutube_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub youtube_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub release_id: Option<RawId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Skip {
    #[serde(default, deserialize_with = "lenient")]
    pub start: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub stop: Option<f64>,
}
