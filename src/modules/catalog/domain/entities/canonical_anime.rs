use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::value_objects::ReleaseStatus;

/// Title used when an upstream record carries no usable name
pub const UNTITLED: &str = "Без названия";

/// The single anime shape every source is normalized into.
///
/// Only `id` and `title` are guaranteed. Every other field serializes as `null`
/// when unknown, regardless of which source produced the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalAnime {
    pub id: String,
    pub title: String,
    pub title_english: Option<String>,
    pub title_alternative: Option<String>,
    pub alias: Option<String>,
    pub year: Option<i32>,
    #[serde(rename = "type")]
    pub anime_type: Option<String>,
    pub status: ReleaseStatus,
    pub poster_url: Option<String>,
    pub description: Option<String>,
    pub episode_count: Option<u32>,
    pub genres: Vec<String>,
    pub rating: Option<f64>,
    pub age_rating: Option<String>,
    pub season: Option<String>,
    pub duration_minutes: Option<u32>,
    pub publish_day: Option<String>,
    pub is_in_production: Option<bool>,
    pub favorites: Option<u64>,
    pub fresh_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CanonicalAnime {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            title_english: None,
            title_alternative: None,
            alias: None,
            year: None,
            anime_type: None,
            status: ReleaseStatus::Completed,
            poster_url: None,
            description: None,
            episode_count: None,
            genres: Vec::new(),
            rating: None,
            age_rating: None,
            season: None,
            duration_minutes: None,
            publish_day: None,
            is_in_production: None,
            favorites: None,
            fresh_at: None,
            updated_at: None,
        }
    }

    pub fn is_ongoing(&self) -> bool {
        self.status.is_ongoing()
    }
}

/// Primary-language name, then English name, then the placeholder.
/// Blank names count as missing. The order never depends on locale.
pub fn resolve_title(primary: Option<&str>, english: Option<&str>) -> String {
    [primary, english]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Trimmed, non-empty copy of an optional upstream string
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Genre names as shown to the user: trimmed, blanks dropped, first spelling of
/// each name kept
pub fn genre_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut genres: Vec<String> = Vec::new();
    for name in names.into_iter().map(str::trim) {
        if !name.is_empty() && !genres.iter().any(|g| g.eq_ignore_ascii_case(name)) {
            genres.push(name.to_string());
        }
    }
    genres
}

/// Parse an RFC 3339 / ISO 8601 timestamp, tolerating the space-separated form
pub fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%:z"))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}
