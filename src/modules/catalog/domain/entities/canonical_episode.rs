use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::canonical_anime::CanonicalAnime;
use crate::modules::catalog::domain::value_objects::{QualityMap, TimeRange};

/// Ids of the same episode on third-party players
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalPlayerIds {
    pub rutube_id: Option<String>,
    pub youtube_id: Option<String>,
}

impl ExternalPlayerIds {
    pub fn from_parts(rutube_id: Option<String>, youtube_id: Option<String>) -> Option<Self> {
        if rutube_id.is_none() && youtube_id.is_none() {
            None
        } else {
            Some(Self {
                rutube_id,
                youtube_id,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalEpisode {
    pub id: String,
    /// Ordinal within the release; fractional for specials such as 2.5
    pub number: Option<f64>,
    pub sort_order: Option<i64>,
    pub title: String,
    pub title_english: Option<String>,
    pub duration_seconds: Option<u32>,
    pub preview_url: Option<String>,
    pub video_urls: QualityMap,
    pub opening: Option<TimeRange>,
    pub ending: Option<TimeRange>,
    pub external_player_ids: Option<ExternalPlayerIds>,
    /// Id of the owning release, for lookups only
    pub release_id: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CanonicalEpisode {
    pub fn new(id: impl Into<String>, number: Option<f64>) -> Self {
        Self {
            id: id.into(),
            number,
            sort_order: None,
            title: episode_title(None, None, number),
            title_english: None,
            duration_seconds: None,
            preview_url: None,
            video_urls: QualityMap::default(),
            opening: None,
            ending: None,
            external_player_ids: None,
            release_id: None,
            updated_at: None,
        }
    }

    pub fn has_video(&self) -> bool {
        !self.video_urls.is_empty()
    }
}

/// Episode name, then English name, then "Эпизод N".
pub fn episode_title(name: Option<&str>, name_english: Option<&str>, number: Option<f64>) -> String {
    [name, name_english]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| match number {
            Some(n) => format!("Эпизод {}", n),
            None => "Эпизод".to_string(),
        })
}

/// A release together with its episode list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseDetails {
    pub anime: CanonicalAnime,
    pub episodes: Vec<CanonicalEpisode>,
}

impl ReleaseDetails {
    pub fn new(anime: CanonicalAnime, episodes: Vec<CanonicalEpisode>) -> Self {
        Self { anime, episodes }
    }
}
