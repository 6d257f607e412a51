use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::{
    entities::{CanonicalAnime, CanonicalEpisode},
    value_objects::{QualityOption, ResolutionResult, VideoQuality},
};
use crate::shared::domain::value_objects::SourceKind;

/// Both homepage slots, each resolved through its own chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageData {
    pub popular: ResolutionResult<Vec<CanonicalAnime>>,
    pub latest: ResolutionResult<Vec<CanonicalAnime>>,
}

impl HomepageData {
    pub fn is_mock(&self) -> bool {
        self.popular.source_used == SourceKind::Mock && self.latest.source_used == SourceKind::Mock
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamType {
    Hls,
}

/// Playable stream for one episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResolution {
    pub url: String,
    pub quality: VideoQuality,
    /// Encoded renditions, highest first
    pub available_qualities: Vec<QualityOption>,
    #[serde(rename = "type")]
    pub stream_type: StreamType,
    pub episode: CanonicalEpisode,
}

/// Reachability of one source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStatus {
    pub source: SourceKind,
    pub reachable: bool,
    pub latency_ms: u64,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub sources: Vec<SourceStatus>,
    pub healthy_sources: usize,
    pub checked_at: DateTime<Utc>,
}

impl StatusReport {
    pub fn new(sources: Vec<SourceStatus>) -> Self {
        let healthy_sources = sources.iter().filter(|s| s.reachable).count();
        Self {
            sources,
            healthy_sources,
            checked_at: Utc::now(),
        }
    }

    pub fn all_healthy(&self) -> bool {
        !self.sources.is_empty() && self.healthy_sources == self.sources.len()
    }
}
