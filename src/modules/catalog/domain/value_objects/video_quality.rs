use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// HLS renditions the upstreams encode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoQuality {
    #[serde(rename = "480")]
    Q480,
    #[serde(rename = "720")]
    Q720,
    #[serde(rename = "1080")]
    Q1080,
}

impl VideoQuality {
    /// Order tried when the requested rendition is missing
    pub const FALLBACK_ORDER: [VideoQuality; 3] =
        [VideoQuality::Q1080, VideoQuality::Q720, VideoQuality::Q480];

    pub fn height(&self) -> u16 {
        match self {
            VideoQuality::Q480 => 480,
            VideoQuality::Q720 => 720,
            VideoQuality::Q1080 => 1080,
        }
    }

    pub fn label(&self) -> String {
        format!("{}p", self.height())
    }
}

impl Default for VideoQuality {
    fn default() -> Self {
        VideoQuality::Q720
    }
}

impl fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.height())
    }
}

impl FromStr for VideoQuality {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches(|c: char| c == 'p' || c == 'P') {
            "480" => Ok(VideoQuality::Q480),
            "720" => Ok(VideoQuality::Q720),
            "1080" => Ok(VideoQuality::Q1080),
            other => Err(AppError::InvalidInput(format!(
                "Unknown video quality '{}'",
                other
            ))),
        }
    }
}

/// One playable rendition, as offered to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityOption {
    pub height: u16,
    pub src: String,
    pub label: String,
}

/// Streaming URL per quality. A missing entry means the rendition was not encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityMap {
    #[serde(rename = "480")]
    pub q480: Option<String>,
    #[serde(rename = "720")]
    pub q720: Option<String>,
    #[serde(rename = "1080")]
    pub q1080: Option<String>,
}

impl QualityMap {
    pub fn new(q480: Option<String>, q720: Option<String>, q1080: Option<String>) -> Self {
        fn present(url: Option<String>) -> Option<String> {
            url.filter(|u| !u.trim().is_empty())
        }

        Self {
            q480: present(q480),
            q720: present(q720),
            q1080: present(q1080),
        }
    }

    pub fn get(&self, quality: VideoQuality) -> Option<&str> {
        match quality {
            VideoQuality::Q480 => self.q480.as_deref(),
            VideoQuality::Q720 => self.q720.as_deref(),
            VideoQuality::Q1080 => self.q1080.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.q480.is_none() && self.q720.is_none() && self.q1080.is_none()
    }

    /// Pick the requested rendition, else the first present in 1080 → 720 → 480.
    pub fn select(&self, preferred: VideoQuality) -> Option<(VideoQuality, &str)> {
        if let Some(url) = self.get(preferred) {
            return Some((preferred, url));
        }

        VideoQuality::FALLBACK_ORDER
            .iter()
            .find_map(|quality| self.get(*quality).map(|url| (*quality, url)))
    }

    /// Every encoded rendition, highest first
    pub fn available(&self) -> Vec<QualityOption> {
        VideoQuality::FALLBACK_ORDER
            .iter()
            .filter_map(|quality| {
                self.get(*quality).map(|url| QualityOption {
                    height: quality.height(),
                    src: url.to_string(),
                    label: quality.label(),
                })
            })
            .collect()
    }
}
