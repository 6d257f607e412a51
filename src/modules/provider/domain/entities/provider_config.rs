use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::shared::domain::value_objects::SourceKind;

/// Connection settings for one catalog source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub source: SourceKind,
    pub enabled: bool,
    pub base_url: String,
    /// Public host relative image and video paths are joined with
    pub asset_host: String,
    pub timeout_seconds: u64,
    pub page_size: u32,
}

impl ProviderConfig {
    pub fn new(source: SourceKind) -> Self {
        let (base_url, asset_host, timeout) = match source {
            SourceKind::PrimaryV2 => ("https://aniliberty.top/api", "https://aniliberty.top", 15),
            SourceKind::LegacyV1 => (
                "https://anilibria.top/api/v1",
                "https://anilibria.top",
                10,
            ),
            SourceKind::LocalCache => ("http://localhost:5000/api", "http://localhost:5000", 10),
            SourceKind::Mock => ("", "", 0),
        };

        Self {
            source,
            enabled: source != SourceKind::Mock,
            base_url: base_url.to_string(),
            asset_host: asset_host.to_string(),
            timeout_seconds: timeout,
            page_size: 20,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_asset_host(mut self, asset_host: impl Into<String>) -> Self {
        self.asset_host = asset_host.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn is_available(&self) -> bool {
        self.enabled && !self.base_url.is_empty()
    }
}
