use serde::{Deserialize, Serialize};
use std::fmt;

/// Data sources a resolution chain can draw from, in default fallback order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKind {
    /// AniLiberty public API (`/api`, `perPage` pagination)
    #[serde(rename = "primary_v2")]
    PrimaryV2,
    /// AniLibria API (`/api/v1`, `limit` pagination)
    #[serde(rename = "legacy_v1")]
    LegacyV1,
    /// Our own backend's catalog
    #[serde(rename = "local_cache")]
    LocalCache,
    /// Static records compiled into the binary
    #[serde(rename = "mock")]
    Mock,
}

impl SourceKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            SourceKind::PrimaryV2 => "AniLiberty",
            SourceKind::LegacyV1 => "AniLibria v1",
            SourceKind::LocalCache => "Local",
            SourceKind::Mock => "Mock",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::PrimaryV2 => "primary_v2",
            SourceKind::LegacyV1 => "legacy_v1",
            SourceKind::LocalCache => "local_cache",
            SourceKind::Mock => "mock",
        };
        write!(f, "{}", name)
    }
}
