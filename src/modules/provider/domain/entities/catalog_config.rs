use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::provider_config::ProviderConfig;
use crate::modules::catalog::domain::value_objects::VideoQuality;
use crate::shared::domain::value_objects::SourceKind;
use crate::shared::errors::{AppError, AppResult};

/// Upstream API generation treated as primary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    #[default]
    V2,
    V1,
}

impl Generation {
    pub fn source(&self) -> SourceKind {
        match self {
            Generation::V2 => SourceKind::PrimaryV2,
            Generation::V1 => SourceKind::LegacyV1,
        }
    }

    pub fn other(&self) -> Generation {
        match self {
            Generation::V2 => Generation::V1,
            Generation::V1 => Generation::V2,
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generation::V2 => write!(f, "v2"),
            Generation::V1 => write!(f, "v1"),
        }
    }
}

impl FromStr for Generation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v2" | "2" => Ok(Generation::V2),
            "v1" | "1" => Ok(Generation::V1),
            other => Err(AppError::ConfigurationError(format!(
                "CATALOG_PRIMARY_GENERATION must be v2 or v1, got '{}'",
                other
            ))),
        }
    }
}

/// Knobs the resolution pipeline reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    pub primary_generation: Generation,
    pub homepage_count: u32,
    pub search_limit: u32,
    pub default_quality: VideoQuality,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            primary_generation: Generation::V2,
            homepage_count: 12,
            search_limit: 20,
            default_quality: VideoQuality::Q720,
        }
    }
}

/// Whole catalog configuration, fixed after startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub primary_v2: ProviderConfig,
    pub legacy_v1: ProviderConfig,
    pub local: ProviderConfig,
    pub settings: CatalogSettings,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            primary_v2: ProviderConfig::new(SourceKind::PrimaryV2),
            legacy_v1: ProviderConfig::new(SourceKind::LegacyV1),
            local: ProviderConfig::new(SourceKind::LocalCache),
            settings: CatalogSettings::default(),
        }
    }
}

impl CatalogConfig {
    /// Read the process environment (call `dotenvy::dotenv()` first to pick up `.env`)
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        config.primary_v2 = with_provider_env(config.primary_v2, "ANILIBERTY", &get)?;
        config.legacy_v1 = with_provider_env(config.legacy_v1, "ANILIBRIA_V1", &get)?;
        config.local = with_provider_env(config.local, "LOCAL_API", &get)?;

        if let Some(generation) = get("CATALOG_PRIMARY_GENERATION") {
            config.settings.primary_generation = generation.parse()?;
        }
        if let Some(count) = get("CATALOG_HOMEPAGE_COUNT") {
            config.settings.homepage_count = parse_number("CATALOG_HOMEPAGE_COUNT", &count)?;
        }
        if let Some(limit) = get("CATALOG_SEARCH_LIMIT") {
            config.settings.search_limit = parse_number("CATALOG_SEARCH_LIMIT", &limit)?;
        }
        if let Some(quality) = get("CATALOG_DEFAULT_QUALITY") {
            config.settings.default_quality = quality.parse().map_err(|_| {
                AppError::ConfigurationError(format!(
                    "CATALOG_DEFAULT_QUALITY must be 480, 720 or 1080, got '{}'",
                    quality
                ))
            })?;
        }

        Ok(config)
    }

    pub fn provider(&self, source: SourceKind) -> Option<&ProviderConfig> {
        match source {
            SourceKind::PrimaryV2 => Some(&self.primary_v2),
            SourceKind::LegacyV1 => Some(&self.legacy_v1),
            SourceKind::LocalCache => Some(&self.local),
            SourceKind::Mock => None,
        }
    }

    /// Enabled upstream generations, primary first
    pub fn ordered_upstreams(&self) -> Vec<&ProviderConfig> {
        let primary = self.settings.primary_generation;
        [primary.source(), primary.other().source()]
            .into_iter()
            .filter_map(|source| self.provider(source))
            .filter(|config| config.is_available())
            .collect()
    }

    /// Enabled sources in fallback order: primary, secondary, local
    pub fn ordered_sources(&self) -> Vec<&ProviderConfig> {
        let mut sources = self.ordered_upstreams();
        if self.local.is_available() {
            sources.push(&self.local);
        }
        sources
    }

    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }
}

fn with_provider_env<G>(
    mut config: ProviderConfig,
    prefix: &str,
    get: &G,
) -> AppResult<ProviderConfig>
where
    G: Fn(&str) -> Option<String>,
{
    // LOCAL_API_BASE rather than LOCAL_API_API_BASE
    let base_key = if prefix.ends_with("_API") {
        format!("{}_BASE", prefix)
    } else {
        format!("{}_API_BASE", prefix)
    };

    if let Some(base_url) = get(&base_key) {
        config = config.with_base_url(base_url);
    }
    if let Some(asset_host) = get(&format!("{}_ASSET_HOST", prefix)) {
        config = config.with_asset_host(asset_host);
    }

    let timeout_key = format!("{}_TIMEOUT_SECS", prefix);
    if let Some(timeout) = get(&timeout_key) {
        let seconds: u64 = parse_number(&timeout_key, &timeout)?;
        if seconds == 0 {
            return Err(AppError::ConfigurationError(format!(
                "{} must be greater than zero",
                timeout_key
            )));
        }
        config = config.with_timeout(seconds);
    }

    let enabled_key = format!("{}_ENABLED", prefix);
    if let Some(enabled) = get(&enabled_key) {
        config = config.with_enabled(parse_flag(&enabled_key, &enabled)?);
    }

    Ok(config)
}

fn parse_number<N: FromStr>(key: &str, value: &str) -> AppResult<N> {
    value.parse().map_err(|_| {
        AppError::ConfigurationError(format!("{} must be a positive integer, got '{}'", key, value))
    })
}

fn parse_flag(key: &str, value: &str) -> AppResult<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::ConfigurationError(format!(
            "{} must be true or false, got '{}'",
            key, value
        ))),
    }
}
