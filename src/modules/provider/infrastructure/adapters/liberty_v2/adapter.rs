use async_trait::async_trait;

use super::mapper::LibertyMapper;
use super::models::*;
use crate::{
    modules::{
        catalog::domain::entities::{CanonicalAnime, CanonicalEpisode, ReleaseDetails},
        provider::{
            domain::{entities::ProviderConfig, repositories::CatalogSource, SearchFilters},
            infrastructure::http_client::UpstreamClient,
        },
    },
    shared::{domain::value_objects::SourceKind, errors::AppResult},
};

/// AniLiberty public API adapter (`/api`, `perPage` pagination)
pub struct LibertyAdapter {
    http_client: UpstreamClient,
    mapper: LibertyMapper,
    page_size: u32,
}

impl LibertyAdapter {
    pub fn new(config: &ProviderConfig) -> AppResult<Self> {
        Ok(Self {
            http_client: UpstreamClient::from_config(config)?,
            mapper: LibertyMapper::new(&config.asset_host),
            page_size: config.page_size,
        })
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(http_client: UpstreamClient, asset_host: &str) -> Self {
        Self {
            http_client,
            mapper: LibertyMapper::new(asset_host),
            page_size: 20,
        }
    }

    fn page_params(per_page: u32, page: u32) -> Vec<(String, String)> {
        vec![
            ("perPage".to_string(), per_page.to_string()),
            ("page".to_string(), page.to_string()),
        ]
    }
}

impl LibertyAdapter {
    // =============================================================================
    // RAW FETCHES
    // =============================================================================

    pub async fn fetch_popular(&self, count: u32) -> AppResult<Vec<Release>> {
        log::info!("AniLiberty: Getting {} popular releases", count);

        let response: LibertyList<Release> = self
            .http_client
            .get_json("anime/popular", &Self::page_params(count, 1))
            .await?;

        let releases = response.into_items();
        log::info!("AniLiberty: Found {} popular releases", releases.len());
        Ok(releases)
    }

    pub async fn fetch_latest(&self, count: u32) -> AppResult<Vec<Release>> {
        log::info!("AniLiberty: Getting {} latest releases", count);

        let response: LibertyList<Release> = self
            .http_client
            .get_json("releases", &Self::page_params(count, 1))
            .await?;

        let releases = response.into_items();
        log::info!("AniLiberty: Found {} latest releases", releases.len());
        Ok(releases)
    }

    pub async fn fetch_search(
        &self,
        query: &str,
        filters: &SearchFilters,
        default_limit: u32,
    ) -> AppResult<Vec<Release>> {
        let limit = filters.limit_or(default_limit);
        log::info!("AniLiberty: Searching for '{}' (limit: {})", query, limit);

        let mut params = vec![("search".to_string(), query.to_string())];
        params.extend(Self::page_params(limit, filters.page_or_first()));
        params.extend(filters.to_query_params());

        let response: LibertyList<Release> =
            self.http_client.get_json("anime/search", &params).await?;

        let releases = response.into_items();
        log::info!("AniLiberty: Found {} results for '{}'", releases.len(), query);
        Ok(releases)
    }

    pub async fn fetch_catalog(
        &self,
        filters: &SearchFilters,
        default_limit: u32,
    ) -> AppResult<Vec<Release>> {
        let limit = filters.limit_or(default_limit);
        log::info!("AniLiberty: Browsing catalog (limit: {})", limit);

        let mut params = Self::page_params(limit, filters.page_or_first());
        params.extend(filters.to_query_params());

        let response: LibertyList<Release> = self
            .http_client
            .get_json("anime/catalog/releases", &params)
            .await?;

        let releases = response.into_items();
        log::info!("AniLiberty: Found {} catalog releases", releases.len());
        Ok(releases)
    }

    pub async fn fetch_genres(&self) -> AppResult<Vec<Genre>> {
        log::info!("AniLiberty: Getting genre reference");

        let response: LibertyList<Genre> = self
            .http_client
            .get_json("anime/catalog/references/genres", &[])
            .await?;

        Ok(response.into_items())
    }

    pub async fn fetch_release(&self, id_or_alias: &str) -> AppResult<Option<Release>> {
        log::info!("AniLiberty: Getting release '{}'", id_or_alias);

        let path = format!("anime/{}", urlencoding::encode(id_or_alias));
        let response: Option<LibertyItem<Release>> =
            self.http_client.get_optional(&path, &[]).await?;

        Ok(response.map(LibertyItem::into_inner))
    }

    pub async fn fetch_release_episodes(&self, id_or_alias: &str) -> AppResult<Vec<Episode>> {
        log::info!("AniLiberty: Getting episodes for release '{}'", id_or_alias);

        let path = format!("anime/{}/episodes", urlencoding::encode(id_or_alias));
        let response: Option<LibertyList<Episode>> =
            self.http_client.get_optional(&path, &[]).await?;

        let episodes = response.map(LibertyList::into_items).unwrap_or_default();
        log::info!(
            "AniLiberty: Found {} episodes for release '{}'",
            episodes.len(),
            id_or_alias
        );
        Ok(episodes)
    }

    pub async fn fetch_episode(&self, episode_id: &str) -> AppResult<Option<Episode>> {
        log::info!("AniLiberty: Getting episode '{}'", episode_id);

        let path = format!("episodes/{}", urlencoding::encode(episode_id));
        let response: Option<LibertyItem<Episode>> =
            self.http_client.get_optional(&path, &[]).await?;

        Ok(response.map(LibertyItem::into_inner))
    }
}

#[async_trait]
impl CatalogSource for LibertyAdapter {
    fn kind(&self) -> SourceKind {
        SourceKind::PrimaryV2
    }

    async fn popular(&self, count: u32) -> AppResult<Vec<CanonicalAnime>> {
        let releases = self.fetch_popular(count).await?;
        Ok(self.mapper.map_releases(&releases))
    }

    async fn latest(&self, count: u32) -> AppResult<Vec<CanonicalAnime>> {
        let releases = self.fetch_latest(count).await?;
        Ok(self.mapper.map_releases(&releases))
    }

    async fn search(&self, query: &str, filters: &SearchFilters) -> AppResult<Vec<CanonicalAnime>> {
        let releases = self.fetch_search(query, filters, self.page_size).await?;
        Ok(self.mapper.map_releases(&releases))
    }

    async fn browse(&self, filters: &SearchFilters) -> AppResult<Vec<CanonicalAnime>> {
        let releases = self.fetch_catalog(filters, self.page_size).await?;
        Ok(self.mapper.map_releases(&releases))
    }

    async fn genres(&self) -> AppResult<Vec<String>> {
        let genres = self.fetch_genres().await?;
        Ok(self.mapper.map_genres(&genres))
    }

    async fn release(
        &self,
        id_or_alias: &str,
        include_episodes: bool,
    ) -> AppResult<Option<ReleaseDetails>> {
        let release = match self.fetch_release(id_or_alias).await? {
            Some(release) => release,
            None => return Ok(None),
        };

        let anime = self.mapper.map_release(&release);
        let mut episodes = self.mapper.map_episodes(&release.episodes, Some(anime.id.as_str()));

        if include_episodes && episodes.is_empty() {
            let raw = self.fetch_release_episodes(&anime.id).await?;
            episodes = self.mapper.map_episodes(&raw, Some(anime.id.as_str()));
        }

        Ok(Some(ReleaseDetails::new(anime, episodes)))
    }

    async fn episode(&self, episode_id: &str) -> AppResult<Option<CanonicalEpisode>> {
        let episode = self.fetch_episode(episode_id).await?;
        Ok(episode.map(|e| self.mapper.map_episode(&e, None)))
    }
}
