use async_trait::async_trait;

use super::mapper::LibriaMapper;
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

/// AniLibria API adapter (`/api/v1`, `limit` pagination)
pub struct LibriaAdapter {
    http_client: UpstreamClient,
    mapper: LibriaMapper,
    page_size: u32,
}

impl LibriaAdapter {
    pub fn new(config: &ProviderConfig) -> AppResult<Self> {
        Ok(Self {
            http_client: UpstreamClient::from_config(config)?,
            mapper: LibriaMapper::new(&config.asset_host),
            page_size: config.page_size,
        })
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(http_client: UpstreamClient, asset_host: &str) -> Self {
        Self {
            http_client,
            mapper: LibriaMapper::new(asset_host),
            page_size: 20,
        }
    }

    fn limit_param(limit: u32) -> (String, String) {
        ("limit".to_string(), limit.to_string())
    }

    pub async fn fetch_popular(&self, count: u32) -> AppResult<Vec<Title>> {
        log::info!("AniLibria v1: Getting {} popular titles", count);

        let response: LibriaList<Title> = self
            .http_client
            .get_json("anime/popular", &[Self::limit_param(count)])
            .await?;

        let titles = response.into_items();
        log::info!("AniLibria v1: Found {} popular titles", titles.len());
        Ok(titles)
    }

    pub async fn fetch_latest(&self, count: u32) -> AppResult<Vec<Title>> {
        log::info!("AniLibria v1: Getting {} updated titles", count);

        let response: LibriaList<Title> = self
            .http_client
            .get_json("anime/updates", &[Self::limit_param(count)])
            .await?;

        let titles = response.into_items();
        log::info!("AniLibria v1: Found {} updated titles", titles.len());
        Ok(titles)
    }

    pub async fn fetch_search(
        &self,
        query: &str,
        filters: &SearchFilters,
        default_limit: u32,
    ) -> AppResult<Vec<Title>> {
        let limit = filters.limit_or(default_limit);
        log::info!("AniLibria v1: Searching for '{}' (limit: {})", query, limit);

        let mut params = vec![
            ("search".to_string(), query.to_string()),
            Self::limit_param(limit),
        ];
        if filters.page_or_first() > 1 {
            params.push(("page".to_string(), filters.page_or_first().to_string()));
        }
        params.extend(filters.to_query_params());

        let response: LibriaList<Title> =
            self.http_client.get_json("anime/search", &params).await?;

        let titles = response.into_items();
        log::info!("AniLibria v1: Found {} results for '{}'", titles.len(), query);
        Ok(titles)
    }

    pub async fn fetch_catalog(
        &self,
        filters: &SearchFilters,
        default_limit: u32,
    ) -> AppResult<Vec<Title>> {
        let limit = filters.limit_or(default_limit);
        log::info!("AniLibria v1: Browsing catalog (limit: {})", limit);

        let mut params = vec![Self::limit_param(limit)];
        if filters.page_or_first() > 1 {
            params.push(("page".to_string(), filters.page_or_first().to_string()));
        }
        params.extend(filters.to_query_params());

        let response: LibriaList<Title> =
            self.http_client.get_json("anime/catalog", &params).await?;

        let titles = response.into_items();
        log::info!("AniLibria v1: Found {} catalog titles", titles.len());
        Ok(titles)
    }

    pub async fn fetch_genres(&self) -> AppResult<Vec<String>> {
        log::info!("AniLibria v1: Getting genres");

        let response: LibriaList<String> = self.http_client.get_json("genres", &[]).await?;
        Ok(response.into_items())
    }

    pub async fn fetch_release(
        &self,
        id_or_alias: &str,
        include_player: bool,
    ) -> AppResult<Option<Title>> {
        log::info!("AniLibria v1: Getting title '{}'", id_or_alias);

        let path = format!("anime/{}", urlencoding::encode(id_or_alias));
        let params = if include_player {
            vec![("include".to_string(), "player".to_string())]
        } else {
            Vec::new()
        };

        let response: Option<LibriaItem<Title>> =
            self.http_client.get_optional(&path, &params).await?;
        Ok(response.map(|item| item.data))
    }

    pub async fn fetch_episode(&self, episode_id: &str) -> AppResult<Option<PlayerEpisode>> {
        log::info!("AniLibria v1: Getting episode '{}'", episode_id);

        let path = format!("episodes/{}", urlencoding::encode(episode_id));
        let response: Option<LibriaItem<PlayerEpisode>> =
            self.http_client.get_optional(&path, &[]).await?;
        Ok(response.map(|item| item.data))
    }
}

#[async_trait]
impl CatalogSource for LibriaAdapter {
    fn kind(&self) -> SourceKind {
        SourceKind::LegacyV1
    }

    async fn popular(&self, count: u32) -> AppResult<Vec<CanonicalAnime>> {
        let titles = self.fetch_popular(count).await?;
        Ok(self.mapper.map_titles(&titles))
    }

    async fn latest(&self, count: u32) -> AppResult<Vec<CanonicalAnime>> {
        let titles = self.fetch_latest(count).await?;
        Ok(self.mapper.map_titles(&titles))
    }

    async fn search(&self, query: &str, filters: &SearchFilters) -> AppResult<Vec<CanonicalAnime>> {
        let titles = self.fetch_search(query, filters, self.page_size).await?;
        Ok(self.mapper.map_titles(&titles))
    }

    async fn browse(&self, filters: &SearchFilters) -> AppResult<Vec<CanonicalAnime>> {
        let titles = self.fetch_catalog(filters, self.page_size).await?;
        Ok(self.mapper.map_titles(&titles))
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
        let title = match self.fetch_release(id_or_alias, include_episodes).await? {
            Some(title) => title,
            None => return Ok(None),
        };

        let episodes = if include_episodes {
            self.mapper.map_player_episodes(&title)
        } else {
            Vec::new()
        };

        Ok(Some(ReleaseDetails::new(
            self.mapper.map_title(&title),
            episodes,
        )))
    }

    async fn episode(&self, episode_id: &str) -> AppResult<Option<CanonicalEpisode>> {
        let episode = self.fetch_episode(episode_id).await?;
        Ok(episode.map(|e| self.mapper.map_episode(&e, None, None)))
    }
}
