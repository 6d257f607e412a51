use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::mapper::LocalMapper;
use super::models::*;
use crate::{
    modules::{
        catalog::domain::entities::{CanonicalAnime, CanonicalEpisode, ReleaseDetails},
        provider::{
            domain::{entities::ProviderConfig, repositories::CatalogSource, SearchFilters},
            infrastructure::http_client::UpstreamClient,
        },
    },
    shared::{
        domain::value_objects::SourceKind,
        errors::{AppError, AppResult},
        utils::lenient::SkipInvalid,
    },
};

/// Catalog served by our own backend, used as the last live source
pub struct LocalAdapter {
    http_client: UpstreamClient,
    mapper: LocalMapper,
    page_size: u32,
}

impl LocalAdapter {
    pub fn new(config: &ProviderConfig) -> AppResult<Self> {
        Ok(Self {
            http_client: UpstreamClient::from_config(config)?,
            mapper: LocalMapper::new(&config.asset_host),
            page_size: config.page_size,
        })
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(http_client: UpstreamClient, asset_host: &str) -> Self {
        Self {
            http_client,
            mapper: LocalMapper::new(asset_host),
            page_size: 20,
        }
    }

    /// Unwrap `{ success, data }`; `success: false` is an upstream failure
    fn open<T>(envelope: LocalEnvelope<T>) -> AppResult<Option<T>> {
        if envelope.is_failure() {
            return Err(AppError::UpstreamError {
                status: 200,
                message: envelope.failure_message(),
            });
        }
        Ok(envelope.data)
    }

    async fn get_list<T>(&self, path: &str, params: &[(String, String)]) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let envelope: LocalEnvelope<SkipInvalid<T>> =
            self.http_client.get_json(path, params).await?;

        match Self::open(envelope)? {
            Some(items) => Ok(items.into_inner()),
            None => Err(AppError::ParseError(format!(
                "Local catalog response for {} has no data",
                path
            ))),
        }
    }

    async fn get_item<T>(&self, path: &str) -> AppResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let envelope: Option<LocalEnvelope<T>> = self.http_client.get_optional(path, &[]).await?;
        match envelope {
            Some(envelope) => Self::open(envelope),
            None => Ok(None),
        }
    }

    pub async fn fetch_popular(&self, count: u32) -> AppResult<Vec<LocalAnime>> {
        log::info!("Local: Getting {} popular anime", count);
        let records = self
            .get_list("anime/popular", &[("limit".to_string(), count.to_string())])
            .await?;
        log::info!("Local: Found {} popular anime", records.len());
        Ok(records)
    }

    pub async fn fetch_latest(&self, count: u32) -> AppResult<Vec<LocalAnime>> {
        log::info!("Local: Getting {} anime with new episodes", count);
        let records = self
            .get_list(
                "anime/new-episodes",
                &[("limit".to_string(), count.to_string())],
            )
            .await?;
        log::info!("Local: Found {} anime with new episodes", records.len());
        Ok(records)
    }

    pub async fn fetch_search(
        &self,
        query: &str,
        filters: &SearchFilters,
        default_limit: u32,
    ) -> AppResult<Vec<LocalAnime>> {
        let limit = filters.limit_or(default_limit);
        log::info!("Local: Searching for '{}' (limit: {})", query, limit);

        let mut params = vec![
            ("q".to_string(), query.to_string()),
            ("limit".to_string(), limit.to_string()),
            ("page".to_string(), filters.page_or_first().to_string()),
        ];
        params.extend(filters.to_query_params());

        let records = self.get_list("anime/search", &params).await?;
        log::info!("Local: Found {} results for '{}'", records.len(), query);
        Ok(records)
    }

    pub async fn fetch_catalog(
        &self,
        filters: &SearchFilters,
        default_limit: u32,
    ) -> AppResult<Vec<LocalAnime>> {
        let limit = filters.limit_or(default_limit);
        log::info!("Local: Browsing catalog (limit: {})", limit);

        let mut params = vec![
            ("limit".to_string(), limit.to_string()),
            ("page".to_string(), filters.page_or_first().to_string()),
        ];
        params.extend(filters.to_query_params());

        let records = self.get_list("anime/catalog", &params).await?;
        log::info!("Local: Found {} catalog entries", records.len());
        Ok(records)
    }

    pub async fn fetch_genres(&self) -> AppResult<Vec<LocalGenre>> {
        log::info!("Local: Getting genres");
        self.get_list("anime/genres", &[]).await
    }

    pub async fn fetch_release(&self, id_or_alias: &str) -> AppResult<Option<LocalAnime>> {
        log::info!("Local: Getting anime '{}'", id_or_alias);
        self.get_item(&format!("anime/{}", urlencoding::encode(id_or_alias)))
            .await
    }

    pub async fn fetch_episode(&self, episode_id: &str) -> AppResult<Option<LocalEpisode>> {
        log::info!("Local: Getting episode '{}'", episode_id);
        self.get_item(&format!("episode/{}", urlencoding::encode(episode_id)))
            .await
    }
}

#[async_trait]
impl CatalogSource for LocalAdapter {
    fn kind(&self) -> SourceKind {
        SourceKind::LocalCache
    }

    async fn popular(&self, count: u32) -> AppResult<Vec<CanonicalAnime>> {
        let records = self.fetch_popular(count).await?;
        Ok(self.mapper.map_anime_list(&records))
    }

    async fn latest(&self, count: u32) -> AppResult<Vec<CanonicalAnime>> {
        let records = self.fetch_latest(count).await?;
        Ok(self.mapper.map_anime_list(&records))
    }

    async fn search(&self, query: &str, filters: &SearchFilters) -> AppResult<Vec<CanonicalAnime>> {
        let records = self.fetch_search(query, filters, self.page_size).await?;
        Ok(self.mapper.map_anime_list(&records))
    }

    async fn browse(&self, filters: &SearchFilters) -> AppResult<Vec<CanonicalAnime>> {
        let records = self.fetch_catalog(filters, self.page_size).await?;
        Ok(self.mapper.map_anime_list(&records))
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
        let record = match self.fetch_release(id_or_alias).await? {
            Some(record) => record,
            None => return Ok(None),
        };

        let anime = self.mapper.map_anime(&record);
        let episodes = if include_episodes {
            self.mapper
                .map_episodes(&record.episode_list, Some(anime.id.as_str()))
        } else {
            Vec::new()
        };

        Ok(Some(ReleaseDetails::new(anime, episodes)))
    }

    async fn episode(&self, episode_id: &str) -> AppResult<Option<CanonicalEpisode>> {
        let record = self.fetch_episode(episode_id).await?;
        Ok(record.map(|r| self.mapper.map_episode(&r, None)))
    }
}
