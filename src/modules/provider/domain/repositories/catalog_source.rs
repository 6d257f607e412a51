use async_trait::async_trait;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::{
    modules::{
        catalog::domain::entities::{CanonicalAnime, CanonicalEpisode, ReleaseDetails},
        provider::domain::value_objects::SearchFilters,
    },
    shared::{domain::value_objects::SourceKind, errors::AppResult},
};

/// Port the resolution pipeline talks to.
///
/// Each implementation wraps one adapter (raw HTTP fetch) and its normalizer, so
/// every method answers in the canonical shape. Failures are classified with
/// `AppError` transport variants; "not there" answers are `Ok(None)` / empty lists.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Which source this is, for `ResolutionResult::source_used`
    fn kind(&self) -> SourceKind;

    /// Most popular releases
    async fn popular(&self, count: u32) -> AppResult<Vec<CanonicalAnime>>;

    /// Most recently updated releases
    async fn latest(&self, count: u32) -> AppResult<Vec<CanonicalAnime>>;

    /// Text search narrowed by filters
    async fn search(&self, query: &str, filters: &SearchFilters) -> AppResult<Vec<CanonicalAnime>>;

    /// Catalog listing narrowed by filters alone, without a text query
    async fn browse(&self, filters: &SearchFilters) -> AppResult<Vec<CanonicalAnime>>;

    /// Genre names the source can filter by
    async fn genres(&self) -> AppResult<Vec<String>>;

    /// One release by numeric id or alias, optionally with its episodes
    async fn release(
        &self,
        id_or_alias: &str,
        include_episodes: bool,
    ) -> AppResult<Option<ReleaseDetails>>;

    /// One episode by its upstream id
    async fn episode(&self, episode_id: &str) -> AppResult<Option<CanonicalEpisode>>;
}

/// Live sources available to the pipeline
#[derive(Clone, Default)]
pub struct SourceSet {
    /// Upstream generations, primary first
    pub upstreams: Vec<Arc<dyn CatalogSource>>,
    /// Our own backend, tried after every upstream
    pub local: Option<Arc<dyn CatalogSource>>,
}

impl SourceSet {
    pub fn new(upstreams: Vec<Arc<dyn CatalogSource>>, local: Option<Arc<dyn CatalogSource>>) -> Self {
        Self { upstreams, local }
    }

    pub fn primary(&self) -> Option<&Arc<dyn CatalogSource>> {
        self.upstreams.first()
    }

    /// Every source in fallback order
    pub fn all(&self) -> Vec<Arc<dyn CatalogSource>> {
        self.upstreams
            .iter()
            .chain(self.local.iter())
            .cloned()
            .collect()
    }

    pub fn kinds(&self) -> Vec<SourceKind> {
        self.all().iter().map(|source| source.kind()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.upstreams.is_empty() && self.local.is_none()
    }
}
