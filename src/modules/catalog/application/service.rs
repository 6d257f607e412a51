use futures::future::join_all;
use futures::FutureExt;
use std::sync::Arc;
use std::time::Instant;

use super::dto::{HomepageData, SourceStatus, StatusReport, StreamType, VideoResolution};
use crate::modules::catalog::domain::{
    entities::{CanonicalAnime, CanonicalEpisode, ReleaseDetails},
    services::{
        describe_failures, require_episode, AttemptFailure, ChainOutcome, EpisodeNumber,
        FallbackChain, Intent, ObserverSet, ResolutionContext, ResolutionObserver,
    },
    value_objects::{ResolutionResult, VideoQuality},
};
use crate::modules::catalog::infrastructure::mock_catalog;
use crate::modules::provider::{
    domain::{CatalogConfig, CatalogSettings, CatalogSource, SearchFilters, SourceSet},
    infrastructure::{create_sources, LogObserver, MetricsCollector},
};
use crate::modules::provider::infrastructure::monitoring::MetricsSnapshot;
use crate::shared::domain::value_objects::SourceKind;
use crate::shared::errors::{AppError, AppResult};

/// Entry point for every catalog read: homepage, search, details, episodes, video.
///
/// Each operation walks its own fallback chain over the configured sources and
/// reports every attempt to the registered observers.
pub struct CatalogService {
    sources: SourceSet,
    settings: CatalogSettings,
    metrics: Arc<MetricsCollector>,
    observers: ObserverSet,
}

impl CatalogService {
    pub fn new(sources: SourceSet, settings: CatalogSettings) -> Self {
        let metrics = Arc::new(MetricsCollector::new());
        let observers = ObserverSet::new()
            .with(Arc::new(LogObserver))
            .with(metrics.clone());

        Self {
            sources,
            settings,
            metrics,
            observers,
        }
    }

    /// Build every enabled adapter from configuration
    pub fn from_config(config: &CatalogConfig) -> AppResult<Self> {
        let sources = create_sources(config)?;
        Ok(Self::new(sources, config.settings().clone()))
    }

    pub fn with_observer(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    fn chain(&self, steps: Vec<Arc<dyn CatalogSource>>) -> FallbackChain {
        FallbackChain::new(steps, Arc::new(self.observers.clone()))
    }

    /// Primary generation, then the local backend
    fn search_steps(&self) -> Vec<Arc<dyn CatalogSource>> {
        self.sources
            .primary()
            .cloned()
            .into_iter()
            .chain(self.sources.local.clone())
            .collect()
    }

    fn primary_steps(&self) -> Vec<Arc<dyn CatalogSource>> {
        self.sources.primary().cloned().into_iter().collect()
    }

    /// Popular and latest slots, resolved concurrently.
    ///
    /// Never fails. When both slots end empty the built-in mock catalog is
    /// served in both.
    pub async fn resolve_homepage(&self) -> HomepageData {
        let count = self.settings.homepage_count;
        let popular_ctx = ResolutionContext::new(Intent::Homepage, "popular");
        let latest_ctx = ResolutionContext::new(Intent::Homepage, "latest");
        let popular_chain = self.chain(self.sources.all());
        let latest_chain = self.chain(self.sources.all());

        let (popular, latest) = futures::join!(
            popular_chain.run(&popular_ctx, move |source| {
                async move { source.popular(count).await }.boxed()
            }),
            latest_chain.run(&latest_ctx, move |source| {
                async move { source.latest(count).await }.boxed()
            }),
        );

        let popular = slot_result(popular);
        let latest = slot_result(latest);

        if popular.data.is_empty() && latest.data.is_empty() {
            log::warn!("Every homepage source came back empty, serving the mock catalog");
            self.observers.on_mock_substituted(&popular_ctx);
            self.observers.on_mock_substituted(&latest_ctx);

            let mock = mock_catalog();
            return HomepageData {
                popular: ResolutionResult::resolved(mock.clone(), SourceKind::Mock),
                latest: ResolutionResult::resolved(mock, SourceKind::Mock),
            };
        }

        HomepageData { popular, latest }
    }

    pub async fn search(&self, query: &str) -> AppResult<Vec<CanonicalAnime>> {
        self.filtered_search(query, &SearchFilters::default()).await
    }

    /// Text search with optional filters. A blank query returns nothing without
    /// touching any source.
    pub async fn filtered_search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> AppResult<Vec<CanonicalAnime>> {
        let query = query.trim();
        if query.is_empty() {
            log::debug!("Blank search query, skipping sources");
            return Ok(Vec::new());
        }

        let mut filters = filters.clone();
        if filters.limit.is_none() {
            filters.limit = Some(self.settings.search_limit);
        }

        let intent = if filters.is_empty() {
            Intent::Search
        } else {
            Intent::FilteredSearch
        };
        let ctx = ResolutionContext::new(intent, "results");
        let query = query.to_string();

        let outcome = self
            .chain(self.search_steps())
            .run(&ctx, |source| {
                let query = query.clone();
                let filters = filters.clone();
                async move { source.search(&query, &filters).await }.boxed()
            })
            .await;

        listing_or_exhausted(outcome, &format!("Search '{}'", query))
    }

    /// Catalog page narrowed by filters only. At least one filter is required;
    /// paging alone does not count.
    pub async fn browse(&self, filters: &SearchFilters) -> AppResult<Vec<CanonicalAnime>> {
        if filters.is_empty() {
            return Err(AppError::InvalidInput(
                "Catalog browsing needs at least one filter".to_string(),
            ));
        }

        let mut filters = filters.clone();
        if filters.limit.is_none() {
            filters.limit = Some(self.settings.search_limit);
        }
        let ctx = ResolutionContext::new(Intent::Browse, "catalog");

        let outcome = self
            .chain(self.search_steps())
            .run(&ctx, |source| {
                let filters = filters.clone();
                async move { source.browse(&filters).await }.boxed()
            })
            .await;

        listing_or_exhausted(outcome, "Catalog browse")
    }

    /// Genre names to filter by, from the primary generation or the local backend
    pub async fn genres(&self) -> AppResult<Vec<String>> {
        let ctx = ResolutionContext::new(Intent::Genres, "genres");

        let outcome = self
            .chain(self.search_steps())
            .run(&ctx, |source| async move { source.genres().await }.boxed())
            .await;

        listing_or_exhausted(outcome, "Genre list")
    }

    /// Release card with its episode list, from the upstream generations
    pub async fn get_anime_details(
        &self,
        id_or_alias: &str,
    ) -> AppResult<ResolutionResult<ReleaseDetails>> {
        let id = require_id(id_or_alias, "Anime id")?;
        let ctx = ResolutionContext::new(Intent::Details, "release");

        let outcome = self
            .chain(self.sources.upstreams.clone())
            .run(&ctx, |source| {
                let id = id.clone();
                async move { source.release(&id, true).await }.boxed()
            })
            .await;

        accepted_or_lookup_error(outcome, || format!("Anime {}", id))
    }

    /// One episode of a release, matched by its number ("3", "2.5")
    pub async fn get_episode(&self, anime_id: &str, number: &str) -> AppResult<CanonicalEpisode> {
        self.find_episode(Intent::Episode, anime_id, number).await
    }

    /// Episode addressed by its own id
    pub async fn get_episode_by_id(
        &self,
        episode_id: &str,
    ) -> AppResult<ResolutionResult<CanonicalEpisode>> {
        let id = require_id(episode_id, "Episode id")?;
        let ctx = ResolutionContext::new(Intent::Episode, "episode");

        let outcome = self
            .chain(self.primary_steps())
            .run(&ctx, |source| {
                let id = id.clone();
                async move { source.episode(&id).await }.boxed()
            })
            .await;

        accepted_or_lookup_error(outcome, || format!("Episode {}", id))
    }

    /// HLS stream for an episode in the preferred quality, or the best encoded one.
    pub async fn resolve_episode_video(
        &self,
        anime_id: &str,
        number: &str,
        preferred: Option<VideoQuality>,
    ) -> AppResult<VideoResolution> {
        let episode = self.find_episode(Intent::Video, anime_id, number).await?;
        let wanted = preferred.unwrap_or(self.settings.default_quality);

        let (quality, url) = episode.video_urls.select(wanted).ok_or_else(|| {
            AppError::NoPlayableSource(format!(
                "Episode {} of anime {} has no HLS stream",
                number, anime_id
            ))
        })?;
        let url = url.to_string();

        if quality != wanted {
            log::info!(
                "Quality {} is not encoded for episode {}, using {}",
                wanted,
                episode.id,
                quality
            );
        }

        Ok(VideoResolution {
            url,
            quality,
            available_qualities: episode.video_urls.available(),
            stream_type: StreamType::Hls,
            episode,
        })
    }

    async fn find_episode(
        &self,
        intent: Intent,
        anime_id: &str,
        number: &str,
    ) -> AppResult<CanonicalEpisode> {
        let anime_id = require_id(anime_id, "Anime id")?;
        let wanted: EpisodeNumber = number.parse()?;
        let ctx = ResolutionContext::new(intent, "release");

        let outcome = self
            .chain(self.primary_steps())
            .run(&ctx, |source| {
                let id = anime_id.clone();
                async move { source.release(&id, true).await }.boxed()
            })
            .await;

        let details = accepted_or_lookup_error(outcome, || format!("Anime {}", anime_id))?;
        require_episode(&details.data.episodes, &wanted, &anime_id)
    }

    /// Check every configured source with a one-item listing
    pub async fn check_status(&self) -> StatusReport {
        let checks = self.sources.all().into_iter().map(|source| async move {
            let started = Instant::now();
            let outcome = source.latest(1).await;
            let latency_ms = started.elapsed().as_millis() as u64;

            match outcome {
                Ok(_) => SourceStatus {
                    source: source.kind(),
                    reachable: true,
                    latency_ms,
                    error: None,
                },
                Err(e) => {
                    log::warn!("{} is unreachable: {}", source.kind(), e);
                    SourceStatus {
                        source: source.kind(),
                        reachable: false,
                        latency_ms,
                        error: Some(e.to_string()),
                    }
                }
            }
        });

        let report = StatusReport::new(join_all(checks).await);
        log::info!(
            "Source status: {}/{} reachable",
            report.healthy_sources,
            report.sources.len()
        );
        report
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

fn require_id(value: &str, what: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::InvalidInput(format!("{} must not be empty", what)));
    }
    Ok(value.to_string())
}

/// Homepage slot: the accepted answer, else whatever the chain ended with
fn slot_result(outcome: ChainOutcome<Vec<CanonicalAnime>>) -> ResolutionResult<Vec<CanonicalAnime>> {
    match outcome {
        ChainOutcome::Accepted(result) => result,
        ChainOutcome::Exhausted {
            terminal: Some((source, data)),
            ..
        } => ResolutionResult::unresolved(data, source),
        ChainOutcome::Exhausted { failures, .. } => {
            ResolutionResult::unresolved(Vec::new(), last_source(&failures))
        }
    }
}

fn last_source(failures: &[AttemptFailure]) -> SourceKind {
    failures
        .last()
        .map(|failure| failure.source)
        .unwrap_or(SourceKind::Mock)
}

/// List intents: the accepted answer, or an empty list when the last source
/// answered with nothing. Only transport failures everywhere are an error.
fn listing_or_exhausted<T>(outcome: ChainOutcome<Vec<T>>, what: &str) -> AppResult<Vec<T>> {
    match outcome {
        ChainOutcome::Accepted(result) => {
            log::info!(
                "{} resolved by {} with {} results",
                what,
                result.source_used,
                result.data.len()
            );
            Ok(result.data)
        }
        ChainOutcome::Exhausted {
            terminal: Some((_, data)),
            ..
        } => Ok(data),
        ChainOutcome::Exhausted { failures, .. } => {
            Err(AppError::ChainExhausted(describe_failures(&failures)))
        }
    }
}

/// Single-record lookups: a source answering "no such record" makes the chain a
/// `NotFound`, transport failures everywhere make it `ChainExhausted`.
fn accepted_or_lookup_error<T>(
    outcome: ChainOutcome<Option<T>>,
    describe: impl FnOnce() -> String,
) -> AppResult<ResolutionResult<T>> {
    match outcome {
        ChainOutcome::Accepted(result) => match result.data {
            Some(data) => Ok(ResolutionResult::resolved(data, result.source_used)),
            None => Err(AppError::NotFound(describe())),
        },
        ChainOutcome::Exhausted { failures, .. } => {
            let answered_missing = failures
                .iter()
                .any(|failure| matches!(failure.error, AppError::EmptyResult(_)));
            if answered_missing {
                Err(AppError::NotFound(describe()))
            } else {
                Err(AppError::ChainExhausted(describe_failures(&failures)))
            }
        }
    }
}
