use super::models::{Episode, Genre, Image, Release};
use crate::modules::catalog::domain::{
    entities::{
        episode_title, genre_names, non_blank, parse_timestamp, resolve_title, CanonicalAnime,
        CanonicalEpisode, ExternalPlayerIds,
    },
    value_objects::{QualityMap, ReleaseStatus, TimeRange},
};
use crate::shared::utils::lenient::absolute_url;

/// Normalizes AniLiberty releases and episodes into the canonical shape.
///
/// Pure: the same raw record always yields the same canonical value.
#[derive(Debug, Clone)]
pub struct LibertyMapper {
    asset_host: String,
}

impl LibertyMapper {
    pub fn new(asset_host: &str) -> Self {
        Self {
            asset_host: asset_host.trim_end_matches('/').to_string(),
        }
    }

    pub fn map_release(&self, release: &Release) -> CanonicalAnime {
        let name = release.name.clone().unwrap_or_default();
        let mut anime = CanonicalAnime::new(
            release.id.as_string(),
            resolve_title(name.main.as_deref(), name.english.as_deref()),
        );

        anime.title_english = non_blank(name.english.as_deref());
        anime.title_alternative = non_blank(name.alternative.as_deref());
        anime.alias = non_blank(release.alias.as_deref());
        anime.year = release.year;
        anime.anime_type = release.release_type.as_ref().and_then(|t| {
            non_blank(t.description.as_deref()).or_else(|| t.value_text())
        });
        anime.status = ReleaseStatus::from_ongoing_flag(release.is_ongoing);
        anime.poster_url = release
            .poster
            .as_ref()
            .and_then(|poster| self.image_url(poster));
        anime.description = non_blank(release.description.as_deref());
        anime.episode_count = release.episodes_total;
        anime.genres = self.map_genres(&release.genres);
        // AniLiberty publishes no rating
        anime.rating = None;
        anime.age_rating = release
            .age_rating
            .as_ref()
            .and_then(|r| non_blank(r.label.as_deref()).or_else(|| r.value_text()));
        anime.season = release
            .season
            .as_ref()
            .and_then(|s| non_blank(s.description.as_deref()).or_else(|| s.value_text()));
        anime.duration_minutes = release.average_duration_of_episode;
        anime.publish_day = release
            .publish_day
            .as_ref()
            .and_then(|d| non_blank(d.description.as_deref()));
        anime.is_in_production = release.is_in_production;
        anime.favorites = release.added_in_users_favorites;
        anime.fresh_at = parse_timestamp(release.fresh_at.as_deref());
        anime.updated_at = parse_timestamp(release.updated_at.as_deref());

        anime
    }

    pub fn map_releases(&self, releases: &[Release]) -> Vec<CanonicalAnime> {
        releases.iter().map(|r| self.map_release(r)).collect()
    }

    pub fn map_genres(&self, genres: &[Genre]) -> Vec<String> {
        genre_names(genres.iter().map(|genre| genre.name.as_str()))
    }

    pub fn map_episode(&self, episode: &Episode, release_id: Option<&str>) -> CanonicalEpisode {
        let mut canonical = CanonicalEpisode::new(episode.id.as_string(), episode.ordinal);

        canonical.sort_order = episode.sort_order;
        canonical.title = episode_title(
            episode.name.as_deref(),
            episode.name_english.as_deref(),
            episode.ordinal,
        );
        canonical.title_english = non_blank(episode.name_english.as_deref());
        canonical.duration_seconds = episode.duration;
        canonical.preview_url = episode
            .preview
            .as_ref()
            .and_then(|preview| self.image_url(preview));
        canonical.video_urls = QualityMap::new(
            self.video_url(episode.hls_480.as_deref()),
            self.video_url(episode.hls_720.as_deref()),
            self.video_url(episode.hls_1080.as_deref()),
        );
        canonical.opening = episode
            .opening
            .as_ref()
            .and_then(|skip| TimeRange::from_bounds(skip.start, skip.stop));
        canonical.ending = episode
            .ending
            .as_ref()
            .and_then(|skip| TimeRange::from_bounds(skip.start, skip.stop));
        canonical.external_player_ids = ExternalPlayerIds::from_parts(
            non_blank(episode.rutube_id.as_deref()),
            non_blank(episode.youtube_id.as_deref()),
        );
        canonical.release_id = episode
            .release_id
            .as_ref()
            .map(|id| id.as_string())
            .or_else(|| release_id.map(str::to_string));
        canonical.updated_at = parse_timestamp(episode.updated_at.as_deref());

        canonical
    }

    pub fn map_episodes(&self, episodes: &[Episode], release_id: Option<&str>) -> Vec<CanonicalEpisode> {
        episodes
            .iter()
            .map(|e| self.map_episode(e, release_id))
            .collect()
    }

    /// optimized.preview → preview → src → thumbnail, joined with the asset host
    pub fn image_url(&self, image: &Image) -> Option<String> {
        let optimized_preview = image.optimized.as_ref().and_then(|o| o.preview.as_deref());

        [
            optimized_preview,
            image.preview.as_deref(),
            image.src.as_deref(),
            image.thumbnail.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find_map(|path| absolute_url(&self.asset_host, path))
    }

    fn video_url(&self, path: Option<&str>) -> Option<String> {
        path.and_then(|p| absolute_url(&self.asset_host, p))
    }
}
