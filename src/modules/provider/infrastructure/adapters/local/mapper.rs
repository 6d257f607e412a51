use super::models::{LocalAnime, LocalEpisode, LocalGenre, LocalRange};
use crate::modules::catalog::domain::{
    entities::{
        episode_title, genre_names, non_blank, parse_timestamp, resolve_title, CanonicalAnime,
        CanonicalEpisode, ExternalPlayerIds,
    },
    value_objects::{QualityMap, ReleaseStatus, TimeRange},
};
use crate::shared::utils::lenient::absolute_url;

#[derive(Debug, Clone)]
pub struct LocalMapper {
    asset_host: String,
}

impl LocalMapper {
    pub fn new(asset_host: &str) -> Self {
        Self {
            asset_host: asset_host.trim_end_matches('/').to_string(),
        }
    }

    pub fn map_anime(&self, record: &LocalAnime) -> CanonicalAnime {
        let mut anime = CanonicalAnime::new(
            record.id.as_string(),
            resolve_title(record.title.as_deref(), record.title_english.as_deref()),
        );

        anime.title_english = non_blank(record.title_english.as_deref());
        anime.title_alternative = non_blank(record.title_alternative.as_deref());
        anime.alias = non_blank(record.alias.as_deref());
        anime.year = record.year;
        anime.anime_type = non_blank(record.anime_type.as_deref());
        anime.status = match non_blank(record.status.as_deref()) {
            Some(label) => ReleaseStatus::from_label(&label),
            None => ReleaseStatus::from_ongoing_flag(record.is_ongoing),
        };
        anime.poster_url = record
            .poster
            .as_deref()
            .and_then(|path| absolute_url(&self.asset_host, path));
        anime.description = non_blank(record.description.as_deref());
        anime.episode_count = record.episodes;
        anime.genres = genre_names(record.genres.iter().map(String::as_str));
        anime.rating = record.rating;
        anime.age_rating = non_blank(record.age_rating.as_deref());
        anime.season = non_blank(record.season.as_deref());
        anime.duration_minutes = record.duration;
        anime.publish_day = non_blank(record.publish_day.as_deref());
        anime.is_in_production = record.is_in_production;
        anime.favorites = record.favorites;
        anime.fresh_at = parse_timestamp(record.fresh_at.as_deref());
        anime.updated_at = parse_timestamp(record.updated_at.as_deref());

        anime
    }

    pub fn map_genres(&self, genres: &[LocalGenre]) -> Vec<String> {
        genre_names(genres.iter().map(LocalGenre::name))
    }

    pub fn map_anime_list(&self, records: &[LocalAnime]) -> Vec<CanonicalAnime> {
        records.iter().map(|r| self.map_anime(r)).collect()
    }

    pub fn map_episode(&self, record: &LocalEpisode, release_id: Option<&str>) -> CanonicalEpisode {
        let mut episode = CanonicalEpisode::new(record.id.as_string(), record.number);

        episode.sort_order = record.sort_order;
        episode.title = episode_title(
            record.title.as_deref(),
            record.title_english.as_deref(),
            record.number,
        );
        episode.title_english = non_blank(record.title_english.as_deref());
        episode.duration_seconds = record.duration;
        episode.preview_url = record
            .preview
            .as_deref()
            .and_then(|path| absolute_url(&self.asset_host, path));

        if let Some(urls) = &record.video_urls {
            let url = |path: &Option<String>| {
                path.as_deref()
                    .and_then(|p| absolute_url(&self.asset_host, p))
            };
            episode.video_urls = QualityMap::new(url(&urls.q480), url(&urls.q720), url(&urls.q1080));
        }

        episode.opening = record.opening.as_ref().and_then(range);
        episode.ending = record.ending.as_ref().and_then(range);
        episode.external_player_ids = ExternalPlayerIds::from_parts(
            non_blank(record.rutube_id.as_deref()),
            non_blank(record.youtube_id.as_deref()),
        );
        episode.release_id = record
            .release_id
            .as_ref()
            .map(|id| id.as_string())
            .or_else(|| release_id.map(str::to_string));
        episode.updated_at = parse_timestamp(record.updated_at.as_deref());

        episode
    }

    pub fn map_episodes(&self, records: &[LocalEpisode], release_id: Option<&str>) -> Vec<CanonicalEpisode> {
        records
            .iter()
            .map(|r| self.map_episode(r, release_id))
            .collect()
    }
}

fn range(bounds: &LocalRange) -> Option<TimeRange> {
    TimeRange::from_bounds(bounds.start, bounds.stop)
}
