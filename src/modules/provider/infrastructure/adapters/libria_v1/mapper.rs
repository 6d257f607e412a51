use chrono::{DateTime, TimeZone, Utc};

use super::models::{PlayerEpisode, Posters, Title};
use crate::modules::catalog::domain::{
    entities::{
        episode_title, genre_names, non_blank, resolve_title, CanonicalAnime, CanonicalEpisode,
    },
    value_objects::{QualityMap, ReleaseStatus, TimeRange},
};
use crate::shared::utils::lenient::absolute_url;

const STATUS_ONGOING: i64 = 1;

/// Normalizes AniLibria v1 titles and player episodes
#[derive(Debug, Clone)]
pub struct LibriaMapper {
    asset_host: String,
}

impl LibriaMapper {
    pub fn new(asset_host: &str) -> Self {
        Self {
            asset_host: asset_host.trim_end_matches('/').to_string(),
        }
    }

    pub fn map_title(&self, title: &Title) -> CanonicalAnime {
        let names = title.names.clone().unwrap_or_default();
        let title_type = title.title_type.clone().unwrap_or_default();

        let mut anime = CanonicalAnime::new(
            title.id.as_string(),
            resolve_title(names.ru.as_deref(), names.en.as_deref()),
        );

        anime.title_english = non_blank(names.en.as_deref());
        anime.title_alternative = non_blank(names.alternative.as_deref());
        anime.alias = non_blank(title.code.as_deref());
        anime.year = title.season.as_ref().and_then(|s| s.year);
        anime.anime_type = non_blank(title_type.string.as_deref())
            .or_else(|| non_blank(title_type.full_string.as_deref()));
        anime.status = match title.status.as_ref().and_then(|s| s.code) {
            Some(STATUS_ONGOING) => ReleaseStatus::Ongoing,
            _ => ReleaseStatus::Completed,
        };
        anime.poster_url = title
            .posters
            .as_ref()
            .and_then(|posters| self.poster_url(posters));
        anime.description = non_blank(title.description.as_deref());
        anime.episode_count = title_type.episodes;
        anime.genres = self.map_genres(&title.genres);
        anime.rating = title.rating;
        anime.age_rating = non_blank(title.age_rating.as_deref());
        anime.season = title
            .season
            .as_ref()
            .and_then(|s| non_blank(s.string.as_deref()));
        anime.duration_minutes = title_type.length;
        anime.favorites = title.in_favorites;
        anime.updated_at = title.updated.and_then(unix_timestamp);

        anime
    }

    pub fn map_genres(&self, genres: &[String]) -> Vec<String> {
        genre_names(genres.iter().map(String::as_str))
    }

    pub fn map_titles(&self, titles: &[Title]) -> Vec<CanonicalAnime> {
        titles.iter().map(|t| self.map_title(t)).collect()
    }

    /// Episodes embedded in the title's player block
    pub fn map_player_episodes(&self, title: &Title) -> Vec<CanonicalEpisode> {
        let player = match &title.player {
            Some(player) => player,
            None => return Vec::new(),
        };
        let release_id = title.id.as_string();

        player
            .episodes()
            .iter()
            .map(|episode| self.map_episode(episode, player.host.as_deref(), Some(&release_id)))
            .collect()
    }

    pub fn map_episode(
        &self,
        episode: &PlayerEpisode,
        stream_host: Option<&str>,
        release_id: Option<&str>,
    ) -> CanonicalEpisode {
        let release_id = episode
            .title_id
            .as_ref()
            .map(|id| id.as_string())
            .or_else(|| release_id.map(str::to_string));

        let id = non_blank(episode.uuid.as_deref()).unwrap_or_else(|| {
            format!(
                "{}-{}",
                release_id.as_deref().unwrap_or("episode"),
                episode.episode.map(|n| n.to_string()).unwrap_or_default()
            )
        });

        let mut canonical = CanonicalEpisode::new(id, episode.episode);
        canonical.title = episode_title(episode.name.as_deref(), None, episode.episode);
        canonical.preview_url = episode
            .preview
            .as_deref()
            .and_then(|path| absolute_url(&self.asset_host, path));

        let stream_host = stream_host
            .and_then(|host| non_blank(Some(host)))
            .map(|host| {
                if host.starts_with("http://") || host.starts_with("https://") {
                    host
                } else {
                    format!("https://{}", host)
                }
            })
            .unwrap_or_else(|| self.asset_host.clone());

        if let Some(hls) = &episode.hls {
            let url = |path: &Option<String>| {
                path.as_deref()
                    .and_then(|p| absolute_url(&stream_host, p))
            };
            canonical.video_urls = QualityMap::new(url(&hls.sd), url(&hls.hd), url(&hls.fhd));
        }

        if let Some(skips) = &episode.skips {
            canonical.opening = skip_range(&skips.opening);
            canonical.ending = skip_range(&skips.ending);
        }

        canonical.release_id = release_id;
        canonical.updated_at = episode.created_timestamp.and_then(unix_timestamp);

        canonical
    }

    /// medium → original → small
    pub fn poster_url(&self, posters: &Posters) -> Option<String> {
        [&posters.medium, &posters.original, &posters.small]
            .into_iter()
            .flatten()
            .filter_map(|poster| poster.url.as_deref())
            .find_map(|path| absolute_url(&self.asset_host, path))
    }
}

fn skip_range(bounds: &[f64]) -> Option<TimeRange> {
    TimeRange::from_bounds(bounds.first().copied(), bounds.get(1).copied())
}

fn unix_timestamp(seconds: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, 0).single()
}
