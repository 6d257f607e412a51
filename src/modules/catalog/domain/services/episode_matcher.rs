use std::fmt;
use std::str::FromStr;

use crate::modules::catalog::domain::entities::CanonicalEpisode;
use crate::shared::errors::AppError;

const ORDINAL_EPSILON: f64 = 1e-9;

/// Episode number as requested by the user ("3", "2.5")
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeNumber {
    ordinal: f64,
    sort_order: Option<i64>,
}

impl EpisodeNumber {
    pub fn ordinal(&self) -> f64 {
        self.ordinal
    }

    /// Integer position, only for whole numbers. A ".5" special never matches by position.
    pub fn sort_order(&self) -> Option<i64> {
        self.sort_order
    }

    fn matches(&self, episode: &CanonicalEpisode) -> bool {
        let by_ordinal = episode
            .number
            .map(|n| (n - self.ordinal).abs() < ORDINAL_EPSILON)
            .unwrap_or(false);

        let by_sort_order = match (self.sort_order, episode.sort_order) {
            (Some(wanted), Some(actual)) => wanted == actual,
            _ => false,
        };

        by_ordinal || by_sort_order
    }
}

impl FromStr for EpisodeNumber {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ordinal: f64 = s.trim().replace(',', ".").parse()?;
        if !ordinal.is_finite() || ordinal < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "Episode number must be a non-negative number, got '{}'",
                s
            )));
        }

        // Only whole numbers match by position: "2.5" never picks the episode at
        // sort order 2, it has to match a 2.5 ordinal.
        let sort_order = if ordinal.fract() == 0.0 {
            Some(ordinal as i64)
        } else {
            None
        };

        Ok(Self {
            ordinal,
            sort_order,
        })
    }
}

impl fmt::Display for EpisodeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ordinal)
    }
}

/// First episode, in upstream order, whose ordinal or position matches.
pub fn find_episode<'e>(
    episodes: &'e [CanonicalEpisode],
    number: &EpisodeNumber,
) -> Option<&'e CanonicalEpisode> {
    episodes.iter().find(|episode| number.matches(episode))
}

/// Like [`find_episode`], but a miss is a `NotFound` error.
pub fn require_episode(
    episodes: &[CanonicalEpisode],
    number: &EpisodeNumber,
    anime_id: &str,
) -> Result<CanonicalEpisode, AppError> {
    if episodes.is_empty() {
        return Err(AppError::NotFound(format!(
            "No episodes published for anime {}",
            anime_id
        )));
    }

    find_episode(episodes, number).cloned().ok_or_else(|| {
        AppError::NotFound(format!("Episode {} of anime {}", number, anime_id))
    })
}
