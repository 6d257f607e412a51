pub mod canonical_anime;
pub mod canonical_episode;

pub use canonical_anime::{genre_names, non_blank, parse_timestamp, resolve_title, CanonicalAnime, UNTITLED};
pub use canonical_episode::{episode_title, CanonicalEpisode, ExternalPlayerIds, ReleaseDetails};
