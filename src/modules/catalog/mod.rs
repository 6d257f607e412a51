pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{CatalogService, HomepageData, StatusReport, VideoResolution};
pub use domain::{CanonicalAnime, CanonicalEpisode, ReleaseDetails, ResolutionResult, VideoQuality};
pub use infrastructure::mock_catalog;
