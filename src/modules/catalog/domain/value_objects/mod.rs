pub mod release_status;
pub mod resolution_result;
pub mod time_range;
pub mod video_quality;

pub use release_status::ReleaseStatus;
pub use resolution_result::ResolutionResult;
pub use time_range::TimeRange;
pub use video_quality::{QualityMap, QualityOption, VideoQuality};
