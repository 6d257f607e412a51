pub mod dto;
pub mod service;

pub use dto::{HomepageData, SourceStatus, StatusReport, StreamType, VideoResolution};
pub use service::CatalogService;
