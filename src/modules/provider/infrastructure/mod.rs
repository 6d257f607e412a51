pub mod adapters;
pub mod http_client;
pub mod monitoring;

pub use adapters::{create_source, create_sources, LibertyAdapter, LibriaAdapter, LocalAdapter};
pub use http_client::UpstreamClient;
pub use monitoring::{LogObserver, MetricsCollector};
