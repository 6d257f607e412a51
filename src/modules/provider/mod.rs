pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{CatalogConfig, CatalogSource, ProviderConfig, SearchFilters, SourceSet};
pub use infrastructure::{create_sources, LogObserver, MetricsCollector};
