mod catalog_config;
mod provider_config;

pub use catalog_config::{CatalogConfig, CatalogSettings, Generation};
pub use provider_config::ProviderConfig;
