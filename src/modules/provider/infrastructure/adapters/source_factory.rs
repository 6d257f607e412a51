use std::sync::Arc;

use super::{LibertyAdapter, LibriaAdapter, LocalAdapter};
use crate::modules::provider::domain::{
    entities::{CatalogConfig, ProviderConfig},
    repositories::{CatalogSource, SourceSet},
};
use crate::shared::{
    domain::value_objects::SourceKind,
    errors::{AppError, AppResult},
};

/// Build the adapter for one configured source
pub fn create_source(config: &ProviderConfig) -> AppResult<Arc<dyn CatalogSource>> {
    let source: Arc<dyn CatalogSource> = match config.source {
        SourceKind::PrimaryV2 => Arc::new(LibertyAdapter::new(config)?),
        SourceKind::LegacyV1 => Arc::new(LibriaAdapter::new(config)?),
        SourceKind::LocalCache => Arc::new(LocalAdapter::new(config)?),
        SourceKind::Mock => {
            return Err(AppError::NotSupported(
                "The mock dataset is not an HTTP source".to_string(),
            ))
        }
    };
    Ok(source)
}

/// Every enabled source, upstreams in generation order
pub fn create_sources(config: &CatalogConfig) -> AppResult<SourceSet> {
    let upstreams = config
        .ordered_upstreams()
        .into_iter()
        .map(create_source)
        .collect::<AppResult<Vec<_>>>()?;

    let local = if config.local.is_available() {
        Some(create_source(&config.local)?)
    } else {
        None
    };

    let sources = SourceSet::new(upstreams, local);
    log::info!("Catalog sources configured: {:?}", sources.kinds());
    Ok(sources)
}
