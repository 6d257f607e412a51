pub mod modules;
pub mod shared;

use modules::{catalog::CatalogService, provider::CatalogConfig};
use shared::errors::AppResult;
use shared::utils::init_logger;

/// Load `.env`, start logging and build the catalog service from the environment.
pub fn bootstrap() -> AppResult<CatalogService> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let config = CatalogConfig::from_env()?;
    log::info!(
        "Catalog starting with {} as primary generation",
        config.settings().primary_generation
    );

    CatalogService::from_config(&config)
}
