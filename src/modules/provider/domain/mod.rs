pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::{CatalogConfig, CatalogSettings, Generation, ProviderConfig};
pub use repositories::{CatalogSource, SourceSet};
pub use value_objects::SearchFilters;
