mod catalog_source;

pub use catalog_source::{CatalogSource, SourceSet};
#[cfg(test)]
pub use catalog_source::MockCatalogSource;
