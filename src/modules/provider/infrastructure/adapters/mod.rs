pub mod liberty_v2;
pub mod libria_v1;
pub mod local;
mod source_factory;

pub use liberty_v2::LibertyAdapter;
pub use libria_v1::LibriaAdapter;
pub use local::LocalAdapter;
pub use source_factory::{create_source, create_sources};
