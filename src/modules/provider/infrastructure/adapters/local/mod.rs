mod adapter;
pub mod mapper;
pub mod models;

pub use adapter::LocalAdapter;
pub use mapper::LocalMapper;
