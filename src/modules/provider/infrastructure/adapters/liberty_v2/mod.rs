mod adapter;
pub mod mapper;
pub mod models;

pub use adapter::LibertyAdapter;
pub use mapper::LibertyMapper;
