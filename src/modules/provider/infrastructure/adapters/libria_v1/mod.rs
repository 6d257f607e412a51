mod adapter;
pub mod mapper;
pub mod models;

pub use adapter::LibriaAdapter;
pub use mapper::LibriaMapper;
