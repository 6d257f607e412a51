mod mock_catalog;

pub use mock_catalog::mock_catalog;
