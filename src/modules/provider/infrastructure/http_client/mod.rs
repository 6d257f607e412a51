mod upstream_client;

pub use upstream_client::{extract_error_message, UpstreamClient};
