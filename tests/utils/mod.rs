#![allow(dead_code)]

pub mod fixtures;
pub mod stub_server;

use anicat_lib::modules::provider::infrastructure::UpstreamClient;
use std::time::Duration;

/// Client pointed at a stub server with a short timeout
pub fn client(name: &str, base_url: &str, timeout: Duration) -> UpstreamClient {
    UpstreamClient::new(name, base_url, timeout).expect("build upstream client")
}
