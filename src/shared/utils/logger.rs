use log::{debug, info, warn};
use std::sync::Once;
use std::time::Instant;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("anicat", log::LevelFilter::Debug) // More verbose for our crate
            .filter_module("anicat_lib", log::LevelFilter::Debug)
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .parse_default_env() // RUST_LOG wins over the defaults above
            .format_timestamp_secs()
            .format_module_path(false)
            .init();

        info!("Logging system initialized");
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log upstream API calls
    pub fn api_call(provider: &str, endpoint: &str, status: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => info!(
                "API: {} {} {} in {}ms",
                provider, endpoint, status, duration
            ),
            None => debug!("API: Starting {} {}", provider, endpoint),
        }
    }

    /// Log a failed upstream call
    pub fn api_failure(provider: &str, endpoint: &str, error: &dyn std::error::Error) {
        warn!("API: {} {} failed: {}", provider, endpoint, error);
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: Instant,
    provider: String,
    endpoint: String,
}

impl TimedOperation {
    pub fn new(provider: &str, endpoint: &str) -> Self {
        LogContext::api_call(provider, endpoint, "", None);
        Self {
            start: Instant::now(),
            provider: provider.to_string(),
            endpoint: endpoint.to_string(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn finish(self, status: &str) -> u64 {
        let duration = self.elapsed_ms();
        LogContext::api_call(&self.provider, &self.endpoint, status, Some(duration));
        duration
    }
}
