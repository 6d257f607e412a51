//! HTTP client shared by every catalog adapter
//!
//! One call is exactly one outbound request: no retries, no rate limiting.
//! Failures are classified into `Timeout`, `UpstreamError` (non-2xx, carrying the
//! upstream's own error messages) and `NetworkError`; a 2xx body that does not
//! match the expected shape is a `ParseError`.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::modules::provider::domain::entities::ProviderConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};

const USER_AGENT: &str = concat!("anicat/", env!("CARGO_PKG_VERSION"));
const BODY_SNIPPET_LEN: usize = 200;

/// Single-attempt JSON client bound to one upstream base address
pub struct UpstreamClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    provider_name: String,
}

impl UpstreamClient {
    pub fn new(provider_name: &str, base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::ConfigurationError(format!(
                    "Failed to build HTTP client for {}: {}",
                    provider_name, e
                ))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            provider_name: provider_name.to_string(),
        })
    }

    pub fn from_config(config: &ProviderConfig) -> AppResult<Self> {
        Self::new(
            config.source.display_name(),
            &config.base_url,
            config.timeout(),
        )
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `path` with percent-encoded query parameters
    pub fn url(&self, path: &str, query: &[(String, String)]) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(value)
                    )
                })
                .collect();
            url.push('?');
            url.push_str(&encoded.join("&"));
        }
        url
    }

    /// GET `path` and parse the body as `T`
    pub async fn get_json<T>(&self, path: &str, query: &[(String, String)]) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path, query);
        let timer = TimedOperation::new(&self.provider_name, path);

        let result = match tokio::time::timeout(self.timeout, self.fetch(&url)).await {
            Ok(result) => result,
            Err(_) => Err(AppError::Timeout(format!(
                "{} did not answer {} within {}s",
                self.provider_name,
                path,
                self.timeout.as_secs()
            ))),
        };

        match result {
            Ok(body) => {
                timer.finish("OK");
                self.parse_body(&body)
            }
            Err(error) => {
                LogContext::api_failure(&self.provider_name, path, &error);
                Err(error)
            }
        }
    }

    /// Like [`get_json`](Self::get_json), but a 404 answers `Ok(None)`
    pub async fn get_optional<T>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> AppResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.get_json(path, query).await {
            Ok(value) => Ok(Some(value)),
            Err(AppError::UpstreamError { status: 404, .. }) => {
                log::info!("{}: Nothing found at {}", self.provider_name, path);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn fetch(&self, url: &str) -> AppResult<String> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.upstream_error(status, response).await);
        }

        Ok(response.text().await?)
    }

    async fn upstream_error(&self, status: StatusCode, response: Response) -> AppError {
        let body = response.text().await.unwrap_or_default();
        AppError::UpstreamError {
            status: status.as_u16(),
            message: extract_error_message(&body, status),
        }
    }

    fn parse_body<T>(&self, body: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(body).map_err(|e| {
            AppError::ParseError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name,
                e,
                snippet(body)
            ))
        })
    }
}

/// Join the upstream's own error messages into one string.
///
/// Understands `{"errors": {"field": ["msg", ...]}}`, `{"errors": ["msg", ...]}`,
/// `{"message": "..."}` and `{"error": "..."}`; anything else falls back to the
/// HTTP reason phrase.
pub fn extract_error_message(body: &str, status: StatusCode) -> String {
    let fallback = || {
        status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
    };

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return fallback(),
    };

    let mut messages = Vec::new();
    if let Some(errors) = value.get("errors") {
        collect_messages(errors, &mut messages);
    }
    if messages.is_empty() {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key) {
                collect_messages(message, &mut messages);
            }
            if !messages.is_empty() {
                break;
            }
        }
    }

    if messages.is_empty() {
        fallback()
    } else {
        messages.join(", ")
    }
}

fn collect_messages(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(text) if !text.trim().is_empty() => out.push(text.trim().to_string()),
        Value::Array(items) => items.iter().for_each(|item| collect_messages(item, out)),
        Value::Object(map) => map.values().for_each(|item| collect_messages(item, out)),
        _ => {}
    }
}

fn snippet(body: &str) -> String {
    if body.chars().count() > BODY_SNIPPET_LEN {
        let cut: String = body.chars().take(BODY_SNIPPET_LEN).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}
