//! Serde helpers for upstream payloads.
//!
//! Upstream schemas drift independently of this crate. Required fields are parsed
//! strictly, but optional nested fields go through [`lenient`] so that a field with
//! an unexpected type degrades to `None` instead of failing the whole payload.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Deserialize an optional field, yielding `None` for `null` or a mismatched type.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Deserialize a list, dropping elements that fail to parse and treating a
/// non-array value as an empty list.
pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Upstream record list parsed element by element.
///
/// The value itself must be an array, so a listing of the wrong shape still fails.
/// `null` elements and records that do not parse are dropped one by one, so a single
/// broken record never costs the rest of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SkipInvalid<T>(pub Vec<T>);

impl<T> SkipInvalid<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for SkipInvalid<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'de, T> Deserialize<'de> for SkipInvalid<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<Value>::deserialize(deserializer)?;
        let mut records = Vec::with_capacity(items.len());
        let mut dropped = 0usize;

        for item in items.into_iter().filter(|item| !item.is_null()) {
            match serde_json::from_value(item) {
                Ok(record) => records.push(record),
                Err(e) => {
                    dropped += 1;
                    log::debug!("Skipping unparsable upstream record: {}", e);
                }
            }
        }

        if dropped > 0 {
            log::warn!(
                "Dropped {} unparsable record(s), kept {}",
                dropped,
                records.len()
            );
        }
        Ok(Self(records))
    }
}

/// Identifier that upstreams send either as a number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    pub fn into_string(self) -> String {
        match self {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }

    pub fn as_string(&self) -> String {
        self.clone().into_string()
    }
}

/// Join a possibly-relative asset path with a public host.
pub fn absolute_url(host: &str, path: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }
    if let Some(rest) = path.strip_prefix("//") {
        return Some(format!("https://{}", rest));
    }

    let host = host.trim_end_matches('/');
    if path.starts_with('/') {
        Some(format!("{}{}", host, path))
    } else {
        Some(format!("{}/{}", host, path))
    }
}
