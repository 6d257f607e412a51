use serde::{Deserialize, Serialize};
use std::fmt;

/// Airing status of a release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseStatus {
    Ongoing,
    Completed,
}

impl ReleaseStatus {
    /// Upstreams only expose an "is ongoing" flag; anything not ongoing is completed.
    pub fn from_ongoing_flag(is_ongoing: Option<bool>) -> Self {
        if is_ongoing.unwrap_or(false) {
            ReleaseStatus::Ongoing
        } else {
            ReleaseStatus::Completed
        }
    }

    /// Parse the free-form labels our own backend stores.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "онгоинг" | "ongoing" | "в работе" | "airing" => ReleaseStatus::Ongoing,
            _ => ReleaseStatus::Completed,
        }
    }

    pub fn is_ongoing(&self) -> bool {
        matches!(self, ReleaseStatus::Ongoing)
    }

    /// Label shown in the UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ReleaseStatus::Ongoing => "Онгоинг",
            ReleaseStatus::Completed => "Завершён",
        }
    }

    pub fn as_query_value(&self) -> &'static str {
        match self {
            ReleaseStatus::Ongoing => "ongoing",
            ReleaseStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
