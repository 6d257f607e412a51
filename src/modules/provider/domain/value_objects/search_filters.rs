use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::value_objects::ReleaseStatus;

/// Catalog filters applied on top of a text query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub genres: Vec<String>,
    pub year: Option<i32>,
    #[serde(rename = "type")]
    pub release_type: Option<String>,
    pub status: Option<ReleaseStatus>,
    pub sort: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_type(mut self, release_type: impl Into<String>) -> Self {
        self.release_type = Some(release_type.into());
        self
    }

    pub fn with_status(mut self, status: ReleaseStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// True when nothing narrows the query (paging does not count)
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
            && self.year.is_none()
            && self.release_type.is_none()
            && self.status.is_none()
            && self.sort.is_none()
    }

    pub fn limit_or(&self, default: u32) -> u32 {
        self.limit.filter(|l| *l > 0).unwrap_or(default)
    }

    pub fn page_or_first(&self) -> u32 {
        self.page.filter(|p| *p > 0).unwrap_or(1)
    }

    /// Filter parameters shared by every upstream, as `(key, value)` pairs
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        let genres: Vec<&str> = self
            .genres
            .iter()
            .map(|g| g.trim())
            .filter(|g| !g.is_empty())
            .collect();
        if !genres.is_empty() {
            params.push(("genres".to_string(), genres.join(",")));
        }
        if let Some(year) = self.year {
            params.push(("year".to_string(), year.to_string()));
        }
        if let Some(release_type) = &self.release_type {
            params.push(("type".to_string(), release_type.clone()));
        }
        if let Some(status) = &self.status {
            params.push(("status".to_string(), status.as_query_value().to_string()));
        }
        if let Some(sort) = &self.sort {
            params.push(("sort".to_string(), sort.clone()));
        }

        params
    }
}
