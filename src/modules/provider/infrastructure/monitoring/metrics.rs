use dashmap::DashMap;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::modules::catalog::domain::services::{
    AttemptFailure, ResolutionContext, ResolutionObserver,
};
use crate::shared::domain::value_objects::SourceKind;
use crate::shared::errors::AppError;

/// Per-source attempt counters fed by resolution events
#[derive(Default)]
pub struct MetricsCollector {
    sources: DashMap<SourceKind, SourceMetrics>,
    exhausted_chains: AtomicU64,
    mock_substitutions: AtomicU64,
}

/// Raw counters for one source
#[derive(Debug, Clone)]
pub struct SourceMetrics {
    pub source: SourceKind,
    pub attempts: u64,
    pub accepted: u64,
    pub empty: u64,
    pub failed: u64,
    pub total_response_time: Duration,
    pub fastest_response: Option<Duration>,
    pub slowest_response: Duration,
}

/// Metrics summary for external consumption
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub source: SourceKind,
    pub attempts: u64,
    pub accepted: u64,
    pub empty: u64,
    pub failed: u64,
    pub success_rate: f32,
    pub average_response_time_ms: u64,
    pub fastest_response_ms: u64,
    pub slowest_response_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub sources: Vec<MetricsSummary>,
    pub exhausted_chains: u64,
    pub mock_substitutions: u64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn record_response(&self, source: SourceKind, response_time: Duration, outcome: Outcome) {
        let mut entry = self
            .sources
            .entry(source)
            .or_insert_with(|| SourceMetrics::new(source));

        match outcome {
            Outcome::Accepted => entry.accepted += 1,
            Outcome::Empty => entry.empty += 1,
            Outcome::Failed => entry.failed += 1,
        }

        entry.total_response_time += response_time;
        if entry.fastest_response.map_or(true, |fastest| response_time < fastest) {
            entry.fastest_response = Some(response_time);
        }
        if entry.slowest_response < response_time {
            entry.slowest_response = response_time;
        }
    }

    /// Get metrics for a specific source
    pub fn source_metrics(&self, source: SourceKind) -> Option<MetricsSummary> {
        self.sources.get(&source).map(|m| m.to_summary())
    }

    /// Every source seen so far, in fallback order
    pub fn snapshot(&self) -> MetricsSnapshot {
        let mut sources: Vec<MetricsSummary> =
            self.sources.iter().map(|entry| entry.to_summary()).collect();
        sources.sort_by_key(|summary| summary.source);

        MetricsSnapshot {
            sources,
            exhausted_chains: self.exhausted_chains.load(Ordering::Relaxed),
            mock_substitutions: self.mock_substitutions.load(Ordering::Relaxed),
        }
    }

    /// Clear all metrics
    pub fn clear(&self) {
        self.sources.clear();
        self.exhausted_chains.store(0, Ordering::Relaxed);
        self.mock_substitutions.store(0, Ordering::Relaxed);
    }
}

enum Outcome {
    Accepted,
    Empty,
    Failed,
}

impl ResolutionObserver for MetricsCollector {
    fn on_attempt(&self, _ctx: &ResolutionContext, source: SourceKind) {
        self.sources
            .entry(source)
            .or_insert_with(|| SourceMetrics::new(source))
            .attempts += 1;
    }

    fn on_accepted(&self, _ctx: &ResolutionContext, source: SourceKind, elapsed: Duration) {
        self.record_response(source, elapsed, Outcome::Accepted);
    }

    fn on_failure(
        &self,
        _ctx: &ResolutionContext,
        source: SourceKind,
        error: &AppError,
        elapsed: Duration,
    ) {
        let outcome = match error {
            AppError::EmptyResult(_) => Outcome::Empty,
            _ => Outcome::Failed,
        };
        self.record_response(source, elapsed, outcome);
    }

    fn on_exhausted(&self, _ctx: &ResolutionContext, _failures: &[AttemptFailure]) {
        self.exhausted_chains.fetch_add(1, Ordering::Relaxed);
    }

    fn on_mock_substituted(&self, _ctx: &ResolutionContext) {
        self.mock_substitutions.fetch_add(1, Ordering::Relaxed);
    }
}

impl SourceMetrics {
    pub fn new(source: SourceKind) -> Self {
        Self {
            source,
            attempts: 0,
            accepted: 0,
            empty: 0,
            failed: 0,
            total_response_time: Duration::ZERO,
            fastest_response: None,
            slowest_response: Duration::ZERO,
        }
    }

    fn responses(&self) -> u64 {
        self.accepted + self.empty + self.failed
    }

    /// Convert to summary for external consumption
    pub fn to_summary(&self) -> MetricsSummary {
        let responses = self.responses();
        let average_response_time = if responses > 0 {
            self.total_response_time.as_millis() as u64 / responses
        } else {
            0
        };

        let success_rate = if self.attempts > 0 {
            self.accepted as f32 / self.attempts as f32
        } else {
            0.0
        };

        MetricsSummary {
            source: self.source,
            attempts: self.attempts,
            accepted: self.accepted,
            empty: self.empty,
            failed: self.failed,
            success_rate,
            average_response_time_ms: average_response_time,
            fastest_response_ms: self
                .fastest_response
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0),
            slowest_response_ms: self.slowest_response.as_millis() as u64,
        }
    }
}
