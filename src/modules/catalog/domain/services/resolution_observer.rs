use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::shared::domain::value_objects::SourceKind;
use crate::shared::errors::AppError;

/// User-facing operation a chain runs for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Homepage,
    Search,
    FilteredSearch,
    Browse,
    Genres,
    Details,
    Episode,
    Video,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::Homepage => "homepage",
            Intent::Search => "search",
            Intent::FilteredSearch => "filtered_search",
            Intent::Browse => "browse",
            Intent::Genres => "genres",
            Intent::Details => "details",
            Intent::Episode => "episode",
            Intent::Video => "video",
        };
        write!(f, "{}", name)
    }
}

/// Identifies one slot of one intent, e.g. `homepage/popular`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolutionContext {
    pub intent: Intent,
    pub slot: &'static str,
}

impl ResolutionContext {
    pub fn new(intent: Intent, slot: &'static str) -> Self {
        Self { intent, slot }
    }
}

impl fmt::Display for ResolutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.intent, self.slot)
    }
}

/// A source that was tried and did not produce an acceptable answer
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptFailure {
    pub source: SourceKind,
    pub error: AppError,
}

/// Receives resolution events. Implementations must not influence control flow.
pub trait ResolutionObserver: Send + Sync {
    fn on_attempt(&self, _ctx: &ResolutionContext, _source: SourceKind) {}

    fn on_accepted(&self, _ctx: &ResolutionContext, _source: SourceKind, _elapsed: Duration) {}

    fn on_failure(
        &self,
        _ctx: &ResolutionContext,
        _source: SourceKind,
        _error: &AppError,
        _elapsed: Duration,
    ) {
    }

    fn on_exhausted(&self, _ctx: &ResolutionContext, _failures: &[AttemptFailure]) {}

    fn on_mock_substituted(&self, _ctx: &ResolutionContext) {}
}

/// Observer that ignores every event
pub struct NoopObserver;

impl ResolutionObserver for NoopObserver {}

/// Fans every event out to several observers
#[derive(Clone, Default)]
pub struct ObserverSet {
    observers: Vec<Arc<dyn ResolutionObserver>>,
}

impl ObserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn push(&mut self, observer: Arc<dyn ResolutionObserver>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl ResolutionObserver for ObserverSet {
    fn on_attempt(&self, ctx: &ResolutionContext, source: SourceKind) {
        for observer in &self.observers {
            observer.on_attempt(ctx, source);
        }
    }

    fn on_accepted(&self, ctx: &ResolutionContext, source: SourceKind, elapsed: Duration) {
        for observer in &self.observers {
            observer.on_accepted(ctx, source, elapsed);
        }
    }

    fn on_failure(
        &self,
        ctx: &ResolutionContext,
        source: SourceKind,
        error: &AppError,
        elapsed: Duration,
    ) {
        for observer in &self.observers {
            observer.on_failure(ctx, source, error, elapsed);
        }
    }

    fn on_exhausted(&self, ctx: &ResolutionContext, failures: &[AttemptFailure]) {
        for observer in &self.observers {
            observer.on_exhausted(ctx, failures);
        }
    }

    fn on_mock_substituted(&self, ctx: &ResolutionContext) {
        for observer in &self.observers {
            observer.on_mock_substituted(ctx);
        }
    }
}
