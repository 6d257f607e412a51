use futures::future::BoxFuture;
use std::sync::Arc;
use std::time::Instant;

use super::resolution_observer::{AttemptFailure, ResolutionContext, ResolutionObserver};
use crate::modules::catalog::domain::value_objects::ResolutionResult;
use crate::modules::provider::domain::repositories::CatalogSource;
use crate::shared::domain::value_objects::SourceKind;
use crate::shared::errors::AppError;

/// Whether a normalized answer is good enough to stop the chain
pub trait Acceptable {
    fn is_acceptable(&self) -> bool;
}

impl<T> Acceptable for Vec<T> {
    fn is_acceptable(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Acceptable for Option<T> {
    fn is_acceptable(&self) -> bool {
        self.is_some()
    }
}

/// How a chain ended
#[derive(Debug)]
pub enum ChainOutcome<T> {
    /// A source produced an acceptable answer
    Accepted(ResolutionResult<T>),
    /// No source did. `terminal` holds the last step's answer when that step
    /// succeeded but came back empty.
    Exhausted {
        terminal: Option<(SourceKind, T)>,
        failures: Vec<AttemptFailure>,
    },
}

impl<T> ChainOutcome<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ChainOutcome::Accepted(_))
    }
}

/// Ordered list of sources tried for one slot.
///
/// Each step is one adapter call followed by an acceptability check. A step is
/// skipped past when the call fails or the answer is empty; the first acceptable
/// answer ends the chain. There is no retry and no backoff: every source is called
/// at most once per run.
pub struct FallbackChain {
    steps: Vec<Arc<dyn CatalogSource>>,
    observer: Arc<dyn ResolutionObserver>,
}

impl FallbackChain {
    pub fn new(steps: Vec<Arc<dyn CatalogSource>>, observer: Arc<dyn ResolutionObserver>) -> Self {
        Self { steps, observer }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn sources(&self) -> Vec<SourceKind> {
        self.steps.iter().map(|step| step.kind()).collect()
    }

    /// Run `fetch` against each source in order until one answer is acceptable.
    pub async fn run<'a, T, F>(&self, ctx: &ResolutionContext, fetch: F) -> ChainOutcome<T>
    where
        T: Acceptable + Send + 'a,
        F: Fn(Arc<dyn CatalogSource>) -> BoxFuture<'a, Result<T, AppError>>,
    {
        let mut failures = Vec::new();
        let mut terminal = None;
        let last_index = self.steps.len().saturating_sub(1);

        for (index, source) in self.steps.iter().enumerate() {
            let kind = source.kind();
            self.observer.on_attempt(ctx, kind);

            let started = Instant::now();
            let outcome = fetch(Arc::clone(source)).await;
            let elapsed = started.elapsed();

            match outcome {
                Ok(data) if data.is_acceptable() => {
                    self.observer.on_accepted(ctx, kind, elapsed);
                    return ChainOutcome::Accepted(ResolutionResult::resolved(data, kind));
                }
                Ok(data) => {
                    let error = AppError::EmptyResult(format!("{} returned nothing for {}", kind, ctx));
                    self.observer.on_failure(ctx, kind, &error, elapsed);
                    failures.push(AttemptFailure {
                        source: kind,
                        error,
                    });
                    if index == last_index {
                        terminal = Some((kind, data));
                    }
                }
                Err(error) => {
                    self.observer.on_failure(ctx, kind, &error, elapsed);
                    failures.push(AttemptFailure {
                        source: kind,
                        error,
                    });
                }
            }
        }

        self.observer.on_exhausted(ctx, &failures);
        ChainOutcome::Exhausted { terminal, failures }
    }
}

/// One-line summary of every failed attempt, for `ChainExhausted` messages
pub fn describe_failures(failures: &[AttemptFailure]) -> String {
    if failures.is_empty() {
        return "no sources configured".to_string();
    }

    failures
        .iter()
        .map(|failure| format!("{}: {}", failure.source, failure.error))
        .collect::<Vec<_>>()
        .join("; ")
}
