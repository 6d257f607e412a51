use std::time::Duration;

use crate::modules::catalog::domain::services::{
    describe_failures, AttemptFailure, ResolutionContext, ResolutionObserver,
};
use crate::shared::domain::value_objects::SourceKind;
use crate::shared::errors::AppError;

/// Writes resolution events to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl LogObserver {
    pub fn new() -> Self {
        Self
    }
}

impl ResolutionObserver for LogObserver {
    fn on_attempt(&self, ctx: &ResolutionContext, source: SourceKind) {
        log::debug!("Resolve {}: trying {}", ctx, source.display_name());
    }

    fn on_accepted(&self, ctx: &ResolutionContext, source: SourceKind, elapsed: Duration) {
        log::info!(
            "Resolve {}: answered by {} in {}ms",
            ctx,
            source.display_name(),
            elapsed.as_millis()
        );
    }

    fn on_failure(
        &self,
        ctx: &ResolutionContext,
        source: SourceKind,
        error: &AppError,
        elapsed: Duration,
    ) {
        match error {
            AppError::EmptyResult(_) => log::info!(
                "Resolve {}: {} returned nothing after {}ms, falling back",
                ctx,
                source.display_name(),
                elapsed.as_millis()
            ),
            _ => log::warn!(
                "Resolve {}: {} failed after {}ms, falling back: {}",
                ctx,
                source.display_name(),
                elapsed.as_millis(),
                error
            ),
        }
    }

    fn on_exhausted(&self, ctx: &ResolutionContext, failures: &[AttemptFailure]) {
        log::warn!(
            "Resolve {}: every source failed ({})",
            ctx,
            describe_failures(failures)
        );
    }

    fn on_mock_substituted(&self, ctx: &ResolutionContext) {
        log::warn!("Resolve {}: serving built-in mock catalog", ctx);
    }
}
