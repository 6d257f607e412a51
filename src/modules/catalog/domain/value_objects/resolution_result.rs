use serde::{Deserialize, Serialize};

use crate::shared::domain::value_objects::SourceKind;

/// Outcome of one pipeline invocation for one slot. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult<T> {
    pub data: T,
    pub source_used: SourceKind,
    pub success: bool,
}

impl<T> ResolutionResult<T> {
    pub fn resolved(data: T, source_used: SourceKind) -> Self {
        Self {
            data,
            source_used,
            success: true,
        }
    }

    /// Slot that ended without an acceptable answer; `source_used` is the last source tried
    pub fn unresolved(data: T, source_used: SourceKind) -> Self {
        Self {
            data,
            source_used,
            success: false,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResolutionResult<U> {
        ResolutionResult {
            data: f(self.data),
            source_used: self.source_used,
            success: self.success,
        }
    }
}
