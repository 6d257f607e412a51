use serde::{Deserialize, Serialize};

/// Opening/ending interval inside an episode, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: f64,
    pub stop: f64,
}

impl TimeRange {
    /// Build a range from optional bounds. Missing, negative or inverted bounds yield `None`.
    pub fn from_bounds(start: Option<f64>, stop: Option<f64>) -> Option<Self> {
        let (start, stop) = (start?, stop?);
        if start < 0.0 || stop <= start {
            return None;
        }
        Some(Self { start, stop })
    }

    pub fn duration(&self) -> f64 {
        self.stop - self.start
    }
}
