//! Failure statistics tracking.
//!
//! Counts inactive verdicts per `ErrorType`. The dispatcher aggregates results
//! on a single consumer, so the counters are plain integers rather than atomics.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::ErrorType;
use crate::probe::ProbeResult;

/// Per-category counts of inactive verdicts for one run.
#[derive(Debug, Clone)]
pub struct FailureStats {
    errors: HashMap<ErrorType, usize>,
}

impl FailureStats {
    /// Creates empty counters.
    pub fn new() -> Self {
        let errors = ErrorType::iter().map(|error| (error, 0)).collect();
        FailureStats { errors }
    }

    /// Increment an error counter.
    pub fn increment_error(&mut self, error: ErrorType) {
        *self.errors.entry(error).or_insert(0) += 1;
    }

    /// Records a verdict. Active verdicts are not counted.
    pub fn record(&mut self, result: &ProbeResult) {
        if let Some(kind) = result.failure_kind() {
            self.increment_error(kind);
        }
    }

    /// Count for one category.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(&error).copied().unwrap_or(0)
    }

    /// Sum over all categories.
    pub fn total_errors(&self) -> usize {
        self.errors.values().sum()
    }
}

impl Default for FailureStats {
    fn default() -> Self {
        Self::new()
    }
}
