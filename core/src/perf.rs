//! Per-operation timing log.
//!
//! Samples accumulate for the lifetime of the client; `stats` summarizes them
//! on demand rather than maintaining running aggregates.

use std::time::{Duration, Instant};

/// One timed operation.
#[derive(Debug, Clone)]
pub struct PerfSample {
    pub operation: &'static str,
    pub duration: Duration,
}

/// Summary over all recorded samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerfStats {
    pub total_operations: usize,
    pub average: Duration,
    pub min: Duration,
    pub max: Duration,
}

/// Append-only log of operation timings.
#[derive(Debug, Default)]
pub struct PerfLog {
    samples: Vec<PerfSample>,
}

impl PerfLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the elapsed time since `started` for `operation`.
    pub fn record(&mut self, operation: &'static str, started: Instant) {
        self.samples.push(PerfSample {
            operation,
            duration: started.elapsed(),
        });
    }

    /// Summary statistics, or `None` when nothing has been recorded.
    pub fn stats(&self) -> Option<PerfStats> {
        if self.samples.is_empty() {
            return None;
        }
        let total: Duration = self.samples.iter().map(|s| s.duration).sum();
        let min = self.samples.iter().map(|s| s.duration).min()?;
        let max = self.samples.iter().map(|s| s.duration).max()?;
        Some(PerfStats {
            total_operations: self.samples.len(),
            average: total / self.samples.len() as u32,
            min,
            max,
        })
    }

    /// The most recent `n` samples, oldest first.
    pub fn recent(&self, n: usize) -> &[PerfSample] {
        let start = self.samples.len().saturating_sub(n);
        &self.samples[start..]
    }
}
