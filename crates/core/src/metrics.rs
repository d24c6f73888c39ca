//! Run metrics: observable pipeline behavior.
//!
//! Tracks byte, integer, and pair flow plus the end-of-stream discards, so
//! tests can assert on truncation instead of relying on silent behavior.
//! Correctness counters (`rp`/`nrp`) live in `stats` as bignums; these are
//! plain machine-word observability counters in the same spirit as the
//! wall-clock timing.
//!
//! # Thread Safety
//!
//! The `RunMetrics` struct is NOT thread-safe. The pipeline is
//! single-threaded; a parallel restructuring would need per-instance
//! metrics merged at the end.

use std::time::{Duration, Instant};

/// Counters and timing for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunMetrics {
    /// When the run started
    pub start_time: Instant,

    /// When the stream was exhausted (set on completion)
    pub end_time: Option<Instant>,

    /// Total bytes read from the stream
    pub bytes_consumed: u64,

    /// Fixed-width integers fully assembled
    pub integers_completed: u64,

    /// Pairs dispatched to the coprimality test
    pub pairs_tested: u64,

    /// Hex digits discarded from a partial integer at end-of-stream
    pub trailing_digits_discarded: u64,

    /// Whether a completed first-slot integer was discarded unpaired
    pub unpaired_integer_discarded: bool,
}

impl RunMetrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            bytes_consumed: 0,
            integers_completed: 0,
            pairs_tested: 0,
            trailing_digits_discarded: 0,
            unpaired_integer_discarded: false,
        }
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             bytes_consumed={}\n\
             integers_completed={}\n\
             pairs_tested={}\n\
             trailing_digits_discarded={}\n\
             unpaired_integer_discarded={}\n",
            self.duration().as_millis(),
            self.bytes_consumed,
            self.integers_completed,
            self.pairs_tested,
            self.trailing_digits_discarded,
            self.unpaired_integer_discarded,
        )
    }
}

impl Default for RunMetrics {
    fn default() -> Self {
        Self::new()
    }
}
