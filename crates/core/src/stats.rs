//! Running coprimality counts.
//!
//! Counters are [`BigUint`] from the first update: no stream length can
//! overflow them, and they feed the final formula without representation
//! conversion. Counts are plain additive accumulators so results from
//! independent runs can be summed by an external aggregator.

use num_bigint::BigUint;
use num_traits::Zero;

/// Monotonically non-decreasing counts of coprime and non-coprime pairs.
#[derive(Debug, Clone, Default)]
pub struct PairCounts {
    coprime: BigUint,
    non_coprime: BigUint,
}

impl PairCounts {
    /// Create empty counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one tested pair.
    pub fn record(&mut self, is_coprime: bool) {
        if is_coprime {
            self.coprime += 1u32;
        } else {
            self.non_coprime += 1u32;
        }
    }

    /// Count of coprime pairs (`rp`).
    pub fn coprime(&self) -> &BigUint {
        &self.coprime
    }

    /// Count of non-coprime pairs (`nrp`).
    pub fn non_coprime(&self) -> &BigUint {
        &self.non_coprime
    }

    /// Total pairs tested.
    pub fn total(&self) -> BigUint {
        &self.coprime + &self.non_coprime
    }

    /// True when no pair has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.coprime.is_zero() && self.non_coprime.is_zero()
    }
}
