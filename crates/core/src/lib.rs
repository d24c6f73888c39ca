//! randpi-core: Pi estimation from random byte streams.
//!
//! The probability that two integers picked at random are coprime is 6/pi^2.
//! Two integers A and B are coprime iff gcd(A, B) = 1. By reading a byte
//! stream, breaking it into pairs of fixed-width integers, and counting the
//! coprime pairs, the stream turns into an approximation of Pi:
//!
//! ```text
//! openssl rand 100000000 | randpi
//! ```
//!
//! The better the random sequence, the better the approximation, so the
//! estimate doubles as a statistical test of the byte source: a biased or
//! structured stream biases the coprimality ratio. Raw counts are reported
//! next to the estimate so results from independent runs can be summed by
//! an external aggregator.
//!
//! # Architecture
//!
//! The pipeline is one tightly coupled unit with clear module boundaries:
//! - `decode`: byte stream to fixed-width hex integer text
//! - `pairing`: two-slot pair assembly
//! - `coprime`: arbitrary-precision gcd and the coprimality test
//! - `stats`: overflow-proof coprime/non-coprime counters
//! - `estimate`: high-precision sqrt(6 * total / rp) and rendering
//! - `pipeline`: the single-pass run loop and the four-line report
//! - `metrics`: observable run behavior, including end-of-stream discards
//!
//! # Design Principles
//!
//! - **Single pass**: the stream is consumed exactly once, no retries
//! - **O(1) memory**: one decode buffer, two slots, two counters, and the
//!   transient bignums of a single gcd
//! - **No panics**: errors are structured; the undefined estimate when no
//!   pair was coprime is a typed failure, never an infinite value
//! - **Deterministic**: identical input bytes give bit-identical reports

pub mod config;
pub mod coprime;
pub mod decode;
pub mod error;
pub mod estimate;
pub mod metrics;
pub mod pairing;
pub mod pipeline;
pub mod stats;

// Re-export commonly used types
pub use config::RunConfig;
pub use error::{Error, Result};
