//! Error types for the randpi system.
//!
//! All operations return structured errors rather than panicking.
//! This enables exact reporting of the condition that ended a run.

use num_bigint::BigUint;
use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Config: parameters rejected at construction time
/// - Estimate: the final computation is undefined for the observed counts
/// - InvalidHex: integer text outside the fixed alphabet reached the tester
/// - I/O: stream read or report write failures
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration rejected at construction time
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The final estimate could not be computed from the observed counts
    #[error("estimate error: {0}")]
    Estimate(#[from] EstimateError),

    /// Integer text with characters outside the hex alphabet reached the
    /// tester. The decoder only emits that alphabet, so this is an internal
    /// invariant violation, not a recoverable runtime condition.
    #[error("internal: malformed hex integer text {text:?}")]
    InvalidHex { text: String },

    /// Stream or report I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Integer width is zero or beyond the supported bound
    #[error("digits_per_number {got} out of range 1..={max}")]
    DigitsOutOfRange { got: usize, max: usize },

    /// Working precision leaves no room for guard digits
    #[error("precision_bits {got} below minimum {min}")]
    PrecisionTooLow { got: u32, min: u32 },

    /// At least one significant digit must be rendered
    #[error("display_digits must be at least 1")]
    NoDisplayDigits,
}

/// Estimate-time errors.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// Every assembled pair was non-coprime, or the stream held no pairs at
    /// all, so sqrt(6 * total / rp) divides by zero. The counts themselves
    /// remain valid and are still reported.
    #[error("no coprime pairs after {pairs_tested} tested: Pi estimate undefined")]
    NoCoprimePairs { pairs_tested: BigUint },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
