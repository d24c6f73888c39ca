//! Run configuration.
//!
//! Parameters are explicit configuration with fixed defaults rather than
//! command-line flags: construct a [`RunConfig`] (or take [`Default`]) and
//! hand it to the pipeline. Validation happens once, at construction, so
//! the pipeline never re-checks widths or precisions per byte.

use crate::error::ConfigError;
use crate::estimate::Precision;

/// Hex digits per assembled integer when none is specified (5 bytes).
pub const DEFAULT_DIGITS_PER_NUMBER: usize = 10;

/// Default working precision for the final computation, in bits.
pub const DEFAULT_PRECISION_BITS: u32 = 1000;

/// Default significant digits in the rendered estimate.
pub const DEFAULT_DISPLAY_DIGITS: usize = 100;

/// Upper bound on integer width; keeps one integer within a few KiB of text.
pub const MAX_DIGITS_PER_NUMBER: usize = 4096;

/// Below this the scaled square root has no room for guard digits.
pub const MIN_PRECISION_BITS: u32 = 64;

/// Complete configuration for one run.
///
/// # Invariants
/// - `digits_per_number` is even (each byte contributes two hex digits)
/// - `digits_per_number` is in `2..=MAX_DIGITS_PER_NUMBER`
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Hex digits per assembled integer (always even)
    pub digits_per_number: usize,

    /// Working precision of the final computation, in bits
    pub precision_bits: u32,

    /// Significant digits in the rendered `rpi`/`tpi` values
    pub display_digits: usize,
}

impl RunConfig {
    /// Build a validated configuration.
    ///
    /// Each byte contributes exactly two hex digits, so an odd
    /// `digits_per_number` is rounded up to the next even value.
    ///
    /// # Errors
    /// - `ConfigError::DigitsOutOfRange` if `digits_per_number` is zero or
    ///   exceeds [`MAX_DIGITS_PER_NUMBER`]
    /// - `ConfigError::PrecisionTooLow` if `precision_bits` is below
    ///   [`MIN_PRECISION_BITS`]
    /// - `ConfigError::NoDisplayDigits` if `display_digits` is zero
    pub fn new(
        digits_per_number: usize,
        precision_bits: u32,
        display_digits: usize,
    ) -> Result<Self, ConfigError> {
        if digits_per_number == 0 || digits_per_number > MAX_DIGITS_PER_NUMBER {
            return Err(ConfigError::DigitsOutOfRange {
                got: digits_per_number,
                max: MAX_DIGITS_PER_NUMBER,
            });
        }
        if precision_bits < MIN_PRECISION_BITS {
            return Err(ConfigError::PrecisionTooLow {
                got: precision_bits,
                min: MIN_PRECISION_BITS,
            });
        }
        if display_digits == 0 {
            return Err(ConfigError::NoDisplayDigits);
        }

        // Round up to even. MAX_DIGITS_PER_NUMBER is even, so this cannot
        // leave the accepted range.
        let digits_per_number = digits_per_number + digits_per_number % 2;

        Ok(Self {
            digits_per_number,
            precision_bits,
            display_digits,
        })
    }

    /// Bytes consumed per assembled integer.
    pub fn bytes_per_number(&self) -> usize {
        self.digits_per_number / 2
    }

    /// Bytes consumed per tested pair.
    pub fn bytes_per_pair(&self) -> usize {
        self.digits_per_number
    }

    /// Precision controls for the estimator.
    pub fn precision(&self) -> Precision {
        Precision {
            working_bits: self.precision_bits,
            display_digits: self.display_digits,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            digits_per_number: DEFAULT_DIGITS_PER_NUMBER,
            precision_bits: DEFAULT_PRECISION_BITS,
            display_digits: DEFAULT_DISPLAY_DIGITS,
        }
    }
}
