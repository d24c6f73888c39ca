//! Coprimality testing over arbitrary-precision integers.
//!
//! Parses fixed-alphabet hex integer text into [`BigUint`] and reduces the
//! pair with the Euclidean gcd. Zero is a valid operand, not an error:
//! gcd(0, x) = x, so a zero integer simply classifies by the resulting gcd.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

use crate::error::{Error, Result};

/// Parse hexadecimal integer text into a [`BigUint`].
///
/// Inputs come exclusively from the decoder's fixed alphabet, so parsing is
/// guaranteed to succeed under correct operation; a failure here surfaces
/// as a typed internal-invariant error rather than a recoverable condition.
pub fn parse_hex(text: &str) -> Result<BigUint> {
    BigUint::parse_bytes(text.as_bytes(), 16).ok_or_else(|| Error::InvalidHex {
        text: text.to_string(),
    })
}

/// Greatest common divisor of two hex integer texts.
pub fn gcd_hex(first: &str, second: &str) -> Result<BigUint> {
    let n1 = parse_hex(first)?;
    let n2 = parse_hex(second)?;
    Ok(n1.gcd(&n2))
}

/// Whether the two integers are coprime, i.e. their gcd is 1.
pub fn are_coprime(first: &str, second: &str) -> Result<bool> {
    Ok(gcd_hex(first, second)?.is_one())
}
