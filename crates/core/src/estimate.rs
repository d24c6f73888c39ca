//! High-precision Pi estimation from coprimality counts.
//!
//! The probability that two random integers are coprime is 6/pi^2, so
//! `pi ~= sqrt(6 * total / rp)`. The computation runs as scaled integer
//! arithmetic on [`BigUint`]: the quotient is scaled by `10^(2w)` before
//! the integer square root, leaving a value carrying `w` working digits,
//! which is then rounded to the configured number of significant digits.
//!
//! Working precision is configured in bits and maps to decimal working
//! digits via log10(2), floored at a guard margin over the display width,
//! so the rendered digits are always backed by slack in the scaled math.
//!
//! The reference value of true Pi is rendered at the same display width for
//! visual comparison only; it never feeds back into the computation.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::EstimateError;
use crate::stats::PairCounts;

/// True Pi as a bare digit string (one integer digit, 1000 decimals).
/// Display constant only.
const REFERENCE_PI_DIGITS: &str = concat!(
    "3",
    "14159265358979323846264338327950288419716939937510582097494459230",
    "7816406286208998628034825342117067982148086513282306647093844609550",
    "5822317253594081284811174502841027019385211055596446229489549303819",
    "6442881097566593344612847564823378678316527120190914564856692346034",
    "8610454326648213393607260249141273724587006606315588174881520920962",
    "8292540917153643678925903600113305305488204665213841469519415116094",
    "3305727036575959195309218611738193261179310511854807446237996274956",
    "7351885752724891227938183011949129833673362440656643086021394946395",
    "2247371907021798609437027705392171762931767523846748184676694051320",
    "0056812714526356082778577134275778960917363717872146844090122495343",
    "0146549585371050792279689258923542019956112129021960864034418159813",
    "6297747713099605187072113499999983729780499510597317328160963185950",
    "2445945534690830264252230825334468503526193118817101000313783875288",
    "6587533208381420617177669147303598253490428755468731159562863882353",
    "7875937519577818577805321712268066130019278766111959092164201989",
);

/// Guard digits kept beyond the display width in the scaled integer math.
const GUARD_DIGITS: usize = 8;

/// Precision controls for the final computation.
#[derive(Debug, Clone, Copy)]
pub struct Precision {
    /// Working precision in bits
    pub working_bits: u32,

    /// Significant digits in rendered output
    pub display_digits: usize,
}

impl Precision {
    /// Decimal working digits backing the scaled integer math.
    ///
    /// bits * log10(2), with a guard margin over the display width.
    fn working_digits(&self) -> usize {
        let from_bits = self.working_bits as usize * 30103 / 100000 + 1;
        from_bits.max(self.display_digits + GUARD_DIGITS)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            working_bits: crate::config::DEFAULT_PRECISION_BITS,
            display_digits: crate::config::DEFAULT_DISPLAY_DIGITS,
        }
    }
}

/// A completed estimate, rendered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiEstimate {
    /// Estimated Pi (`rpi`) at display precision
    pub estimated: String,

    /// Reference Pi (`tpi`) at the same display precision
    pub reference: String,
}

/// Compute `sqrt(6 * (rp + nrp) / rp)` at the configured precision.
///
/// # Errors
/// `EstimateError::NoCoprimePairs` when `rp == 0` (empty or pathological
/// streams): the division is undefined and must surface as a typed failure
/// rather than an infinite or truncated value. The counts stay reportable.
pub fn estimate(counts: &PairCounts, precision: &Precision) -> Result<PiEstimate, EstimateError> {
    if counts.coprime().is_zero() {
        return Err(EstimateError::NoCoprimePairs {
            pairs_tested: counts.total(),
        });
    }

    let w = precision.working_digits();
    let scale = BigUint::from(10u32).pow((2 * w) as u32);
    let scaled = BigUint::from(6u32) * counts.total() * scale / counts.coprime();
    let root = scaled.sqrt();

    let digits = root.to_str_radix(10);
    // rp <= total means the value is at least sqrt(6), so the scaled root
    // always carries more than `w` digits and at least one integer digit.
    let int_len = digits.len() - w;

    Ok(PiEstimate {
        estimated: format_significant(&digits, int_len, precision.display_digits),
        reference: reference_pi(precision.display_digits),
    })
}

/// Reference Pi rendered to `display_digits` significant digits.
pub fn reference_pi(display_digits: usize) -> String {
    format_significant(REFERENCE_PI_DIGITS, 1, display_digits)
}

/// Render a bare digit string as a decimal expansion rounded (half-up) to
/// `sig` significant digits. `int_len` digits sit before the decimal
/// point; the leading digit must be nonzero.
fn format_significant(digits: &str, int_len: usize, sig: usize) -> String {
    debug_assert!(!digits.is_empty());
    debug_assert!((1..=digits.len()).contains(&int_len));
    debug_assert!(sig >= 1);

    let bytes = digits.as_bytes();
    let mut kept = bytes[..sig.min(bytes.len())].to_vec();
    let mut int_len = int_len;

    if bytes.len() > sig && bytes[sig] >= b'5' {
        let mut carried = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carried = false;
                break;
            }
        }
        if carried {
            // 99..9 rolled over: one more integer digit, same number of
            // significant digits.
            kept.pop();
            kept.insert(0, b'1');
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(kept.len() + 2);
    for (i, &d) in kept.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(d as char);
    }
    // Rounding kept fewer digits than sit before the point: pad magnitude.
    for _ in kept.len()..int_len {
        out.push('0');
    }
    out
}
