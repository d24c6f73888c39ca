//! The single-pass estimation pipeline.
//!
//! One thread performs blocking reads, decodes nibbles, assembles pairs,
//! tests coprimality, and accumulates counts; at end-of-stream the
//! estimator consumes the final counts. Memory use is O(1) in stream
//! length: one decode buffer, two slots, two counters, and the transient
//! bignums of a single gcd.
//!
//! Per-byte flow:
//!
//! ```text
//! byte -> StreamDecoder -> (integer full) -> PairAssembler
//!      -> (pair ready) -> gcd -> PairCounts
//! ```
//!
//! Each pair depends only on the two integers immediately before it, so
//! the pass is strictly sequential; parallelizing would mean independent
//! stream chunks with their own counters, summed externally.
//!
//! A read failure ends the stream early; pairs processed before the
//! failure remain valid and are carried in the summary next to the error.

use std::io::{Read, Write};

use tracing::{debug, info};

use crate::config::RunConfig;
use crate::coprime;
use crate::decode::StreamDecoder;
use crate::error::Result;
use crate::estimate::{self, PiEstimate};
use crate::metrics::RunMetrics;
use crate::pairing::PairAssembler;
use crate::stats::PairCounts;

/// Read chunk size. Decoding stays strictly per-byte; chunking only
/// amortizes the read syscalls.
const READ_BUF_BYTES: usize = 8 * 1024;

/// Everything a finished run produced.
#[derive(Debug)]
pub struct RunSummary {
    /// Final coprime / non-coprime counts
    pub counts: PairCounts,

    /// Observable run behavior
    pub metrics: RunMetrics,

    /// Set when the stream ended with a read failure instead of EOF
    pub read_error: Option<std::io::Error>,
}

/// Run the pipeline over `reader` until end-of-stream.
///
/// # Errors
/// Only internal invariant violations (malformed hex text reaching the
/// tester) surface as `Err`. A read failure is not an `Err`: it is
/// reported in the summary with the partial results intact.
pub fn run<R: Read>(mut reader: R, config: &RunConfig) -> Result<RunSummary> {
    let mut decoder = StreamDecoder::new(config.digits_per_number);
    let mut assembler = PairAssembler::new();
    let mut counts = PairCounts::new();
    let mut metrics = RunMetrics::new();
    let mut read_error = None;

    let mut buf = [0u8; READ_BUF_BYTES];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                for &byte in &buf[..n] {
                    metrics.bytes_consumed += 1;
                    let Some(number) = decoder.push_byte(byte) else {
                        continue;
                    };
                    metrics.integers_completed += 1;
                    let Some((first, second)) = assembler.push(number) else {
                        continue;
                    };
                    counts.record(coprime::are_coprime(&first, &second)?);
                    metrics.pairs_tested += 1;
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                read_error = Some(e);
                break;
            }
        }
    }

    metrics.trailing_digits_discarded = decoder.pending_digits() as u64;
    metrics.unpaired_integer_discarded = assembler.has_unpaired();
    metrics.complete();

    if metrics.trailing_digits_discarded > 0 {
        debug!(
            digits = metrics.trailing_digits_discarded,
            "discarding trailing partial integer"
        );
    }
    if metrics.unpaired_integer_discarded {
        debug!("discarding unpaired integer at end of stream");
    }
    info!(
        bytes = metrics.bytes_consumed,
        pairs = metrics.pairs_tested,
        duration_ms = metrics.duration().as_millis() as u64,
        "stream exhausted"
    );

    Ok(RunSummary {
        counts,
        metrics,
        read_error,
    })
}

/// Write the four-line report: counts first, then the estimate.
///
/// The counts go out before the estimate is computed, so a stream with no
/// coprime pairs still reports `rp` and `nrp` before the typed
/// `NoCoprimePairs` failure comes back. Counts print as exact integers
/// (external aggregation needs them lossless); `rpi`/`tpi` print to the
/// configured significant digits.
pub fn write_report<W: Write>(
    w: &mut W,
    summary: &RunSummary,
    config: &RunConfig,
) -> Result<PiEstimate> {
    writeln!(w, " rp: {}", summary.counts.coprime())?;
    writeln!(w, "nrp: {}", summary.counts.non_coprime())?;

    let est = estimate::estimate(&summary.counts, &config.precision())?;
    writeln!(w, "rpi: {}", est.estimated)?;
    writeln!(w, "tpi: {}", est.reference)?;

    Ok(est)
}
