//! Integration tests for the full randpi pipeline.
//!
//! These tests verify end-to-end behavior: bytes -> hex integers -> pairs
//! -> gcd -> counts -> report, including the discard accounting at
//! end-of-stream, determinism, and statistical convergence on seeded
//! pseudorandom streams.

use std::io::Cursor;

use num_bigint::BigUint;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use randpi_core::{pipeline, Error, RunConfig};

/// Deterministic pseudorandom stream for tests.
fn seeded_stream(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = vec![0u8; len];
    rng.fill(&mut data[..]);
    data
}

/// Pair-count arithmetic: with 10 hex digits per integer, each integer is
/// 5 bytes and each pair 10 bytes.
#[test]
fn test_pair_counts_match_stream_length() {
    let config = RunConfig::default();

    // 100 bytes: exactly 10 pairs, nothing discarded
    let summary = pipeline::run(Cursor::new(seeded_stream(1, 100)), &config).unwrap();
    assert_eq!(summary.counts.total(), BigUint::from(10u32));
    assert_eq!(summary.metrics.pairs_tested, 10);
    assert_eq!(summary.metrics.integers_completed, 20);
    assert_eq!(summary.metrics.trailing_digits_discarded, 0);
    assert!(!summary.metrics.unpaired_integer_discarded);

    // 95 bytes: 9 pairs; the trailing 5 bytes form one complete but
    // unpaired integer, which is discarded
    let summary = pipeline::run(Cursor::new(seeded_stream(1, 95)), &config).unwrap();
    assert_eq!(summary.counts.total(), BigUint::from(9u32));
    assert_eq!(summary.metrics.integers_completed, 19);
    assert_eq!(summary.metrics.trailing_digits_discarded, 0);
    assert!(summary.metrics.unpaired_integer_discarded);

    // 93 bytes: 9 pairs; 3 trailing bytes leave 6 hex digits pending
    let summary = pipeline::run(Cursor::new(seeded_stream(1, 93)), &config).unwrap();
    assert_eq!(summary.counts.total(), BigUint::from(9u32));
    assert_eq!(summary.metrics.trailing_digits_discarded, 6);
    assert!(!summary.metrics.unpaired_integer_discarded);
}

/// The empty stream reports zero counts and a typed estimate failure.
#[test]
fn test_empty_stream_reports_division_by_zero() {
    let config = RunConfig::default();
    let summary = pipeline::run(Cursor::new([]), &config).unwrap();

    assert!(summary.counts.is_empty());
    assert_eq!(summary.metrics.bytes_consumed, 0);

    let mut out = Vec::new();
    let err = pipeline::write_report(&mut out, &summary, &config).unwrap_err();
    assert!(matches!(err, Error::Estimate(_)));

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, " rp: 0\nnrp: 0\n");
}

/// The literal example: 0x0600000000 and 0x0400000000 are non-coprime.
#[test]
fn test_literal_non_coprime_pair() {
    let bytes = [0x06, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00];
    let summary = pipeline::run(Cursor::new(bytes), &RunConfig::default()).unwrap();

    assert_eq!(summary.counts.coprime(), &BigUint::from(0u32));
    assert_eq!(summary.counts.non_coprime(), &BigUint::from(1u32));
}

/// Identical byte sequences give bit-identical reports.
#[test]
fn test_determinism() {
    let config = RunConfig::default();
    let data = seeded_stream(42, 10_000);

    let mut report1 = Vec::new();
    let summary1 = pipeline::run(Cursor::new(data.clone()), &config).unwrap();
    pipeline::write_report(&mut report1, &summary1, &config).unwrap();

    let mut report2 = Vec::new();
    let summary2 = pipeline::run(Cursor::new(data), &config).unwrap();
    pipeline::write_report(&mut report2, &summary2, &config).unwrap();

    assert_eq!(report1, report2);
    assert_eq!(summary1.counts.total(), summary2.counts.total());
}

/// Counters are non-decreasing over growing stream prefixes.
#[test]
fn test_monotonicity_over_prefixes() {
    let config = RunConfig::default();
    let data = seeded_stream(7, 500);

    let mut last_rp = BigUint::from(0u32);
    let mut last_nrp = BigUint::from(0u32);

    for end in (0..=data.len()).step_by(20) {
        let summary = pipeline::run(Cursor::new(&data[..end]), &config).unwrap();
        assert!(summary.counts.coprime() >= &last_rp);
        assert!(summary.counts.non_coprime() >= &last_nrp);
        last_rp = summary.counts.coprime().clone();
        last_nrp = summary.counts.non_coprime().clone();
    }
}

/// `rp + nrp` always equals the number of fully assembled pairs.
#[test]
fn test_counts_equal_pairs_for_many_lengths() {
    let config = RunConfig::default();

    for len in [0, 1, 5, 9, 10, 19, 20, 21, 99, 100, 101, 255] {
        let summary = pipeline::run(Cursor::new(seeded_stream(9, len)), &config).unwrap();
        let expected_pairs = (len / config.bytes_per_pair()) as u64;
        assert_eq!(summary.metrics.pairs_tested, expected_pairs, "len {len}");
        assert_eq!(
            summary.counts.total(),
            BigUint::from(expected_pairs),
            "len {len}"
        );
    }
}

/// A reader that fails mid-stream: processed pairs survive as partial
/// results alongside the error.
struct FailingReader {
    data: Vec<u8>,
    pos: usize,
}

impl std::io::Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.pos >= self.data.len() {
            return Err(std::io::Error::other("entropy source unplugged"));
        }
        let n = buf.len().min(self.data.len() - self.pos).min(16);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

#[test]
fn test_read_failure_keeps_partial_results() {
    let config = RunConfig::default();
    let reader = FailingReader {
        data: seeded_stream(3, 25),
        pos: 0,
    };

    let summary = pipeline::run(reader, &config).unwrap();

    assert!(summary.read_error.is_some());
    assert_eq!(summary.metrics.bytes_consumed, 25);
    assert_eq!(summary.metrics.pairs_tested, 2);
    assert_eq!(summary.counts.total(), BigUint::from(2u32));

    // The report still renders from the partial counts.
    let mut out = Vec::new();
    pipeline::write_report(&mut out, &summary, &config).unwrap();
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 4);
}

/// Statistical convergence: a good pseudorandom stream drives the estimate
/// toward Pi. Tolerance band, not exact equality; with 200k pairs the
/// standard deviation of the estimate is roughly 0.003, so 0.02 is a wide
/// margin while still catching a broken pipeline (which lands far away or
/// fails outright).
#[test]
fn test_statistical_convergence() {
    let config = RunConfig::default();
    // 2_000_000 bytes -> 200_000 pairs of 40-bit integers
    let data = seeded_stream(0xC0FFEE, 2_000_000);

    let summary = pipeline::run(Cursor::new(data), &config).unwrap();
    assert_eq!(summary.metrics.pairs_tested, 200_000);

    let mut out = Vec::new();
    pipeline::write_report(&mut out, &summary, &config).unwrap();
    let text = String::from_utf8(out).unwrap();

    let rpi_line = text.lines().find(|l| l.starts_with("rpi: ")).unwrap();
    let rpi: f64 = rpi_line["rpi: ".len()..][..17].parse().unwrap();

    assert!(
        (rpi - std::f64::consts::PI).abs() < 0.02,
        "estimate {rpi} too far from Pi"
    );
}
