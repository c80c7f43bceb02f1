//! # engine::volume
//!
//! **Execution volume**: looks a ticker up in the fixed table and jitters
//! the live volume, or fabricates a full record for tickers the desk does not
//! track.
//!
//! The random source is always passed in.  The server hands over its shared
//! generator from [`crate::state::AppState`]; tests pass a seeded `StdRng`.
//! Results are non-deterministic unless the generator is.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::models::{execution, ExecutionRecord};

// ─── Ranges ───────────────────────────────────────────────────────────────────

/// Multiplicative jitter applied to a tracked ticker's current volume (±5%).
pub const CURRENT_VOLUME_FACTOR: RangeInclusive<f64> = 0.95..=1.05;

pub const SYNTH_PROJECTED_RANGE: RangeInclusive<u64> = 10_000_000..=50_000_000;
pub const SYNTH_CURRENT_RANGE: RangeInclusive<u64> = 5_000_000..=30_000_000;
pub const SYNTH_AVG_DAILY_RANGE: RangeInclusive<u64> = 1_000_000..=5_000_000;

// ─── Origin ───────────────────────────────────────────────────────────────────

/// Where a returned record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeOrigin {
    /// Fixed table, current volume jittered.
    Table,
    /// Unknown ticker, every field sampled.
    Synthesized,
}

// ─── Core ─────────────────────────────────────────────────────────────────────

/// Volumes for `ticker` (any case).
pub fn execution_volume<R: Rng + ?Sized>(
    ticker: &str,
    rng: &mut R,
) -> (ExecutionRecord, VolumeOrigin) {
    let ticker = ticker.to_ascii_uppercase();

    match execution::lookup(&ticker) {
        Some(record) => (jitter_current(record, rng), VolumeOrigin::Table),
        None => (synthesize(rng), VolumeOrigin::Synthesized),
    }
}

/// Scale `current_volume` by a factor drawn from [`CURRENT_VOLUME_FACTOR`],
/// truncating toward zero.  The other two fields pass through.
pub fn jitter_current<R: Rng + ?Sized>(record: ExecutionRecord, rng: &mut R) -> ExecutionRecord {
    let factor = rng
        .gen_range(CURRENT_VOLUME_FACTOR)
        .clamp(*CURRENT_VOLUME_FACTOR.start(), *CURRENT_VOLUME_FACTOR.end());

    ExecutionRecord {
        current_volume: (record.current_volume as f64 * factor) as u64,
        ..record
    }
}

/// Three independent draws, one per field.
pub fn synthesize<R: Rng + ?Sized>(rng: &mut R) -> ExecutionRecord {
    ExecutionRecord {
        projected_volume: rng.gen_range(SYNTH_PROJECTED_RANGE),
        current_volume: rng.gen_range(SYNTH_CURRENT_RANGE),
        avg_daily_volume: rng.gen_range(SYNTH_AVG_DAILY_RANGE),
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    const PATH_CURRENT: u64 = 26_800_000;

    fn path_bounds() -> RangeInclusive<u64> {
        let low = (PATH_CURRENT as f64 * 0.95) as u64;
        let high = (PATH_CURRENT as f64 * 1.05) as u64;
        low..=high
    }

    #[test]
    fn test_known_ticker_jitters_current_only() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let (record, origin) = execution_volume("PATH", &mut rng);
            assert_eq!(origin, VolumeOrigin::Table);
            assert_eq!(record.projected_volume, 39_400_000);
            assert_eq!(record.avg_daily_volume, 4_200_000);
            assert!(
                path_bounds().contains(&record.current_volume),
                "current {} outside ±5%",
                record.current_volume
            );
        }
    }

    #[test]
    fn test_lowercase_ticker_hits_table() {
        let mut rng = StdRng::seed_from_u64(11);
        let (record, origin) = execution_volume("path", &mut rng);
        assert_eq!(origin, VolumeOrigin::Table);
        assert_eq!(record.projected_volume, 39_400_000);

        let (_, origin) = execution_volume("dEcK", &mut rng);
        assert_eq!(origin, VolumeOrigin::Table);
    }

    #[test]
    fn test_unknown_ticker_is_synthesized_within_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let (record, origin) = execution_volume("ZZZZ", &mut rng);
            assert_eq!(origin, VolumeOrigin::Synthesized);
            assert!(SYNTH_PROJECTED_RANGE.contains(&record.projected_volume));
            assert!(SYNTH_CURRENT_RANGE.contains(&record.current_volume));
            assert!(SYNTH_AVG_DAILY_RANGE.contains(&record.avg_daily_volume));
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let mut a = StdRng::seed_from_u64(2024);
        let mut b = StdRng::seed_from_u64(2024);
        for ticker in ["PATH", "ZZZZ", "wex", "QQQ"] {
            assert_eq!(execution_volume(ticker, &mut a), execution_volume(ticker, &mut b));
        }
    }

    #[test]
    fn test_jitter_preserves_zero_volume() {
        let mut rng = StdRng::seed_from_u64(3);
        let record = jitter_current(ExecutionRecord::new(5, 0, 1), &mut rng);
        assert_eq!(record, ExecutionRecord::new(5, 0, 1));
    }
}
