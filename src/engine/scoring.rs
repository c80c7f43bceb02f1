//! # engine::scoring
//!
//! **Fit-score calculator** and bench ranking.
//!
//! ```text
//! fit = 40·profitable + 30·market_cap_valid + 20·liquidity_valid + 10·sector_match
//! ```
//!
//! The score is always in `0..=100`.  Ranking is a stable descending sort, so
//! candidates with equal scores keep their table order, and ranks run densely
//! from 1.

use crate::models::{CandidateRecord, RankedCandidate};

// ─── Weights ──────────────────────────────────────────────────────────────────

pub const PROFITABILITY_WEIGHT: u32 = 40;
pub const MARKET_CAP_WEIGHT: u32 = 30;
pub const LIQUIDITY_WEIGHT: u32 = 20;
pub const SECTOR_WEIGHT: u32 = 10;

/// Highest score a candidate can reach.
pub const MAX_FIT_SCORE: u32 =
    PROFITABILITY_WEIGHT + MARKET_CAP_WEIGHT + LIQUIDITY_WEIGHT + SECTOR_WEIGHT;

// ─── Fit score ────────────────────────────────────────────────────────────────

/// Weighted sum of the four screening criteria.
#[inline]
pub fn fit_score(candidate: &CandidateRecord) -> u32 {
    let weight = |passed: bool, w: u32| if passed { w } else { 0 };

    let score = weight(candidate.profitability, PROFITABILITY_WEIGHT)
        + weight(candidate.market_cap_valid, MARKET_CAP_WEIGHT)
        + weight(candidate.liquidity_valid, LIQUIDITY_WEIGHT)
        + weight(candidate.sector_match, SECTOR_WEIGHT);

    debug_assert!(score <= MAX_FIT_SCORE);
    score
}

// ─── Ranking ──────────────────────────────────────────────────────────────────

/// Score every candidate, order by score (highest first) and number the
/// result 1..=N.
pub fn rank_candidates(candidates: &[CandidateRecord]) -> Vec<RankedCandidate> {
    let mut scored: Vec<(u32, &CandidateRecord)> =
        candidates.iter().map(|c| (fit_score(c), c)).collect();

    // `sort_by` is stable: equal scores stay in table order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (score, record))| RankedCandidate::new(record, score, i + 1))
        .collect()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
