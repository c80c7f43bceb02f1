//! # models::candidate
//!
//! Replacement candidates for the bench leaderboard.
//!
//! [`CandidateRecord`] is the raw screening row; [`RankedCandidate`] is what
//! the leaderboard receives after [`crate::engine::scoring::rank_candidates`]
//! has scored and ordered the table.  Ranked rows are built per request and
//! never stored.

use serde::Serialize;

// ─── CurrentIndex ─────────────────────────────────────────────────────────────

/// The index a candidate currently belongs to, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CurrentIndex {
    #[serde(rename = "None")]
    Unlisted,
    #[serde(rename = "S&P SmallCap 600")]
    SmallCap600,
    #[serde(rename = "S&P MidCap 400")]
    MidCap400,
}

// ─── CandidateRecord ──────────────────────────────────────────────────────────

/// A single screening row.  Only the four boolean criteria feed the fit score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateRecord {
    pub ticker: &'static str,
    pub name: &'static str,
    /// GAAP profitable over the trailing four quarters.
    pub profitability: bool,
    /// Market cap inside the index eligibility band.
    pub market_cap_valid: bool,
    /// Raw market cap, USD billions.  Does not feed the score.
    pub market_cap_billions: f64,
    pub liquidity_valid: bool,
    pub sector_match: bool,
    /// Estimated upside on inclusion, in percent.
    pub upside: f64,
    pub current_index: CurrentIndex,
}

// ─── RankedCandidate ──────────────────────────────────────────────────────────

/// A candidate after scoring, as the leaderboard consumes it.
///
/// The three criteria flags keep the front-end's historical key names
/// (`gaapProfitable`, `marketCap`, `liquidity`); `marketCapBillions` carries
/// the raw value alongside the `marketCap` flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    /// 1-based position after sorting by fit score.
    pub rank: usize,
    pub ticker: &'static str,
    pub name: &'static str,
    pub fit_score: u32,
    pub gaap_profitable: bool,
    pub market_cap: bool,
    pub market_cap_billions: f64,
    pub liquidity: bool,
    pub sector_match: bool,
    pub upside: f64,
    pub current_index: CurrentIndex,
}

impl RankedCandidate {
    /// Attach a score and rank to a raw record.
    pub fn new(record: &CandidateRecord, fit_score: u32, rank: usize) -> Self {
        Self {
            rank,
            ticker: record.ticker,
            name: record.name,
            fit_score,
            gaap_profitable: record.profitability,
            market_cap: record.market_cap_valid,
            market_cap_billions: record.market_cap_billions,
            liquidity: record.liquidity_valid,
            sector_match: record.sector_match,
            upside: record.upside,
            current_index: record.current_index,
        }
    }
}

// ─── Static table ─────────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
const fn candidate(
    ticker: &'static str,
    name: &'static str,
    profitability: bool,
    market_cap_valid: bool,
    market_cap_billions: f64,
    liquidity_valid: bool,
    sector_match: bool,
    upside: f64,
    current_index: CurrentIndex,
) -> CandidateRecord {
    CandidateRecord {
        ticker,
        name,
        profitability,
        market_cap_valid,
        market_cap_billions,
        liquidity_valid,
        sector_match,
        upside,
        current_index,
    }
}

use CurrentIndex::{MidCap400, SmallCap600, Unlisted};

/// The fixed candidate table, in source order.  Ties in fit score keep this
/// order on the leaderboard.
pub static CANDIDATES: [CandidateRecord; 12] = [
    candidate("PATH", "UiPath Inc",           true,  true,  8.5,  true,  true,  12.5, Unlisted),
    candidate("DECK", "Deckers Outdoor",      true,  true,  24.8, true,  true,  18.2, MidCap400),
    candidate("ELF",  "Elf Beauty Inc",       true,  true,  7.2,  true,  true,  14.8, SmallCap600),
    candidate("BILL", "Bill.com Holdings",    true,  true,  6.8,  true,  false, 9.5,  Unlisted),
    candidate("MNDY", "Monday.com Ltd",       true,  true,  12.1, true,  false, 8.2,  Unlisted),
    candidate("PCTY", "Paylocity Holding",    true,  true,  9.4,  true,  false, 7.8,  Unlisted),
    candidate("EEFT", "Euronet Worldwide",    true,  true,  5.2,  false, true,  6.4,  Unlisted),
    candidate("WEX",  "WEX Inc",              true,  true,  7.8,  false, true,  5.9,  Unlisted),
    candidate("DUOL", "Duolingo Inc",         true,  true,  11.5, true,  false, 5.2,  Unlisted),
    candidate("APPF", "AppFolio Inc",         true,  false, 3.2,  true,  true,  4.8,  SmallCap600),
    candidate("CWAN", "Clearwater Analytics", false, true,  5.8,  true,  true,  4.1,  Unlisted),
    candidate("FRSH", "Freshworks Inc",       false, true,  4.5,  true,  false, 3.5,  Unlisted),
];
