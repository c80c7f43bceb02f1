//! # routes::bench
//!
//! | Method | Path         | Description                                 |
//! |--------|--------------|---------------------------------------------|
//! | GET    | `/api/bench` | Candidates scored and ranked, best first    |

use axum::Json;
use tracing::debug;

use crate::{
    engine::scoring::rank_candidates,
    models::{RankedCandidate, CANDIDATES},
};

/// GET /api/bench. The leaderboard is rebuilt on every call.
pub async fn get_bench() -> Json<Vec<RankedCandidate>> {
    let ranked = rank_candidates(&CANDIDATES);

    debug!(
        candidates = ranked.len(),
        leader = ranked.first().map(|c| c.ticker),
        "Bench ranked"
    );

    Json(ranked)
}
