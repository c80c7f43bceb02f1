//! # routes::execution
//!
//! | Method | Path                      | Description                         |
//! |--------|---------------------------|-------------------------------------|
//! | GET    | `/api/execution/{ticker}` | Projected / current / average volume |
//!
//! Unknown tickers are not an error: they get a fabricated record (see
//! [`crate::engine::volume`]).  Responses vary call to call.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::{
    engine::volume::{execution_volume, VolumeOrigin},
    models::ExecutionRecord,
    state::SharedState,
};

/// GET /api/execution/:ticker
pub async fn get_execution(
    State(state): State<SharedState>,
    Path(ticker): Path<String>,
) -> Json<ExecutionRecord> {
    let (record, origin) = {
        let mut rng = state.rng();
        execution_volume(&ticker, &mut *rng)
    };

    match origin {
        VolumeOrigin::Table => {
            debug!(%ticker, current = record.current_volume, "Execution volume from table")
        }
        VolumeOrigin::Synthesized => {
            debug!(%ticker, "Unknown ticker, execution volume synthesized")
        }
    }

    Json(record)
}
