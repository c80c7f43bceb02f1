//! # routes::health

use axum::Json;
use serde_json::{json, Value};

/// GET /api/health: liveness probe for the front-end.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
