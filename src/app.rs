//! # app
//!
//! Router assembly: routes, JSON fallback, request tracing and CORS.
//!
//! ## Endpoints
//!
//! | Method | Path                      | Handler                                   |
//! |--------|---------------------------|-------------------------------------------|
//! | GET    | `/api/vacancy`            | [`routes::vacancy::get_vacancies`]        |
//! | GET    | `/api/bench`              | [`routes::bench::get_bench`]              |
//! | GET    | `/api/execution/:ticker`  | [`routes::execution::get_execution`]      |
//! | GET    | `/api/health`             | [`routes::health::health_check`]          |

use axum::{http::Uri, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::AppError,
    routes::{
        bench::get_bench, execution::get_execution, health::health_check,
        vacancy::get_vacancies,
    },
    state::SharedState,
};

/// Build the full application router around `state`.
pub fn build_app(state: SharedState) -> Router {
    // Any origin: the front-end dev server runs on its own port.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/vacancy",           get(get_vacancies))
        .route("/api/bench",             get(get_bench))
        .route("/api/execution/:ticker", get(get_execution))
        .route("/api/health",            get(health_check))
        .fallback(not_found)
        // ── Middleware ────────────────────────────────────────────────────────
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
