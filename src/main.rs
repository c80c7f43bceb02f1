//! # Index Bench — screening API for index replacement candidates
//!
//! ## Architecture Overview
//!
//! ```text
//!  ┌──────────────┐   GET /api/vacancy            ┌──────────────────────────┐
//!  │  Front-end   │ ─────────────────────────────▶│  static VACANCIES        │
//!  │  dashboard   │   GET /api/bench              │  static CANDIDATES ──▶ scoring
//!  │              │ ─────────────────────────────▶│                          │
//!  │              │   GET /api/execution/:ticker  │  EXECUTION_TABLE ──▶ volume
//!  │              │ ─────────────────────────────▶│     ▲  AppState.rng      │
//!  └──────────────┘   GET /api/health             └──────────────────────────┘
//! ```
//!
//! ## Environment Variables
//!
//! | Variable         | Default              | Description                       |
//! |------------------|----------------------|-----------------------------------|
//! | `BIND_ADDR`      | `127.0.0.1:8000`     | Address Axum listens on           |
//! | `EXECUTION_SEED` | unset                | Seed the volume RNG               |
//! | `RUST_LOG`       | `index_bench=debug`  | Tracing filter                    |

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod app;
mod config;
mod engine;
mod error;
mod models;
mod routes;
mod state;

use app::build_app;
use config::ServerConfig;
use state::build_state;

// ─── Entry Point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Load .env (optional) ──────────────────────────────────────────────
    dotenvy::dotenv().ok();

    // ── 2. Initialise structured logging ─────────────────────────────────────
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env()
            .add_directive("index_bench=debug".parse()?)
            .add_directive("tower_http=info".parse()?))
        .init();

    info!(
        r#"

  ╔═══════════════════════════════════════════════╗
  ║        INDEX BENCH — Screening API            ║
  ║        Vacancy · Bench · Execution            ║
  ╚═══════════════════════════════════════════════╝"#
    );

    // ── 3. Configuration ─────────────────────────────────────────────────────
    let config = ServerConfig::from_env()?;
    if let Some(seed) = config.execution_seed {
        info!(seed, "Execution volumes seeded, output is reproducible");
    }

    // ── 4. Shared state + router ─────────────────────────────────────────────
    let state = build_state(config.execution_seed);
    let app = build_app(state);

    // ── 5. Start the server ──────────────────────────────────────────────────
    info!(addr = ?config.bind_addr, "🚀 Index Bench server starting");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
