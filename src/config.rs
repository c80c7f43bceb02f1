//! # config — server settings from environment variables
//!
//! | Variable         | Default          | Description                              |
//! |------------------|------------------|------------------------------------------|
//! | `BIND_ADDR`      | `127.0.0.1:8000` | Address the server listens on            |
//! | `EXECUTION_SEED` | unset            | Seed for the volume RNG (reproducible)   |

use std::net::SocketAddr;

use anyhow::Context;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// `None` seeds the generator from OS entropy.
    pub execution_seed: Option<u64>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup.  `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address, e.g. 127.0.0.1:8000")?;

        let execution_seed = lookup("EXECUTION_SEED")
            .map(|raw| raw.trim().parse::<u64>())
            .transpose()
            .context("EXECUTION_SEED must be an unsigned integer")?;

        Ok(Self { bind_addr, execution_seed })
    }
}
