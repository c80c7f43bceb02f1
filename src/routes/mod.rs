//! Axum route handlers, one file per resource.

pub mod bench;
pub mod execution;
pub mod health;
pub mod vacancy;
