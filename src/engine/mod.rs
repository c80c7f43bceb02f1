//! Request-scoped computations: bench scoring and execution-volume synthesis.

pub mod scoring;
pub mod volume;
