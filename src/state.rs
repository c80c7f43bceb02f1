//! # state
//!
//! Shared application state injected into every Axum handler.
//!
//! The static tables live in [`crate::models`] and need no state.  The one
//! thing handlers share is the random source behind the execution endpoint.
//! It sits behind a `std::sync::Mutex`; the guard must never be held across
//! an `.await`.

use std::sync::{Arc, Mutex, MutexGuard};

use rand::{rngs::StdRng, SeedableRng};

// ─── AppState ─────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct AppState {
    /// Generator for execution-volume jitter and synthesis.
    pub rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// State with a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// State with a deterministic generator.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self { rng: Arc::new(Mutex::new(rng)) }
    }

    /// Lock the generator.  A panic while holding the lock cannot leave a
    /// `StdRng` in a broken state, so poisoning is ignored.
    pub fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience type alias so callers can write `SharedState` instead of the
/// full generic form.
pub type SharedState = Arc<AppState>;

/// Construct the shared state, seeded when `seed` is given.
pub fn build_state(seed: Option<u64>) -> SharedState {
    let state = match seed {
        Some(seed) => AppState::with_seed(seed),
        None => AppState::new(),
    };
    Arc::new(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_states_agree() {
        let a = build_state(Some(5));
        let b = build_state(Some(5));
        let xa: u64 = a.rng().gen();
        let xb: u64 = b.rng().gen();
        assert_eq!(xa, xb);
    }

    #[test]
    fn test_clones_share_generator() {
        let a = AppState::with_seed(1);
        let b = a.clone();
        let first: u64 = a.rng().gen();

        let fresh: u64 = AppState::with_seed(1).rng().gen();
        let second: u64 = b.rng().gen();
        assert_eq!(first, fresh);
        assert_ne!(first, second);
    }
}
