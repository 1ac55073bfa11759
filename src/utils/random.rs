//! Injectable randomness for the availability simulation and suggestions.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Where random draws come from.
///
/// `Entropy` uses the calling thread's generator, so concurrent requests
/// never contend. `Seeded` serializes access to a single [`StdRng`], which
/// makes a sequence of draws reproducible for tests and demos.
#[derive(Debug, Default)]
pub enum RandomSource {
    #[default]
    Entropy,
    Seeded(Mutex<StdRng>),
}

impl RandomSource {
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Mutex::new(StdRng::seed_from_u64(seed)))
    }

    /// Seeded when a seed is given, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Self::Entropy, Self::seeded)
    }

    /// Runs `f` with exclusive access to a generator.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match self {
            Self::Entropy => f(&mut rand::rng()),
            Self::Seeded(rng) => {
                let mut guard = rng.lock().unwrap_or_else(PoisonError::into_inner);
                f(&mut *guard)
            }
        }
    }
}
