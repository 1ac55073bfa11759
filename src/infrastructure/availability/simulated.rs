//! Simulated availability checker.
//!
//! Stands in for a registry lookup: the verdict is a weighted coin flip and
//! says nothing about the real state of the domain.

use crate::domain::availability::AvailabilityChecker;
use crate::domain::entities::{AvailabilityResult, DomainCandidate};
use crate::utils::random::RandomSource;
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

/// Probability that a simulated check reports the domain as available.
pub const DEFAULT_AVAILABLE_RATIO: f64 = 0.7;

/// Draws a verdict for `candidate` that is `available` with probability
/// `available_ratio`.
///
/// `available_ratio` is clamped to `[0, 1]`; NaN counts as `0`.
pub fn simulate_availability<R: Rng + ?Sized>(
    candidate: &DomainCandidate,
    available_ratio: f64,
    rng: &mut R,
) -> AvailabilityResult {
    let ratio = if available_ratio.is_nan() {
        0.0
    } else {
        available_ratio.clamp(0.0, 1.0)
    };

    AvailabilityResult::new(candidate.full_domain(), rng.random_bool(ratio))
}

/// [`AvailabilityChecker`] backed by [`simulate_availability`].
///
/// Draws come from an injected [`RandomSource`]; a seeded source makes the
/// sequence of verdicts reproducible.
#[derive(Debug)]
pub struct SimulatedChecker {
    available_ratio: f64,
    random: Arc<RandomSource>,
}

impl SimulatedChecker {
    pub fn new(available_ratio: f64, random: Arc<RandomSource>) -> Self {
        debug!(available_ratio, "Using simulated availability checker");
        Self {
            available_ratio,
            random,
        }
    }

    /// A checker with the default 70/30 split and a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(DEFAULT_AVAILABLE_RATIO, Arc::new(RandomSource::seeded(seed)))
    }
}

impl Default for SimulatedChecker {
    fn default() -> Self {
        Self::new(DEFAULT_AVAILABLE_RATIO, Arc::new(RandomSource::Entropy))
    }
}

impl AvailabilityChecker for SimulatedChecker {
    fn check(&self, candidate: &DomainCandidate) -> AvailabilityResult {
        self.random
            .with_rng(|rng| simulate_availability(candidate, self.available_ratio, rng))
    }
}
