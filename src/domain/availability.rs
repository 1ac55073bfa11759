//! Availability checking capability.

use crate::domain::entities::{AvailabilityResult, DomainCandidate};

/// Decides whether a validated candidate can be registered.
///
/// Implementations must be thread-safe and must only be called with
/// candidates that passed [`crate::domain::validator::validate`].
///
/// # Implementations
///
/// - [`crate::infrastructure::availability::SimulatedChecker`] - Random verdict,
///   no external lookup
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait AvailabilityChecker: Send + Sync {
    /// Returns the verdict for `candidate`; `domain` is its full domain.
    fn check(&self, candidate: &DomainCandidate) -> AvailabilityResult;
}
