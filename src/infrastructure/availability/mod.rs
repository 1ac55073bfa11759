//! Availability checker implementations.
//!
//! Only a simulated checker ships; a registry-backed checker would plug in
//! behind the same [`crate::domain::availability::AvailabilityChecker`] trait.

mod simulated;

pub use simulated::{DEFAULT_AVAILABLE_RATIO, SimulatedChecker, simulate_availability};
