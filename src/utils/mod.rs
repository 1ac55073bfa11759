//! Helpers shared by the engine and its shells.
//!
//! - [`random`] - Injectable random source (entropy or seeded)
//! - [`target_url`] - Forwarding target URL checks

pub mod random;
pub mod target_url;
