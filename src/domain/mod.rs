//! Domain layer: the validation and configuration engine.
//!
//! Everything here is synchronous and free of I/O. Randomness is passed in
//! by the caller so results can be reproduced with a seeded generator.
//!
//! # Architecture
//!
//! - [`entities`] - Value objects (catalog, candidate, results, DNS config)
//! - [`validator`] - Subdomain and extension rules
//! - [`availability`] - Availability checker capability
//! - [`suggestions`] - Alternative name generation
//! - [`synthesizer`] - DNS record and forwarding synthesis
//!
//! # Request Flow
//!
//! 1. [`validator::validate`] collects every rule violation
//! 2. A valid candidate goes to an [`availability::AvailabilityChecker`]
//! 3. When taken, [`suggestions::suggest`] offers alternatives
//! 4. Once a domain is chosen, [`synthesizer::ConfigSynthesizer`] builds its records

pub mod availability;
pub mod entities;
pub mod suggestions;
pub mod synthesizer;
pub mod validator;
