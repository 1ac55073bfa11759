//! # Subdomain Creator
//!
//! Checks proposed subdomains, suggests alternatives and generates DNS
//! forwarding configuration, served over HTTP with Axum.
//!
//! Availability is simulated: no WHOIS, RDAP or DNS query is ever made and
//! no record is provisioned anywhere.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The engine: catalog, validator, availability, suggestions, synthesis
//! - **Application Layer** ([`application`]) - Services wrapping the engine with logging and metrics
//! - **Infrastructure Layer** ([`infrastructure`]) - Availability checker implementations
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: reproducible availability and suggestions
//! export AVAILABILITY_SEED=42
//!
//! # Start the service
//! cargo run
//!
//! # Or use the engine from the command line
//! cargo run --bin domainctl -- check myshop .io
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CheckOutcome, DnsService, DomainService};
    pub use crate::domain::availability::AvailabilityChecker;
    pub use crate::domain::entities::{
        AvailabilityResult, DnsConfiguration, DomainCandidate, ExtensionCatalog, ForwardType,
    };
    pub use crate::domain::synthesizer::ConfigSynthesizer;
    pub use crate::error::AppError;
    pub use crate::infrastructure::availability::SimulatedChecker;
    pub use crate::state::AppState;
    pub use crate::utils::random::RandomSource;
}
