//! Application layer services implementing business logic.
//!
//! Services wrap the engine in [`crate::domain`] with logging, metrics and
//! the shared random source. HTTP handlers and the CLI both call into them.
//!
//! # Available Services
//!
//! - [`services::domain_service::DomainService`] - Validation, availability and suggestions
//! - [`services::dns_service::DnsService`] - DNS record and forwarding generation

pub mod services;
