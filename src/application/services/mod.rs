//! Business logic services for the application layer.

pub mod dns_service;
pub mod domain_service;

pub use dns_service::DnsService;
pub use domain_service::{CheckOutcome, DomainService};
