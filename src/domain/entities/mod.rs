//! Value objects exchanged between the engine and its callers.
//!
//! None of these carry identity across requests and none are persisted.
//!
//! - [`ExtensionCatalog`] - Allow-list of extensions
//! - [`DomainCandidate`] - Subdomain + extension under consideration
//! - [`AvailabilityResult`] - Availability verdict
//! - [`DnsConfiguration`] - Generated records and forwarding rules

pub mod availability;
pub mod candidate;
pub mod catalog;
pub mod dns;

pub use availability::AvailabilityResult;
pub use candidate::DomainCandidate;
pub use catalog::{CatalogError, DEFAULT_EXTENSIONS, ExtensionCatalog};
pub use dns::{
    DnsConfigError, DnsConfiguration, DnsRecord, ForwardType, PathForward, RecordType,
    RedirectKind, RedirectRule,
};
