//! Shared application state injected into every handler.

use crate::application::services::{DnsService, DomainService};
use crate::config::Config;
use crate::domain::synthesizer::ConfigSynthesizer;
use crate::infrastructure::availability::SimulatedChecker;
use crate::utils::random::RandomSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub domain_service: Arc<DomainService>,
    pub dns_service: Arc<DnsService>,
}

impl AppState {
    pub fn new(domain_service: Arc<DomainService>, dns_service: Arc<DnsService>) -> Self {
        Self {
            domain_service,
            dns_service,
        }
    }

    /// Wires services from configuration.
    ///
    /// The availability checker and the suggestion generator share one
    /// random source, seeded when `AVAILABILITY_SEED` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured extension catalog is invalid.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let catalog = Arc::new(config.extension_catalog()?);
        let random = Arc::new(RandomSource::from_seed(config.availability_seed));

        let checker = Arc::new(SimulatedChecker::new(
            config.available_ratio,
            random.clone(),
        ));

        let domain_service = Arc::new(DomainService::new(catalog, checker, random));
        let dns_service = Arc::new(DnsService::new(ConfigSynthesizer::new(
            config.platform_host.clone(),
            config.dns_ttl_seconds,
        )));

        Ok(Self::new(domain_service, dns_service))
    }
}
