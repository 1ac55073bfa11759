//! DNS configuration service.

use crate::domain::entities::{DnsConfiguration, DomainCandidate, ExtensionCatalog, ForwardType};
use crate::domain::synthesizer::ConfigSynthesizer;
use crate::error::AppError;
use tracing::info;

/// Service producing DNS records and forwarding rules for a chosen domain.
pub struct DnsService {
    synthesizer: ConfigSynthesizer,
}

impl DnsService {
    pub fn new(synthesizer: ConfigSynthesizer) -> Self {
        Self { synthesizer }
    }

    pub fn synthesizer(&self) -> &ConfigSynthesizer {
        &self.synthesizer
    }

    /// Generates the configuration for `candidate`.
    ///
    /// `forward_type` accepts `301`, `302`, `307`, `308` or `path`; absent or
    /// blank means `301`. The candidate is not re-validated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unknown forwarding type.
    /// Returns [`AppError::InvalidTargetUrl`] if `target_url` is not an absolute
    /// HTTP(S) URL.
    pub fn generate(
        &self,
        candidate: &DomainCandidate,
        target_url: &str,
        forward_type: Option<&str>,
    ) -> Result<DnsConfiguration, AppError> {
        let forward_type = ForwardType::parse_optional(forward_type)?;

        let config = self
            .synthesizer
            .generate(candidate, target_url, forward_type)?;

        Ok(record_generated(config, forward_type))
    }

    /// Generates the configuration for a full domain such as `myshop.is.dev`.
    ///
    /// The subdomain is recovered as in
    /// [`ConfigSynthesizer::generate_for_domain`].
    ///
    /// # Errors
    ///
    /// Same as [`DnsService::generate`].
    pub fn generate_for_domain(
        &self,
        domain: &str,
        catalog: &ExtensionCatalog,
        target_url: &str,
        forward_type: Option<&str>,
    ) -> Result<DnsConfiguration, AppError> {
        let forward_type = ForwardType::parse_optional(forward_type)?;

        let config = self
            .synthesizer
            .generate_for_domain(domain, catalog, target_url, forward_type)?;

        Ok(record_generated(config, forward_type))
    }
}

fn record_generated(config: DnsConfiguration, forward_type: ForwardType) -> DnsConfiguration {
    info!(
        domain = %config.domain,
        forwarding = ?forward_type,
        "DNS configuration generated"
    );
    metrics::counter!("dns_configs_generated_total").increment(1);

    config
}
