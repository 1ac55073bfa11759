//! DNS record and forwarding configuration synthesis.

use crate::domain::entities::{
    DnsConfigError, DnsConfiguration, DnsRecord, DomainCandidate, ExtensionCatalog, ForwardType,
    PathForward, RedirectRule,
};
use crate::utils::target_url::check_target_url;

/// Canonical CNAME endpoint of the hosting platform.
pub const DEFAULT_PLATFORM_HOST: &str = "cname.render.com";

/// TTL advertised on generated records, in seconds.
pub const DEFAULT_TTL_SECONDS: u32 = 3600;

/// Builds DNS configurations pointing domains at the hosting platform.
///
/// The platform host and TTL are fixed at construction; nothing about the
/// records depends on the requested domain beyond its name.
#[derive(Debug, Clone)]
pub struct ConfigSynthesizer {
    platform_host: String,
    ttl: u32,
}

impl ConfigSynthesizer {
    pub fn new(platform_host: impl Into<String>, ttl: u32) -> Self {
        Self {
            platform_host: platform_host.into(),
            ttl,
        }
    }

    pub fn platform_host(&self) -> &str {
        &self.platform_host
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Generates the configuration for an already validated candidate.
    ///
    /// # Output
    ///
    /// - `CNAME @` and `CNAME www`, both pointing at the platform host
    /// - A redirect from the full domain to `target_url`
    /// - For [`ForwardType::Path`], a path-forward from `/<subdomain>` to
    ///   `target_url` as well
    ///
    /// The candidate is not re-validated.
    ///
    /// # Errors
    ///
    /// Returns [`DnsConfigError::InvalidTargetUrl`] if `target_url` is not an
    /// absolute HTTP(S) URL. No partial configuration is produced.
    pub fn generate(
        &self,
        candidate: &DomainCandidate,
        target_url: &str,
        forward_type: ForwardType,
    ) -> Result<DnsConfiguration, DnsConfigError> {
        let target_url = check_target_url(target_url)
            .map_err(|e| DnsConfigError::InvalidTargetUrl(e.to_string()))?;

        let domain = candidate.full_domain();

        let records = vec![
            DnsRecord::cname("@", self.platform_host.as_str(), self.ttl),
            DnsRecord::cname("www", self.platform_host.as_str(), self.ttl),
        ];

        let forwarding = RedirectRule {
            kind: forward_type.redirect_kind(),
            from: domain.clone(),
            to: target_url.to_string(),
        };

        let path_forwarding = match forward_type {
            ForwardType::Path => Some(PathForward {
                source: format!("/{}", candidate.subdomain),
                destination: target_url.to_string(),
            }),
            ForwardType::Redirect(_) => None,
        };

        Ok(DnsConfiguration {
            domain,
            records,
            forwarding: Some(forwarding),
            path_forwarding,
        })
    }

    /// Generates the configuration for a full domain string.
    ///
    /// The subdomain is recovered with [`ExtensionCatalog::split_domain`];
    /// a domain under no catalog extension is split at its first dot.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigSynthesizer::generate`].
    pub fn generate_for_domain(
        &self,
        domain: &str,
        catalog: &ExtensionCatalog,
        target_url: &str,
        forward_type: ForwardType,
    ) -> Result<DnsConfiguration, DnsConfigError> {
        let candidate = catalog.split_domain(domain).unwrap_or_else(|| {
            match domain.find('.') {
                Some(dot) => DomainCandidate::new(&domain[..dot], &domain[dot..]),
                None => DomainCandidate::new(domain, ""),
            }
        });

        self.generate(&candidate, target_url, forward_type)
    }
}

impl Default for ConfigSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_PLATFORM_HOST, DEFAULT_TTL_SECONDS)
    }
}
