//! DTOs for DNS configuration generation.

use crate::api::dto::RequiredFields;
use crate::domain::entities::{DnsConfiguration, DnsRecord, DomainCandidate, PathForward, RedirectRule};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to generate DNS records and forwarding for a domain.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub subdomain: Option<String>,
    pub extension: Option<String>,

    #[validate(length(max = 2048, message = "Target URL is too long"))]
    pub target_url: Option<String>,

    /// `301`, `302`, `307`, `308` or `path`; defaults to `301`.
    #[serde(rename = "type")]
    pub forward_type: Option<String>,
}

/// Required fields of a [`GenerateRequest`] once presence is confirmed.
#[derive(Debug)]
pub struct GenerateInput {
    pub candidate: DomainCandidate,
    pub target_url: String,
    pub forward_type: Option<String>,
}

impl GenerateRequest {
    /// # Errors
    ///
    /// Returns [`AppError::MissingInput`] if `subdomain`, `extension` or
    /// `targetUrl` is absent or blank.
    pub fn into_input(self) -> Result<GenerateInput, AppError> {
        let mut required = RequiredFields::default();
        let subdomain = required.take("subdomain", self.subdomain);
        let extension = required.take("extension", self.extension);
        let target_url = required.take("targetUrl", self.target_url);
        required.finish()?;

        Ok(GenerateInput {
            candidate: DomainCandidate::new(subdomain, extension),
            target_url,
            forward_type: self.forward_type,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub domain: String,
    pub records: Vec<DnsRecordItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub forwarding: Option<ForwardingItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_forwarding: Option<PathForwardingItem>,
}

#[derive(Debug, Serialize)]
pub struct DnsRecordItem {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub value: String,
    pub ttl: u32,
}

#[derive(Debug, Serialize)]
pub struct ForwardingItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize)]
pub struct PathForwardingItem {
    pub source: String,
    pub destination: String,
}

impl From<DnsRecord> for DnsRecordItem {
    fn from(record: DnsRecord) -> Self {
        Self {
            record_type: record.record_type.to_string(),
            name: record.name,
            value: record.value,
            ttl: record.ttl,
        }
    }
}

impl From<RedirectRule> for ForwardingItem {
    fn from(rule: RedirectRule) -> Self {
        Self {
            kind: rule.kind.to_string(),
            from: rule.from,
            to: rule.to,
        }
    }
}

impl From<PathForward> for PathForwardingItem {
    fn from(rule: PathForward) -> Self {
        Self {
            source: rule.source,
            destination: rule.destination,
        }
    }
}

impl From<DnsConfiguration> for GenerateResponse {
    fn from(config: DnsConfiguration) -> Self {
        Self {
            domain: config.domain,
            records: config.records.into_iter().map(Into::into).collect(),
            forwarding: config.forwarding.map(Into::into),
            path_forwarding: config.path_forwarding.map(Into::into),
        }
    }
}
