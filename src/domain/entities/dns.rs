//! DNS records and forwarding rules produced for a configured domain.

use std::fmt;
use std::str::FromStr;

/// Errors raised while building a DNS configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DnsConfigError {
    #[error("Invalid target URL: {0}")]
    InvalidTargetUrl(String),

    #[error("Unsupported forwarding type: {0}")]
    UnsupportedForwardType(String),
}

/// DNS record type.
///
/// Forwarding only ever needs aliases, so CNAME is the single variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    Cname,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cname => "CNAME",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single DNS record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub record_type: RecordType,
    /// Host label relative to the zone (`@` for the apex).
    pub name: String,
    pub value: String,
    /// Time-to-live in seconds, always positive.
    pub ttl: u32,
}

impl DnsRecord {
    pub fn cname(name: impl Into<String>, value: impl Into<String>, ttl: u32) -> Self {
        Self {
            record_type: RecordType::Cname,
            name: name.into(),
            value: value.into(),
            ttl,
        }
    }
}

/// HTTP redirect semantics for whole-domain forwarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectKind {
    /// 301 Moved Permanently.
    #[default]
    Permanent,
    /// 302 Found.
    Found,
    /// 307 Temporary Redirect.
    Temporary,
    /// 308 Permanent Redirect.
    PermanentRedirect,
}

impl RedirectKind {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Permanent => 301,
            Self::Found => 302,
            Self::Temporary => 307,
            Self::PermanentRedirect => 308,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Permanent => "301",
            Self::Found => "302",
            Self::Temporary => "307",
            Self::PermanentRedirect => "308",
        }
    }
}

impl fmt::Display for RedirectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Forwarding mode requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardType {
    Redirect(RedirectKind),
    /// Redirect plus a path-forward from `/<subdomain>` to the target.
    Path,
}

impl ForwardType {
    /// Parses an optional forwarding type, treating absent or blank input as
    /// a permanent redirect.
    ///
    /// # Errors
    ///
    /// Returns [`DnsConfigError::UnsupportedForwardType`] for unknown values.
    pub fn parse_optional(value: Option<&str>) -> Result<Self, DnsConfigError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(value) => value.parse(),
        }
    }

    /// Redirect kind carried by the whole-domain forwarding rule.
    pub fn redirect_kind(&self) -> RedirectKind {
        match self {
            Self::Redirect(kind) => *kind,
            Self::Path => RedirectKind::default(),
        }
    }
}

impl Default for ForwardType {
    fn default() -> Self {
        Self::Redirect(RedirectKind::default())
    }
}

impl FromStr for ForwardType {
    type Err = DnsConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "301" => Ok(Self::Redirect(RedirectKind::Permanent)),
            "302" => Ok(Self::Redirect(RedirectKind::Found)),
            "307" => Ok(Self::Redirect(RedirectKind::Temporary)),
            "308" => Ok(Self::Redirect(RedirectKind::PermanentRedirect)),
            "path" => Ok(Self::Path),
            other => Err(DnsConfigError::UnsupportedForwardType(other.to_string())),
        }
    }
}

/// Whole-domain redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRule {
    pub kind: RedirectKind,
    pub from: String,
    pub to: String,
}

/// Path-specific forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathForward {
    pub source: String,
    pub destination: String,
}

/// Records and forwarding rules for one domain.
///
/// `records` is never empty and `domain` is the full domain the
/// configuration was requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsConfiguration {
    pub domain: String,
    pub records: Vec<DnsRecord>,
    pub forwarding: Option<RedirectRule>,
    pub path_forwarding: Option<PathForward>,
}
