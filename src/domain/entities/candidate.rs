//! Requested subdomain + extension pair.

use std::fmt;

/// A subdomain requested under one extension.
///
/// Lives for the duration of a single request. The extension is only
/// guaranteed to be in the catalog after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCandidate {
    pub subdomain: String,
    pub extension: String,
}

impl DomainCandidate {
    pub fn new(subdomain: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            subdomain: subdomain.into(),
            extension: extension.into(),
        }
    }

    /// Subdomain immediately followed by the extension (`myshop` + `.io` → `myshop.io`).
    pub fn full_domain(&self) -> String {
        format!("{}{}", self.subdomain, self.extension)
    }
}

impl fmt::Display for DomainCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.subdomain, self.extension)
    }
}
