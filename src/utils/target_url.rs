//! Forwarding target URL checks.
//!
//! A target must be an absolute HTTP or HTTPS URL with a host. The URL is
//! checked, not rewritten: callers echo the original string back, so input
//! the parser would have to repair is rejected.

use std::cell::Cell;
use url::{SyntaxViolation, Url};

/// Reasons a forwarding target is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is usable as a forwarding target.
///
/// Surrounding whitespace is ignored and the trimmed input is returned
/// unchanged on success.
///
/// # Errors
///
/// Returns [`TargetUrlError::InvalidFormat`] for relative or malformed URLs,
/// including ones the parser only accepts after repair (`http:example.com`,
/// backslashes in place of slashes).
/// Returns [`TargetUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes such
/// as `javascript:`, `data:` or `ftp:`.
/// Returns [`TargetUrlError::MissingHost`] when no host is present.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(check_target_url(" https://example.com ").unwrap(), "https://example.com");
/// assert!(check_target_url("not-a-url").is_err());
/// ```
pub fn check_target_url(input: &str) -> Result<&str, TargetUrlError> {
    let trimmed = input.trim();

    let violation = Cell::new(None::<SyntaxViolation>);
    let record = |v: SyntaxViolation| {
        if violation.get().is_none() {
            violation.set(Some(v));
        }
    };

    let url = Url::options()
        .syntax_violation_callback(Some(&record))
        .parse(trimmed)
        .map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    if let Some(v) = violation.get() {
        return Err(TargetUrlError::InvalidFormat(v.description().to_string()));
    }

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(trimmed),
        _ => Err(TargetUrlError::MissingHost),
    }
}
