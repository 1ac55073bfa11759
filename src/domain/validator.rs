//! Syntactic validation of a requested subdomain and its extension.

use crate::domain::entities::ExtensionCatalog;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum subdomain length, in characters.
pub const MIN_SUBDOMAIN_LEN: usize = 3;

/// Maximum subdomain length, in characters (one DNS label).
pub const MAX_SUBDOMAIN_LEN: usize = 63;

/// Characters allowed in a subdomain. Matches the empty string; length is a
/// separate rule.
static SUBDOMAIN_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]*$").unwrap());

/// A single violated rule. The `Display` text is what callers see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Subdomain must be at least 3 characters long")]
    TooShort,

    #[error("Subdomain must be less than 64 characters")]
    TooLong,

    #[error("Subdomain can only contain letters, numbers, and hyphens")]
    InvalidCharacters,

    #[error("Subdomain cannot start or end with a hyphen")]
    HyphenPlacement,

    #[error("Unsupported domain extension")]
    UnsupportedExtension,
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    /// Always holds at least one error, in rule order.
    Invalid(Vec<ValidationError>),
}

impl ValidationResult {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }
}

/// Validates a subdomain and extension against every rule at once.
///
/// # Rules
///
/// 1. Length: 3-63 characters (each bound reports its own error)
/// 2. Allowed characters: ASCII letters, digits, hyphens
/// 3. Cannot start or end with a hyphen
/// 4. Extension must be in the catalog
///
/// Each rule is evaluated independently and every violation is reported, in
/// the order above. Blank input is expected to be rejected by the caller
/// before validation; an empty subdomain here only trips the length rule.
///
/// # Examples
///
/// ```ignore
/// let catalog = ExtensionCatalog::default();
///
/// assert!(validate("myshop", ".io", &catalog).is_valid());
/// assert_eq!(
///     validate("ab", ".dev", &catalog).errors(),
///     &[ValidationError::TooShort]
/// );
/// ```
pub fn validate(subdomain: &str, extension: &str, catalog: &ExtensionCatalog) -> ValidationResult {
    let length = subdomain.chars().count();

    let rules = [
        (length < MIN_SUBDOMAIN_LEN, ValidationError::TooShort),
        (length > MAX_SUBDOMAIN_LEN, ValidationError::TooLong),
        (
            !SUBDOMAIN_CHARSET.is_match(subdomain),
            ValidationError::InvalidCharacters,
        ),
        (
            subdomain.starts_with('-') || subdomain.ends_with('-'),
            ValidationError::HyphenPlacement,
        ),
        (
            !catalog.contains(extension),
            ValidationError::UnsupportedExtension,
        ),
    ];

    let errors = rules
        .into_iter()
        .filter_map(|(violated, error)| violated.then_some(error))
        .collect();

    ValidationResult::from_errors(errors)
}
