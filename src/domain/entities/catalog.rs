//! Allow-list of domain extensions a subdomain can be requested under.

use super::DomainCandidate;

/// Extensions offered when no override is configured, in display order.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".net", ".cloud", ".dev", ".online", ".is.dev", ".app", ".tech", ".studio", ".digital",
    ".world", ".space", ".site", ".store", ".shop", ".blog", ".io", ".ai", ".co", ".me", ".xyz",
];

/// Errors raised while building an [`ExtensionCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Extension catalog must contain at least one extension")]
    Empty,

    #[error("Extension '{0}' must start with '.' followed by a label")]
    Malformed(String),

    #[error("Extension '{0}' is listed more than once")]
    Duplicate(String),
}

/// Ordered, immutable set of supported extensions.
///
/// Every member starts with `.`, has at least one character after it, and
/// appears exactly once. The catalog is built at startup and shared
/// read-only between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionCatalog {
    extensions: Vec<String>,
}

impl ExtensionCatalog {
    /// Builds a catalog from an ordered list of extensions.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the list is empty, contains a malformed
    /// extension, or repeats an extension.
    pub fn new<I, S>(extensions: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String> = Vec::new();

        for extension in extensions {
            let extension = extension.into();

            if extension.len() < 2 || !extension.starts_with('.') {
                return Err(CatalogError::Malformed(extension));
            }

            if collected.contains(&extension) {
                return Err(CatalogError::Duplicate(extension));
            }

            collected.push(extension);
        }

        if collected.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self {
            extensions: collected,
        })
    }

    /// Returns the extensions in catalog order.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.iter().any(|e| e == extension)
    }

    /// Splits a full domain into subdomain and extension.
    ///
    /// The longest catalog extension the domain ends with wins, so
    /// `shop.is.dev` splits into `shop` + `.is.dev` rather than `shop.is` +
    /// `.dev`. Returns `None` when no extension matches or nothing would be
    /// left for the subdomain.
    pub fn split_domain(&self, domain: &str) -> Option<DomainCandidate> {
        let extension = self
            .extensions
            .iter()
            .filter(|ext| domain.len() > ext.len() && domain.ends_with(ext.as_str()))
            .max_by_key(|ext| ext.len())?;

        let subdomain = &domain[..domain.len() - extension.len()];

        Some(DomainCandidate::new(subdomain, extension.as_str()))
    }
}

impl Default for ExtensionCatalog {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let catalog = ExtensionCatalog::default();

        assert_eq!(catalog.extensions().len(), 20);
        assert_eq!(catalog.extensions()[0], ".net");
        assert_eq!(catalog.extensions()[4], ".is.dev");
        assert_eq!(catalog.extensions()[19], ".xyz");
    }

    #[test]
    fn test_default_catalog_satisfies_invariants() {
        let rebuilt = ExtensionCatalog::new(DEFAULT_EXTENSIONS.iter().copied());
        assert_eq!(rebuilt, Ok(ExtensionCatalog::default()));
    }

    #[test]
    fn test_contains() {
        let catalog = ExtensionCatalog::default();

        assert!(catalog.contains(".dev"));
        assert!(catalog.contains(".is.dev"));
        assert!(!catalog.contains(".zz"));
        assert!(!catalog.contains("dev"));
        assert!(!catalog.contains(".DEV"));
        assert!(!catalog.contains(""));
    }

    #[test]
    fn test_new_rejects_empty() {
        let result = ExtensionCatalog::new(Vec::<String>::new());
        assert_eq!(result, Err(CatalogError::Empty));
    }

    #[test]
    fn test_new_rejects_missing_dot() {
        let result = ExtensionCatalog::new([".dev", "io"]);
        assert_eq!(result, Err(CatalogError::Malformed("io".to_string())));
    }

    #[test]
    fn test_new_rejects_bare_dot() {
        let result = ExtensionCatalog::new(["."]);
        assert_eq!(result, Err(CatalogError::Malformed(".".to_string())));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let result = ExtensionCatalog::new([".dev", ".io", ".dev"]);
        assert_eq!(result, Err(CatalogError::Duplicate(".dev".to_string())));
    }

    #[test]
    fn test_split_domain_simple() {
        let catalog = ExtensionCatalog::default();
        let candidate = catalog.split_domain("abc.dev").unwrap();

        assert_eq!(candidate.subdomain, "abc");
        assert_eq!(candidate.extension, ".dev");
    }

    #[test]
    fn test_split_domain_prefers_longest_extension() {
        let catalog = ExtensionCatalog::default();
        let candidate = catalog.split_domain("shop.is.dev").unwrap();

        assert_eq!(candidate.subdomain, "shop");
        assert_eq!(candidate.extension, ".is.dev");
    }

    #[test]
    fn test_split_domain_unknown_extension() {
        let catalog = ExtensionCatalog::default();

        assert!(catalog.split_domain("abc.zz").is_none());
        assert!(catalog.split_domain(".dev").is_none());
    }
}
