//! Subdomain checking and suggestion service.

use crate::domain::availability::AvailabilityChecker;
use crate::domain::entities::{AvailabilityResult, DomainCandidate, ExtensionCatalog};
use crate::domain::suggestions::suggest;
use crate::domain::validator::{ValidationError, ValidationResult, validate};
use crate::utils::random::RandomSource;
use std::sync::Arc;
use tracing::debug;

/// Outcome of [`DomainService::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// One or more rules were violated; availability was not consulted.
    Invalid(Vec<ValidationError>),
    /// The candidate is well-formed and availability was decided.
    Checked(AvailabilityResult),
}

/// Service answering "can I have this subdomain?".
///
/// Runs the validator first and consults the availability checker only for
/// valid candidates. Suggestions draw from the injected [`RandomSource`].
pub struct DomainService {
    catalog: Arc<ExtensionCatalog>,
    checker: Arc<dyn AvailabilityChecker>,
    random: Arc<RandomSource>,
}

impl DomainService {
    /// Creates a new domain service.
    pub fn new(
        catalog: Arc<ExtensionCatalog>,
        checker: Arc<dyn AvailabilityChecker>,
        random: Arc<RandomSource>,
    ) -> Self {
        Self {
            catalog,
            checker,
            random,
        }
    }

    pub fn catalog(&self) -> &ExtensionCatalog {
        &self.catalog
    }

    /// Supported extensions in catalog order.
    pub fn extensions(&self) -> &[String] {
        self.catalog.extensions()
    }

    /// Validates `candidate` and, when valid, checks its availability.
    pub fn check(&self, candidate: &DomainCandidate) -> CheckOutcome {
        match validate(&candidate.subdomain, &candidate.extension, &self.catalog) {
            ValidationResult::Invalid(errors) => {
                debug!(domain = %candidate, errors = errors.len(), "Candidate rejected");
                metrics::counter!("domain_checks_total", "outcome" => "invalid").increment(1);
                CheckOutcome::Invalid(errors)
            }
            ValidationResult::Valid => {
                let result = self.checker.check(candidate);
                debug!(domain = %result.domain, available = result.available, "Availability checked");

                let outcome = if result.available { "available" } else { "taken" };
                metrics::counter!("domain_checks_total", "outcome" => outcome).increment(1);

                CheckOutcome::Checked(result)
            }
        }
    }

    /// Alternative names for `keyword` under `extension`, at most eight.
    pub fn suggest(&self, keyword: &str, extension: &str) -> Vec<String> {
        let suggestions = self
            .random
            .with_rng(|rng| suggest(keyword, extension, rng));

        metrics::counter!("domain_suggestions_total").increment(1);
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::availability::MockAvailabilityChecker;

    fn service_with(checker: MockAvailabilityChecker) -> DomainService {
        DomainService::new(
            Arc::new(ExtensionCatalog::default()),
            Arc::new(checker),
            Arc::new(RandomSource::seeded(11)),
        )
    }

    #[test]
    fn test_check_available() {
        let mut mock_checker = MockAvailabilityChecker::new();

        mock_checker
            .expect_check()
            .withf(|candidate| candidate.full_domain() == "myshop.io")
            .times(1)
            .returning(|c| AvailabilityResult::new(c.full_domain(), true));

        let service = service_with(mock_checker);

        let outcome = service.check(&DomainCandidate::new("myshop", ".io"));

        assert_eq!(
            outcome,
            CheckOutcome::Checked(AvailabilityResult::new("myshop.io", true))
        );
    }

    #[test]
    fn test_check_taken() {
        let mut mock_checker = MockAvailabilityChecker::new();

        mock_checker
            .expect_check()
            .times(1)
            .returning(|c| AvailabilityResult::new(c.full_domain(), false));

        let service = service_with(mock_checker);

        let CheckOutcome::Checked(result) = service.check(&DomainCandidate::new("abc", ".dev"))
        else {
            panic!("expected an availability verdict");
        };

        assert!(!result.available);
        assert_eq!(result.message, "Domain may be taken");
    }

    #[test]
    fn test_invalid_candidate_skips_checker() {
        let mut mock_checker = MockAvailabilityChecker::new();
        mock_checker.expect_check().times(0);

        let service = service_with(mock_checker);

        let outcome = service.check(&DomainCandidate::new("ab", ".zz"));

        assert_eq!(
            outcome,
            CheckOutcome::Invalid(vec![
                ValidationError::TooShort,
                ValidationError::UnsupportedExtension,
            ])
        );
    }

    #[test]
    fn test_extensions_in_catalog_order() {
        let service = service_with(MockAvailabilityChecker::new());

        assert_eq!(service.extensions().first().map(String::as_str), Some(".net"));
        assert!(service.catalog().contains(".is.dev"));
    }

    #[test]
    fn test_suggest_keyword_first() {
        let service = service_with(MockAvailabilityChecker::new());

        let suggestions = service.suggest("myshop", ".io");

        assert!(suggestions.len() <= 8);
        assert_eq!(
            &suggestions[..3],
            &["myshop.io", "myshop-app.io", "my-myshop.io"]
        );
    }

    #[test]
    fn test_suggest_reproducible_with_same_seed() {
        let first = service_with(MockAvailabilityChecker::new()).suggest("shop", ".dev");
        let second = service_with(MockAvailabilityChecker::new()).suggest("shop", ".dev");

        assert_eq!(first, second);
    }
}
