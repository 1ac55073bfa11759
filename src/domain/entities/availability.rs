//! Outcome of an availability check.

pub const AVAILABLE_MESSAGE: &str = "Domain is available";
pub const TAKEN_MESSAGE: &str = "Domain may be taken";

/// Availability verdict for one full domain.
///
/// Computed per request and never cached. `message` always agrees with
/// `available`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityResult {
    pub domain: String,
    pub available: bool,
    pub message: String,
}

impl AvailabilityResult {
    pub fn new(domain: impl Into<String>, available: bool) -> Self {
        let message = if available {
            AVAILABLE_MESSAGE
        } else {
            TAKEN_MESSAGE
        };

        Self {
            domain: domain.into(),
            available,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_message() {
        let result = AvailabilityResult::new("abc.dev", true);

        assert_eq!(result.domain, "abc.dev");
        assert!(result.available);
        assert_eq!(result.message, "Domain is available");
    }

    #[test]
    fn test_taken_message() {
        let result = AvailabilityResult::new("abc.dev", false);

        assert!(!result.available);
        assert_eq!(result.message, "Domain may be taken");
    }
}
