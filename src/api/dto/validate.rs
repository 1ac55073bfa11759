//! DTOs for subdomain validation and availability.

use crate::api::dto::RequiredFields;
use crate::application::services::CheckOutcome;
use crate::domain::entities::DomainCandidate;
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Subdomain + extension to check. Both fields are required.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub subdomain: Option<String>,
    pub extension: Option<String>,
}

impl ValidateRequest {
    /// # Errors
    ///
    /// Returns [`AppError::MissingInput`] if either field is absent or blank.
    pub fn into_candidate(self) -> Result<DomainCandidate, AppError> {
        let mut required = RequiredFields::default();
        let subdomain = required.take("subdomain", self.subdomain);
        let extension = required.take("extension", self.extension);
        required.finish()?;

        Ok(DomainCandidate::new(subdomain, extension))
    }
}

/// Validation outcome.
///
/// Uses untagged enum so both shapes carry a plain `valid` flag.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ValidateResponse {
    Invalid {
        valid: bool,
        errors: Vec<String>,
    },
    Checked {
        valid: bool,
        available: bool,
        domain: String,
        message: String,
    },
}

impl From<CheckOutcome> for ValidateResponse {
    fn from(outcome: CheckOutcome) -> Self {
        match outcome {
            CheckOutcome::Invalid(errors) => Self::Invalid {
                valid: false,
                errors: errors.iter().map(ToString::to_string).collect(),
            },
            CheckOutcome::Checked(result) => Self::Checked {
                valid: true,
                available: result.available,
                domain: result.domain,
                message: result.message,
            },
        }
    }
}
