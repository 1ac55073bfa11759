//! Handler for subdomain validation and availability.

use axum::{Json, extract::State};

use crate::api::dto::validate::{ValidateRequest, ValidateResponse};
use crate::api::extract;
use crate::error::AppError;
use crate::state::AppState;

/// Validates a subdomain and reports whether it is available.
///
/// # Endpoint
///
/// `POST /api/domains/validate`
///
/// # Request Body
///
/// ```json
/// { "subdomain": "myshop", "extension": ".io" }
/// ```
///
/// # Response
///
/// Rule violations are a normal `200 OK` answer listing every error:
///
/// ```json
/// { "valid": false, "errors": ["Subdomain must be at least 3 characters long"] }
/// ```
///
/// A valid candidate carries the availability verdict:
///
/// ```json
/// { "valid": true, "available": true, "domain": "myshop.io", "message": "Domain is available" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `subdomain` or `extension` is missing or blank,
/// or if the body is not a JSON object of strings.
pub async fn validate_handler(
    State(state): State<AppState>,
    extract::Json(payload): extract::Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, AppError> {
    let candidate = payload.into_candidate()?;

    let outcome = state.domain_service.check(&candidate);

    Ok(Json(outcome.into()))
}
