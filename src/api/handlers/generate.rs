//! Handler for DNS configuration generation.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::generate::{GenerateRequest, GenerateResponse};
use crate::api::extract;
use crate::error::AppError;
use crate::state::AppState;

/// Generates DNS records and forwarding rules for a domain.
///
/// # Endpoint
///
/// `POST /api/dns/generate`
///
/// # Request Body
///
/// ```json
/// {
///   "subdomain": "myshop",
///   "extension": ".io",
///   "targetUrl": "https://example.com/store",
///   "type": "path"       // optional: 301 (default), 302, 307, 308, path
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "domain": "myshop.io",
///   "records": [
///     { "type": "CNAME", "name": "@", "value": "cname.render.com", "ttl": 3600 },
///     { "type": "CNAME", "name": "www", "value": "cname.render.com", "ttl": 3600 }
///   ],
///   "forwarding": { "type": "301", "from": "myshop.io", "to": "https://example.com/store" },
///   "pathForwarding": { "source": "/myshop", "destination": "https://example.com/store" }
/// }
/// ```
///
/// The domain is not re-validated; callers check it first via
/// `POST /api/domains/validate`.
///
/// # Errors
///
/// Returns 400 Bad Request if a required field is missing, the forwarding
/// type is unknown, or `targetUrl` is not an absolute HTTP(S) URL.
pub async fn generate_handler(
    State(state): State<AppState>,
    extract::Json(payload): extract::Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    payload.validate()?;

    let input = payload.into_input()?;

    let config = state.dns_service.generate(
        &input.candidate,
        &input.target_url,
        input.forward_type.as_deref(),
    )?;

    Ok(Json(config.into()))
}
