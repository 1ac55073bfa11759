//! API route configuration.

use crate::api::handlers::{
    extensions_handler, generate_handler, suggestions_handler, validate_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes. None require authentication.
///
/// # Endpoints
///
/// - `GET  /domains/extensions`  - Supported extensions
/// - `POST /domains/validate`    - Validate a subdomain and check availability
/// - `GET  /domains/suggestions` - Alternative names for a keyword
/// - `POST /dns/generate`        - DNS records and forwarding for a domain
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/domains/extensions", get(extensions_handler))
        .route("/domains/validate", post(validate_handler))
        .route("/domains/suggestions", get(suggestions_handler))
        .route("/dns/generate", post(generate_handler))
}
