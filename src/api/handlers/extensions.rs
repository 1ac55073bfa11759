//! Handler for the extension catalog endpoint.

use axum::{Json, extract::State};

use crate::api::dto::extensions::ExtensionsResponse;
use crate::state::AppState;

/// Lists supported extensions in catalog order.
///
/// # Endpoint
///
/// `GET /api/domains/extensions`
///
/// # Response
///
/// ```json
/// { "extensions": [".net", ".cloud", ".dev", "..."] }
/// ```
pub async fn extensions_handler(State(state): State<AppState>) -> Json<ExtensionsResponse> {
    Json(ExtensionsResponse {
        extensions: state.domain_service.extensions().to_vec(),
    })
}
