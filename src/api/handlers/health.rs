//! Handler for health check endpoint.

use axum::Json;
use chrono::Utc;

use crate::api::dto::health::HealthResponse;

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /health`
///
/// The engine has no external dependencies, so there is nothing else to probe.
///
/// # Response
///
/// ```json
/// { "status": "healthy", "version": "0.1.0", "timestamp": "2026-01-01T00:00:00Z" }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}
