//! Application error type and its HTTP mapping.
//!
//! Every client-visible failure is rendered as
//!
//! ```json
//! { "error": { "code": "missing_input", "message": "...", "details": { ... } } }
//! ```
//!
//! Rule violations found by the validator are not errors: they are returned
//! as a regular `{"valid": false, "errors": [...]}` response.

use crate::domain::entities::DnsConfigError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required request field is absent or blank.
    #[error("{message}")]
    MissingInput { message: String, details: Value },

    /// The request is well-formed JSON but violates a constraint.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The forwarding target is not an absolute HTTP(S) URL.
    #[error("{message}")]
    InvalidTargetUrl { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    /// Missing-input error listing the absent fields.
    pub fn missing_input(fields: &[&str]) -> Self {
        Self::MissingInput {
            message: "Missing required fields".to_string(),
            details: json!({ "missing": fields }),
        }
    }

    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn invalid_target_url(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidTargetUrl {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingInput { .. } | Self::Validation { .. } | Self::InvalidTargetUrl { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            Self::MissingInput { message, details } => ("missing_input", message, details),
            Self::Validation { message, details } => ("validation_error", message, details),
            Self::InvalidTargetUrl { message, details } => ("invalid_target_url", message, details),
            Self::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        Self::bad_request("Invalid request", details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(
            "Invalid JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(
            "Invalid query string",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<DnsConfigError> for AppError {
    fn from(error: DnsConfigError) -> Self {
        match error {
            DnsConfigError::InvalidTargetUrl(reason) => Self::invalid_target_url(
                "Target URL must be an absolute HTTP or HTTPS URL",
                json!({ "reason": reason }),
            ),
            DnsConfigError::UnsupportedForwardType(value) => Self::bad_request(
                "Unsupported forwarding type",
                json!({ "type": value, "allowed": ["301", "302", "307", "308", "path"] }),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_lists_fields() {
        let error = AppError::missing_input(&["subdomain", "extension"]);
        let info = error.to_error_info();

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(info.code, "missing_input");
        assert_eq!(info.details, json!({ "missing": ["subdomain", "extension"] }));
    }

    #[test]
    fn test_invalid_target_url_mapping() {
        let error: AppError = DnsConfigError::InvalidTargetUrl("relative URL".to_string()).into();

        assert!(matches!(error, AppError::InvalidTargetUrl { .. }));
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_error_info().code, "invalid_target_url");
    }

    #[test]
    fn test_unsupported_forward_type_mapping() {
        let error: AppError = DnsConfigError::UnsupportedForwardType("404".to_string()).into();

        assert!(matches!(error, AppError::Validation { .. }));
        assert_eq!(error.to_error_info().details["type"], "404");
    }

    #[test]
    fn test_internal_is_server_error() {
        let error = AppError::internal("boom", json!({}));

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "boom");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::missing_input(&["targetUrl"]).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
