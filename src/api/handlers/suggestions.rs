//! Handler for name suggestions.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::suggestions::{SuggestionsQuery, SuggestionsResponse};
use crate::api::extract;
use crate::error::AppError;
use crate::state::AppState;

/// Suggests alternative names for a keyword.
///
/// # Endpoint
///
/// `GET /api/domains/suggestions?keyword=myshop&extension=.io`
///
/// # Response
///
/// At most eight entries; keyword variants come first when a keyword is given.
///
/// ```json
/// { "suggestions": ["myshop.io", "myshop-app.io", "my-myshop.io", "go-hub.io", "..."] }
/// ```
///
/// Suggestions are not validated and may repeat.
///
/// # Errors
///
/// Returns 400 Bad Request if `extension` is missing or `keyword` is too long.
pub async fn suggestions_handler(
    State(state): State<AppState>,
    extract::Query(query): extract::Query<SuggestionsQuery>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    query.validate()?;

    let extension = match query.extension {
        Some(extension) if !extension.trim().is_empty() => extension,
        _ => return Err(AppError::missing_input(&["extension"])),
    };
    let keyword = query.keyword.unwrap_or_default();

    let suggestions = state
        .domain_service
        .suggest(keyword.trim(), extension.trim());

    Ok(Json(SuggestionsResponse { suggestions }))
}
