//! DTOs for the suggestions endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters: `?keyword=&extension=`.
#[derive(Debug, Deserialize, Validate)]
pub struct SuggestionsQuery {
    /// Base name for keyword variants; omitted means random entries only.
    #[validate(length(max = 63, message = "Keyword must be at most 63 characters"))]
    pub keyword: Option<String>,

    pub extension: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}
