//! DTOs for the extension catalog endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExtensionsResponse {
    pub extensions: Vec<String>,
}
