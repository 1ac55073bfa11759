//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input constraints. Field names follow the public camelCase contract.

pub mod extensions;
pub mod generate;
pub mod health;
pub mod suggestions;
pub mod validate;

use crate::error::AppError;

/// Collects required request fields, remembering which are absent.
///
/// A field counts as absent when it is missing, empty, or whitespace-only.
/// Values are returned untouched otherwise.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn take(&mut self, name: &'static str, value: Option<String>) -> String {
        match value {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`AppError::MissingInput`] naming every absent field.
    pub fn finish(self) -> Result<(), AppError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::missing_input(&self.missing))
        }
    }
}
