//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod extensions;
pub mod generate;
pub mod health;
pub mod suggestions;
pub mod validate;

pub use extensions::extensions_handler;
pub use generate::generate_handler;
pub use health::health_handler;
pub use suggestions::suggestions_handler;
pub use validate::validate_handler;
