//! Infrastructure layer implementing domain capabilities.
//!
//! - [`availability`] - Availability checker implementations

pub mod availability;
