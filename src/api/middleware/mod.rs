//! HTTP middleware for request processing.
//!
//! Provides observability and response header middleware.

pub mod headers;
pub mod tracing;
