//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into engine calls and formats
//! responses according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - `Json` and `Query` extractors with enveloped rejections
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing and response headers
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
