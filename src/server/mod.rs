//! Functionality for serving the Covergrid API.

pub mod api;
pub mod app;
pub mod auth;
pub mod errors;
pub mod headers;
pub mod tracing;
