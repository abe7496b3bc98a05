//! Headers used in the Covergrid server.

/// Wildcard origin for the `Access-Control-Allow-Origin` header.
///
/// The image proxy exists so the browser canvas can read cover pixels
/// from another origin; its responses are therefore readable from any
/// origin.
///
/// Example response headers for `GET /api/proxy?url=...`:
///
/// `Access-Control-Allow-Origin: *`
pub const ANY_ORIGIN: &str = "*";
