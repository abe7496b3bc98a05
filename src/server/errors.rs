//! Flat error categories returned by the HTTP handlers.
//!
//! Every underlying cause collapses into one of these; the response body is
//! the display string and nothing else.

/// Errors surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum HTTPError {
    /// Missing or invalid bearer credential.
    #[error("Unauthorized")]
    Unauthorized,
    /// The proxy endpoint was called without a `url` query parameter,
    /// or with one that is not an http(s) URL.
    #[error("Missing or invalid url parameter")]
    MissingUrl,
    /// The grid store failed; the cause is deliberately not differentiated.
    #[error("Storage failure")]
    Storage,
    /// The upstream fetch failed; the cause is deliberately not differentiated.
    #[error("Proxy fetch failed")]
    Proxy,
}
