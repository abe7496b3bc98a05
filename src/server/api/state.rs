//! Centralized state management for the Actix web server
use std::{fmt, sync::Arc};

use crate::{db, server::auth::TokenVerifier};

/// Global, read-only state
pub trait Global {
    /// Database connection
    fn db(&self) -> &db::DatabaseConnection;
    /// Verifier for bearer credentials
    fn verifier(&self) -> &Arc<dyn TokenVerifier>;
    /// Shared client for outbound HTTP requests
    fn http_client(&self) -> &reqwest::Client;
}

/// Application state
#[derive(Clone)]
pub struct App {
    /// Database connection
    pub db: db::DatabaseConnection,
    /// Verifier for bearer credentials
    pub verifier: Arc<dyn TokenVerifier>,
    /// Shared client for outbound HTTP requests.
    /// One client for JWKS fetches and proxied image fetches; connection
    /// lifecycle is left entirely to reqwest.
    pub http_client: reqwest::Client,
}

impl Global for App {
    fn db(&self) -> &db::DatabaseConnection {
        &self.db
    }

    fn verifier(&self) -> &Arc<dyn TokenVerifier> {
        &self.verifier
    }

    fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }
}

impl fmt::Debug for App {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "App state with db {:?}", self.db)
    }
}
