//! Serve the Covergrid API.
#![allow(clippy::exit)]
use crate::db;
use crate::server::api::state::App as AppState;
use crate::server::auth::{GoogleTokenVerifier, TokenVerifier};
use crate::server::tracing::CovergridRootSpanBuilder;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{App, Error, HttpServer};
use tracing_actix_web::TracingLogger;

use std::sync::Arc;
use std::{io, process};

use actix_http::body::MessageBody;
use actix_service::ServiceFactory;

use super::api::routes;
use super::api::state::Global;

/// Serve the grid persistence and image proxy API.
#[actix_web::main]
pub async fn serve(client_id: &str, port: u16) -> io::Result<()> {
    let bind = "127.0.0.1";
    tracing::info!("Running Covergrid server on http://{bind}:{port}.");

    let db = match db::init::connect().await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(
                "error: could not connect to database. Confirm that DATABASE_URL env var is set correctly."
            );
            tracing::error!("Error: {:?}", err);
            process::exit(1);
        }
    };

    let http_client = reqwest::Client::new();
    let verifier: Arc<dyn TokenVerifier> =
        Arc::new(GoogleTokenVerifier::new(client_id, http_client.clone()));
    let state = AppState {
        db,
        verifier,
        http_client,
    };

    HttpServer::new(move || {
        init_app(&state).unwrap_or_else(|err| {
            tracing::error!("Unable to initialize app.");
            tracing::error!("Error: {:?}", err);
            process::exit(1);
        })
    })
    .bind((bind, port))?
    .run()
    .await
}

/// Initialize the application and all possible routing at start-up time.
///
/// # Arguments
/// * `state` - The application state
/// # Errors
/// Will error if unable to initialize the application
pub fn init_app<T: Global + Clone + 'static>(
    state: &T,
) -> anyhow::Result<
    App<
        impl ServiceFactory<
            ServiceRequest,
            Response = ServiceResponse<impl MessageBody>,
            Config = (),
            InitError = (),
            Error = Error,
        >,
    >,
> {
    let app = routes::register_app(
        App::new().wrap(TracingLogger::<CovergridRootSpanBuilder>::new()),
        state,
    )?;
    Ok(app)
}
