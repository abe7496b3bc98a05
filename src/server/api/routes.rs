//! A central place to register App routes.
use actix_service::ServiceFactory;
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    web, App, Error,
};

use super::grids::{create_grid, list_grids};
use super::proxy::proxy;
use super::state::Global;

/// Central place to register all the App routing.
///
/// The surface is fixed at three handlers: save a grid, list grids, and
/// the image proxy. Static pages for the browser client are hosted
/// elsewhere and are not served from here.
///
/// # Errors
/// Errors if the application state cannot be attached.
#[tracing::instrument(skip(app, state))]
pub fn register_app<
    T: Global + Clone + 'static,
    U: MessageBody,
    V: ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<U>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
>(
    mut app: App<V>,
    state: &T,
) -> anyhow::Result<App<V>> {
    app = app
        .service(
            web::scope("/api")
                .service(
                    web::resource("/grids")
                        .route(web::post().to(create_grid))
                        .route(web::get().to(list_grids)),
                )
                .service(web::resource("/proxy").route(web::get().to(proxy))),
        )
        .app_data(web::Data::new(state.clone()));
    Ok(app)
}
