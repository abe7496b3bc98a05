//! API endpoints for saving and listing grid documents.
use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::{
    db::models::grid::Manager as _,
    server::{
        auth::{bearer_token, AuthError, AuthenticatedUser},
        errors::HTTPError,
    },
};

use super::state::{App as AppState, Global as _};

/// Module that maps the HTTP web request body to structs.
pub mod request;

/// Resolve the request's bearer credential to an authenticated user.
///
/// # Errors
/// Errors if no credential is present or provider verification fails.
async fn authenticate(
    req: &HttpRequest,
    data: &web::Data<AppState>,
) -> Result<AuthenticatedUser, AuthError> {
    let token = bearer_token(req).ok_or(AuthError::MissingToken)?;
    data.verifier().verify(token).await
}

/// Handler for saving a grid. Saves always insert.
#[tracing::instrument(skip(req, data, payload))]
pub async fn create_grid(
    req: HttpRequest,
    data: web::Data<AppState>,
    payload: web::Json<request::SaveGrid>,
) -> impl Responder {
    let user = match authenticate(&req, &data).await {
        Ok(user) => user,
        Err(err) => {
            tracing::warn!("Rejected save: {err}");
            return HttpResponse::Unauthorized().body(HTTPError::Unauthorized.to_string());
        }
    };
    let grid = &payload.grid;
    match data
        .db()
        .create(&user.subject, grid.name.as_deref(), &grid.manga)
        .await
    {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "ok": true, "id": id })),
        Err(err) => {
            tracing::error!("Error saving grid: {err}");
            HttpResponse::InternalServerError().body(HTTPError::Storage.to_string())
        }
    }
}

/// Handler for listing the authenticated owner's grids, newest first.
#[tracing::instrument(skip(req, data))]
pub async fn list_grids(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let user = match authenticate(&req, &data).await {
        Ok(user) => user,
        Err(err) => {
            tracing::warn!("Rejected listing: {err}");
            return HttpResponse::Unauthorized().body(HTTPError::Unauthorized.to_string());
        }
    };
    match data.db().find_all_by_user(&user.subject).await {
        Ok(grids) => HttpResponse::Ok().json(serde_json::json!({ "grids": grids })),
        Err(err) => {
            tracing::error!("Error listing grids: {err}");
            HttpResponse::InternalServerError().body(HTTPError::Storage.to_string())
        }
    }
}
