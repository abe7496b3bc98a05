//! API endpoint for proxying cover images.
//!
//! Cover images live on an external CDN that does not send CORS headers,
//! so the browser canvas cannot read their pixels directly. The client
//! instead asks this endpoint to fetch the image server-side; the body is
//! streamed back unchanged with a permissive CORS header.
use actix_web::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use url::Url;

use crate::{
    server::{errors::HTTPError, headers},
    utils::http::guess_contenttype,
};

use super::state::{App as AppState, Global as _};

/// Query parameters of the proxy endpoint.
#[derive(Debug, Deserialize)]
pub struct ProxyParams {
    /// The resource to fetch. Required.
    url: Option<String>,
}

/// Handler for the image proxy. Unauthenticated.
///
/// Streams the target resource back without buffering it; the upstream
/// `Content-Type` is relayed unchanged. No size limit, timeout or cache
/// is applied, but only http(s) targets are fetched.
#[tracing::instrument(skip(data))]
pub async fn proxy(data: web::Data<AppState>, params: web::Query<ProxyParams>) -> impl Responder {
    let Some(target) = params.url.as_deref() else {
        return HttpResponse::BadRequest().body(HTTPError::MissingUrl.to_string());
    };
    let Ok(target) = Url::parse(target) else {
        return HttpResponse::BadRequest().body(HTTPError::MissingUrl.to_string());
    };
    if !matches!(target.scheme(), "http" | "https") {
        tracing::warn!("Refusing to proxy non-http target: {target}");
        return HttpResponse::BadRequest().body(HTTPError::MissingUrl.to_string());
    }

    let upstream = match data.http_client().get(target.clone()).send().await {
        Ok(response) if response.status().is_success() => response,
        Ok(response) => {
            tracing::warn!("Upstream returned {} for {target}", response.status());
            return HttpResponse::InternalServerError().body(HTTPError::Proxy.to_string());
        }
        Err(err) => {
            tracing::warn!("Upstream fetch failed for {target}: {err}");
            return HttpResponse::InternalServerError().body(HTTPError::Proxy.to_string());
        }
    };

    // actix and reqwest track different `http` crate majors, so the
    // content-type crosses over as a string.
    let contenttype = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or_else(
            || guess_contenttype(target.as_str()).to_string(),
            ToOwned::to_owned,
        );

    HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, contenttype))
        .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, headers::ANY_ORIGIN))
        .streaming(upstream.bytes_stream())
}
