//! Public page, sitemap and health handlers

use crate::api::state::AppState;
use crate::contract::{Collection, ContentItem, SiteData};
use crate::domain::render::{fallback_sitemap, render_page, render_sitemap, PageInput};
use crate::domain::PageRoute;
use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use chrono::Utc;

const HTML: &str = "text/html; charset=utf-8";
const XML: &str = "application/xml; charset=utf-8";
const ROBOTS: &str = "index, follow";
const NO_STORE: &str = "no-store";

/// Server-rendered home or detail page for any `GET` path
pub async fn page(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    match state.api().load_site_data().await {
        Ok(data) => page_response(&state, &data, uri.path()),
        Err(e) => {
            tracing::error!(path = %uri.path(), "Page render failed: {}", e);
            let data = state.render().fallback_site_data();
            match render(&state, &data, uri.path(), None) {
                Ok(html) => {
                    respond(StatusCode::INTERNAL_SERVER_ERROR, HTML, NO_STORE.to_string(), false, html)
                }
                Err(e) => template_failed(e),
            }
        }
    }
}

fn page_response(state: &AppState, data: &SiteData, path: &str) -> Response {
    let (status, detail) = match PageRoute::parse(path) {
        PageRoute::Detail(route) => match data.find_detail(&route) {
            Some(item) => (StatusCode::OK, Some((route.collection, item))),
            None => {
                tracing::debug!(path, "No item for detail path");
                (StatusCode::NOT_FOUND, None)
            }
        },
        PageRoute::Home => (StatusCode::OK, None),
    };
    match render(state, data, path, detail) {
        Ok(html) => respond(status, HTML, state.cache_control(), status == StatusCode::OK, html),
        Err(e) => template_failed(e),
    }
}

fn render(
    state: &AppState,
    data: &SiteData,
    path: &str,
    detail: Option<(Collection, &ContentItem)>,
) -> askama::Result<String> {
    let input = PageInput {
        data,
        path,
        detail,
        now: Utc::now(),
    };
    render_page(state.render(), input, &mut rand::rng())
}

/// `GET /sitemap.xml`
pub async fn sitemap(State(state): State<AppState>) -> Response {
    let base_url = &state.render().base_url;
    match state.api().load_site_data().await {
        Ok(data) => match render_sitemap(&data, base_url, Utc::now()) {
            Ok(xml) => respond(StatusCode::OK, XML, state.cache_control(), true, xml),
            Err(e) => template_failed(e),
        },
        Err(e) => {
            tracing::error!("Sitemap generation failed: {}", e);
            match fallback_sitemap(base_url, Utc::now()) {
                Ok(xml) => {
                    respond(StatusCode::INTERNAL_SERVER_ERROR, XML, NO_STORE.to_string(), false, xml)
                }
                Err(e) => template_failed(e),
            }
        }
    }
}

/// `GET /healthz`
pub async fn health() -> &'static str {
    "ok"
}

fn template_failed(error: askama::Error) -> Response {
    tracing::error!("Template rendering failed: {}", error);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

fn respond(
    status: StatusCode,
    content_type: &'static str,
    cache_control: String,
    indexable: bool,
    body: String,
) -> Response {
    let mut response = (status, body).into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    if let Ok(value) = HeaderValue::from_str(&cache_control) {
        headers.insert(header::CACHE_CONTROL, value);
    }
    if indexable {
        headers.insert("x-robots-tag", HeaderValue::from_static(ROBOTS));
    }
    response
}
