//! HTML surface: public pages, sitemap and the admin panel

pub mod admin;
pub mod session;
pub mod site;

use crate::api::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::services::ServeDir;

/// Public and admin HTML routes; every unmatched `GET` renders a page
pub fn router(assets_dir: Option<&Path>) -> Router<AppState> {
    let router = Router::new()
        .route("/sitemap.xml", get(site::sitemap))
        .route("/healthz", get(site::health))
        .route("/admin", get(admin::handlers::panel))
        .route("/admin/login", post(admin::handlers::login))
        .route("/admin/logout", post(admin::handlers::logout))
        .route("/admin/actions", post(admin::handlers::action))
        .route("/", get(site::page))
        .fallback(site::page);

    match assets_dir {
        Some(dir) => router.nest_service("/static", ServeDir::new(dir)),
        None => router,
    }
}
