//! Route registration for the JSON admin API

use super::{auth::AdminUser, dto::*, error::Problem, handlers};
use crate::api::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use utoipa::OpenApi;

/// Schemas published at `/api/admin/openapi.json`
#[derive(OpenApi)]
#[openapi(
    info(title = "Site content admin API"),
    components(schemas(
        SessionRequest,
        SessionResponse,
        ItemDto,
        HomeDto,
        UpdateItemRequest,
        SiteDataDto
    ))
)]
pub struct ApiDoc;

/// Register all REST routes under `/api/admin`
pub fn register_routes() -> Router<AppState> {
    let api = Router::new()
        .route("/session", post(create_session_handler))
        .route("/site", get(get_site_handler))
        .route("/home", put(save_home_handler))
        .route("/items/{collection}", post(add_item_handler))
        .route(
            "/items/{collection}/{id}",
            get(get_item_handler)
                .put(save_item_handler)
                .delete(delete_item_handler),
        )
        .route("/openapi.json", get(openapi_handler));

    Router::new().nest("/api/admin", api)
}

// ===== Handler wrappers that extract state and the admin session =====

async fn create_session_handler(
    State(state): State<AppState>,
    Json(req): Json<SessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), Problem> {
    handlers::create_session(state.auth(), state.sessions(), req).await
}

async fn get_site_handler(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<SiteDataDto>, Problem> {
    handlers::get_site(state.api()).await
}

async fn save_home_handler(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<HomeDto>,
) -> Result<Json<HomeDto>, Problem> {
    handlers::save_home(state.api(), req).await
}

async fn add_item_handler(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(collection): Path<String>,
) -> Result<(StatusCode, Json<ItemDto>), Problem> {
    handlers::add_item(state.api(), &collection).await
}

async fn get_item_handler(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<ItemDto>, Problem> {
    handlers::get_item(state.api(), &collection, &id).await
}

async fn save_item_handler(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path((collection, id)): Path<(String, String)>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<ItemDto>, Problem> {
    handlers::save_item(state.api(), &collection, &id, req).await
}

async fn delete_item_handler(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path((collection, id)): Path<(String, String)>,
) -> Result<StatusCode, Problem> {
    handlers::delete_item(state.api(), &collection, &id).await
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
