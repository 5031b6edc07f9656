//! HTTP request handlers - thin layer that delegates to the content API

use super::{
    dto::*,
    error::{map_auth_error, map_domain_error, Problem},
};
use crate::contract::{Collection, HomeContent, ItemUpdate, SiteContentApi};
use crate::domain::{AuthProvider, SessionManager};
use axum::{http::StatusCode, Json};

// ===== Session =====

/// Sign in and issue a bearer token
pub async fn create_session(
    auth: &dyn AuthProvider,
    sessions: &SessionManager,
    req: SessionRequest,
) -> Result<(StatusCode, Json<SessionResponse>), Problem> {
    let user = auth
        .sign_in(req.email.trim(), &req.password)
        .await
        .map_err(map_auth_error)?;
    let token = sessions.issue(&user).map_err(map_auth_error)?;

    tracing::info!(email = %user.email, "Admin API session issued");
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            token,
            expires_in_secs: sessions.ttl().as_secs(),
        }),
    ))
}

// ===== Content =====

/// Home document plus every collection
pub async fn get_site(api: &dyn SiteContentApi) -> Result<Json<SiteDataDto>, Problem> {
    let data = api.load_site_data().await.map_err(map_domain_error)?;
    Ok(Json(data.into()))
}

pub async fn get_item(
    api: &dyn SiteContentApi,
    collection: &str,
    id: &str,
) -> Result<Json<ItemDto>, Problem> {
    let collection = parse_collection(collection)?;
    let item = api
        .get_item(collection, id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(item.into()))
}

/// Create an item with template defaults
pub async fn add_item(
    api: &dyn SiteContentApi,
    collection: &str,
) -> Result<(StatusCode, Json<ItemDto>), Problem> {
    let collection = parse_collection(collection)?;
    let item = api.add_item(collection).await.map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(item.into())))
}

/// Overwrite the editable fields of an item
pub async fn save_item(
    api: &dyn SiteContentApi,
    collection: &str,
    id: &str,
    req: UpdateItemRequest,
) -> Result<Json<ItemDto>, Problem> {
    let collection = parse_collection(collection)?;
    let update = ItemUpdate::try_from(req).map_err(map_domain_error)?;
    let item = api
        .save_item(collection, id, update)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(item.into()))
}

pub async fn delete_item(
    api: &dyn SiteContentApi,
    collection: &str,
    id: &str,
) -> Result<StatusCode, Problem> {
    let collection = parse_collection(collection)?;
    api.delete_item(collection, id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn save_home(api: &dyn SiteContentApi, req: HomeDto) -> Result<Json<HomeDto>, Problem> {
    let home = HomeContent::try_from(req).map_err(map_domain_error)?;
    let home = api.save_home(home).await.map_err(map_domain_error)?;

    Ok(Json(home.into()))
}

fn parse_collection(key: &str) -> Result<Collection, Problem> {
    key.parse::<Collection>().map_err(map_domain_error)
}
