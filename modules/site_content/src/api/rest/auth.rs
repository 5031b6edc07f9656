//! Admin extractor for the JSON API

use super::error::{map_domain_error, Problem};
use crate::api::state::AppState;
use crate::api::web::session::current_user;
use crate::contract::SiteError;
use crate::domain::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Signed-in admin; rejects with a 401 problem otherwise
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = Problem;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        current_user(&parts.headers, state.sessions())
            .map(AdminUser)
            .ok_or_else(|| map_domain_error(SiteError::Unauthorized).with_instance(parts.uri.path()))
    }
}
