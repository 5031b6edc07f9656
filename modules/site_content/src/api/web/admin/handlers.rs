//! Admin panel handlers - thin layer over the action dispatcher

use crate::api::state::AppState;
use crate::api::web::session::{clear_session, current_user, session_cookie};
use crate::contract::{Collection, SiteData, SiteError};
use crate::domain::admin::{
    dispatch, AdminAction, AdminRequest, HomeForm, ItemForm, Notice, PanelState, PanelTab,
    GENERIC_ERROR_NOTICE,
};
use crate::domain::auth::AuthenticatedUser;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use super::views::{login_page, panel_page, PanelView, LOGIN_FAILED};

const LOAD_FAILED: &str = "Error loading data. Check console.";

/// Tab and item selection of `GET /admin`
#[derive(Debug, Default, Deserialize)]
pub struct PanelQuery {
    pub tab: Option<String>,
    pub item: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Flat admin form; home and item editors share field names
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionForm {
    pub action: String,
    pub key: Option<String>,
    pub id: Option<String>,
    pub lang: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub url_slug: String,
    pub h1: String,
    pub price: String,
    pub main_content: String,
    pub media: String,
    pub main_image_alt: String,
    pub seo_title: String,
    pub meta_description: String,
    pub schema_json_ld: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub background_html: String,
}

impl ActionForm {
    fn into_request(self) -> Result<AdminRequest, SiteError> {
        let action: AdminAction = self.action.parse()?;
        let collection = match self.key.as_deref().filter(|k| !k.is_empty()) {
            Some(key) => Some(key.parse::<Collection>()?),
            None => None,
        };
        let home = HomeForm {
            h1: self.h1.clone(),
            subtitle: self.subtitle.clone(),
            lang: self.lang.clone(),
            seo_title: self.seo_title.clone(),
            meta_description: self.meta_description.clone(),
            schema_json_ld: self.schema_json_ld.clone(),
            og_title: self.og_title.clone(),
            og_description: self.og_description.clone(),
            og_image: self.og_image.clone(),
            background_html: self.background_html.clone(),
        };
        let item = ItemForm {
            lang: self.lang,
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            url_slug: self.url_slug,
            h1: self.h1,
            price: self.price,
            main_content: self.main_content,
            media: self.media,
            main_image_alt: self.main_image_alt,
            seo_title: self.seo_title,
            meta_description: self.meta_description,
            schema_json_ld: self.schema_json_ld,
            og_title: self.og_title,
            og_description: self.og_description,
            og_image: self.og_image,
            background_html: self.background_html,
        };
        Ok(AdminRequest {
            action,
            collection,
            id: self.id.filter(|id| !id.is_empty()),
            item,
            home,
        })
    }
}

/// `GET /admin` - login screen or panel
pub async fn panel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PanelQuery>,
) -> Response {
    let Some(user) = current_user(&headers, state.sessions()) else {
        return login_page(state.render(), None).into_response();
    };

    let tab = match query.tab.as_deref() {
        None | Some("home") => PanelTab::Home,
        Some(key) => match key.parse::<Collection>() {
            Ok(collection) => PanelTab::Collection(collection),
            Err(_) => PanelTab::Home,
        },
    };
    let panel_state = PanelState {
        tab,
        selected: query.item.filter(|_| tab != PanelTab::Home),
        editing: false,
    };

    match state.api().load_site_data().await {
        Ok(data) => render(&state, StatusCode::OK, &data, &panel_state, None, &user),
        Err(e) => {
            tracing::error!("Admin panel data load failed: {}", e);
            let notice = Notice::Error(LOAD_FAILED.to_string());
            render(
                &state,
                StatusCode::INTERNAL_SERVER_ERROR,
                &SiteData::default(),
                &panel_state,
                Some(&notice),
                &user,
            )
        }
    }
}

/// `POST /admin/login`
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let user = match state.auth().sign_in(form.email.trim(), &form.password).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(email = %form.email.trim(), "Admin login failed: {}", e);
            return (StatusCode::UNAUTHORIZED, login_page(state.render(), Some(LOGIN_FAILED)))
                .into_response();
        }
    };

    let token = match state.sessions().issue(&user) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("Failed to issue admin session: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                login_page(state.render(), Some(GENERIC_ERROR_NOTICE)),
            )
                .into_response();
        }
    };

    tracing::info!(email = %user.email, "Admin signed in");
    let jar = jar.add(session_cookie(&token, state.sessions().ttl()));
    (jar, Redirect::to(&state.render().admin_path)).into_response()
}

/// `POST /admin/logout`
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    (clear_session(jar), Redirect::to(&state.render().admin_path)).into_response()
}

/// `POST /admin/actions`
pub async fn action(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ActionForm>,
) -> Response {
    let Some(user) = current_user(&headers, state.sessions()) else {
        return (StatusCode::UNAUTHORIZED, login_page(state.render(), None)).into_response();
    };

    let request = match form.into_request() {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Rejected admin form: {}", e);
            return match state.api().load_site_data().await {
                Ok(data) => {
                    let notice = Notice::Error(GENERIC_ERROR_NOTICE.to_string());
                    render(
                        &state,
                        StatusCode::BAD_REQUEST,
                        &data,
                        &PanelState::default(),
                        Some(&notice),
                        &user,
                    )
                }
                Err(e) => load_failed(&state, &user, e),
            };
        }
    };

    match dispatch(state.api(), request).await {
        Ok(outcome) => render(
            &state,
            StatusCode::OK,
            &outcome.data,
            &outcome.state,
            outcome.notice.as_ref(),
            &user,
        ),
        Err(e) => load_failed(&state, &user, e),
    }
}

fn load_failed(
    state: &AppState,
    user: &AuthenticatedUser,
    error: SiteError,
) -> Response {
    tracing::error!("Admin reload failed: {}", error);
    let notice = Notice::Error(LOAD_FAILED.to_string());
    render(
        state,
        StatusCode::INTERNAL_SERVER_ERROR,
        &SiteData::default(),
        &PanelState::default(),
        Some(&notice),
        user,
    )
}

fn render(
    state: &AppState,
    status: StatusCode,
    data: &SiteData,
    panel_state: &PanelState,
    notice: Option<&Notice>,
    user: &AuthenticatedUser,
) -> Response {
    let page = panel_page(
        state.render(),
        &PanelView {
            data,
            state: panel_state,
            notice,
            user,
        },
    );
    (status, [(header::CACHE_CONTROL, "no-store")], page).into_response()
}
