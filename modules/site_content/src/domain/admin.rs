//! Admin panel actions
//!
//! Every action is either a pure state toggle (`edit`, `edit-home`) or a
//! single write followed by a full reload of the site data. Failures never
//! abort the request; they become an error notice shown above the panel.

use crate::contract::{
    Collection, HomeContent, ItemUpdate, SeoFields, SiteContentApi, SiteData, SiteError,
};
use std::fmt;
use std::str::FromStr;

use super::jsonld::parse_json_ld_input;

pub const INVALID_JSON_LD_NOTICE: &str = "Error: Invalid JSON in Schema field.";
pub const GENERIC_ERROR_NOTICE: &str = "An error occurred. Please check the console.";

/// Admin form action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Edit,
    Save,
    Delete,
    Add,
    EditHome,
    SaveHome,
}

impl AdminAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AdminAction::Edit => "edit",
            AdminAction::Save => "save",
            AdminAction::Delete => "delete",
            AdminAction::Add => "add",
            AdminAction::EditHome => "edit-home",
            AdminAction::SaveHome => "save-home",
        }
    }
}

impl fmt::Display for AdminAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminAction {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "edit" => Ok(AdminAction::Edit),
            "save" => Ok(AdminAction::Save),
            "delete" => Ok(AdminAction::Delete),
            "add" => Ok(AdminAction::Add),
            "edit-home" => Ok(AdminAction::EditHome),
            "save-home" => Ok(AdminAction::SaveHome),
            other => Err(SiteError::Validation {
                message: format!("unknown admin action '{}'", other),
            }),
        }
    }
}

/// Panel tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelTab {
    #[default]
    Home,
    Collection(Collection),
}

/// What the panel shows after an action
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelState {
    pub tab: PanelTab,
    /// Item open in the editor
    pub selected: Option<String>,
    /// Form controls enabled
    pub editing: bool,
}

impl PanelState {
    pub fn home(editing: bool) -> Self {
        Self {
            tab: PanelTab::Home,
            selected: None,
            editing,
        }
    }

    pub fn item(collection: Collection, id: Option<String>, editing: bool) -> Self {
        Self {
            tab: PanelTab::Collection(collection),
            selected: id,
            editing,
        }
    }
}

/// Banner shown above the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Raw item editor fields as submitted
#[derive(Debug, Clone, Default)]
pub struct ItemForm {
    pub lang: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub url_slug: String,
    pub h1: String,
    pub price: String,
    pub main_content: String,
    /// One URL per line
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

impl ItemForm {
    /// Validate and convert into an update; fails only on bad JSON-LD
    pub fn into_update(self) -> Result<ItemUpdate, SiteError> {
        let schema_json_ld = parse_json_ld_input(&self.schema_json_ld)?;
        Ok(ItemUpdate {
            lang: self.lang,
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            url_slug: self.url_slug.trim().to_string(),
            h1: self.h1,
            price: self.price,
            main_content: self.main_content,
            media: split_media(&self.media),
            main_image_alt: self.main_image_alt,
            seo_title: self.seo_title,
            meta_description: self.meta_description,
            schema_json_ld,
            og_title: self.og_title,
            og_description: self.og_description,
            og_image: self.og_image,
            background_html: self.background_html,
        })
    }
}

/// Raw home editor fields as submitted
#[derive(Debug, Clone, Default)]
pub struct HomeForm {
    pub h1: String,
    pub subtitle: String,
    pub lang: String,
    pub seo_title: String,
    pub meta_description: String,
    pub schema_json_ld: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub background_html: String,
}

impl HomeForm {
    pub fn into_home(self) -> Result<HomeContent, SiteError> {
        let schema_json_ld = parse_json_ld_input(&self.schema_json_ld)?;
        Ok(HomeContent {
            h1: Some(self.h1),
            subtitle: Some(self.subtitle),
            lang: Some(self.lang),
            seo: SeoFields {
                seo_title: Some(self.seo_title),
                meta_description: Some(self.meta_description),
                schema_json_ld,
                og_title: Some(self.og_title),
                og_description: Some(self.og_description),
                og_image: Some(self.og_image),
                background_html: Some(self.background_html),
            },
        })
    }
}

/// One submitted admin form
#[derive(Debug, Clone)]
pub struct AdminRequest {
    pub action: AdminAction,
    pub collection: Option<Collection>,
    pub id: Option<String>,
    pub item: ItemForm,
    pub home: HomeForm,
}

impl AdminRequest {
    pub fn new(action: AdminAction) -> Self {
        Self {
            action,
            collection: None,
            id: None,
            item: ItemForm::default(),
            home: HomeForm::default(),
        }
    }
}

/// Freshly loaded data plus what to show
#[derive(Debug, Clone)]
pub struct AdminOutcome {
    pub data: SiteData,
    pub state: PanelState,
    pub notice: Option<Notice>,
}

/// Run one admin action and reload the site data
///
/// Action failures are logged and reported through [`Notice::Error`]; only a
/// failed reload is returned as an error.
pub async fn dispatch(
    api: &dyn SiteContentApi,
    request: AdminRequest,
) -> Result<AdminOutcome, SiteError> {
    let action = request.action;
    let fallback_state = state_on_error(&request);

    let (state, notice) = match perform(api, request).await {
        Ok((state, message)) => (state, message.map(|m| Notice::Success(m.to_string()))),
        Err(e) => {
            tracing::error!(action = %action, "Admin action failed: {}", e);
            (fallback_state, Some(Notice::Error(error_notice(&e).to_string())))
        }
    };

    let data = api.load_site_data().await?;
    Ok(AdminOutcome {
        data,
        state,
        notice,
    })
}

/// Banner text for a failed action
pub fn error_notice(error: &SiteError) -> &'static str {
    match error {
        SiteError::InvalidJsonLd { .. } => INVALID_JSON_LD_NOTICE,
        _ => GENERIC_ERROR_NOTICE,
    }
}

async fn perform(
    api: &dyn SiteContentApi,
    request: AdminRequest,
) -> Result<(PanelState, Option<&'static str>), SiteError> {
    match request.action {
        AdminAction::EditHome => Ok((PanelState::home(true), None)),
        AdminAction::SaveHome => {
            let home = request.home.into_home()?;
            api.save_home(home).await?;
            Ok((PanelState::home(false), Some("Home page updated!")))
        }
        AdminAction::Add => {
            let collection = require_collection(request.collection)?;
            let item = api.add_item(collection).await?;
            Ok((
                PanelState::item(collection, Some(item.id), false),
                Some("New item added. You can now edit it."),
            ))
        }
        AdminAction::Edit => {
            let (collection, id) = require_target(request.collection, request.id)?;
            api.get_item(collection, &id).await?;
            Ok((PanelState::item(collection, Some(id), true), None))
        }
        AdminAction::Save => {
            let (collection, id) = require_target(request.collection, request.id)?;
            let update = request.item.into_update()?;
            api.save_item(collection, &id, update).await?;
            Ok((PanelState::item(collection, Some(id), false), Some("Item saved!")))
        }
        AdminAction::Delete => {
            let (collection, id) = require_target(request.collection, request.id)?;
            api.delete_item(collection, &id).await?;
            Ok((PanelState::item(collection, None, false), Some("Item deleted!")))
        }
    }
}

/// Failed saves leave the target open in view state
fn state_on_error(request: &AdminRequest) -> PanelState {
    match (request.action, request.collection) {
        (AdminAction::EditHome | AdminAction::SaveHome, _) | (_, None) => PanelState::home(false),
        (AdminAction::Delete, Some(collection)) | (AdminAction::Add, Some(collection)) => {
            PanelState::item(collection, None, false)
        }
        (_, Some(collection)) => PanelState::item(collection, request.id.clone(), false),
    }
}

fn require_collection(collection: Option<Collection>) -> Result<Collection, SiteError> {
    collection.ok_or_else(|| SiteError::Validation {
        message: "collection is required".to_string(),
    })
}

fn require_target(
    collection: Option<Collection>,
    id: Option<String>,
) -> Result<(Collection, String), SiteError> {
    let collection = require_collection(collection)?;
    match id.filter(|id| !id.is_empty()) {
        Some(id) => Ok((collection, id)),
        None => Err(SiteError::Validation {
            message: "item id is required".to_string(),
        }),
    }
}

/// Media textarea: one URL per line, trimmed, blank lines dropped
pub fn split_media(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
