//! Server-side rendering of public pages and the sitemap

pub mod detail;
pub mod page;
pub mod sections;
pub mod seo;
pub mod sitemap;

pub use page::{render_page, PageInput};
pub use seo::SeoTags;
pub use sitemap::{fallback_sitemap, render_sitemap};

use crate::contract::{HomeContent, SiteData};
use crate::config::SiteConfig;

/// Site-wide values the renderers need
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Public origin without trailing slash, e.g. `https://example.com`
    pub base_url: String,
    pub brand_name: String,
    pub default_description: String,
    /// URL prefix of stylesheet, script and favicon
    pub asset_base: String,
    /// Client enhancement script, relative to `asset_base`
    pub client_script: Option<String>,
    pub admin_path: String,
    pub metrika_counter_id: Option<u64>,
}

impl RenderContext {
    pub fn from_config(cfg: &SiteConfig) -> Self {
        Self {
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            brand_name: cfg.brand_name.clone(),
            default_description: cfg.default_description.clone(),
            asset_base: cfg.asset_base.trim_end_matches('/').to_string(),
            client_script: cfg.client_script.clone().filter(|s| !s.is_empty()),
            admin_path: "/admin".to_string(),
            metrika_counter_id: cfg.metrika_counter_id,
        }
    }

    /// Site data rendered when the document store cannot be read
    pub fn fallback_site_data(&self) -> SiteData {
        SiteData {
            home: HomeContent {
                h1: Some(self.brand_name.clone()),
                subtitle: Some(self.default_description.clone()),
                lang: Some(super::lang::DEFAULT_LANG.to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub(crate) fn asset(&self, name: &str) -> String {
        format!("{}/{}", self.asset_base, name.trim_start_matches('/'))
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}
