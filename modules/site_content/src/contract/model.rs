//! Contract models for the site content module
//!
//! These models are transport-agnostic and shared by renderers, the admin
//! surfaces and the storage backends.
//! NO serde derives - documents are mapped in `infra::storage::document`.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use super::error::SiteError;

/// Content collection (one document collection per site section)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Services,
    Portfolio,
    Blog,
    Contact,
}

impl Collection {
    /// All collections in load, render and sitemap order
    pub const ALL: [Collection; 4] = [
        Collection::Services,
        Collection::Portfolio,
        Collection::Blog,
        Collection::Contact,
    ];

    /// Collection key as stored and as used in URLs
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Services => "services",
            Collection::Portfolio => "portfolio",
            Collection::Blog => "blog",
            Collection::Contact => "contact",
        }
    }

    /// Section heading on the home page
    pub fn section_title(self) -> &'static str {
        match self {
            Collection::Services => "Our Services",
            Collection::Portfolio => "Our Work",
            Collection::Blog => "Latest Insights",
            Collection::Contact => "Get in Touch",
        }
    }

    /// Sitemap `changefreq` for detail pages of this collection
    pub fn change_frequency(self) -> &'static str {
        match self {
            Collection::Blog => "weekly",
            _ => "monthly",
        }
    }

    /// Sitemap `priority` for detail pages of this collection
    pub fn sitemap_priority(self) -> &'static str {
        match self {
            Collection::Services => "0.8",
            Collection::Portfolio => "0.7",
            Collection::Blog => "0.6",
            Collection::Contact => "0.5",
        }
    }

    /// Prefix of generated document ids: the key without its last character
    pub fn id_prefix(self) -> &'static str {
        let key = self.as_str();
        &key[..key.len() - 1]
    }

    /// Admin tab label ("Services", "Portfolio", ...)
    pub fn display_name(self) -> &'static str {
        match self {
            Collection::Services => "Services",
            Collection::Portfolio => "Portfolio",
            Collection::Blog => "Blog",
            Collection::Contact => "Contact",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "services" => Ok(Collection::Services),
            "portfolio" => Ok(Collection::Portfolio),
            "blog" => Ok(Collection::Blog),
            "contact" => Ok(Collection::Contact),
            other => Err(SiteError::Validation {
                message: format!("unknown collection '{}'", other),
            }),
        }
    }
}

/// Singleton home document (`home/content`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeContent {
    pub h1: Option<String>,
    pub subtitle: Option<String>,
    pub lang: Option<String>,
    pub seo: SeoFields,
}

/// SEO, Open Graph, JSON-LD and background fields shared by home and items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeoFields {
    pub seo_title: Option<String>,
    pub meta_description: Option<String>,
    /// Normalized JSON-LD object; empty when absent or unparseable
    pub schema_json_ld: Map<String, Value>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub background_html: Option<String>,
}

/// Item of one of the content collections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentItem {
    /// Document identifier
    pub id: String,
    pub lang: Option<String>,
    // card
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    // detail page
    pub url_slug: Option<String>,
    pub h1: Option<String>,
    pub price: Option<String>,
    pub main_content: Option<String>,
    pub media: Vec<String>,
    pub main_image_alt: Option<String>,
    pub seo: SeoFields,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContentItem {
    /// First media URL that is not a video link (card image, og:image fallback)
    pub fn primary_image(&self) -> Option<&str> {
        self.media
            .iter()
            .map(String::as_str)
            .find(|url| !url.contains("youtube") && !url.contains("vimeo"))
    }

    /// Detail page path: `/<lang>/<collection>/<slug>`, no prefix without a lang
    pub fn detail_path(&self, collection: Collection) -> String {
        let slug = self.url_slug.as_deref().unwrap_or_default();
        match non_empty(&self.lang) {
            Some(lang) => format!("/{}/{}/{}", lang, collection, slug),
            None => format!("/{}/{}", collection, slug),
        }
    }
}

/// Editable item fields submitted by the admin surfaces
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemUpdate {
    pub lang: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub url_slug: String,
    pub h1: String,
    pub price: String,
    pub main_content: String,
    pub media: Vec<String>,
    pub main_image_alt: String,
    pub seo_title: String,
    pub meta_description: String,
    pub schema_json_ld: Map<String, Value>,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub background_html: String,
}

/// Everything the site renders from: home plus the four collections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteData {
    pub home: HomeContent,
    pub services: Vec<ContentItem>,
    pub portfolio: Vec<ContentItem>,
    pub blog: Vec<ContentItem>,
    pub contact: Vec<ContentItem>,
}

impl SiteData {
    /// Items of one collection
    pub fn items(&self, collection: Collection) -> &[ContentItem] {
        match collection {
            Collection::Services => &self.services,
            Collection::Portfolio => &self.portfolio,
            Collection::Blog => &self.blog,
            Collection::Contact => &self.contact,
        }
    }

    /// Mutable items of one collection
    pub fn items_mut(&mut self, collection: Collection) -> &mut Vec<ContentItem> {
        match collection {
            Collection::Services => &mut self.services,
            Collection::Portfolio => &mut self.portfolio,
            Collection::Blog => &mut self.blog,
            Collection::Contact => &mut self.contact,
        }
    }

    /// Find an item by document id
    pub fn find_item(&self, collection: Collection, id: &str) -> Option<&ContentItem> {
        self.items(collection).iter().find(|item| item.id == id)
    }

    /// Find the item published under `slug` in language `lang`
    pub fn find_by_slug(&self, collection: Collection, lang: &str, slug: &str) -> Option<&ContentItem> {
        self.items(collection).iter().find(|item| {
            item.url_slug.as_deref() == Some(slug) && item.lang.as_deref() == Some(lang)
        })
    }
}

/// Treat empty strings as absent, the way the page templates always have
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
