//! Page routing for server-rendered paths

use crate::contract::{Collection, ContentItem, SiteData};
use once_cell::sync::Lazy;
use regex::Regex;

use super::lang::DEFAULT_LANG;

#[allow(clippy::expect_used)]
static DETAIL_PAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/(?:([a-z]{2})/)?(services|portfolio|blog|contact)/([a-zA-Z0-9-]+)/?$")
        .expect("static detail page pattern")
});

/// A resolved request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRoute {
    /// Anything that is not a detail path renders the home page
    Home,
    Detail(DetailRoute),
}

/// `/(lang)?/collection/slug`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRoute {
    pub lang: String,
    pub collection: Collection,
    pub slug: String,
}

impl PageRoute {
    pub fn parse(path: &str) -> Self {
        let Some(caps) = DETAIL_PAGE.captures(path) else {
            return PageRoute::Home;
        };
        let collection = match caps.get(2).map(|m| m.as_str().parse::<Collection>()) {
            Some(Ok(collection)) => collection,
            _ => return PageRoute::Home,
        };
        let lang = caps
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| DEFAULT_LANG.to_string());
        let slug = caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default();

        PageRoute::Detail(DetailRoute {
            lang,
            collection,
            slug,
        })
    }
}

impl SiteData {
    /// Item addressed by a detail route (same slug and same lang)
    pub fn find_detail(&self, route: &DetailRoute) -> Option<&ContentItem> {
        self.find_by_slug(route.collection, &route.lang, &route.slug)
    }
}
