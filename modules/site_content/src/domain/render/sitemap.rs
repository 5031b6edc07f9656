//! XML sitemap

use crate::contract::{non_empty, Collection, ContentItem, SiteData};
use askama::Template;
use chrono::{DateTime, SecondsFormat, Utc};

/// One `<url>` entry
struct SitemapUrl {
    loc: String,
    lastmod: String,
    changefreq: &'static str,
    priority: &'static str,
}

#[derive(Template)]
#[template(path = "sitemap.xml")]
struct SitemapTemplate {
    urls: Vec<SitemapUrl>,
}

/// Home entry followed by every item with both a slug and a language
pub fn render_sitemap(
    data: &SiteData,
    base_url: &str,
    now: DateTime<Utc>,
) -> askama::Result<String> {
    let base = base_url.trim_end_matches('/');
    let mut urls = vec![home_url(base, now)];

    for collection in Collection::ALL {
        for item in data.items(collection) {
            let (Some(lang), Some(slug)) = (non_empty(&item.lang), non_empty(&item.url_slug)) else {
                continue;
            };
            urls.push(SitemapUrl {
                loc: format!("{}/{}/{}/{}", base, lang, collection, slug),
                lastmod: lastmod(last_modified(item, now)),
                changefreq: collection.change_frequency(),
                priority: collection.sitemap_priority(),
            });
        }
    }

    SitemapTemplate { urls }.render()
}

/// Sitemap served when site data cannot be loaded
pub fn fallback_sitemap(base_url: &str, now: DateTime<Utc>) -> askama::Result<String> {
    SitemapTemplate {
        urls: vec![home_url(base_url.trim_end_matches('/'), now)],
    }
    .render()
}

fn home_url(base: &str, now: DateTime<Utc>) -> SitemapUrl {
    SitemapUrl {
        loc: format!("{}/", base),
        lastmod: lastmod(now),
        changefreq: "weekly",
        priority: "1.0",
    }
}

fn lastmod(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn last_modified(item: &ContentItem, now: DateTime<Utc>) -> DateTime<Utc> {
    item.updated_at.or(item.created_at).unwrap_or(now)
}
