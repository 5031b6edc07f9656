//! SEO tag writer
//!
//! Builds the title, description, canonical, Open Graph, Twitter and JSON-LD
//! tags for a page and writes them into a document head, replacing whatever
//! an earlier pass (or a static shell) put there.

use crate::contract::{non_empty, ContentItem, HomeContent, SeoFields};
use crate::domain::jsonld::json_ld_script_body;
use crate::domain::lang::DEFAULT_LANG;
use askama::Template;
use once_cell::sync::Lazy;
use regex::Regex;

use super::RenderContext;

#[allow(clippy::expect_used)]
static INJECTED_TAGS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?is)<title>.*?</title>\s*",
        r#"(?i)<meta\s+name="description"[^>]*>\s*"#,
        r#"(?i)<meta\s+property="og:[^"]*"[^>]*>\s*"#,
        r#"(?i)<meta\s+name="twitter:[^"]*"[^>]*>\s*"#,
        r#"(?i)<link\s+rel="canonical"[^>]*>\s*"#,
        r#"(?is)<script\s+type="application/ld\+json"[^>]*>.*?</script>\s*"#,
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("static SEO tag pattern"))
    .collect()
});

#[allow(clippy::expect_used)]
static HTML_LANG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(<html\b[^>]*?)\s+lang="[^"]*""#).expect("static html lang pattern")
});

#[derive(Template)]
#[template(path = "site/seo_head.html")]
struct SeoHeadTemplate<'a> {
    tags: &'a SeoTags,
}

/// Resolved SEO values for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoTags {
    pub title: String,
    pub description: String,
    pub lang: String,
    pub canonical_url: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: Option<String>,
    /// Serialized JSON-LD, only for a non-empty object
    pub json_ld: Option<String>,
}

impl SeoTags {
    /// Tags for the home page (and for unknown detail paths)
    pub fn for_home(ctx: &RenderContext, home: &HomeContent, path: &str) -> Self {
        Self::resolve(
            ctx,
            &home.seo,
            non_empty(&home.lang),
            &ctx.brand_name,
            &ctx.default_description,
            None,
            path,
        )
    }

    /// Tags for an item detail page
    pub fn for_item(ctx: &RenderContext, item: &ContentItem, path: &str) -> Self {
        Self::resolve(
            ctx,
            &item.seo,
            non_empty(&item.lang),
            item.title.as_deref().unwrap_or_default(),
            item.description.as_deref().unwrap_or_default(),
            item.primary_image(),
            path,
        )
    }

    fn resolve(
        ctx: &RenderContext,
        seo: &SeoFields,
        lang: Option<&str>,
        fallback_title: &str,
        fallback_description: &str,
        media_image: Option<&str>,
        path: &str,
    ) -> Self {
        let title = non_empty(&seo.seo_title).unwrap_or(fallback_title).to_string();
        let description = non_empty(&seo.meta_description)
            .unwrap_or(fallback_description)
            .to_string();
        let og_title = non_empty(&seo.og_title).unwrap_or(&title).to_string();
        let og_description = non_empty(&seo.og_description)
            .unwrap_or(&description)
            .to_string();
        let og_image = non_empty(&seo.og_image)
            .or(media_image)
            .filter(|url| !url.is_empty())
            .map(str::to_string);
        let json_ld = (!seo.schema_json_ld.is_empty())
            .then(|| json_ld_script_body(&seo.schema_json_ld));

        Self {
            title,
            description,
            lang: lang.unwrap_or(DEFAULT_LANG).to_string(),
            canonical_url: canonical_url(&ctx.base_url, path),
            og_title,
            og_description,
            og_image,
            json_ld,
        }
    }

    /// Tag markup, one tag per line
    pub fn to_head_html(&self) -> askama::Result<String> {
        SeoHeadTemplate { tags: self }.render()
    }

    /// Replace previously written SEO tags in `document` with these
    ///
    /// Documents without a `</head>` are returned unchanged.
    pub fn apply(&self, document: &str) -> askama::Result<String> {
        let Some(head_end) = find_ignore_case(document, "</head>") else {
            return Ok(document.to_string());
        };
        let tags = self.to_head_html()?;
        let (head, rest) = document.split_at(head_end);

        let mut head = head.to_string();
        for pattern in INJECTED_TAGS.iter() {
            head = pattern.replace_all(&head, "").into_owned();
        }
        let head = set_html_lang(&head, &self.lang);

        let mut out = String::with_capacity(document.len() + 1024);
        out.push_str(head.trim_end());
        out.push('\n');
        out.push_str(tags.trim_matches('\n'));
        out.push('\n');
        out.push_str(rest);
        Ok(out)
    }
}

/// Base URL plus path, without a trailing slash except for the root
pub fn canonical_url(base_url: &str, path: &str) -> String {
    let mut clean = if path.is_empty() { "/" } else { path };
    if clean.len() > 1 && clean.ends_with('/') {
        clean = &clean[..clean.len() - 1];
    }
    format!("{}{}", base_url.trim_end_matches('/'), clean)
}

/// Language tags only carry letters, digits and hyphens
fn language_tag(lang: &str) -> String {
    lang.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

fn set_html_lang(head: &str, lang: &str) -> String {
    let stripped = HTML_LANG.replace(head, "$1");
    match find_ignore_case(&stripped, "<html") {
        Some(pos) => {
            let insert_at = pos + "<html".len();
            format!(
                r#"{} lang="{}"{}"#,
                &stripped[..insert_at],
                language_tag(lang),
                &stripped[insert_at..]
            )
        }
        None => stripped.into_owned(),
    }
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack.to_ascii_lowercase().find(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx() -> RenderContext {
        RenderContext {
            base_url: "https://site.example".to_string(),
            ..Default::default()
        }
    }

    const SHELL: &str = "<!DOCTYPE html>\n<html lang=\"xx\">\n<head>\n    <meta charset=\"UTF-8\">\n    <title>Old</title>\n    <meta name=\"description\" content=\"old\">\n    <meta property=\"og:title\" content=\"old\">\n</head>\n<body></body>\n</html>";

    #[test]
    fn test_home_fallbacks() {
        let tags = SeoTags::for_home(&ctx(), &HomeContent::default(), "/");
        assert_eq!(tags.title, "Digital Craft");
        assert_eq!(tags.description, "Professional websites for small businesses");
        assert_eq!(tags.og_title, tags.title);
        assert_eq!(tags.lang, "en");
        assert_eq!(tags.canonical_url, "https://site.example/");
        assert!(tags.og_image.is_none());
        assert!(tags.json_ld.is_none());
    }

    #[test]
    fn test_item_fallbacks_and_media_image() {
        let item = ContentItem {
            title: Some("Landing pages".into()),
            description: Some("Fast sites".into()),
            lang: Some("ka".into()),
            media: vec![
                "https://youtu.be/abcdefghijk".into(),
                "https://cdn.example/shot.png".into(),
            ],
            seo: SeoFields {
                og_description: Some("".into()),
                schema_json_ld: json!({"@type": "Service"}).as_object().cloned().unwrap(),
                ..Default::default()
            },
            ..Default::default()
        };
        let tags = SeoTags::for_item(&ctx(), &item, "/ka/services/landing/");
        assert_eq!(tags.title, "Landing pages");
        assert_eq!(tags.og_description, "Fast sites");
        assert_eq!(tags.og_image.as_deref(), Some("https://cdn.example/shot.png"));
        assert_eq!(tags.canonical_url, "https://site.example/ka/services/landing");
        assert_eq!(tags.json_ld.as_deref(), Some(r#"{"@type":"Service"}"#));
    }

    #[test]
    fn test_apply_replaces_old_tags() {
        let tags = SeoTags::for_home(&ctx(), &HomeContent::default(), "/");
        let out = tags.apply(SHELL).unwrap();
        assert!(!out.contains("<title>Old</title>"));
        assert!(!out.contains("content=\"old\""));
        assert!(out.contains("<html lang=\"en\">"));
        assert_eq!(out.matches("<title>").count(), 1);
        assert!(out.contains("<meta charset=\"UTF-8\">"));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let tags = SeoTags::for_home(&ctx(), &HomeContent::default(), "/");
        let once = tags.apply(SHELL).unwrap();
        let twice = tags.apply(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_values_are_escaped() {
        let home = HomeContent {
            seo: SeoFields {
                seo_title: Some("Tom & <Jerry>".into()),
                og_image: Some("https://cdn.example/og.png?a=1&b=2".into()),
                ..Default::default()
            },
            lang: Some("en\"><script>".into()),
            ..Default::default()
        };
        let tags = SeoTags::for_home(&ctx(), &home, "/");
        let html = tags.to_head_html().unwrap();
        assert!(html.contains("<title>Tom &amp; &lt;Jerry&gt;</title>"));
        assert!(html.contains(r#"<meta property="og:title" content="Tom &amp; &lt;Jerry&gt;">"#));
        assert!(html.contains(r#"<meta name="twitter:image" content="https://cdn.example/og.png?a=1&amp;b=2">"#));
        assert!(!html.contains("ld+json"));

        let out = tags.apply(SHELL).unwrap();
        assert!(out.contains(r#"<html lang="enscript">"#));
    }

    #[test]
    fn test_json_ld_is_written_verbatim() {
        let home = HomeContent {
            seo: SeoFields {
                schema_json_ld: json!({"@type": "Organization", "name": "A & B"})
                    .as_object()
                    .cloned()
                    .unwrap(),
                ..Default::default()
            },
            ..Default::default()
        };
        let html = SeoTags::for_home(&ctx(), &home, "/").to_head_html().unwrap();
        assert!(html.contains(r#"<script type="application/ld+json">{"@type":"Organization","name":"A & B"}</script>"#));
    }
}
