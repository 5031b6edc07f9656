//! Full HTML documents for the home page and item detail pages

use crate::contract::{non_empty, Collection, ContentItem, SiteData};
use crate::domain::format::format_content_html;
use askama::Template;
use chrono::{DateTime, Datelike, Utc};
use rand::Rng;

use super::detail::{detail_view, DetailView};
use super::sections::{home_sections, SectionView};
use super::{RenderContext, SeoTags};

/// Navigation menu entry
pub struct MenuLink {
    pub label: &'static str,
    pub href: &'static str,
}

const MENU: [MenuLink; 5] = [
    MenuLink { label: "Home", href: "/#hero" },
    MenuLink { label: "Services", href: "/#services" },
    MenuLink { label: "Portfolio", href: "/#portfolio" },
    MenuLink { label: "Blog", href: "/#blog" },
    MenuLink { label: "Contact", href: "/#contact" },
];

/// What to render
pub struct PageInput<'a> {
    pub data: &'a SiteData,
    /// Request path, used for the canonical URL
    pub path: &'a str,
    /// Detail page item; `None` renders the home page
    pub detail: Option<(Collection, &'a ContentItem)>,
    pub now: DateTime<Utc>,
}

/// Hero and collection sections
pub struct HomeView<'a> {
    pub h1: &'a str,
    /// Formatted subtitle, emitted unescaped
    pub subtitle_html: Option<String>,
    pub sections: Vec<SectionView<'a>>,
}

#[derive(Template)]
#[template(path = "site/page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    description: &'a str,
    favicon: String,
    stylesheet: String,
    client_script: Option<String>,
    metrika_counter_id: Option<u64>,
    /// Custom background markup, run sandboxed in an iframe `srcdoc`
    background: Option<&'a str>,
    menu: &'a [MenuLink],
    home: Option<HomeView<'a>>,
    detail: Option<DetailView<'a>>,
    admin_path: &'a str,
    year: i32,
    brand: &'a str,
}

/// Render a complete document with SEO tags written into its head
pub fn render_page<R: Rng + ?Sized>(
    ctx: &RenderContext,
    input: PageInput<'_>,
    rng: &mut R,
) -> askama::Result<String> {
    let data = input.data;
    let (seo, home, detail, background) = match input.detail {
        Some((collection, item)) => (
            SeoTags::for_item(ctx, item, input.path),
            None,
            Some(detail_view(collection, item, data, rng)),
            non_empty(&item.seo.background_html).or(non_empty(&data.home.seo.background_html)),
        ),
        None => (
            SeoTags::for_home(ctx, &data.home, input.path),
            Some(HomeView {
                h1: non_empty(&data.home.h1).unwrap_or(&ctx.brand_name),
                subtitle_html: non_empty(&data.home.subtitle).map(format_content_html),
                sections: home_sections(data),
            }),
            None,
            non_empty(&data.home.seo.background_html),
        ),
    };

    let document = PageTemplate {
        title: &seo.title,
        description: &seo.description,
        favicon: ctx.asset("favicon.svg"),
        stylesheet: ctx.asset("styles.css"),
        client_script: ctx.client_script.as_deref().map(|script| ctx.asset(script)),
        metrika_counter_id: ctx.metrika_counter_id,
        background: background.filter(|code| !code.trim().is_empty()),
        menu: &MENU,
        home,
        detail,
        admin_path: &ctx.admin_path,
        year: input.now.year(),
        brand: &ctx.brand_name,
    }
    .render()?;

    seo.apply(&document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{HomeContent, SeoFields};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_767_225_600, 0).unwrap()
    }

    #[test]
    fn test_home_page_document() {
        let ctx = RenderContext::default();
        let data = SiteData {
            home: HomeContent {
                h1: Some("We build websites".into()),
                subtitle: Some("Fast.\n\nAffordable.".into()),
                lang: Some("ru".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let html = render_page(
            &ctx,
            PageInput { data: &data, path: "/", detail: None, now: now() },
            &mut rng,
        )
        .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"ru\">"));
        assert!(html.contains("<h1>We build websites</h1>"));
        assert!(html.contains("<p>Fast.</p><p>Affordable.</p>"));
        assert!(html.contains("<title>Digital Craft</title>"));
        assert!(html.contains("&copy; 2026 Digital Craft."));
        assert!(html.contains(r#"style="display: none;""#));
        assert!(html.contains(r#"<div id="loader" class="hidden">"#));
        assert!(!html.contains("mc.yandex.ru"));
    }

    #[test]
    fn test_brand_fallback_and_escaped_hero() {
        let ctx = RenderContext::default();
        let data = SiteData {
            home: HomeContent {
                h1: Some("Fish & <Chips>".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let html = render_page(
            &ctx,
            PageInput { data: &data, path: "/", detail: None, now: now() },
            &mut rng,
        )
        .unwrap();

        assert!(html.contains("<h1>Fish &amp; &lt;Chips&gt;</h1>"));
        assert!(!html.contains("hero-subtitle-container"));
    }

    #[test]
    fn test_detail_page_uses_item_background_and_seo() {
        let ctx = RenderContext {
            metrika_counter_id: Some(42),
            ..Default::default()
        };
        let item = ContentItem {
            id: "service-1".into(),
            lang: Some("en".into()),
            title: Some("SEO audit".into()),
            url_slug: Some("seo-audit".into()),
            price: Some("from $300".into()),
            seo: SeoFields {
                seo_title: Some("SEO audit | Digital Craft".into()),
                background_html: Some("<canvas></canvas>".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let data = SiteData {
            services: vec![item.clone()],
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let html = render_page(
            &ctx,
            PageInput {
                data: &data,
                path: "/en/services/seo-audit",
                detail: Some((Collection::Services, &item)),
                now: now(),
            },
            &mut rng,
        )
        .unwrap();

        assert!(html.contains("<title>SEO audit | Digital Craft</title>"));
        assert!(html.contains(r#"srcdoc="&lt;canvas&gt;&lt;/canvas&gt;""#));
        assert!(html.contains("from $300"));
        assert!(html.contains("ym(42, \"init\""));
        assert!(html.contains(r#"<div class="detail-price fade-in-up" style="animation-delay: 0.7s;">from $300</div>"#));
        assert!(!html.contains("related-posts"));
        assert!(html.contains(r#"<link rel="canonical" href="https://digital-craft-tbilisi.netlify.app/en/services/seo-audit">"#));
    }
}
