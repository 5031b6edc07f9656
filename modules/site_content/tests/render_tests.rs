//! Rendering properties over generated content

mod common;

use chrono::{TimeZone, Utc};
use common::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use site_content::domain::render::detail::related_items;
use site_content::domain::render::{render_page, render_sitemap, PageInput, RenderContext};
use site_content::domain::PageRoute;
use site_content::{Collection, ContentItem, SiteData};

const LANGS: [&str; 4] = ["en", "ru", "ka", ""];

fn random_site(rng: &mut StdRng) -> SiteData {
    let mut data = SiteData::default();
    for collection in Collection::ALL {
        let count = rng.random_range(0..6);
        for n in 0..count {
            let lang = LANGS[rng.random_range(0..LANGS.len())];
            let slug = if rng.random_bool(0.8) {
                format!("{}-{}", collection, n)
            } else {
                String::new()
            };
            let mut entry = item(&format!("{}-{}", collection.id_prefix(), n), lang, &slug, "Item");
            if lang.is_empty() {
                entry.lang = None;
            }
            data.items_mut(collection).push(entry);
        }
    }
    data
}

fn published(data: &SiteData) -> usize {
    Collection::ALL
        .iter()
        .flat_map(|&c| data.items(c))
        .filter(|item: &&ContentItem| {
            item.lang.as_deref().is_some_and(|l| !l.is_empty())
                && item.url_slug.as_deref().is_some_and(|s| !s.is_empty())
        })
        .count()
}

#[test]
fn test_sitemap_has_one_entry_per_published_item_plus_home() {
    print_test_header(
        "test_sitemap_has_one_entry_per_published_item_plus_home",
        "Items without a slug or a language never reach the sitemap",
    );
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..25 {
        let data = random_site(&mut rng);
        let xml = render_sitemap(&data, BASE_URL, now).unwrap();
        assert_eq!(xml.matches("<url>").count(), published(&data) + 1);
    }
}

#[test]
fn test_every_sitemap_location_routes_to_its_item() {
    let now = Utc::now();
    let mut rng = StdRng::seed_from_u64(11);
    let data = random_site(&mut rng);
    let xml = render_sitemap(&data, BASE_URL, now).unwrap();

    for loc in xml
        .split("<loc>")
        .skip(1)
        .filter_map(|rest| rest.split("</loc>").next())
    {
        let path = loc.trim_start_matches(BASE_URL);
        match PageRoute::parse(path) {
            PageRoute::Home => assert_eq!(path, "/"),
            PageRoute::Detail(route) => assert!(data.find_detail(&route).is_some(), "{}", path),
        }
    }
}

#[test]
fn test_related_items_share_language_and_exclude_current() {
    let mut rng = StdRng::seed_from_u64(3);
    let data = random_site(&mut rng);

    for collection in Collection::ALL {
        for current in data.items(collection) {
            let related = related_items(collection, current, &data, &mut rng);
            assert!(related.len() <= 3);
            for (c, other) in related {
                assert_eq!(other.lang, current.lang);
                assert!(!(c == collection && other.url_slug == current.url_slug));
            }
        }
    }
}

#[test]
fn test_detail_page_is_deterministic_for_a_seed() {
    let data = sample_site();
    let ctx = RenderContext::default();
    let item = data.find_item(Collection::Services, "service-1").unwrap();
    let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let render = |seed| {
        let input = PageInput {
            data: &data,
            path: "/en/services/my-slug",
            detail: Some((Collection::Services, item)),
            now,
        };
        render_page(&ctx, input, &mut StdRng::seed_from_u64(seed)).unwrap()
    };

    assert_eq!(render(5), render(5));
    let html = render(5);
    assert!(html.contains("<h1"));
    assert!(html.contains("/en/services/my-slug"));
}
