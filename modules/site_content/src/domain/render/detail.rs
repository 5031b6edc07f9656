//! Detail page content and related items

use crate::contract::{non_empty, Collection, ContentItem, SiteData};
use crate::domain::format::format_content_html;
use rand::seq::SliceRandom;
use rand::Rng;

use super::sections::CardView;

/// Maximum number of related cards
const RELATED_LIMIT: usize = 3;

/// Collections related items are drawn from
const RELATED_POOL: [Collection; 2] = [Collection::Services, Collection::Blog];

/// Detail page body
pub struct DetailView<'a> {
    pub heading: &'a str,
    pub price: Option<&'a str>,
    /// Formatted `mainContent`, emitted unescaped
    pub body_html: String,
    pub related: Vec<CardView<'a>>,
}

/// Header, price, formatted body and the related-items block
pub fn detail_view<'a, R: Rng + ?Sized>(
    collection: Collection,
    item: &'a ContentItem,
    data: &'a SiteData,
    rng: &mut R,
) -> DetailView<'a> {
    let heading = non_empty(&item.h1)
        .or(item.title.as_deref())
        .unwrap_or_default();
    let related = related_items(collection, item, data, rng)
        .into_iter()
        .map(|(c, related)| CardView::new(c, related, "item-card floating-item"))
        .collect();

    DetailView {
        heading,
        price: non_empty(&item.price),
        body_html: format_content_html(item.main_content.as_deref().unwrap_or_default()),
        related,
    }
}

/// Up to three random items in the same language, never the current one
pub fn related_items<'a, R: Rng + ?Sized>(
    collection: Collection,
    current: &ContentItem,
    data: &'a SiteData,
    rng: &mut R,
) -> Vec<(Collection, &'a ContentItem)> {
    let mut pool: Vec<(Collection, &ContentItem)> = RELATED_POOL
        .iter()
        .flat_map(|&c| data.items(c).iter().map(move |item| (c, item)))
        .filter(|(c, item)| {
            item.lang == current.lang && !(*c == collection && item.url_slug == current.url_slug)
        })
        .collect();

    pool.shuffle(rng);
    pool.truncate(RELATED_LIMIT);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn item(slug: &str, lang: &str) -> ContentItem {
        ContentItem {
            id: slug.to_string(),
            lang: Some(lang.to_string()),
            title: Some(slug.to_uppercase()),
            url_slug: Some(slug.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_related_excludes_current_and_other_languages() {
        let data = SiteData {
            services: vec![item("a", "en"), item("b", "en"), item("c", "ru")],
            blog: vec![item("a", "en"), item("d", "en")],
            portfolio: vec![item("p", "en")],
            ..Default::default()
        };
        let current = data.services[0].clone();
        let mut rng = StdRng::seed_from_u64(7);
        let related = related_items(Collection::Services, &current, &data, &mut rng);

        let mut keys: Vec<String> = related
            .iter()
            .map(|(c, i)| format!("{}/{}", c, i.id))
            .collect();
        keys.sort();
        assert_eq!(keys, vec!["blog/a", "blog/d", "services/b"]);
    }

    #[test]
    fn test_related_is_capped_at_three() {
        let data = SiteData {
            blog: (0..10).map(|i| item(&format!("post-{i}"), "en")).collect(),
            ..Default::default()
        };
        let current = item("current", "en");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(related_items(Collection::Blog, &current, &data, &mut rng).len(), 3);
    }

    #[test]
    fn test_detail_without_related_or_price() {
        let current = ContentItem {
            h1: Some(String::new()),
            title: Some("Only item".into()),
            main_content: Some("Hello".into()),
            ..item("only", "en")
        };
        let data = SiteData {
            services: vec![current.clone()],
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let view = detail_view(Collection::Services, &current, &data, &mut rng);
        assert_eq!(view.heading, "Only item");
        assert_eq!(view.body_html, "<p>Hello</p>");
        assert!(view.price.is_none());
        assert!(view.related.is_empty());
    }
}
