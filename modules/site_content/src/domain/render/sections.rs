//! Home page content: per-collection card sections

use crate::contract::{Collection, ContentItem, SiteData};
use crate::domain::lang::{lang_name, SITE_LANG_ORDER};

/// Cards per desktop slide
const DESKTOP_SLIDE_SIZE: usize = 3;

/// Card linking to an item's detail page
pub struct CardView<'a> {
    pub href: String,
    pub class: &'static str,
    pub image: &'a str,
    pub title: &'a str,
    pub subtitle: &'a str,
    pub description: &'a str,
}

impl<'a> CardView<'a> {
    pub fn new(collection: Collection, item: &'a ContentItem, class: &'static str) -> Self {
        Self {
            href: item.detail_path(collection),
            class,
            image: item.primary_image().unwrap_or_default(),
            title: item.title.as_deref().unwrap_or_default(),
            subtitle: item.subtitle.as_deref().unwrap_or_default(),
            description: item.description.as_deref().unwrap_or_default(),
        }
    }
}

/// Cards of one language: desktop slides and the mobile slider
pub struct LangGroupView<'a> {
    pub lang_name: &'static str,
    pub slides: Vec<Vec<CardView<'a>>>,
    pub mobile: Vec<CardView<'a>>,
}

/// One collection section
pub struct SectionView<'a> {
    pub key: &'static str,
    pub title: &'static str,
    pub groups: Vec<LangGroupView<'a>>,
}

/// Sections of every non-empty collection, in menu order
pub fn home_sections(data: &SiteData) -> Vec<SectionView<'_>> {
    Collection::ALL
        .into_iter()
        .filter_map(|collection| section_view(collection, data.items(collection)))
        .collect()
}

/// Section for a collection; `None` when no item has a known language
pub fn section_view(collection: Collection, items: &[ContentItem]) -> Option<SectionView<'_>> {
    let groups: Vec<LangGroupView<'_>> = SITE_LANG_ORDER
        .iter()
        .filter_map(|&lang| {
            let lang_items: Vec<&ContentItem> = items
                .iter()
                .filter(|item| item.lang.as_deref() == Some(lang))
                .collect();
            if lang_items.is_empty() {
                return None;
            }
            Some(LangGroupView {
                lang_name: lang_name(lang).unwrap_or(lang),
                slides: lang_items
                    .chunks(DESKTOP_SLIDE_SIZE)
                    .map(|slide| {
                        slide
                            .iter()
                            .map(|item| CardView::new(collection, item, "item-card floating-item"))
                            .collect()
                    })
                    .collect(),
                mobile: lang_items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let class = if index == 0 { "item-card active" } else { "item-card" };
                        CardView::new(collection, item, class)
                    })
                    .collect(),
            })
        })
        .collect();

    if groups.is_empty() {
        return None;
    }
    Some(SectionView {
        key: collection.as_str(),
        title: collection.section_title(),
        groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use askama::Template;

    #[derive(Template)]
    #[template(path = "site/section.html")]
    struct SectionTemplate<'a> {
        section: SectionView<'a>,
    }

    fn render(collection: Collection, items: &[ContentItem]) -> String {
        let section = section_view(collection, items).unwrap();
        SectionTemplate { section }.render().unwrap()
    }

    fn item(id: usize, lang: &str) -> ContentItem {
        ContentItem {
            id: format!("service-{id}"),
            lang: Some(lang.to_string()),
            title: Some(format!("Service {id}")),
            url_slug: Some(format!("service-{id}")),
            media: vec!["https://vimeo.com/1".into(), format!("https://cdn.example/{id}.jpg")],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_collection_renders_nothing() {
        assert!(section_view(Collection::Blog, &[]).is_none());
        assert!(section_view(Collection::Blog, &[item(1, "de")]).is_none());
    }

    #[test]
    fn test_desktop_slides_hold_three_cards() {
        let items: Vec<ContentItem> = (0..4).map(|i| item(i, "en")).collect();
        let section = section_view(Collection::Services, &items).unwrap();
        assert_eq!(section.groups[0].slides.len(), 2);
        assert_eq!(section.groups[0].slides[1].len(), 1);
        assert_eq!(section.groups[0].mobile[0].class, "item-card active");

        let html = render(Collection::Services, &items);
        assert_eq!(html.matches(r#"class="desktop-grid-slide"#).count(), 2);
        assert_eq!(html.matches("desktop-slider-dot").count(), 2);
        assert_eq!(html.matches(r#"class="slider-dot"#).count(), 4);
        assert!(html.contains("<h2>Our Services</h2>"));
        assert!(html.contains(r#"href="/en/services/service-3""#));
        assert!(html.contains("url('https://cdn.example/3.jpg')"));
    }

    #[test]
    fn test_groups_follow_language_order_and_skip_unknown() {
        let items = vec![item(1, "ru"), item(2, "en"), item(3, "de")];
        let html = render(Collection::Services, &items);
        let english = html.find("English").unwrap();
        let russian = html.find("Russian").unwrap();
        assert!(english < russian);
        assert!(!html.contains("service-3"));
        assert!(!html.contains("desktop-slider-nav"));
    }

    #[test]
    fn test_card_text_is_escaped() {
        let items = vec![ContentItem {
            title: Some("<b>Bold</b> & co".into()),
            ..item(1, "en")
        }];
        let html = render(Collection::Services, &items);
        assert!(html.contains("<h3>&lt;b&gt;Bold&lt;/b&gt; &amp; co</h3>"));
    }
}
