//! Admin panel pages
//!
//! Forms are bound 1:1 to document fields. In view state every control and
//! the Save button are disabled; in editing state they are enabled and Edit
//! is disabled.

use crate::contract::{non_empty, Collection, ContentItem, HomeContent, SeoFields, SiteData};
use crate::domain::admin::{Notice, PanelState, PanelTab};
use crate::domain::auth::AuthenticatedUser;
use crate::domain::jsonld::json_ld_to_input;
use crate::domain::lang::{admin_option_label, lang_name, ADMIN_LANG_ORDER, ADMIN_SELECT_ORDER, DEFAULT_LANG};
use crate::domain::render::RenderContext;
use askama::Template;
use askama_web::WebTemplate;

pub const LOGIN_FAILED: &str = "Login failed. Check email/password.";

/// Everything the panel page needs
pub struct PanelView<'a> {
    pub data: &'a SiteData,
    pub state: &'a PanelState,
    pub notice: Option<&'a Notice>,
    pub user: &'a AuthenticatedUser,
}

/// Values shared by every admin page
pub struct Chrome<'a> {
    pub brand: &'a str,
    pub favicon: String,
    pub stylesheet: String,
    pub admin_path: &'a str,
}

impl<'a> Chrome<'a> {
    fn new(ctx: &'a RenderContext) -> Self {
        Self {
            brand: &ctx.brand_name,
            favicon: ctx.asset("favicon.svg"),
            stylesheet: ctx.asset("styles.css"),
            admin_path: &ctx.admin_path,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct LoginPage<'a> {
    pub chrome: Chrome<'a>,
    pub error: Option<&'a str>,
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/panel.html")]
pub struct PanelPage<'a> {
    pub chrome: Chrome<'a>,
    pub email: &'a str,
    pub notice: Option<NoticeView<'a>>,
    pub tabs: Vec<TabLink>,
    pub tab_key: &'static str,
    pub home_form: Option<HomeFormView>,
    pub section: Option<SectionView<'a>>,
}

pub struct NoticeView<'a> {
    pub kind: &'static str,
    pub role: &'static str,
    pub message: &'a str,
}

pub struct TabLink {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// One form control; `rows > 0` is a textarea, non-empty `options` a select
pub struct FormField {
    /// Subheading printed above the control
    pub heading: Option<&'static str>,
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub rows: u8,
    pub options: Vec<SelectOption>,
}

pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

pub struct HomeFormView {
    pub editing: bool,
    pub fields: Vec<FormField>,
}

pub struct ItemFormView<'a> {
    pub id: &'a str,
    pub key: &'static str,
    pub editing: bool,
    pub fields: Vec<FormField>,
}

pub struct SectionView<'a> {
    pub key: &'static str,
    pub title: &'static str,
    pub groups: Vec<ListGroup<'a>>,
    pub editor: Option<ItemFormView<'a>>,
}

pub struct ListGroup<'a> {
    pub name: &'static str,
    pub lang: &'static str,
    pub entries: Vec<ListEntry<'a>>,
}

pub struct ListEntry<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub slug: &'a str,
    pub selected: bool,
}

pub fn login_page<'a>(ctx: &'a RenderContext, error: Option<&'a str>) -> LoginPage<'a> {
    LoginPage {
        chrome: Chrome::new(ctx),
        error,
    }
}

pub fn panel_page<'a>(ctx: &'a RenderContext, view: &PanelView<'a>) -> PanelPage<'a> {
    let notice = view.notice.map(|notice| match notice {
        Notice::Success(message) => NoticeView {
            kind: "success",
            role: "status",
            message,
        },
        Notice::Error(message) => NoticeView {
            kind: "error",
            role: "alert",
            message,
        },
    });

    let (home_form, section) = match view.state.tab {
        PanelTab::Home => (Some(home_form(&view.data.home, view.state.editing)), None),
        PanelTab::Collection(collection) => {
            (None, Some(section_view(collection, view.data, view.state)))
        }
    };

    PanelPage {
        chrome: Chrome::new(ctx),
        email: &view.user.email,
        notice,
        tabs: tabs(view.state.tab),
        tab_key: tab_key(view.state.tab),
        home_form,
        section,
    }
}

fn tab_key(tab: PanelTab) -> &'static str {
    match tab {
        PanelTab::Home => "home",
        PanelTab::Collection(collection) => collection.as_str(),
    }
}

fn tabs(active: PanelTab) -> Vec<TabLink> {
    std::iter::once(PanelTab::Home)
        .chain(Collection::ALL.into_iter().map(PanelTab::Collection))
        .map(|tab| TabLink {
            key: tab_key(tab),
            label: match tab {
                PanelTab::Home => "Home Page",
                PanelTab::Collection(collection) => collection.display_name(),
            },
            active: tab == active,
        })
        .collect()
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn input(name: &'static str, label: &'static str, value: String) -> FormField {
    FormField {
        heading: None,
        name,
        label,
        value,
        rows: 0,
        options: Vec::new(),
    }
}

fn textarea(name: &'static str, label: &'static str, value: String, rows: u8) -> FormField {
    FormField {
        rows,
        ..input(name, label, value)
    }
}

fn under(heading: &'static str, field: FormField) -> FormField {
    FormField {
        heading: Some(heading),
        ..field
    }
}

fn og_fields(seo: &SeoFields, title_label: &'static str, description_label: &'static str) -> [FormField; 3] {
    [
        under(
            "Social Media Sharing (Open Graph)",
            input("ogTitle", title_label, text(&seo.og_title)),
        ),
        textarea("ogDescription", description_label, text(&seo.og_description), 3),
        input("ogImage", "OG Image URL (1200x630px recommended)", text(&seo.og_image)),
    ]
}

fn home_form(home: &HomeContent, editing: bool) -> HomeFormView {
    let lang = non_empty(&home.lang).unwrap_or(DEFAULT_LANG).to_string();
    let mut fields = vec![
        under("Visible Content", input("h1", "Main Header (H1)", text(&home.h1))),
        textarea("subtitle", "Subtitle", text(&home.subtitle), 3),
        under("Critical SEO", input("lang", "Language (e.g., en, ru)", lang)),
        input("seoTitle", "SEO Title Tag (< 60 chars)", text(&home.seo.seo_title)),
        textarea(
            "metaDescription",
            "Meta Description (< 160 chars)",
            text(&home.seo.meta_description),
            3,
        ),
        under(
            "Schema.org for Organization",
            textarea("schemaJsonLd", "JSON-LD Code", json_ld_to_input(&home.seo.schema_json_ld), 8),
        ),
    ];
    fields.extend(og_fields(&home.seo, "OG Title", "OG Description"));
    fields.push(under(
        "Custom Background",
        textarea(
            "backgroundHtml",
            "Custom Background HTML/JS/CSS (leave empty for default animation)",
            text(&home.seo.background_html),
            10,
        ),
    ));
    HomeFormView { editing, fields }
}

fn section_view<'a>(
    collection: Collection,
    data: &'a SiteData,
    state: &PanelState,
) -> SectionView<'a> {
    let items = data.items(collection);

    let groups = ADMIN_LANG_ORDER
        .iter()
        .filter_map(|&lang| {
            let mut group: Vec<&ContentItem> = items
                .iter()
                .filter(|item| non_empty(&item.lang).unwrap_or(DEFAULT_LANG) == lang)
                .collect();
            if group.is_empty() {
                return None;
            }
            group.sort_by_key(|item| item.title.as_deref().unwrap_or_default().to_lowercase());
            Some(ListGroup {
                name: lang_name(lang).unwrap_or(lang),
                lang,
                entries: group
                    .into_iter()
                    .map(|item| ListEntry {
                        id: &item.id,
                        title: non_empty(&item.title).unwrap_or("No Title"),
                        slug: non_empty(&item.url_slug).unwrap_or("no-slug"),
                        selected: state.selected.as_deref() == Some(item.id.as_str()),
                    })
                    .collect(),
            })
        })
        .collect();

    let editor = state
        .selected
        .as_deref()
        .and_then(|id| data.find_item(collection, id))
        .map(|item| item_form(collection, item, state.editing));

    SectionView {
        key: collection.as_str(),
        title: collection.display_name(),
        groups,
        editor,
    }
}

fn item_form(collection: Collection, item: &ContentItem, editing: bool) -> ItemFormView<'_> {
    let options = ADMIN_SELECT_ORDER
        .iter()
        .map(|&lang| SelectOption {
            value: lang,
            label: admin_option_label(lang),
            selected: item.lang.as_deref() == Some(lang),
        })
        .collect();

    let mut fields = vec![
        under("Card Content (On Home Page)", input("title", "Card Title", text(&item.title))),
        input("subtitle", "Card Subtitle / Date", text(&item.subtitle)),
        textarea("description", "Card Description", text(&item.description), 3),
        FormField {
            options,
            ..under("Detailed Page Content", input("lang", "Language", String::new()))
        },
        input("urlSlug", "Page URL Slug", text(&item.url_slug)),
        input("h1", "Page Main Header (H1)", text(&item.h1)),
        input("price", "Price / Budget", text(&item.price)),
        textarea(
            "mainContent",
            "Main Page Content (Supports HTML and paragraph breaks)",
            text(&item.main_content),
            8,
        ),
        textarea("media", "Media (URLs, one per line)", item.media.join("\n"), 4),
        input("mainImageAlt", "Main Image Alt Text", text(&item.main_image_alt)),
        under("SEO & Metadata", input("seoTitle", "SEO Title Tag", text(&item.seo.seo_title))),
        textarea("metaDescription", "Meta Description", text(&item.seo.meta_description), 3),
        textarea(
            "schemaJsonLd",
            "Schema.org JSON-LD",
            json_ld_to_input(&item.seo.schema_json_ld),
            5,
        ),
    ];
    fields.extend(og_fields(
        &item.seo,
        "OG Title (If different from SEO Title)",
        "OG Description (If different from Meta Description)",
    ));
    fields.push(under(
        "Custom Background",
        textarea(
            "backgroundHtml",
            "Custom Page Background HTML/JS/CSS",
            text(&item.seo.background_html),
            6,
        ),
    ));

    ItemFormView {
        id: &item.id,
        key: collection.as_str(),
        editing,
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(view: &PanelView<'_>) -> String {
        panel_page(&RenderContext::default(), view).render().unwrap()
    }

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            email: "admin@example.com".into(),
        }
    }

    fn data() -> SiteData {
        SiteData {
            services: vec![
                ContentItem {
                    id: "service-2".into(),
                    lang: Some("en".into()),
                    title: Some("Zeta".into()),
                    url_slug: Some("zeta".into()),
                    ..Default::default()
                },
                ContentItem {
                    id: "service-1".into(),
                    lang: Some("en".into()),
                    title: Some("alpha".into()),
                    ..Default::default()
                },
                ContentItem {
                    id: "service-3".into(),
                    lang: Some("ka".into()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_view_state_disables_controls() {
        let data = data();
        let state = PanelState::item(Collection::Services, Some("service-2".into()), false);
        let html = render(&PanelView { data: &data, state: &state, notice: None, user: &user() });
        assert!(html.contains(r#"name="urlSlug" value="zeta" disabled>"#));
        assert!(html.contains(r#"<select name="lang" disabled>"#));
        assert!(html.contains(r#"value="save" class="admin-btn save-btn" disabled>"#));
        assert!(html.contains(r#"value="edit" class="admin-btn edit-btn">"#));
    }

    #[test]
    fn test_editing_state_enables_controls() {
        let data = data();
        let state = PanelState::item(Collection::Services, Some("service-2".into()), true);
        let html = render(&PanelView { data: &data, state: &state, notice: None, user: &user() });
        assert!(html.contains(r#"name="urlSlug" value="zeta">"#));
        assert!(html.contains(r#"value="edit" class="admin-btn edit-btn" disabled>"#));
        assert!(html.contains(r#"value="save" class="admin-btn save-btn">"#));
        assert!(html.contains("is-editing"));
    }

    #[test]
    fn test_list_grouping_sorting_and_placeholders() {
        let data = data();
        let state = PanelState::item(Collection::Services, None, false);
        let html = render(&PanelView { data: &data, state: &state, notice: None, user: &user() });
        let alpha = html.find(">alpha<").unwrap();
        let zeta = html.find(">Zeta<").unwrap();
        let georgian = html.find("Georgian (ka)").unwrap();
        assert!(alpha < zeta && zeta < georgian);
        assert!(html.contains("(/no-slug)"));
        assert!(html.contains(">No Title<"));
        assert!(html.contains("Manage Services"));
        assert!(!html.contains("admin-item-content"));
    }

    #[test]
    fn test_form_values_are_escaped() {
        let data = SiteData {
            services: vec![ContentItem {
                id: "service-9".into(),
                lang: Some("ru".into()),
                title: Some("Say <hi> & bye".into()),
                main_content: Some("<p>raw</p>".into()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let state = PanelState::item(Collection::Services, Some("service-9".into()), true);
        let html = render(&PanelView { data: &data, state: &state, notice: None, user: &user() });
        assert!(html.contains(">Say &lt;hi&gt; &amp; bye<"));
        assert!(html.contains(r#"<textarea name="mainContent" rows="8">&lt;p&gt;raw&lt;/p&gt;</textarea>"#));
        assert!(html.contains(r#"<option value="ru" selected>"#));
        assert!(html.contains("SEO &amp; Metadata"));
    }

    #[test]
    fn test_notice_and_login() {
        let data = SiteData::default();
        let state = PanelState::home(false);
        let notice = Notice::Error("Error: Invalid JSON in Schema field.".into());
        let html = render(&PanelView { data: &data, state: &state, notice: Some(&notice), user: &user() });
        assert!(html.contains(r#"role="alert">Error: Invalid JSON in Schema field.</div>"#));
        assert!(html.contains(r#"name="lang" value="en" disabled>"#));

        let login = login_page(&RenderContext::default(), Some(LOGIN_FAILED))
            .render()
            .unwrap();
        assert!(login.contains("Login failed. Check email/password."));
        assert!(login.contains(r#"action="/admin/login""#));
    }
}
