//! Known content languages

/// Language used when a path or document does not name one
pub const DEFAULT_LANG: &str = "en";

/// Card grouping order on public pages
pub const SITE_LANG_ORDER: [&str; 4] = ["en", "ka", "ua", "ru"];

/// List grouping order in the admin panel
pub const ADMIN_LANG_ORDER: [&str; 4] = ["en", "ka", "ru", "ua"];

/// Option order of the admin language selector
pub const ADMIN_SELECT_ORDER: [&str; 4] = ["en", "ru", "ka", "ua"];

/// Human-readable language name
pub fn lang_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "ka" => Some("Georgian"),
        "ua" => Some("Ukrainian"),
        "ru" => Some("Russian"),
        _ => None,
    }
}

/// Label of the admin language selector option
pub fn admin_option_label(code: &str) -> &'static str {
    match code {
        "en" => "English (en)",
        "ru" => "Русский (ru)",
        "ka" => "Georgian (ka)",
        "ua" => "Ukrainian (ua)",
        _ => "",
    }
}
