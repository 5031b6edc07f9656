//! Configuration for the site content module

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Site content module configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SiteContentConfig {
    pub site: SiteConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
}

/// Public site settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SiteConfig {
    /// Public origin used for canonical URLs and the sitemap
    pub base_url: String,
    pub brand_name: String,
    pub default_description: String,
    /// `max-age` of cacheable page and sitemap responses
    pub cache_max_age_secs: u64,
    /// URL prefix of static assets
    pub asset_base: String,
    /// Directory served under `/static`; nothing is served when unset
    pub assets_dir: Option<PathBuf>,
    /// Client enhancement script, relative to `asset_base`
    pub client_script: Option<String>,
    /// Yandex Metrika counter; no analytics markup when unset
    pub metrika_counter_id: Option<u64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://digital-craft-tbilisi.netlify.app".to_string(),
            brand_name: "Digital Craft".to_string(),
            default_description: "Professional websites for small businesses".to_string(),
            cache_max_age_secs: 3600,
            asset_base: "/static".to_string(),
            assets_dir: None,
            client_script: Some("main.js".to_string()),
            metrika_counter_id: None,
        }
    }
}

/// Document store backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    Memory,
    Firestore,
    Sql,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// YAML seed written into an empty store at startup
    pub seed_path: Option<PathBuf>,
    pub firestore: FirestoreConfig,
    pub sql: SqlConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub database: String,
    /// Web API key, sent as the `key` query parameter
    pub api_key: Option<String>,
    /// OAuth access token, sent as a bearer token
    pub access_token: Option<String>,
    pub endpoint: String,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            database: "(default)".to_string(),
            api_key: None,
            access_token: None,
            endpoint: "https://firestore.googleapis.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SqlConfig {
    /// SeaORM connection string (`sqlite://...`, `postgres://...`)
    pub dsn: String,
}

impl Default for SqlConfig {
    fn default() -> Self {
        Self {
            dsn: "sqlite::memory:".to_string(),
        }
    }
}

/// Admin sign-in provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthProviderKind {
    IdentityToolkit,
    #[default]
    Static,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AuthConfig {
    pub provider: AuthProviderKind,
    /// Identity Toolkit web API key
    pub api_key: Option<String>,
    pub endpoint: String,
    /// HS256 key for session tokens; a random key is used when empty
    pub session_secret: String,
    #[serde(with = "humantime_serde")]
    pub session_ttl: Duration,
    #[serde(rename = "static")]
    pub static_credentials: StaticCredentialsConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider: AuthProviderKind::default(),
            api_key: None,
            endpoint: "https://identitytoolkit.googleapis.com".to_string(),
            session_secret: String::new(),
            session_ttl: Duration::from_secs(12 * 60 * 60),
            static_credentials: StaticCredentialsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct StaticCredentialsConfig {
    pub email: String,
    /// Hex SHA-256 digest of the password
    pub password_sha256: String,
}
