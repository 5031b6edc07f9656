//! Server configuration: YAML file layered under `SITE__*` environment variables

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use serde::Deserialize;
use site_content::config::{AuthConfig, SiteConfig, SiteContentConfig, StorageConfig};
use std::net::SocketAddr;
use std::path::Path;

/// Environment variable prefix; `SITE__SERVER__BIND_ADDR` sets `server.bind_addr`
pub const ENV_PREFIX: &str = "SITE__";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub site: SiteConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// `EnvFilter` directives, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            filter: "site_server=info,site_content=info,tower_http=info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load defaults, then the YAML file if given, then the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            if !path.is_file() {
                bail!("configuration file {} not found", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")
    }

    /// Module part of the configuration
    pub fn content(&self) -> SiteContentConfig {
        SiteContentConfig {
            site: self.site.clone(),
            storage: self.storage.clone(),
            auth: self.auth.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_content::config::StorageBackend;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn defaults_without_file() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.bind_addr.port(), 8080);
        assert_eq!(cfg.logging.format, LogFormat::Text);
        assert_eq!(cfg.storage.backend, StorageBackend::Memory);
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
server:
  bind_addr: "127.0.0.1:3000"
logging:
  format: json
site:
  base_url: "https://example.com"
  metrika_counter_id: 42
storage:
  backend: sql
  sql:
    dsn: "sqlite::memory:"
auth:
  session_ttl: 30m
  static:
    email: admin@example.com
    password_sha256: abc
"#
        )
        .unwrap();

        let cfg = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.server.bind_addr.port(), 3000);
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.site.base_url, "https://example.com");
        assert_eq!(cfg.site.metrika_counter_id, Some(42));
        assert_eq!(cfg.site.brand_name, "Digital Craft");
        assert_eq!(cfg.storage.backend, StorageBackend::Sql);
        assert_eq!(cfg.auth.session_ttl, Duration::from_secs(1800));
        assert_eq!(cfg.content().auth.static_credentials.email, "admin@example.com");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  port: 80").unwrap();
        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(AppConfig::load(Some(Path::new("/nonexistent/site.yaml"))).is_err());
    }
}
