//! Module assembly: storage backend, seeding, auth and routers

use crate::api::{native::NativeClient, rest, web, AppState};
use crate::config::{AuthConfig, AuthProviderKind, SiteContentConfig, StorageBackend, StorageConfig};
use crate::contract::SiteContentApi;
use crate::domain::render::RenderContext;
use crate::domain::{AuthProvider, ContentRepository, Service, SessionManager};
use crate::infra::auth::{IdentityToolkitProvider, StaticCredentialsProvider};
use crate::infra::firestore::FirestoreRepository;
use crate::infra::storage::{seed, InMemoryContentRepository, SqlContentRepository};
use anyhow::{anyhow, Context, Result};
use axum::Router;
use rand::{distr::Alphanumeric, Rng};
use sea_orm_migration::MigratorTrait;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

const GENERATED_SECRET_LEN: usize = 48;

/// Site content module
pub struct SiteContentModule {
    service: Arc<Service>,
    state: AppState,
    assets_dir: Option<PathBuf>,
}

impl SiteContentModule {
    /// Build the module from configuration: connect storage, seed it and set up auth
    pub async fn init(cfg: SiteContentConfig) -> Result<Self> {
        let repo = build_repository(&cfg.storage).await?;
        let auth = build_auth_provider(&cfg.auth)?;
        let module = Self::from_parts(&cfg, repo, auth);

        let seed = match &cfg.storage.seed_path {
            Some(path) => seed::load_seed(path)?,
            None => seed::default_seed(),
        };
        if module.service.seed_if_empty(&seed).await? {
            tracing::info!("Document store was empty, seed content written");
        }

        tracing::info!(
            backend = ?cfg.storage.backend,
            provider = ?cfg.auth.provider,
            "Site content module initialized"
        );
        Ok(module)
    }

    /// Assemble the module over an existing repository and sign-in provider
    pub fn from_parts(
        cfg: &SiteContentConfig,
        repo: Arc<dyn ContentRepository>,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        let service = Arc::new(Service::new(repo));
        let client: Arc<dyn SiteContentApi> = Arc::new(NativeClient::new(service.clone()));
        let sessions = SessionManager::new(&session_secret(&cfg.auth), cfg.auth.session_ttl);
        let state = AppState::new(
            client,
            RenderContext::from_config(&cfg.site),
            cfg.site.cache_max_age_secs,
            auth,
            sessions,
        );

        Self {
            service,
            state,
            assets_dir: cfg.site.assets_dir.clone(),
        }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Native client for in-process consumers
    pub fn client(&self) -> Arc<dyn SiteContentApi> {
        Arc::new(NativeClient::new(self.service.clone()))
    }

    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// HTML pages, sitemap, admin panel and the JSON admin API
    pub fn router(&self) -> Router {
        tracing::info!("Registering site content routes");
        web::router(self.assets_dir.as_deref())
            .merge(rest::routes::register_routes())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }
}

async fn build_repository(cfg: &StorageConfig) -> Result<Arc<dyn ContentRepository>> {
    let repo: Arc<dyn ContentRepository> = match cfg.backend {
        StorageBackend::Memory => Arc::new(InMemoryContentRepository::new()),
        StorageBackend::Firestore => Arc::new(FirestoreRepository::new(&cfg.firestore)?),
        StorageBackend::Sql => {
            let db = sea_orm::Database::connect(cfg.sql.dsn.as_str())
                .await
                .with_context(|| "failed to connect to the SQL document store")?;
            crate::infra::storage::migrations::Migrator::up(&db, None).await?;
            tracing::info!("Site content migrations completed");
            Arc::new(SqlContentRepository::new(Arc::new(db)))
        }
    };
    Ok(repo)
}

fn build_auth_provider(cfg: &AuthConfig) -> Result<Arc<dyn AuthProvider>> {
    let provider: Arc<dyn AuthProvider> = match cfg.provider {
        AuthProviderKind::IdentityToolkit => {
            let api_key = cfg
                .api_key
                .as_deref()
                .filter(|k| !k.is_empty())
                .ok_or_else(|| anyhow!("auth.api_key is required for identity_toolkit"))?;
            Arc::new(IdentityToolkitProvider::new(&cfg.endpoint, api_key))
        }
        AuthProviderKind::Static => {
            let creds = &cfg.static_credentials;
            if creds.email.is_empty() || creds.password_sha256.is_empty() {
                tracing::warn!("No static admin credentials configured, admin sign-in is disabled");
            }
            Arc::new(StaticCredentialsProvider::new(
                &creds.email,
                &creds.password_sha256,
            ))
        }
    };
    Ok(provider)
}

fn session_secret(cfg: &AuthConfig) -> String {
    if !cfg.session_secret.is_empty() {
        return cfg.session_secret.clone();
    }
    tracing::warn!("auth.session_secret is empty, sessions will not survive a restart");
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(GENERATED_SECRET_LEN)
        .map(char::from)
        .collect()
}
