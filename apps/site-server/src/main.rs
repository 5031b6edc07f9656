//! Digital Craft site server
//!
//! Serves the public pages, the sitemap, the admin panel and the JSON admin API.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use site_content::infra::auth::static_credentials::password_digest;
use site_content::SiteContentModule;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppConfig, LogFormat, LoggingConfig};

const DEFAULT_CONFIG_PATH: &str = "config/site.yaml";

#[derive(Debug, Parser)]
#[command(name = "site-server", version, about)]
struct Cli {
    /// YAML configuration file (defaults to config/site.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override `server.bind_addr`
    #[arg(long)]
    bind: Option<SocketAddr>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Print the SHA-256 digest for `auth.static.password_sha256`
    HashPassword { password: String },
    /// Validate the configuration and exit
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Command::HashPassword { password }) = &cli.command {
        println!("{}", password_digest(password));
        return Ok(());
    }

    let config_path = cli.config.clone().or_else(|| {
        let default = PathBuf::from(DEFAULT_CONFIG_PATH);
        default.exists().then_some(default)
    });
    let mut cfg = AppConfig::load(config_path.as_deref())?;
    if let Some(bind) = cli.bind {
        cfg.server.bind_addr = bind;
    }

    if let Some(Command::CheckConfig) = &cli.command {
        println!("configuration OK");
        return Ok(());
    }

    init_tracing(&cfg.logging)?;
    if let Some(path) = &config_path {
        tracing::info!(path = %path.display(), "Configuration loaded");
    }

    serve(cfg).await
}

fn init_tracing(cfg: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.filter))
        .context("invalid logging.filter")?;
    let registry = tracing_subscriber::registry().with(filter);
    match cfg.format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
    Ok(())
}

async fn serve(cfg: AppConfig) -> Result<()> {
    tracing::info!("Starting site server");

    let module = SiteContentModule::init(cfg.content()).await?;
    let app = module.router();

    let listener = TcpListener::bind(cfg.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.server.bind_addr))?;
    tracing::info!("Listening on http://{}", cfg.server.bind_addr);

    let cancel = CancellationToken::new();
    tokio::spawn(shutdown_signal(cancel.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await
        .context("server error")?;

    tracing::info!("Site server stopped");
    Ok(())
}

async fn shutdown_signal(cancel: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down gracefully...");
    cancel.cancel();
}
