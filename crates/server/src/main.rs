//! Webwrap server binary.

use anyhow::{Context, Result};
use clap::Parser;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use webwrap_core::config::AppConfig;
use webwrap_generator::ProjectGenerator;
use webwrap_server::{AppState, create_router};

/// Webwrap - website to Android app conversion service
#[derive(Parser, Debug)]
#[command(name = "webwrapd")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(
        short,
        long,
        env = "WEBWRAP_CONFIG",
        default_value = "config/server.toml"
    )]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Webwrap v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration. The file is optional; every field has a default
    // and WEBWRAP_ env vars can provide or override anything.
    let mut figment = Figment::new();
    if std::path::Path::new(&args.config).exists() {
        tracing::info!(config_path = %args.config, "Loading configuration from file");
        figment = figment.merge(Toml::file(&args.config));
    } else {
        tracing::debug!("No config file found at {}, using defaults", args.config);
    }

    let config: AppConfig = figment
        .merge(Env::prefixed("WEBWRAP_").split("__"))
        .extract()
        .context("failed to load configuration")?;

    // Initialize the work root before accepting requests
    let generator = ProjectGenerator::new(&config.storage.work_root)
        .context("failed to initialize project work root")?;
    tracing::info!(
        work_root = %config.storage.work_root.display(),
        "Project work root initialized"
    );

    let addr: SocketAddr = config.server.bind.parse().context("invalid bind address")?;

    let state = AppState::new(config, generator);
    let app = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
