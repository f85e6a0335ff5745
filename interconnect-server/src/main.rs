//! # Interconnect Server
//!
//! Serves the interconnect admission engine over HTTP/JSON, with a
//! Server-Sent Events change feed at `/api/v1/events`.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use interconnect_server::{AppState, create_app, infra::config::Config};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "interconnect-server")]
#[command(about = "Admission control for transceivers, bearers and attachment circuits")]
struct Cli {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Admission policy file (TOML or JSON)
    #[arg(short, long, env = "INTERCONNECT_CONFIG_PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap reads env-backed flags.
    let env_file = dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(path) = &env_file {
        info!(path = %path.display(), "loaded environment file");
    }

    let mut config =
        Config::from_env(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(port) = cli.port {
        config.server_port = port;
    }
    if let Some(host) = cli.host {
        config.server_host = host;
    }
    config.validate().context("invalid configuration")?;

    match &config.policy_source {
        Some(path) => info!(path = %path.display(), "loaded admission policy"),
        None => info!("using default admission policy"),
    }

    let engine = config
        .policy
        .build_engine()
        .context("failed to build admission engine")?;

    let host = config.server_host.clone();
    let port = config.server_port;
    let app = create_app(AppState::new(engine, Arc::new(config)));

    let listener = TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    info!(addr = %listener.local_addr()?, "interconnect server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("interconnect server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
