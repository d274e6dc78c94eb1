//! devops-studio-app: the demo service for the CI/CD pipeline lab.
//!
//! This is the application entry point. It resolves configuration from an
//! optional TOML file and the environment, initializes tracing, builds the
//! Axum router and starts the HTTP server.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use devops_studio_app::config::{log_filter_directives, AppConfig, DEFAULT_LOG_FILTER};
use devops_studio_app::http::start_server;
use devops_studio_app::routes::create_router;
use devops_studio_app::state::AppState;

/// DevOps Studio CI/CD lab demo service
#[derive(Parser, Debug)]
#[command(name = "devops-studio-app", version, about)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "devops_studio_app=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref())?;

    // Uptime is measured from here
    let state = AppState::new(config.clone());

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(EnvFilter::new(log_filter_directives(&log_filter)))
        .with(tracing_subscriber::fmt::layer().with_ansi(std::io::stdout().is_terminal()))
        .init();

    tracing::debug!(?config, "Loaded configuration");

    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
