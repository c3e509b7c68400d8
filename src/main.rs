//! Riskscore: insurance risk scoring service.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from TOML, builds the Axum router and serves it until
//! SIGINT/SIGTERM.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use riskscore::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use riskscore::create_router;
use riskscore::http::start_server;

/// Riskscore: score biometric inputs into an insurance risk band
#[derive(Parser, Debug)]
#[command(name = "riskscore", version, about)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "riskscore=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Listening port, overriding http.port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration first: it selects the log format
    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        static_files = config.static_files.enabled,
        static_dir = %config.static_files.dir,
        cors_permissive = config.cors.is_permissive(),
        "Loaded configuration"
    );

    let app = create_router(&config);
    start_server(app, &config.http).await?;

    Ok(())
}
