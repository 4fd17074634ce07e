//! Mock Document Search API
//!
//! ```text
//!     Client Request
//!     ─────────────▶ request id → trace → limits/timeout → router
//!                                                           │
//!                    ┌──────────────────────────────────────┘
//!                    ▼
//!     /search  /summarise  /search-and-summarise  /synonyms
//!     /pdfsummary  /add-to-index  /  /docs  /openapi.json
//!                    │
//!                    ▼
//!     canned data (dataset.rs) or a templated string
//! ```

use std::path::PathBuf;

use clap::Parser;

use mock_doc_search::config::{load_config, validate_config, ConfigError, ServerConfig};
use mock_doc_search::http::HttpServer;
use mock_doc_search::lifecycle::{wait_for_signal, Shutdown};
use mock_doc_search::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "mock-doc-search")]
#[command(about = "Mock document search API server", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind, overriding the configuration.
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding the configuration.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    config
        .listener
        .apply_overrides(cli.host.as_deref(), cli.port);
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init(&config.observability.log_filter);

    tracing::info!("mock-doc-search v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.limits.max_body_size,
        config_file = ?cli.config,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let server = HttpServer::new(config);
    let listener = server.bind().await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
