//! Documentation site server.
//!
//! ```text
//!     Client Request                ┌───────────────────────────────────────┐
//!     ──────────────────────────────┼─▶ middleware (request id, trace,      │
//!                                   │   timeout)                            │
//!                                   │      │                                │
//!                                   │      ▼                                │
//!                                   │   GET /{lang}/{cat}/{doc}             │
//!                                   │   page_handler ──▶ Renderer::render   │
//!     Client Response               │      │                 │              │
//!     ◀─────────────────────────────┼──────┴── status + html ◀┘             │
//!                                   └───────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use docs_site::config::{load_config, validate_config, ConfigError, SiteConfig};
use docs_site::lifecycle::{wait_for_signal, Shutdown};
use docs_site::observability::init_logging;
use docs_site::{FileRenderer, HttpServer};

#[derive(Debug, Parser)]
#[command(name = "docs-site")]
#[command(about = "Serve documentation pages at /{lang}/{cat}/{doc}", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override content.content_dir.
    #[arg(long)]
    content_dir: Option<String>,

    /// Override observability.log_level.
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn site_config(&self) -> Result<SiteConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SiteConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if let Some(dir) = &self.content_dir {
            config.content.content_dir = dir.clone();
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.site_config()?;

    init_logging(&config.observability)?;

    tracing::info!("docs-site v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        content_dir = %config.content.content_dir,
        request_timeout_secs = config.timeouts.request_secs,
        log_requests = config.observability.log_requests,
        "Configuration loaded"
    );

    let content_dir = Path::new(&config.content.content_dir);
    if !content_dir.is_dir() {
        tracing::warn!(
            content_dir = %content_dir.display(),
            "Content directory does not exist; every page will render as not found"
        );
    }
    let renderer = Arc::new(FileRenderer::new(content_dir));

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, renderer);
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    if let Err(e) = wait_for_signal().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signals");
    }
    shutdown.trigger();
    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
