//! Local sandbox for integration testing.
//!
//! Brings the full server (middleware included) up on a local listener and
//! tears it down again:
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use docs_site::{Renderer, SandboxError};
//! # async fn demo(renderer: Arc<dyn Renderer>) -> Result<(), SandboxError> {
//! let mut config = docs_site::SiteConfig::default();
//! config.listener.bind_address = "127.0.0.1:0".into();
//!
//! let sandbox = docs_site::Sandbox::start(config, renderer).await?;
//! let url = sandbox.url("/en/getting-started/introduction");
//! // ... issue requests against `url` ...
//! sandbox.end().await?;
//! # Ok(())
//! # }
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::config::SiteConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::render::Renderer;

#[derive(Debug, thiserror::Error)]
pub enum SandboxError {
    #[error("failed to bind sandbox listener on {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("sandbox server failed: {0}")]
    Serve(#[from] std::io::Error),

    #[error("sandbox server task panicked or was cancelled: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// A running server instance. Call [`Sandbox::end`] to stop it.
#[derive(Debug)]
pub struct Sandbox {
    addr: SocketAddr,
    shutdown: Shutdown,
    task: JoinHandle<Result<(), std::io::Error>>,
}

impl Sandbox {
    /// Bind `config.listener.bind_address` and start serving.
    ///
    /// Returns once the listener is bound, so requests may be issued
    /// immediately. Use port 0 to let the OS pick a free port.
    pub async fn start(
        config: SiteConfig,
        renderer: Arc<dyn Renderer>,
    ) -> Result<Self, SandboxError> {
        let address = config.listener.bind_address.clone();
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| SandboxError::Bind { address, source })?;
        let addr = listener.local_addr()?;

        let shutdown = Shutdown::new();
        let server = HttpServer::new(config, renderer);
        let task = tokio::spawn(server.run(listener, shutdown.subscribe()));

        tracing::info!(address = %addr, "Sandbox started");
        Ok(Self { addr, shutdown, task })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Absolute URL for `path` on this sandbox.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Stop the server and wait for it to drain.
    pub async fn end(self) -> Result<(), SandboxError> {
        self.shutdown.trigger();
        self.task.await??;
        tracing::info!(address = %self.addr, "Sandbox stopped");
        Ok(())
    }
}
