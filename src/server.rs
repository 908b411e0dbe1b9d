//! Reusable HTTP server runtime.
//!
//! Provides [`ServerHandle`], which binds the REST API listener, serves it on
//! a background task, and drains it on shutdown. The CLI binary uses this so
//! the bootstrap lives in one place.

use std::net::SocketAddr;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat};
use crate::interfaces::http::create_api_router;
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};
use crate::shared::types::AppError;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Calling this twice is a no-op.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let result = match config.logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    };

    if let Err(e) = result {
        eprintln!("tracing already initialized: {}", e);
    }
}

/// Handle to a running REST API server.
///
/// # Examples
///
/// ```rust,no_run
/// use storefront_pager::config::AppConfig;
/// use storefront_pager::server::ServerHandle;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(AppConfig::default()).await?;
///     handle.install_signal_handler();
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Address the listener is bound to.
    pub local_addr: SocketAddr,

    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Bind the listener and start serving on a background task.
    pub async fn start(config: AppConfig) -> Result<Self, AppError> {
        config.validate()?;

        let router = create_api_router(&config);
        let shutdown = ShutdownCoordinator::new(config.server.shutdown_timeout);

        let listener = tokio::net::TcpListener::bind(config.server.address()).await?;
        let local_addr = listener.local_addr()?;
        info!("REST API server listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let api_shutdown = shutdown.signal();
        let api_task = tokio::spawn(async move {
            let result = axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    api_shutdown.wait().await;
                    info!("REST API server received shutdown signal");
                })
                .await;
            match result {
                Ok(()) => info!("REST API server stopped"),
                Err(e) => error!("REST API server error: {}", e),
            }
        });

        Ok(Self {
            config,
            local_addr,
            shutdown,
            api_task,
        })
    }

    /// Trigger shutdown on SIGTERM / SIGINT.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Request a graceful shutdown and wait for the server to drain.
    pub async fn shutdown(self) {
        self.shutdown.signal().trigger();
        self.wait().await;
    }

    /// Wait until shutdown is triggered and the server has drained (or timed out).
    pub async fn wait(self) {
        let api_task = self.api_task;
        let abort = api_task.abort_handle();
        let drained = self
            .shutdown
            .shutdown_with(async move {
                if let Err(e) = api_task.await {
                    error!("REST API server task panicked: {}", e);
                }
            })
            .await;
        if !drained {
            abort.abort();
        }
    }
}
