//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Start the metrics exporter when enabled
//! - Open and verify the database pool
//! - Bind the listener and hand back a ready-to-run [`App`]
//!
//! # Design Decisions
//! - Fail fast: every step returns a [`StartupError`] to the caller instead
//!   of panicking, and nothing is served until all steps succeed
//! - Subsystems initialize in order, not concurrently
//! - The listener binds last (traffic only when ready)

use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::AnyPool;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::{validate_config, ConfigError, DbDriver, ServiceConfig};
use crate::http::HttpServer;
use crate::observability::metrics;
use crate::store::{self, schema, SqlProductStore, StoreError};

/// Reasons the service refuses to start.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to install metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("failed to open database: {0}")]
    Database(#[from] StoreError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// A fully initialized service, ready to accept traffic.
pub struct App {
    server: HttpServer,
    listener: TcpListener,
    pool: AnyPool,
}

impl App {
    /// Address the listener is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until shutdown, then close the database pool.
    pub async fn run(self, shutdown: broadcast::Receiver<()>) -> std::io::Result<()> {
        let result = self.server.run(self.listener, shutdown).await;
        self.pool.close().await;
        tracing::info!("Database pool closed");
        result
    }
}

/// Run the startup sequence.
pub async fn start(config: &ServiceConfig) -> Result<App, StartupError> {
    validate_config(config).map_err(ConfigError::Validation)?;

    if config.observability.metrics_enabled {
        // Validated above.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr)?;
        }
    }

    let pool = store::connect(&config.database).await?;
    tracing::info!(
        url = %config.database.redacted_url(),
        "Database connection established"
    );

    if config.database.is_in_memory() {
        schema::create_table(&pool, DbDriver::Sqlite).await?;
        tracing::warn!("Using an in-memory database; products are lost on exit");
    }

    let server = HttpServer::new(Arc::new(SqlProductStore::new(pool.clone())));

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    Ok(App {
        server,
        listener,
        pool,
    })
}
