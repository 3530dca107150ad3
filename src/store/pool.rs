//! Connection pool construction.

use std::time::Duration;

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;

use crate::config::DatabaseConfig;
use crate::store::StoreError;

/// Open a pool for the configured database and verify it is reachable.
///
/// The first connection is established eagerly so an unreachable database
/// fails startup instead of the first request.
pub async fn connect(config: &DatabaseConfig) -> Result<AnyPool, StoreError> {
    install_default_drivers();

    let url = config
        .connection_url()
        .map_err(|e| sqlx::Error::Configuration(Box::new(e)))?;

    // Every SQLite :memory: connection is its own database, so keep exactly
    // one connection alive for the lifetime of the pool.
    let options = if config.is_in_memory() {
        AnyPoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(10))
    };

    tracing::debug!(
        url = %config.redacted_url(),
        max_connections = config.max_connections,
        "Opening database pool"
    );

    Ok(options.connect(&url).await?)
}
