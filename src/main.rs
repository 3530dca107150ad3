//! Product Service
//!
//! A JSON CRUD API over a single `products` table, built with Tokio, Axum
//! and sqlx.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server ──▶ routing ──▶ http::handlers ──▶ store ──▶ MySQL / SQLite
//!                     (request id,     (5 routes)  (parse id/body)    (one SQL
//!                      trace, metrics)                                 statement)
//!     Client Response
//!     ◀────────────── http::response (status mapping, JSON bodies)
//!
//!     Cross-cutting: config · observability · lifecycle (startup/shutdown)
//! ```

use std::path::PathBuf;

use clap::Parser;

use product_service::config::{read_config, DbDriver, ServiceConfig};
use product_service::lifecycle::{self, signals, Shutdown};
use product_service::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "product-service")]
#[command(about = "JSON CRUD service for the products table", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 0.0.0.0:8010.
    #[arg(short, long)]
    listen: Option<String>,

    #[arg(long, value_enum)]
    db_driver: Option<DbDriver>,

    #[arg(long)]
    db_user: Option<String>,

    #[arg(long)]
    db_password: Option<String>,

    #[arg(long)]
    db_host: Option<String>,

    #[arg(long)]
    db_port: Option<u16>,

    /// Database name (or SQLite file, or ":memory:").
    #[arg(long)]
    db_name: Option<String>,
}

impl Cli {
    /// Apply command line overrides on top of the file configuration.
    fn apply(self, config: &mut ServiceConfig) {
        if let Some(listen) = self.listen {
            config.listener.bind_address = listen;
        }
        let db = &mut config.database;
        if let Some(driver) = self.db_driver {
            db.driver = driver;
        }
        if let Some(user) = self.db_user {
            db.user = user;
        }
        if let Some(password) = self.db_password {
            db.password = password;
        }
        if let Some(host) = self.db_host {
            db.host = host;
        }
        if let Some(port) = self.db_port {
            db.port = port;
        }
        if let Some(name) = self.db_name {
            db.name = name;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut cli = Cli::parse();

    let mut config = match cli.config.take() {
        Some(path) => read_config(&path)?,
        None => ServiceConfig::default(),
    };
    cli.apply(&mut config);

    init_logging(&config.observability)?;
    tracing::info!("product-service v{} starting", env!("CARGO_PKG_VERSION"));

    let app = match lifecycle::start(&config).await {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };

    tracing::info!(
        address = %app.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::forward_signals(shutdown);

    app.run(server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
