//! Policy Ledger - API Server Binary
//!
//! # Usage
//!
//! ```bash
//! # In-memory ledger with defaults
//! cargo run --bin ledger-api
//!
//! # PostgreSQL-backed ledger
//! API_STORE_BACKEND=postgres API_DATABASE_URL=postgres://... cargo run --bin ledger-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_STORE_BACKEND` - `memory` or `postgres` (default: memory)
//! * `API_DATABASE_URL` - PostgreSQL connection string
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_PAYMENT_BALANCE_LOOKUP` - `sentinel` or `policy_keyed` (default: sentinel)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::{InMemoryLedgerStore, LedgerStore};
use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresLedgerStore};
use interface_api::config::{ApiConfig, StoreBackend};
use interface_api::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("Invalid API_* configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = config.port,
        store_backend = ?config.store_backend,
        balance_lookup = ?config.payment_balance_lookup,
        "Starting Policy Ledger API Server"
    );

    let store = open_store(&config).await?;
    let app = create_router(AppState::new(store, config.clone()));

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber; `RUST_LOG` wins over the configured level
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Opens the configured ledger store
async fn open_store(config: &ApiConfig) -> anyhow::Result<Arc<dyn LedgerStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory ledger store, state is lost on restart");
            Ok(Arc::new(InMemoryLedgerStore::new()))
        }
        StoreBackend::Postgres => {
            tracing::info!("Connecting to database...");
            let pool = create_pool(DatabaseConfig::new(&config.database_url))
                .await
                .context("Database connection failed")?;
            run_migrations(&pool).await.context("Database migration failed")?;
            Ok(Arc::new(PostgresLedgerStore::new(pool)))
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
