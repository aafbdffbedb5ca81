//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL implementation of the ledger store
//! port. Every ledger key maps to one row of the `ledger_state` table
//! holding the encoded record bytes and a per-key write version.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresLedgerStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/ledger")).await?;
//! run_migrations(&pool).await?;
//! let store = PostgresLedgerStore::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod store;

pub use error::DatabaseError;
pub use pool::{create_pool, run_migrations, DatabaseConfig, DatabasePool};
pub use store::PostgresLedgerStore;
