//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! policy ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: Canonical argument vectors, records, and seeded stores
//! - `stores`: Store wrappers that inject races and failures
//! - `database`: PostgreSQL container management
//! - `assertions`: Assertion helpers for error kinds and stored records
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod database;
pub mod fixtures;
pub mod generators;
pub mod stores;

pub use assertions::*;
pub use database::*;
pub use fixtures::*;
pub use generators::*;
pub use stores::*;
