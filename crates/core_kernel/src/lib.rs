//! Core Kernel - Foundational types for the policy ledger
//!
//! This crate provides the building blocks shared by every domain module:
//! - The `LedgerStore` port and an in-memory adapter
//! - The record codec and the tri-state `ReadOutcome`
//! - The storage key prefix scheme
//! - Strongly-typed identifiers and positional argument parsing
//! - The error kinds surfaced to callers

pub mod args;
pub mod codec;
pub mod error;
pub mod identifiers;
pub mod keys;
pub mod ports;
pub mod store;

pub use args::{parse_bool, parse_int, ArgReader};
pub use codec::{decode, encode, read_record, DecodeError, ReadOutcome, Record};
pub use error::{CoreError, ErrorKind};
pub use identifiers::{AccountId, PolicyNumber};
pub use keys::{RecordKind, StorageKey};
pub use ports::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError};
pub use store::{InMemoryLedgerStore, LedgerStore, StoredValue, Version};
