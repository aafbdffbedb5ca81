//! Ledger Store port
//!
//! The ledger store is opaque keyed byte storage. Each key carries a
//! version that starts at 1 and increases by one on every write, which lets
//! read-modify-write operations commit with [`LedgerStore::put_if_version`]
//! instead of silently overwriting a concurrent update.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::ports::{DomainPort, HealthCheckResult, HealthCheckable, PortError};

/// Per-key write counter
pub type Version = u64;

/// Bytes stored under a key together with their version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredValue {
    pub bytes: Vec<u8>,
    pub version: Version,
}

/// The port every ledger store adapter implements
#[async_trait]
pub trait LedgerStore: DomainPort + HealthCheckable {
    /// Reads the value stored under `key`
    ///
    /// # Returns
    ///
    /// `None` if the key has never been written
    async fn get(&self, key: &str) -> Result<Option<StoredValue>, PortError>;

    /// Writes `value` under `key` unconditionally (last write wins)
    ///
    /// # Returns
    ///
    /// The new version of the key
    async fn put(&self, key: &str, value: Vec<u8>) -> Result<Version, PortError>;

    /// Writes `value` under `key` only if the key is still at `expected`
    ///
    /// `expected = None` means the key must not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `PortError::Conflict` if the stored version differs
    async fn put_if_version(
        &self,
        key: &str,
        value: Vec<u8>,
        expected: Option<Version>,
    ) -> Result<Version, PortError>;
}

/// In-memory ledger store
///
/// Backs the test suites and the `memory` store backend of the API server.
/// The lock is never held across an await point.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    entries: RwLock<HashMap<String, StoredValue>>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns every stored key in sorted order
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .entries
            .read()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }
}

fn poisoned() -> PortError {
    PortError::internal("in-memory ledger lock poisoned")
}

impl DomainPort for InMemoryLedgerStore {}

#[async_trait]
impl HealthCheckable for InMemoryLedgerStore {
    async fn health_check(&self) -> HealthCheckResult {
        match self.entries.read() {
            Ok(_) => HealthCheckResult::healthy("memory", 0),
            Err(_) => HealthCheckResult::unhealthy("memory", "lock poisoned"),
        }
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedgerStore {
    async fn get(&self, key: &str) -> Result<Option<StoredValue>, PortError> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<Version, PortError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        let version = entries.get(key).map_or(1, |current| current.version + 1);
        entries.insert(key.to_string(), StoredValue { bytes: value, version });
        Ok(version)
    }

    async fn put_if_version(
        &self,
        key: &str,
        value: Vec<u8>,
        expected: Option<Version>,
    ) -> Result<Version, PortError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        let actual = entries.get(key).map(|current| current.version);
        if actual != expected {
            return Err(PortError::conflict(key, expected, actual));
        }
        let version = actual.map_or(1, |v| v + 1);
        entries.insert(key.to_string(), StoredValue { bytes: value, version });
        Ok(version)
    }
}
