//! Store wrappers for race and failure tests

use std::sync::Mutex;

use async_trait::async_trait;

use core_kernel::{
    DomainPort, HealthCheckResult, HealthCheckable, InMemoryLedgerStore, LedgerStore, PortError,
    StoredValue, Version,
};

/// An in-memory store that lets another writer in between a read and the
/// conditional write that follows it
///
/// Once armed for a key, the next `put_if_version` on that key first
/// writes the injected bytes unconditionally, then performs the caller's
/// write against the now stale version.
#[derive(Default)]
pub struct InterleavingStore {
    inner: InMemoryLedgerStore,
    pending: Mutex<Option<(String, Vec<u8>)>>,
}

impl InterleavingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The wrapped store, for seeding and inspection
    pub fn inner(&self) -> &InMemoryLedgerStore {
        &self.inner
    }

    /// Arms a competing write of `bytes` to `key`
    pub fn interleave(&self, key: impl Into<String>, bytes: Vec<u8>) {
        *self.pending.lock().expect("lock") = Some((key.into(), bytes));
    }

    fn take_pending(&self, key: &str) -> Option<Vec<u8>> {
        let mut pending = self.pending.lock().expect("lock");
        match pending.as_ref() {
            Some((armed, _)) if armed == key => pending.take().map(|(_, bytes)| bytes),
            _ => None,
        }
    }
}

impl DomainPort for InterleavingStore {}

#[async_trait]
impl HealthCheckable for InterleavingStore {
    async fn health_check(&self) -> HealthCheckResult {
        self.inner.health_check().await
    }
}

#[async_trait]
impl LedgerStore for InterleavingStore {
    async fn get(&self, key: &str) -> Result<Option<StoredValue>, PortError> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<Version, PortError> {
        self.inner.put(key, value).await
    }

    async fn put_if_version(
        &self,
        key: &str,
        value: Vec<u8>,
        expected: Option<Version>,
    ) -> Result<Version, PortError> {
        if let Some(competing) = self.take_pending(key) {
            self.inner.put(key, competing).await?;
        }
        self.inner.put_if_version(key, value, expected).await
    }
}

/// A store whose every call fails as unavailable
#[derive(Debug, Default)]
pub struct UnavailableStore;

impl UnavailableStore {
    fn error() -> PortError {
        PortError::ServiceUnavailable {
            service: "ledger-store".to_string(),
        }
    }
}

impl DomainPort for UnavailableStore {}

#[async_trait]
impl HealthCheckable for UnavailableStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::unhealthy("unavailable-store", "store is down")
    }
}

#[async_trait]
impl LedgerStore for UnavailableStore {
    async fn get(&self, _key: &str) -> Result<Option<StoredValue>, PortError> {
        Err(Self::error())
    }

    async fn put(&self, _key: &str, _value: Vec<u8>) -> Result<Version, PortError> {
        Err(Self::error())
    }

    async fn put_if_version(
        &self,
        _key: &str,
        _value: Vec<u8>,
        _expected: Option<Version>,
    ) -> Result<Version, PortError> {
        Err(Self::error())
    }
}
