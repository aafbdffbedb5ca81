//! Custom Test Assertions
//!
//! Assertion helpers that report the offending error kind or stored bytes
//! instead of a bare `assert!` failure.

use std::fmt::Debug;

use core_kernel::{decode, CoreError, ErrorKind, LedgerStore, Record};
use domain_account::AccountError;
use domain_billing::BillingError;
use domain_claims::ClaimError;

/// Errors that expose a caller-visible kind
pub trait HasErrorKind: Debug {
    fn error_kind(&self) -> ErrorKind;
}

impl HasErrorKind for CoreError {
    fn error_kind(&self) -> ErrorKind {
        self.kind()
    }
}

impl HasErrorKind for AccountError {
    fn error_kind(&self) -> ErrorKind {
        self.kind()
    }
}

impl HasErrorKind for BillingError {
    fn error_kind(&self) -> ErrorKind {
        self.kind()
    }
}

impl HasErrorKind for ClaimError {
    fn error_kind(&self) -> ErrorKind {
        self.kind()
    }
}

/// Asserts that `result` failed with `expected`
///
/// # Panics
///
/// Panics if the result is `Ok` or fails with another kind
pub fn assert_error_kind<T: Debug, E: HasErrorKind>(result: Result<T, E>, expected: ErrorKind) {
    match result {
        Ok(value) => panic!("Expected {} error, got Ok({:?})", expected, value),
        Err(err) => assert_eq!(
            err.error_kind(),
            expected,
            "Expected {} error, got {:?}",
            expected,
            err
        ),
    }
}

/// Reads and decodes the record stored under `key`
///
/// # Panics
///
/// Panics if the key is absent or its bytes do not decode as `R`
pub async fn stored_record<R: Record>(store: &dyn LedgerStore, key: &str) -> R {
    let stored = store
        .get(key)
        .await
        .expect("store read succeeds")
        .unwrap_or_else(|| panic!("Expected a record under {}", key));
    decode(&stored.bytes).unwrap_or_else(|e| {
        panic!(
            "Record under {} does not decode: {} ({:?})",
            key,
            e,
            String::from_utf8_lossy(&stored.bytes)
        )
    })
}

/// Asserts that the record under `key` decodes to `expected`
pub async fn assert_stored_record<R>(store: &dyn LedgerStore, key: &str, expected: &R)
where
    R: Record + PartialEq + Debug,
{
    let actual: R = stored_record(store, key).await;
    assert_eq!(&actual, expected, "Unexpected record under {}", key);
}

/// Asserts that nothing is stored under `key`
pub async fn assert_absent(store: &dyn LedgerStore, key: &str) {
    let stored = store.get(key).await.expect("store read succeeds");
    assert!(
        stored.is_none(),
        "Expected {} to be absent, found {:?}",
        key,
        stored.map(|s| String::from_utf8_lossy(&s.bytes).into_owned())
    );
}

/// Asserts the raw bytes under `key`
pub async fn assert_stored_bytes(store: &dyn LedgerStore, key: &str, expected: &[u8]) {
    let stored = store
        .get(key)
        .await
        .expect("store read succeeds")
        .unwrap_or_else(|| panic!("Expected bytes under {}", key));
    assert_eq!(
        stored.bytes,
        expected,
        "Unexpected bytes under {}: {:?}",
        key,
        String::from_utf8_lossy(&stored.bytes)
    );
}
