//! Record codec
//!
//! Records are stored as compact JSON with a fixed field order, so decoding
//! and re-encoding bytes that this codec produced yields the same bytes.
//!
//! Reading a record distinguishes three states: the key was never written,
//! the key holds a well-formed record, or the key holds bytes that do not
//! decode. Each operation decides on its own which of those states leave the
//! slot free for a new write.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::error::CoreError;
use crate::keys::{RecordKind, StorageKey};
use crate::store::{LedgerStore, Version};

/// Failure to turn stored bytes back into a record
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The key exists but holds no data
    #[error("no data")]
    Empty,

    /// The data ends before the record is complete
    #[error("unexpected end of record: {0}")]
    Truncated(#[source] serde_json::Error),

    /// The data is not a record of the expected kind
    #[error("malformed record: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// A value that is stored in the ledger under a prefixed key
pub trait Record: Serialize + DeserializeOwned {
    const KIND: RecordKind;

    /// The key this record is written under
    fn storage_key(&self) -> StorageKey;
}

/// Encodes a record into its stored form
pub fn encode<R: Record>(record: &R) -> Result<Vec<u8>, CoreError> {
    serde_json::to_vec(record).map_err(|source| CoreError::Encode {
        kind: R::KIND.name(),
        source,
    })
}

/// Decodes a record from its stored form
pub fn decode<R: Record>(bytes: &[u8]) -> Result<R, DecodeError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(DecodeError::Empty);
    }
    serde_json::from_slice(bytes).map_err(|err| {
        if err.is_eof() {
            DecodeError::Truncated(err)
        } else {
            DecodeError::Malformed(err)
        }
    })
}

/// Result of reading and decoding a record
#[derive(Debug)]
pub enum ReadOutcome<R> {
    /// Nothing stored under the key
    Absent,
    /// A well-formed record
    Valid { record: R, version: Version },
    /// Bytes are stored but do not decode
    Corrupt { version: Version, error: DecodeError },
}

impl<R> ReadOutcome<R> {
    pub fn state_name(&self) -> &'static str {
        match self {
            ReadOutcome::Absent => "absent",
            ReadOutcome::Valid { .. } => "valid",
            ReadOutcome::Corrupt { .. } => "corrupt",
        }
    }
}

/// Reads the record stored under `key` and classifies the result
///
/// # Errors
///
/// Only store failures are errors; undecodable bytes are reported as
/// `ReadOutcome::Corrupt`.
pub async fn read_record<R: Record>(
    store: &dyn LedgerStore,
    key: &StorageKey,
) -> Result<ReadOutcome<R>, CoreError> {
    let outcome = match store.get(key.as_str()).await? {
        None => ReadOutcome::Absent,
        Some(stored) => match decode::<R>(&stored.bytes) {
            Ok(record) => ReadOutcome::Valid {
                record,
                version: stored.version,
            },
            Err(error) => ReadOutcome::Corrupt {
                version: stored.version,
                error,
            },
        },
    };

    debug!(key = %key, kind = R::KIND.name(), state = outcome.state_name(), "Read record");
    Ok(outcome)
}
