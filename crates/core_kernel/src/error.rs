//! Core error types used across the system

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::codec::DecodeError;
use crate::ports::PortError;

/// The error kinds a caller can observe
///
/// Every error type in the workspace maps onto exactly one kind, which is
/// what the dispatch layer reports in its structured error payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidArgumentCount,
    InvalidArgumentValue,
    NotFound,
    AlreadyExists,
    AlreadyPurchased,
    PolicyNotOwned,
    AlreadyClaimed,
    InsufficientFunds,
    DecodeError,
    /// A conditional write observed a newer version than the one read
    ConcurrentModification,
    /// The ledger store adapter failed
    StoreFailure,
    /// The dispatch layer does not know the requested function
    UnknownFunction,
}

impl ErrorKind {
    /// Returns the snake_case name used in error payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgumentCount => "invalid_argument_count",
            ErrorKind::InvalidArgumentValue => "invalid_argument_value",
            ErrorKind::NotFound => "not_found",
            ErrorKind::AlreadyExists => "already_exists",
            ErrorKind::AlreadyPurchased => "already_purchased",
            ErrorKind::PolicyNotOwned => "policy_not_owned",
            ErrorKind::AlreadyClaimed => "already_claimed",
            ErrorKind::InsufficientFunds => "insufficient_funds",
            ErrorKind::DecodeError => "decode_error",
            ErrorKind::ConcurrentModification => "concurrent_modification",
            ErrorKind::StoreFailure => "store_failure",
            ErrorKind::UnknownFunction => "unknown_function",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Incorrect number of arguments. Expecting {expected}, got {actual}")]
    InvalidArgumentCount { expected: usize, actual: usize },

    #[error("Invalid argument {name}: {reason}")]
    InvalidArgumentValue { name: String, reason: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Undecodable record at {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: DecodeError,
    },

    #[error("Failed to encode {kind} record: {source}")]
    Encode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Ledger store error: {0}")]
    Store(#[from] PortError),
}

impl CoreError {
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidArgumentValue {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        CoreError::NotFound(message.into())
    }

    pub fn decode(key: impl Into<String>, source: DecodeError) -> Self {
        CoreError::Decode {
            key: key.into(),
            source,
        }
    }

    /// Returns the caller-visible kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::InvalidArgumentCount { .. } => ErrorKind::InvalidArgumentCount,
            CoreError::InvalidArgumentValue { .. } => ErrorKind::InvalidArgumentValue,
            CoreError::NotFound(_) => ErrorKind::NotFound,
            CoreError::Decode { .. } | CoreError::Encode { .. } => ErrorKind::DecodeError,
            CoreError::Store(PortError::Conflict { .. }) => ErrorKind::ConcurrentModification,
            CoreError::Store(_) => ErrorKind::StoreFailure,
        }
    }
}
