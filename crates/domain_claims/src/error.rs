//! Claims domain errors

use thiserror::Error;

use core_kernel::{CoreError, ErrorKind, PortError};

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    /// The account has not purchased the policy
    #[error("Policy {policy} not bought by {account}")]
    PolicyNotOwned { account: String, policy: String },

    /// A claim is already recorded for the policy
    #[error("Already claimed for policy {0}")]
    AlreadyClaimed(String),

    #[error("Invalid policy state transition from {from} to {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ClaimError {
    /// Returns the caller-visible kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClaimError::PolicyNotOwned { .. } => ErrorKind::PolicyNotOwned,
            ClaimError::AlreadyClaimed(_) => ErrorKind::AlreadyClaimed,
            ClaimError::InvalidStateTransition { .. } => ErrorKind::InvalidArgumentValue,
            ClaimError::Core(err) => err.kind(),
        }
    }
}

impl From<PortError> for ClaimError {
    fn from(err: PortError) -> Self {
        ClaimError::Core(err.into())
    }
}
