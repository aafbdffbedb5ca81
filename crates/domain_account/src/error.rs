//! Account domain errors

use thiserror::Error;

use core_kernel::{CoreError, ErrorKind, PortError};

/// Errors that can occur in the account domain
#[derive(Debug, Error)]
pub enum AccountError {
    /// A decodable account already exists under the id
    #[error("Can't reinitialize existing user {0}")]
    AlreadyExists(String),

    /// The policy is already on the account
    #[error("Policy {policy} already bought by {account}")]
    AlreadyPurchased { account: String, policy: String },

    /// Adding to the balance would overflow
    #[error("Balance overflow for account {0}")]
    BalanceOverflow(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AccountError {
    /// Returns the caller-visible kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            AccountError::AlreadyPurchased { .. } => ErrorKind::AlreadyPurchased,
            AccountError::BalanceOverflow(_) => ErrorKind::InvalidArgumentValue,
            AccountError::Core(err) => err.kind(),
        }
    }
}

impl From<PortError> for AccountError {
    fn from(err: PortError) -> Self {
        AccountError::Core(err.into())
    }
}
