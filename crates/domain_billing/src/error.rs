//! Billing domain errors

use thiserror::Error;

use core_kernel::{CoreError, ErrorKind, PortError};

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum BillingError {
    /// The reference balance does not cover the payment
    #[error("Insufficient funds for policy {policy_number}: balance {balance}, amount {amount}")]
    InsufficientFunds {
        policy_number: i64,
        balance: i64,
        amount: i64,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl BillingError {
    /// Returns the caller-visible kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BillingError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            BillingError::Core(err) => err.kind(),
        }
    }
}

impl From<PortError> for BillingError {
    fn from(err: PortError) -> Self {
        BillingError::Core(err.into())
    }
}
