//! Payment processor

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, warn};

use core_kernel::{
    encode, read_record, AccountId, CoreError, LedgerStore, ReadOutcome, Record, StorageKey,
};
use domain_account::Account;

use crate::commands::InitiatePayment;
use crate::error::BillingError;

/// Which account record supplies the balance for a payment check
///
/// The two strategies are mutually exclusive; a processor uses exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceLookup {
    /// Read the single reference account stored under the bare `account` key
    #[default]
    Sentinel,
    /// Read the account whose id is the decimal policy number
    PolicyKeyed,
}

impl BalanceLookup {
    /// Key of the reference account for `policy_number`
    ///
    /// # Arguments
    ///
    /// * `policy_number` - Policy the payment is for; only used by `PolicyKeyed`
    ///
    /// # Returns
    ///
    /// The bare sentinel key, or the account key named by the decimal policy number
    pub fn reference_key(&self, policy_number: i64) -> Result<StorageKey, CoreError> {
        match self {
            BalanceLookup::Sentinel => Ok(StorageKey::sentinel_account()),
            BalanceLookup::PolicyKeyed => {
                let id = AccountId::parse(&policy_number.to_string())?;
                Ok(StorageKey::account(&id))
            }
        }
    }
}

/// Service for premium payments
pub struct PaymentProcessor {
    store: Arc<dyn LedgerStore>,
    balance_lookup: BalanceLookup,
}

impl PaymentProcessor {
    /// Creates a processor that checks balances with `balance_lookup`
    pub fn new(store: Arc<dyn LedgerStore>, balance_lookup: BalanceLookup) -> Self {
        Self {
            store,
            balance_lookup,
        }
    }

    pub fn balance_lookup(&self) -> BalanceLookup {
        self.balance_lookup
    }

    /// Checks the reference balance and records the payment
    ///
    /// A missing or undecodable reference account counts as a zero balance.
    /// The payment overwrites any earlier payment for the same policy number.
    /// No balance is debited.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientFunds` if the balance is below the amount; nothing
    /// is written in that case
    pub async fn initiate_payment(&self, command: InitiatePayment) -> Result<(), BillingError> {
        let reference_key = self.balance_lookup.reference_key(command.policy_number)?;

        let balance = match read_record::<Account>(self.store.as_ref(), &reference_key).await? {
            ReadOutcome::Valid { record, .. } => record.balance,
            ReadOutcome::Absent => {
                debug!(key = %reference_key, "No reference account, using zero balance");
                0
            }
            ReadOutcome::Corrupt { error, .. } => {
                warn!(key = %reference_key, error = %error, "Reference account undecodable, using zero balance");
                0
            }
        };

        if balance < command.amount {
            warn!(
                policy_number = command.policy_number,
                balance,
                amount = command.amount,
                "Not enough balance, transaction cancelled"
            );
            return Err(BillingError::InsufficientFunds {
                policy_number: command.policy_number,
                balance,
                amount: command.amount,
            });
        }

        let payment = command.into_payment();
        let key = payment.storage_key();
        self.store.put(key.as_str(), encode(&payment)?).await?;

        info!(
            policy_number = payment.policy_number,
            amount = payment.amount,
            key = %key,
            "Recorded premium payment"
        );
        Ok(())
    }

    /// Returns the raw stored payment record for a policy number
    ///
    /// # Arguments
    ///
    /// * `policy_number` - Decimal policy number the payment was made for
    ///
    /// # Returns
    ///
    /// The stored bytes, unchanged
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no payment has been recorded
    pub async fn get_payment(&self, policy_number: i64) -> Result<Vec<u8>, BillingError> {
        let key = StorageKey::payment(policy_number);
        let stored = self.store.get(key.as_str()).await?.ok_or_else(|| {
            CoreError::not_found(format!("No payment found for policy {}", policy_number))
        })?;
        Ok(stored.bytes)
    }
}
