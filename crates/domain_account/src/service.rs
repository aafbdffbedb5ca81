//! Account manager
//!
//! Orchestrates account operations against the ledger store. Every mutation
//! is a read-modify-write that commits with a conditional write against the
//! version observed at read time, so a concurrent update to the same account
//! surfaces as `ConcurrentModification` rather than being lost.

use std::sync::Arc;

use tracing::{info, warn};

use core_kernel::{
    encode, read_record, AccountId, CoreError, LedgerStore, ReadOutcome, Record, StorageKey,
    Version,
};

use crate::account::Account;
use crate::commands::{AddBalance, BuyPolicy, CreateAccount};
use crate::error::AccountError;

/// Service for account operations
pub struct AccountManager {
    store: Arc<dyn LedgerStore>,
}

impl AccountManager {
    /// Creates a new account manager over `store`
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Creates an account with a zero balance
    ///
    /// An existing key whose bytes do not decode is not a real account and
    /// is overwritten.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if a decodable account is stored under the id
    pub async fn create_account(&self, command: CreateAccount) -> Result<(), AccountError> {
        let account = Account::new(command.id, command.date_of_birth, command.email);
        let key = account.storage_key();
        let bytes = encode(&account)?;

        let expected = match read_record::<Account>(self.store.as_ref(), &key).await? {
            ReadOutcome::Absent => None,
            ReadOutcome::Valid { record, .. } => {
                warn!(account_id = %record.id, "Account already exists");
                return Err(AccountError::AlreadyExists(account.id.to_string()));
            }
            ReadOutcome::Corrupt { version, error } => {
                warn!(
                    account_id = %account.id,
                    error = %error,
                    "Existing account record is undecodable, initializing account"
                );
                Some(version)
            }
        };

        self.store.put_if_version(key.as_str(), bytes, expected).await?;

        info!(account_id = %account.id, key = %key, "Created account");
        Ok(())
    }

    /// Adds a non-negative amount to an account's balance
    ///
    /// # Errors
    ///
    /// - `NotFound` if no account exists for the id
    /// - `DecodeError` if the stored account is undecodable
    pub async fn add_balance(&self, command: AddBalance) -> Result<(), AccountError> {
        let (mut account, version, key) =
            require_account(self.store.as_ref(), &command.id).await?;

        account.credit(command.amount)?;
        self.commit(&key, &account, version).await?;

        info!(
            account_id = %account.id,
            amount = command.amount,
            balance = account.balance,
            "Added balance"
        );
        Ok(())
    }

    /// Appends a policy number to an account's purchased policies
    ///
    /// # Errors
    ///
    /// - `NotFound` if no account exists for the id
    /// - `AlreadyPurchased` if the account already holds the policy
    pub async fn buy_policy(&self, command: BuyPolicy) -> Result<(), AccountError> {
        let (mut account, version, key) =
            require_account(self.store.as_ref(), &command.id).await?;

        if let Err(err) = account.purchase_policy(command.policy.clone()) {
            warn!(account_id = %account.id, policy = %command.policy, "Policy already bought");
            return Err(err);
        }
        self.commit(&key, &account, version).await?;

        info!(account_id = %account.id, policy = %command.policy, "Bought policy");
        Ok(())
    }

    /// Returns the raw stored account record for `id`
    ///
    /// # Returns
    ///
    /// The stored bytes, which need not decode
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing is stored under the account key
    pub async fn get_balance(&self, id: &AccountId) -> Result<Vec<u8>, AccountError> {
        let key = StorageKey::account(id);
        let stored = self
            .store
            .get(key.as_str())
            .await?
            .ok_or_else(|| CoreError::not_found(format!("No account found for ID --> {}", id)))?;
        Ok(stored.bytes)
    }

    // Writes back under the key that was read, whatever id the stored record carries.
    async fn commit(
        &self,
        key: &StorageKey,
        account: &Account,
        version: Version,
    ) -> Result<(), AccountError> {
        self.store
            .put_if_version(key.as_str(), encode(account)?, Some(version))
            .await?;
        Ok(())
    }
}

/// Loads the account for `id`, treating absence and corruption as errors
///
/// # Arguments
///
/// * `store` - Ledger store to read from
/// * `id` - Requested account id; the key is derived from it, not from the stored record
///
/// # Returns
///
/// The account, the version it was read at and the key it was read from
///
/// # Errors
///
/// - `NotFound` if no account exists for the id
/// - `DecodeError` if the stored bytes do not decode
pub async fn require_account(
    store: &dyn LedgerStore,
    id: &AccountId,
) -> Result<(Account, Version, StorageKey), CoreError> {
    let key = StorageKey::account(id);
    match read_record::<Account>(store, &key).await? {
        ReadOutcome::Valid { record, version } => Ok((record, version, key)),
        ReadOutcome::Absent => Err(CoreError::not_found(format!(
            "No account found for ID --> {}",
            id
        ))),
        ReadOutcome::Corrupt { error, .. } => Err(CoreError::decode(key.as_str(), error)),
    }
}
