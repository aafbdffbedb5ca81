//! Claim processor
//!
//! Filing reads the claimant's account, checks ownership, then claims the
//! write-once slot for the policy with a conditional write. A slot holding
//! undecodable bytes counts as free.

use std::sync::Arc;

use tracing::{info, warn};

use core_kernel::{encode, read_record, CoreError, LedgerStore, PolicyNumber, ReadOutcome, StorageKey};
use domain_account::require_account;

use crate::claim::{ClaimInsurance, PolicyClaimState};
use crate::commands::FileClaim;
use crate::error::ClaimError;

/// Service for insurance claims
pub struct ClaimProcessor {
    store: Arc<dyn LedgerStore>,
}

impl ClaimProcessor {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Files a claim for a policy the account owns
    ///
    /// # Arguments
    ///
    /// * `command` - Parsed claim; the policy is matched exactly as given
    ///
    /// # Errors
    ///
    /// - `NotFound` / `DecodeError` if the account is missing or undecodable
    /// - `PolicyNotOwned` if the account has not bought the policy
    /// - `AlreadyClaimed` if a decodable claim is already recorded
    pub async fn file_claim(&self, command: FileClaim) -> Result<(), ClaimError> {
        let (account, _, _) = require_account(self.store.as_ref(), &command.account_id).await?;

        let account_id = account.id.as_str();
        let policy = command.policy.as_str();

        let owned = if account.owns_policy(&command.policy) {
            PolicyClaimState::Purchased
        } else {
            PolicyClaimState::NoPolicy
        };
        if let Err(err) = owned.file_claim(account_id, policy) {
            warn!(account_id, policy, "Policy not bought by account");
            return Err(err);
        }

        let key = command.claim_key();
        let (slot, expected) = match read_record::<ClaimInsurance>(self.store.as_ref(), &key).await? {
            ReadOutcome::Absent => (PolicyClaimState::Purchased, None),
            ReadOutcome::Valid { .. } => (PolicyClaimState::Claimed, None),
            ReadOutcome::Corrupt { version, error } => {
                warn!(key = %key, error = %error, "Existing claim record is undecodable, treating slot as free");
                (PolicyClaimState::Purchased, Some(version))
            }
        };
        if let Err(err) = slot.file_claim(account_id, policy) {
            warn!(policy, "Already claimed");
            return Err(err);
        }

        let claim = command.to_claim();
        self.store
            .put_if_version(key.as_str(), encode(&claim)?, expected)
            .await?;

        info!(
            account_id = %claim.account_id,
            policy = %command.policy,
            claim_type = %claim.claim_type,
            amount = claim.amount,
            key = %key,
            "Filed claim"
        );
        Ok(())
    }

    /// Returns the raw stored claim record for a policy
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no claim is stored for the policy
    pub async fn get_claim(&self, policy: &PolicyNumber) -> Result<Vec<u8>, ClaimError> {
        let key = StorageKey::claim(policy);
        let stored = self
            .store
            .get(key.as_str())
            .await?
            .ok_or_else(|| CoreError::not_found(format!("No claim found for policy {}", policy)))?;
        Ok(stored.bytes)
    }
}
