//! Claim record and per-policy claim state

use serde::{Deserialize, Serialize};

use core_kernel::{PolicyNumber, Record, RecordKind, StorageKey};

use crate::error::ClaimError;

/// An insurance claim filed against a purchased policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimInsurance {
    /// Lowercased claimant account id
    #[serde(rename = "accountID")]
    pub account_id: String,
    /// Claimed policy number
    #[serde(rename = "policynumber")]
    pub policy_number: i64,
    /// Lowercased claim type
    #[serde(rename = "type")]
    pub claim_type: String,
    /// Whether supporting documents were verified
    #[serde(rename = "docverified")]
    pub document_verified: bool,
    /// Claimed amount
    pub amount: i64,
}

impl Record for ClaimInsurance {
    const KIND: RecordKind = RecordKind::Claim;

    /// Key in canonical decimal form
    ///
    /// Filing uses the policy argument exactly as given, which only differs
    /// from this for non-canonical spellings such as `"01001"`.
    fn storage_key(&self) -> StorageKey {
        StorageKey::claim(&PolicyNumber::from_number(self.policy_number))
    }
}

/// Claim state of one policy number from one account's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyClaimState {
    /// The account has not purchased the policy
    NoPolicy,
    /// Purchased and not yet claimed
    Purchased,
    /// A claim is recorded
    Claimed,
}

impl PolicyClaimState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyClaimState::NoPolicy => "no_policy",
            PolicyClaimState::Purchased => "purchased",
            PolicyClaimState::Claimed => "claimed",
        }
    }

    /// Checks if a transition to the target state is valid
    pub fn can_transition_to(&self, target: PolicyClaimState) -> bool {
        use PolicyClaimState::*;
        matches!((self, target), (Purchased, Claimed))
    }

    /// Moves to `target`
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` if the move is not allowed
    pub fn transition_to(self, target: PolicyClaimState) -> Result<Self, ClaimError> {
        if !self.can_transition_to(target) {
            return Err(ClaimError::InvalidStateTransition {
                from: self.as_str().to_string(),
                to: target.as_str().to_string(),
            });
        }
        Ok(target)
    }

    /// Moves to `Claimed`, naming why the claim is refused
    ///
    /// # Errors
    ///
    /// - `PolicyNotOwned` from `NoPolicy`
    /// - `AlreadyClaimed` from `Claimed`
    pub fn file_claim(self, account: &str, policy: &str) -> Result<Self, ClaimError> {
        match self {
            PolicyClaimState::NoPolicy => Err(ClaimError::PolicyNotOwned {
                account: account.to_string(),
                policy: policy.to_string(),
            }),
            PolicyClaimState::Claimed => Err(ClaimError::AlreadyClaimed(policy.to_string())),
            PolicyClaimState::Purchased => self.transition_to(PolicyClaimState::Claimed),
        }
    }
}
