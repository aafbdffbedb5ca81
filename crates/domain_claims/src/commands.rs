//! Claim commands

use core_kernel::{AccountId, ArgReader, CoreError, PolicyNumber, StorageKey};

use crate::claim::ClaimInsurance;

/// File a claim against a purchased policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileClaim {
    pub account_id: AccountId,
    /// Policy number as given; it must also parse as an integer
    pub policy: PolicyNumber,
    pub policy_number: i64,
    pub claim_type: String,
    pub document_verified: bool,
    pub amount: i64,
}

impl FileClaim {
    pub const ARGS: &'static [&'static str] =
        &["AccID", "PolicyNumber", "Type", "DocVerified", "Amount"];

    /// Parses `[accountId, policyNumber, type, docVerified, amount]`
    pub fn from_args(args: &[String]) -> Result<Self, CoreError> {
        let reader = ArgReader::new(args, Self::ARGS)?;
        let policy = PolicyNumber::parse(reader.text(1)?)?;
        Ok(Self {
            account_id: AccountId::parse(reader.text(0)?)?,
            policy_number: policy.numeric()?,
            policy,
            claim_type: reader.lowercase(2)?,
            document_verified: reader.boolean(3)?,
            amount: reader.int(4)?,
        })
    }

    /// Key of the claim slot for this policy
    pub fn claim_key(&self) -> StorageKey {
        StorageKey::claim(&self.policy)
    }

    /// Builds the claim record this command writes
    pub fn to_claim(&self) -> ClaimInsurance {
        ClaimInsurance {
            account_id: self.account_id.to_string(),
            policy_number: self.policy_number,
            claim_type: self.claim_type.clone(),
            document_verified: self.document_verified,
            amount: self.amount,
        }
    }
}
