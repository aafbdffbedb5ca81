//! Storage key scheme
//!
//! Every record kind lives under its own prefix so that records of
//! different kinds can never collide, even when their natural identifiers
//! are equal (an account named `1001`, the claim on policy `1001`, and the
//! premium payment for policy `1001` occupy three distinct keys).

use std::fmt;

use crate::identifiers::{AccountId, PolicyNumber};

/// Prefix for account records
pub const ACCOUNT_PREFIX: &str = "acct:";
/// Prefix for claim records
pub const CLAIM_PREFIX: &str = "claim:";
/// Prefix for premium payment records
pub const PAYMENT_PREFIX: &str = "payment:";
/// Bare key of the reference account used by the sentinel balance lookup
pub const SENTINEL_ACCOUNT_KEY: &str = "account";

/// The kinds of record the ledger stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Account,
    PremiumPayment,
    Claim,
}

impl RecordKind {
    /// Returns the key prefix owned by this record kind
    pub fn prefix(&self) -> &'static str {
        match self {
            RecordKind::Account => ACCOUNT_PREFIX,
            RecordKind::PremiumPayment => PAYMENT_PREFIX,
            RecordKind::Claim => CLAIM_PREFIX,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Account => "account",
            RecordKind::PremiumPayment => "premium payment",
            RecordKind::Claim => "claim",
        }
    }
}

/// A fully-qualified key in the ledger store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorageKey(String);

impl StorageKey {
    /// Key of the account record for `id`
    pub fn account(id: &AccountId) -> Self {
        Self(format!("{}{}", ACCOUNT_PREFIX, id))
    }

    /// Key of the claim record for `policy`, using the policy number as given
    pub fn claim(policy: &PolicyNumber) -> Self {
        Self(format!("{}{}", CLAIM_PREFIX, policy))
    }

    /// Key of the premium payment record for a numeric policy number
    pub fn payment(policy_number: i64) -> Self {
        Self(format!("{}{}", PAYMENT_PREFIX, policy_number))
    }

    /// The sentinel reference account key
    pub fn sentinel_account() -> Self {
        Self(SENTINEL_ACCOUNT_KEY.to_string())
    }

    /// A caller-supplied key used verbatim
    pub fn raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the record kind whose prefix this key carries, if any
    pub fn kind(&self) -> Option<RecordKind> {
        [RecordKind::Account, RecordKind::PremiumPayment, RecordKind::Claim]
            .into_iter()
            .find(|kind| self.0.starts_with(kind.prefix()))
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
