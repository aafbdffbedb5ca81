//! Account record
//!
//! An account holds a unit-less integer balance and the ordered list of
//! policy numbers it has purchased.

use serde::{Deserialize, Deserializer, Serialize};

use core_kernel::{AccountId, PolicyNumber, Record, RecordKind, StorageKey};

use crate::error::AccountError;

/// A user account
///
/// Fields missing from a stored record decode to their zero values, so only
/// bytes that are not a JSON object of the right shape count as corrupt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    /// Lowercased user identifier
    pub id: AccountId,
    /// Date of birth (UTC date encoding)
    #[serde(rename = "dob")]
    pub date_of_birth: i64,
    /// Lowercased email address
    pub email: String,
    /// Current balance, never negative
    pub balance: i64,
    /// Purchased policy numbers in purchase order, without duplicates
    #[serde(deserialize_with = "null_as_empty")]
    pub policies: Vec<String>,
}

impl Account {
    /// Creates a new account with a zero balance and no policies
    ///
    /// # Arguments
    ///
    /// * `id` - Lowercased user identifier
    /// * `date_of_birth` - Date of birth (UTC date encoding)
    /// * `email` - Email address, lowercased here
    pub fn new(id: AccountId, date_of_birth: i64, email: impl Into<String>) -> Self {
        Self {
            id,
            date_of_birth,
            email: email.into().to_lowercase(),
            balance: 0,
            policies: Vec::new(),
        }
    }

    /// Returns true if the account has purchased `policy`
    pub fn owns_policy(&self, policy: &PolicyNumber) -> bool {
        self.policies.iter().any(|p| p == policy.as_str())
    }

    /// Adds `amount` to the balance
    ///
    /// # Errors
    ///
    /// Returns `BalanceOverflow` if the new balance does not fit
    pub fn credit(&mut self, amount: i64) -> Result<(), AccountError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AccountError::BalanceOverflow(self.id.to_string()))?;
        Ok(())
    }

    /// Appends `policy` to the purchased policies
    ///
    /// # Errors
    ///
    /// Returns `AlreadyPurchased` if the policy is already on the account
    pub fn purchase_policy(&mut self, policy: PolicyNumber) -> Result<(), AccountError> {
        if self.owns_policy(&policy) {
            return Err(AccountError::AlreadyPurchased {
                account: self.id.to_string(),
                policy: policy.into(),
            });
        }
        self.policies.push(policy.into());
        Ok(())
    }
}

impl Record for Account {
    const KIND: RecordKind = RecordKind::Account;

    fn storage_key(&self) -> StorageKey {
        StorageKey::account(&self.id)
    }
}

// Ledgers written before the policies list was always materialized store
// `null` there.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{decode, encode};

    fn alice() -> Account {
        Account::new(AccountId::parse("alice").unwrap(), 19900101, "A@X.com")
    }

    #[test]
    fn test_new_account_starts_empty() {
        let account = alice();
        assert_eq!(account.balance, 0);
        assert!(account.policies.is_empty());
        assert_eq!(account.email, "a@x.com");
    }

    #[test]
    fn test_purchase_policy_rejects_duplicate() {
        let mut account = alice();
        account.purchase_policy(PolicyNumber::parse("1001").unwrap()).unwrap();

        let again = account.purchase_policy(PolicyNumber::parse("1001").unwrap());
        assert!(matches!(again, Err(AccountError::AlreadyPurchased { .. })));
        assert_eq!(account.policies, vec!["1001".to_string()]);
    }

    #[test]
    fn test_credit_overflow() {
        let mut account = alice();
        account.balance = i64::MAX;
        assert!(matches!(account.credit(1), Err(AccountError::BalanceOverflow(_))));
        assert_eq!(account.balance, i64::MAX);
    }

    #[test]
    fn test_encoding_field_tags() {
        let bytes = encode(&alice()).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"id":"alice","dob":19900101,"email":"a@x.com","balance":0,"policies":[]}"#
        );
    }

    #[test]
    fn test_decode_null_policies() {
        let account: Account =
            decode(br#"{"id":"bob","dob":1,"email":"b@x.com","balance":5,"policies":null}"#)
                .unwrap();
        assert!(account.policies.is_empty());

        let missing: Account =
            decode(br#"{"id":"bob","dob":1,"email":"b@x.com","balance":5}"#).unwrap();
        assert!(missing.policies.is_empty());
    }
}
