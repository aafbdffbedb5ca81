//! Account commands
//!
//! Each command is parsed from the positional arguments of its operation.
//! Parsing is complete before the manager touches the store.

use core_kernel::{AccountId, ArgReader, CoreError, PolicyNumber};

/// Create a new account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccount {
    pub id: AccountId,
    pub date_of_birth: i64,
    pub email: String,
    /// Accepted for interface compatibility and never applied
    ///
    /// New accounts always start with a zero balance. The argument must
    /// still be non-empty.
    pub initial_balance: String,
}

impl CreateAccount {
    pub const ARGS: &'static [&'static str] = &["UserName", "DOB", "Email", "Balance"];

    /// Parses `[username, dob, email, initialBalance]`
    pub fn from_args(args: &[String]) -> Result<Self, CoreError> {
        let reader = ArgReader::new(args, Self::ARGS)?;
        Ok(Self {
            id: AccountId::parse(reader.text(0)?)?,
            date_of_birth: reader.int(1)?,
            email: reader.lowercase(2)?,
            initial_balance: reader.text(3)?.to_string(),
        })
    }
}

/// Add funds to an existing account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBalance {
    pub id: AccountId,
    pub amount: i64,
}

impl AddBalance {
    pub const ARGS: &'static [&'static str] = &["UserName", "Balance"];

    /// Parses `[username, amount]`; the amount must not be negative
    pub fn from_args(args: &[String]) -> Result<Self, CoreError> {
        let reader = ArgReader::new(args, Self::ARGS)?;
        Ok(Self {
            id: AccountId::parse(reader.text(0)?)?,
            amount: reader.non_negative(1)?,
        })
    }
}

/// Record a policy purchase on an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyPolicy {
    pub id: AccountId,
    pub policy: PolicyNumber,
}

impl BuyPolicy {
    pub const ARGS: &'static [&'static str] = &["AccID", "PolicyNumber"];

    /// Parses `[accountId, policyNumber]`; the policy number is kept as given
    pub fn from_args(args: &[String]) -> Result<Self, CoreError> {
        let reader = ArgReader::new(args, Self::ARGS)?;
        Ok(Self {
            id: AccountId::parse(reader.text(0)?)?,
            policy: PolicyNumber::parse(reader.text(1)?)?,
        })
    }
}
