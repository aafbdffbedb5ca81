//! Strongly-typed identifiers for ledger entities
//!
//! Account ids and policy numbers travel as plain strings on the wire and in
//! storage keys. Newtype wrappers keep them from being mixed up with emails,
//! names, and the other free-text arguments of an operation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the human-readable label used in error messages
            pub fn label() -> &'static str {
                $label
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }
    };
}

define_id!(AccountId, "UserName");
define_id!(PolicyNumber, "PolicyNumber");

impl AccountId {
    /// Parses a user identifier, normalizing it to lowercase
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgumentValue` if the identifier is empty
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.is_empty() {
            return Err(CoreError::invalid_argument(Self::label(), "must be non-empty"));
        }
        Ok(Self(raw.to_lowercase()))
    }
}

impl PolicyNumber {
    /// Accepts a policy number exactly as supplied
    ///
    /// Policy numbers are compared as strings against an account's purchased
    /// policies, so no normalization happens here. Use [`PolicyNumber::numeric`]
    /// where the operation also requires a decimal integer.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgumentValue` if the policy number is empty
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.is_empty() {
            return Err(CoreError::invalid_argument(Self::label(), "must be non-empty"));
        }
        Ok(Self(raw.to_string()))
    }

    /// Canonical decimal form of a numeric policy number
    pub fn from_number(number: i64) -> Self {
        Self(number.to_string())
    }

    /// Parses the policy number as a decimal integer
    pub fn numeric(&self) -> Result<i64, CoreError> {
        self.0
            .parse::<i64>()
            .map_err(|_| CoreError::invalid_argument(Self::label(), "must be a numeric string"))
    }
}
