//! Property-Based Test Generators
//!
//! Proptest strategies for ledger arguments and records.

use proptest::prelude::*;

use core_kernel::AccountId;
use domain_account::Account;
use domain_billing::PremiumPayment;
use domain_claims::ClaimInsurance;

/// Lowercase account ids
pub fn account_id_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}"
}

/// Account ids in mixed case, as a caller might send them
pub fn raw_account_id_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,15}"
}

/// Decimal policy numbers in canonical form
pub fn policy_number_strategy() -> impl Strategy<Value = i64> {
    1i64..10_000_000
}

/// Non-negative amounts small enough to sum without overflow
pub fn amount_strategy() -> impl Strategy<Value = i64> {
    0i64..1_000_000
}

/// YYYYMMDD-style dates
pub fn date_strategy() -> impl Strategy<Value = i64> {
    (1900i64..2100, 1i64..=12, 1i64..=28).prop_map(|(y, m, d)| y * 10_000 + m * 100 + d)
}

/// Every spelling accepted as a boolean, with its value
pub fn bool_spelling_strategy() -> impl Strategy<Value = (&'static str, bool)> {
    prop_oneof![
        Just(("1", true)),
        Just(("t", true)),
        Just(("T", true)),
        Just(("TRUE", true)),
        Just(("true", true)),
        Just(("True", true)),
        Just(("0", false)),
        Just(("f", false)),
        Just(("F", false)),
        Just(("FALSE", false)),
        Just(("false", false)),
        Just(("False", false)),
    ]
}

fn email_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}@[a-z]{1,8}\\.com"
}

prop_compose! {
    pub fn account_strategy()(
        id in account_id_strategy(),
        date_of_birth in date_strategy(),
        email in email_strategy(),
        balance in amount_strategy(),
        policies in proptest::collection::btree_set(policy_number_strategy(), 0..5),
    ) -> Account {
        Account {
            id: AccountId::parse(&id).expect("generated id is non-empty"),
            date_of_birth,
            email,
            balance,
            policies: policies.into_iter().map(|p| p.to_string()).collect(),
        }
    }
}

prop_compose! {
    pub fn payment_strategy()(
        policy_number in policy_number_strategy(),
        date_of_birth in date_strategy(),
        email in email_strategy(),
        contact_number in "[0-9]{3}-[0-9]{4}",
        name in "[a-z]{1,10}( [a-z]{1,10})?",
        due_date in date_strategy(),
        amount in amount_strategy(),
    ) -> PremiumPayment {
        PremiumPayment {
            policy_number,
            date_of_birth,
            email,
            contact_number,
            name,
            due_date,
            amount,
        }
    }
}

prop_compose! {
    pub fn claim_strategy()(
        account_id in account_id_strategy(),
        policy_number in policy_number_strategy(),
        claim_type in "[a-z]{3,10}",
        document_verified in any::<bool>(),
        amount in amount_strategy(),
    ) -> ClaimInsurance {
        ClaimInsurance {
            account_id,
            policy_number,
            claim_type,
            document_verified,
            amount,
        }
    }
}
