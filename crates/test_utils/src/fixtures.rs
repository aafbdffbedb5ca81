//! Pre-built Test Fixtures
//!
//! The canonical walkthrough: account `alice` born `19900101` with email
//! `a@x.com`, topped up to 500, holding policy `1001`.

use std::sync::Arc;

use core_kernel::{encode, AccountId, InMemoryLedgerStore, LedgerStore, Record};
use domain_account::{Account, AccountManager, AddBalance, BuyPolicy, CreateAccount};
use domain_billing::PremiumPayment;
use domain_claims::ClaimInsurance;

pub const ALICE: &str = "alice";
pub const ALICE_DOB: &str = "19900101";
pub const ALICE_EMAIL: &str = "a@x.com";
pub const ALICE_BALANCE: i64 = 500;
pub const ALICE_POLICY: &str = "1001";

/// Converts string literals into an owned argument vector
pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Argument vectors for each ledger operation
pub struct ArgFixtures;

impl ArgFixtures {
    pub fn create_account(id: &str) -> Vec<String> {
        args(&[id, ALICE_DOB, ALICE_EMAIL, "0"])
    }

    pub fn add_balance(id: &str, amount: i64) -> Vec<String> {
        vec![id.to_string(), amount.to_string()]
    }

    pub fn buy_policy(id: &str, policy: &str) -> Vec<String> {
        args(&[id, policy])
    }

    pub fn initiate_payment(policy: &str, amount: i64) -> Vec<String> {
        let amount = amount.to_string();
        args(&[policy, ALICE_DOB, ALICE_EMAIL, "555-0100", "Alice", "20250101", &amount])
    }

    pub fn file_claim(id: &str, policy: &str) -> Vec<String> {
        args(&[id, policy, "health", "true", "200"])
    }
}

/// Ready-made records
pub struct RecordFixtures;

impl RecordFixtures {
    /// An account with the given balance and policies
    pub fn account(id: &str, balance: i64, policies: &[&str]) -> Account {
        Account {
            id: AccountId::parse(id).expect("valid account id"),
            date_of_birth: 19900101,
            email: ALICE_EMAIL.to_string(),
            balance,
            policies: policies.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn payment(policy_number: i64, amount: i64) -> PremiumPayment {
        PremiumPayment {
            policy_number,
            date_of_birth: 19900101,
            email: ALICE_EMAIL.to_string(),
            contact_number: "555-0100".to_string(),
            name: ALICE.to_string(),
            due_date: 20250101,
            amount,
        }
    }

    pub fn claim(account: &str, policy_number: i64) -> ClaimInsurance {
        ClaimInsurance {
            account_id: account.to_string(),
            policy_number,
            claim_type: "health".to_string(),
            document_verified: true,
            amount: 200,
        }
    }
}

/// Writes `record` under its own storage key
pub async fn put_record<R: Record>(store: &dyn LedgerStore, record: &R) {
    let key = record.storage_key();
    store
        .put(key.as_str(), encode(record).expect("record encodes"))
        .await
        .expect("fixture write succeeds");
}

/// A store holding the canonical `alice` account, built through the manager
pub async fn seeded_store() -> Arc<InMemoryLedgerStore> {
    let store = Arc::new(InMemoryLedgerStore::new());
    let manager = AccountManager::new(store.clone());

    manager
        .create_account(CreateAccount::from_args(&ArgFixtures::create_account(ALICE)).expect("valid args"))
        .await
        .expect("create alice");
    manager
        .add_balance(AddBalance::from_args(&ArgFixtures::add_balance(ALICE, ALICE_BALANCE)).expect("valid args"))
        .await
        .expect("fund alice");
    manager
        .buy_policy(BuyPolicy::from_args(&ArgFixtures::buy_policy(ALICE, ALICE_POLICY)).expect("valid args"))
        .await
        .expect("alice buys policy");

    store
}
