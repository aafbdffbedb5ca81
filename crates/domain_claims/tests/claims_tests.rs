//! Comprehensive tests for domain_claims

use std::sync::Arc;

use proptest::prelude::*;

use core_kernel::{decode, AccountId, ErrorKind, InMemoryLedgerStore, LedgerStore, PolicyNumber};
use domain_account::{Account, AccountManager, AddBalance, BuyPolicy, CreateAccount};
use domain_claims::{ClaimError, ClaimInsurance, ClaimProcessor, FileClaim};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn claim_args(account: &str, policy: &str) -> Vec<String> {
    args(&[account, policy, "Health", "true", "200"])
}

struct Harness {
    store: Arc<InMemoryLedgerStore>,
    accounts: AccountManager,
    claims: ClaimProcessor,
}

impl Harness {
    fn new() -> Self {
        let store = Arc::new(InMemoryLedgerStore::new());
        Self {
            accounts: AccountManager::new(store.clone()),
            claims: ClaimProcessor::new(store.clone()),
            store,
        }
    }

    async fn account_with_policy(&self, id: &str, policy: &str) {
        self.accounts
            .create_account(CreateAccount::from_args(&args(&[id, "19900101", "a@x.com", "0"])).unwrap())
            .await
            .unwrap();
        self.accounts
            .buy_policy(BuyPolicy::from_args(&args(&[id, policy])).unwrap())
            .await
            .unwrap();
    }

    async fn file(&self, account: &str, policy: &str) -> Result<(), ClaimError> {
        self.claims.file_claim(FileClaim::from_args(&claim_args(account, policy)).unwrap()).await
    }
}

// ============================================================================
// Filing Tests
// ============================================================================

mod filing_tests {
    use super::*;

    #[tokio::test]
    async fn test_file_claim_records_claim() {
        let h = Harness::new();
        h.account_with_policy("alice", "1001").await;

        h.file("Alice", "1001").await.unwrap();

        let stored = h.store.get("claim:1001").await.unwrap().expect("claim stored");
        let claim: ClaimInsurance = decode(&stored.bytes).unwrap();
        assert_eq!(claim.account_id, "alice");
        assert_eq!(claim.policy_number, 1001);
        assert_eq!(claim.claim_type, "health");
        assert!(claim.document_verified);
        assert_eq!(claim.amount, 200);
    }

    #[tokio::test]
    async fn test_claim_is_write_once() {
        let h = Harness::new();
        h.account_with_policy("alice", "1001").await;
        h.file("alice", "1001").await.unwrap();

        let err = h.file("alice", "1001").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyClaimed);

        let stored = h.store.get("claim:1001").await.unwrap().unwrap();
        assert_eq!(stored.version, 1);

        let account: Account = decode(&h.store.get("acct:alice").await.unwrap().unwrap().bytes).unwrap();
        assert_eq!(account.policies, vec!["1001".to_string()]);
    }

    #[tokio::test]
    async fn test_unowned_policy_rejected() {
        let h = Harness::new();
        h.account_with_policy("alice", "1001").await;

        let err = h.file("alice", "2002").await.unwrap_err();
        assert!(matches!(err, ClaimError::PolicyNotOwned { .. }));
        assert!(h.store.get("claim:2002").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ownership_checked_before_claim_slot() {
        let h = Harness::new();
        h.account_with_policy("alice", "1001").await;
        h.account_with_policy("bob", "2002").await;
        h.file("alice", "1001").await.unwrap();

        let err = h.file("bob", "1001").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PolicyNotOwned);
    }

    #[tokio::test]
    async fn test_missing_account() {
        let h = Harness::new();
        let err = h.file("ghost", "1001").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_corrupt_account_is_fatal() {
        let h = Harness::new();
        h.store.put("acct:alice", b"garbage".to_vec()).await.unwrap();

        let err = h.file("alice", "1001").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecodeError);
    }

    #[tokio::test]
    async fn test_corrupt_claim_slot_is_free() {
        let h = Harness::new();
        h.account_with_policy("alice", "1001").await;
        h.store.put("claim:1001", b"{\"accountID\":".to_vec()).await.unwrap();

        h.file("alice", "1001").await.unwrap();

        let stored = h.store.get("claim:1001").await.unwrap().unwrap();
        assert_eq!(stored.version, 2);
        assert!(decode::<ClaimInsurance>(&stored.bytes).is_ok());
    }

    #[tokio::test]
    async fn test_partial_claim_record_occupies_slot() {
        let h = Harness::new();
        h.account_with_policy("alice", "1001").await;

        for partial in [&b"{}"[..], &br#"{"amount":1}"#[..]] {
            h.store.put("claim:1001", partial.to_vec()).await.unwrap();

            let err = h.file("alice", "1001").await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::AlreadyClaimed);
            assert_eq!(h.store.get("claim:1001").await.unwrap().unwrap().bytes, partial.to_vec());
        }
    }

    #[tokio::test]
    async fn test_partial_account_record_still_checks_ownership() {
        let h = Harness::new();
        h.store.put("acct:alice", br#"{"policies":["1001"]}"#.to_vec()).await.unwrap();

        h.file("alice", "1001").await.unwrap();
        let err = h.file("alice", "1002").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PolicyNotOwned);
    }

    #[tokio::test]
    async fn test_policy_string_compared_as_given() {
        let h = Harness::new();
        h.account_with_policy("alice", "01001").await;

        let err = h.file("alice", "1001").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PolicyNotOwned);

        h.file("alice", "01001").await.unwrap();
        assert!(h.store.get("claim:01001").await.unwrap().is_some());
    }
}

// ============================================================================
// Lookup Tests
// ============================================================================

mod lookup_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_claim() {
        let h = Harness::new();
        h.account_with_policy("alice", "1001").await;
        h.file("alice", "1001").await.unwrap();

        let bytes = h.claims.get_claim(&PolicyNumber::parse("1001").unwrap()).await.unwrap();
        assert_eq!(bytes, h.store.get("claim:1001").await.unwrap().unwrap().bytes);
    }

    #[tokio::test]
    async fn test_get_claim_missing() {
        let h = Harness::new();
        let err = h.claims.get_claim(&PolicyNumber::parse("1001").unwrap()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_claim_and_account_keys_isolated() {
        let h = Harness::new();
        h.account_with_policy("1001", "1001").await;
        h.file("1001", "1001").await.unwrap();

        assert_eq!(h.store.keys(), vec!["acct:1001".to_string(), "claim:1001".to_string()]);
    }
}

// ============================================================================
// Walkthrough
// ============================================================================

mod walkthrough_tests {
    use super::*;

    #[tokio::test]
    async fn test_account_to_claim_walkthrough() {
        let h = Harness::new();
        h.accounts
            .create_account(CreateAccount::from_args(&args(&["alice", "19900101", "a@x.com", "0"])).unwrap())
            .await
            .unwrap();
        h.accounts
            .add_balance(AddBalance::from_args(&args(&["alice", "500"])).unwrap())
            .await
            .unwrap();
        h.accounts
            .buy_policy(BuyPolicy::from_args(&args(&["alice", "1001"])).unwrap())
            .await
            .unwrap();

        let again = h
            .accounts
            .buy_policy(BuyPolicy::from_args(&args(&["alice", "1001"])).unwrap())
            .await
            .unwrap_err();
        assert_eq!(again.kind(), ErrorKind::AlreadyPurchased);

        h.file("alice", "1001").await.unwrap();
        assert_eq!(h.file("alice", "1001").await.unwrap_err().kind(), ErrorKind::AlreadyClaimed);

        let bytes = h.accounts.get_balance(&AccountId::parse("alice").unwrap()).await.unwrap();
        let account: Account = decode(&bytes).unwrap();
        assert_eq!(account.balance, 500);
        assert_eq!(account.policies, vec!["1001".to_string()]);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_only_first_claim_succeeds(attempts in 1usize..5, owned in any::<bool>()) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let results = runtime.block_on(async {
            let h = Harness::new();
            h.account_with_policy("alice", if owned { "7" } else { "8" }).await;
            let mut results = Vec::new();
            for _ in 0..attempts {
                results.push(h.file("alice", "7").await.map_err(|e| e.kind()));
            }
            results
        });

        for (i, result) in results.iter().enumerate() {
            let expected = match (owned, i) {
                (false, _) => Err(ErrorKind::PolicyNotOwned),
                (true, 0) => Ok(()),
                (true, _) => Err(ErrorKind::AlreadyClaimed),
            };
            prop_assert_eq!(result, &expected);
        }
    }
}
