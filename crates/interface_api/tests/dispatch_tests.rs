//! Dispatcher tests

use std::sync::Arc;

use proptest::prelude::*;

use core_kernel::{ErrorKind, InMemoryLedgerStore, LedgerStore};
use domain_billing::BalanceLookup;
use interface_api::dispatch::{Dispatcher, INIT_KEY};
use test_utils::*;

fn dispatcher(lookup: BalanceLookup) -> (Arc<InMemoryLedgerStore>, Dispatcher) {
    let store = Arc::new(InMemoryLedgerStore::new());
    let dispatcher = Dispatcher::new(store.clone(), lookup);
    (store, dispatcher)
}

// ============================================================================
// Raw Passthrough Tests
// ============================================================================

mod passthrough_tests {
    use super::*;

    #[tokio::test]
    async fn test_init_writes_hello_world() {
        let (store, dispatcher) = dispatcher(BalanceLookup::Sentinel);
        dispatcher.invoke("init", &args(&["hi"])).await.unwrap();
        assert_stored_bytes(store.as_ref(), INIT_KEY, b"hi").await;
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let (_, dispatcher) = dispatcher(BalanceLookup::Sentinel);
        dispatcher.invoke("write", &args(&["k", "v"])).await.unwrap();
        let bytes = dispatcher.query("read", &args(&["k"])).await.unwrap();
        assert_eq!(bytes, b"v".to_vec());
    }

    #[tokio::test]
    async fn test_read_missing_key() {
        let (_, dispatcher) = dispatcher(BalanceLookup::Sentinel);
        let err = dispatcher.query("read", &args(&["nope"])).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_write_argument_count() {
        let (_, dispatcher) = dispatcher(BalanceLookup::Sentinel);
        let err = dispatcher.invoke("write", &args(&["k"])).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgumentCount);
        assert_eq!(err.to_string(), "Incorrect number of arguments. Expecting 2, got 1");
    }

    #[tokio::test]
    async fn test_query_names_are_not_invokable() {
        let (_, dispatcher) = dispatcher(BalanceLookup::Sentinel);
        let err = dispatcher.invoke("getBalance", &args(&["alice"])).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownFunction);
    }
}

// ============================================================================
// Ledger Function Tests
// ============================================================================

mod ledger_function_tests {
    use super::*;
    use domain_account::Account;

    #[tokio::test]
    async fn test_initial_balance_argument_ignored() {
        let (store, dispatcher) = dispatcher(BalanceLookup::Sentinel);
        dispatcher
            .invoke("create_account", &args(&["Alice", "19900101", "A@X.com", "999"]))
            .await
            .unwrap();

        let account: Account = stored_record(store.as_ref(), "acct:alice").await;
        assert_eq!(account.balance, 0);
        assert_eq!(account.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_policy_keyed_lookup_reads_numbered_account() {
        let (store, dispatcher) = dispatcher(BalanceLookup::PolicyKeyed);
        put_record(store.as_ref(), &RecordFixtures::account("1001", 50, &[])).await;

        dispatcher
            .invoke("initiatePayment", &ArgFixtures::initiate_payment("1001", 50))
            .await
            .unwrap();
        let err = dispatcher
            .invoke("initiatePayment", &ArgFixtures::initiate_payment("1001", 51))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientFunds);
    }

    #[tokio::test]
    async fn test_three_keys_for_one_number() {
        let (store, dispatcher) = dispatcher(BalanceLookup::PolicyKeyed);
        dispatcher.invoke("createAccount", &ArgFixtures::create_account("1001")).await.unwrap();
        dispatcher.invoke("addBalance", &ArgFixtures::add_balance("1001", 300)).await.unwrap();
        dispatcher.invoke("buyPolicy", &ArgFixtures::buy_policy("1001", "1001")).await.unwrap();
        dispatcher.invoke("initiatePayment", &ArgFixtures::initiate_payment("1001", 100)).await.unwrap();
        dispatcher.invoke("claimInsurance", &ArgFixtures::file_claim("1001", "1001")).await.unwrap();

        assert_eq!(
            store.keys(),
            vec!["acct:1001".to_string(), "claim:1001".to_string(), "payment:1001".to_string()]
        );
        let account: Account = stored_record(store.as_ref(), "acct:1001").await;
        assert_eq!(account.balance, 300);
    }

    #[tokio::test]
    async fn test_seeded_walkthrough_queries() {
        let store = seeded_store().await;
        let dispatcher = Dispatcher::new(store.clone(), BalanceLookup::Sentinel);

        let bytes = dispatcher.query("getBalance", &args(&["alice"])).await.unwrap();
        assert_eq!(bytes, store.get("acct:alice").await.unwrap().unwrap().bytes);

        let err = dispatcher.query("getClaim", &args(&["1001"])).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = dispatcher.query("getPayment", &args(&["abc"])).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgumentValue);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_claim_boolean_spellings((spelling, expected) in bool_spelling_strategy()) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let verified = runtime.block_on(async {
            let store = seeded_store().await;
            let dispatcher = Dispatcher::new(store.clone(), BalanceLookup::Sentinel);
            dispatcher
                .invoke("claimInsurance", &args(&["alice", "1001", "health", spelling, "1"]))
                .await
                .unwrap();
            let claim: domain_claims::ClaimInsurance = stored_record(store.as_ref(), "claim:1001").await;
            claim.document_verified
        });
        prop_assert_eq!(verified, expected);
    }

    #[test]
    fn prop_wrong_count_never_touches_store(function in prop_oneof![
        Just("createAccount"), Just("addBalance"), Just("buyPolicy"),
        Just("initiatePayment"), Just("claimInsurance"), Just("write"), Just("init"),
    ], count in 0usize..10) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let (result, empty) = runtime.block_on(async {
            let (store, dispatcher) = dispatcher(BalanceLookup::Sentinel);
            let arguments: Vec<String> = (0..count).map(|i| format!("{}", i + 1)).collect();
            let result = dispatcher.invoke(function, &arguments).await.map_err(|e| e.kind());
            (result, store.is_empty())
        });

        let expected_count = match function {
            "createAccount" => 4,
            "addBalance" | "buyPolicy" | "write" => 2,
            "initiatePayment" => 7,
            "claimInsurance" => 5,
            _ => 1,
        };
        if count != expected_count {
            prop_assert_eq!(result, Err(ErrorKind::InvalidArgumentCount));
            prop_assert!(empty);
        }
    }
}
