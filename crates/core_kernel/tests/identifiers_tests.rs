//! Unit tests for identifiers and the storage key scheme

use core_kernel::keys::{RecordKind, StorageKey};
use core_kernel::{AccountId, PolicyNumber};
use proptest::prelude::*;

mod account_id_tests {
    use super::*;

    #[test]
    fn test_parse_lowercases() {
        let id: AccountId = "ALICE".parse().unwrap();
        assert_eq!(id.to_string(), "alice");
    }

    #[test]
    fn test_label() {
        assert_eq!(AccountId::label(), "UserName");
    }

    #[test]
    fn test_into_string() {
        let id = AccountId::parse("Bob").unwrap();
        let raw: String = id.into();
        assert_eq!(raw, "bob");
    }

    #[test]
    fn test_serde_transparent() {
        let id = AccountId::parse("carol").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"carol\"");
    }
}

mod policy_number_tests {
    use super::*;

    #[test]
    fn test_numeric_rejects_text() {
        let policy = PolicyNumber::parse("abc").unwrap();
        assert!(policy.numeric().is_err());
    }

    #[test]
    fn test_claim_key_uses_raw_form() {
        let policy = PolicyNumber::parse("007").unwrap();
        assert_eq!(StorageKey::claim(&policy).as_str(), "claim:007");
    }

    #[test]
    fn test_payment_key_uses_decimal_form() {
        let policy = PolicyNumber::parse("007").unwrap();
        let key = StorageKey::payment(policy.numeric().unwrap());
        assert_eq!(key.as_str(), "payment:7");
        assert_eq!(key.kind(), Some(RecordKind::PremiumPayment));
    }
}

proptest! {
    #[test]
    fn prop_account_id_is_lowercase(raw in "[A-Za-z0-9._-]{1,24}") {
        let id = AccountId::parse(&raw).unwrap();
        prop_assert_eq!(id.as_str(), raw.to_lowercase());
    }

    #[test]
    fn prop_prefixed_keys_never_collide(n in 0i64..1_000_000) {
        let text = n.to_string();
        let account = StorageKey::account(&AccountId::parse(&text).unwrap());
        let claim = StorageKey::claim(&PolicyNumber::parse(&text).unwrap());
        let payment = StorageKey::payment(n);
        prop_assert_ne!(&account, &claim);
        prop_assert_ne!(&claim, &payment);
        prop_assert_ne!(&account, &payment);
    }
}
