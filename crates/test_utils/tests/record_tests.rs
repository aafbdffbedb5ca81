//! Record encoding properties across every record kind

use proptest::prelude::*;

use core_kernel::{decode, encode, Record, RecordKind};
use domain_account::Account;
use domain_billing::PremiumPayment;
use domain_claims::ClaimInsurance;
use test_utils::*;

fn reencodes<R: Record>(record: &R) -> bool {
    let bytes = encode(record).unwrap();
    let decoded: R = decode(&bytes).unwrap();
    encode(&decoded).unwrap() == bytes
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_account_bytes_are_stable(account in account_strategy()) {
        prop_assert!(reencodes(&account));
        prop_assert_eq!(account.storage_key().kind(), Some(RecordKind::Account));
    }

    #[test]
    fn prop_payment_bytes_are_stable(payment in payment_strategy()) {
        prop_assert!(reencodes(&payment));
        prop_assert_eq!(payment.storage_key().kind(), Some(RecordKind::PremiumPayment));
    }

    #[test]
    fn prop_claim_bytes_are_stable(claim in claim_strategy()) {
        prop_assert!(reencodes(&claim));
        prop_assert_eq!(claim.storage_key().kind(), Some(RecordKind::Claim));
    }

    #[test]
    fn prop_same_number_three_distinct_keys(n in policy_number_strategy()) {
        let account = RecordFixtures::account(&n.to_string(), 0, &[]);
        let payment = RecordFixtures::payment(n, 1);
        let claim = RecordFixtures::claim("alice", n);

        let keys = [
            account.storage_key().to_string(),
            payment.storage_key().to_string(),
            claim.storage_key().to_string(),
        ];
        prop_assert_ne!(&keys[0], &keys[1]);
        prop_assert_ne!(&keys[1], &keys[2]);
        prop_assert_ne!(&keys[0], &keys[2]);
    }

    #[test]
    fn prop_truncated_bytes_never_decode(account in account_strategy(), cut in 1usize..20) {
        let bytes = encode(&account).unwrap();
        let end = bytes.len().saturating_sub(cut);
        prop_assert!(decode::<Account>(&bytes[..end]).is_err());
    }
}

#[test]
fn test_null_policies_decode_as_empty() {
    let account: Account =
        decode(br#"{"id":"bob","dob":1,"email":"b@x.com","balance":0,"policies":null}"#).unwrap();
    assert!(account.policies.is_empty());
}

#[test]
fn test_foreign_record_decodes_shared_fields_only() {
    let payment = encode(&RecordFixtures::payment(1001, 5)).unwrap();
    let claim: ClaimInsurance = decode(&payment).unwrap();
    assert_eq!(claim.policy_number, 1001);
    assert_eq!(claim.amount, 5);
    assert!(claim.account_id.is_empty());
    assert!(!claim.document_verified);
    assert!(decode::<PremiumPayment>(&payment).is_ok());
}

#[test]
fn test_partial_records_decode_with_zero_values() {
    let account: Account = decode(br#"{"balance":500}"#).unwrap();
    assert_eq!(account.balance, 500);
    assert!(account.id.as_str().is_empty());
    assert!(account.policies.is_empty());

    let claim: ClaimInsurance = decode(b"{}").unwrap();
    assert_eq!(claim, ClaimInsurance::default());

    assert!(decode::<Account>(br#"{"balance":"lots"}"#).is_err());
}
