//! Premium payment record

use serde::{Deserialize, Serialize};

use core_kernel::{Record, RecordKind, StorageKey};

/// A premium payment made for a policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PremiumPayment {
    /// Policy being paid for
    #[serde(rename = "policynumber")]
    pub policy_number: i64,
    /// Payer date of birth (UTC date encoding)
    #[serde(rename = "dob")]
    pub date_of_birth: i64,
    /// Lowercased payer email
    pub email: String,
    /// Lowercased contact number
    #[serde(rename = "contactnumber")]
    pub contact_number: String,
    /// Lowercased payer name
    pub name: String,
    /// Due date (UTC date encoding)
    #[serde(rename = "duedate")]
    pub due_date: i64,
    /// Premium amount
    pub amount: i64,
}

impl Record for PremiumPayment {
    const KIND: RecordKind = RecordKind::PremiumPayment;

    fn storage_key(&self) -> StorageKey {
        StorageKey::payment(self.policy_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::encode;

    #[test]
    fn test_storage_key_is_prefixed() {
        let payment = PremiumPayment {
            policy_number: 1001,
            date_of_birth: 19900101,
            email: "a@x.com".to_string(),
            contact_number: "555-0100".to_string(),
            name: "alice".to_string(),
            due_date: 20250101,
            amount: 120,
        };
        assert_eq!(payment.storage_key().as_str(), "payment:1001");

        let text = String::from_utf8(encode(&payment).unwrap()).unwrap();
        assert_eq!(
            text,
            r#"{"policynumber":1001,"dob":19900101,"email":"a@x.com","contactnumber":"555-0100","name":"alice","duedate":20250101,"amount":120}"#
        );
    }
}
