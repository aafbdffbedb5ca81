//! Payment commands

use core_kernel::{ArgReader, CoreError};

use crate::payment::PremiumPayment;

/// Initiate a premium payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitiatePayment {
    pub policy_number: i64,
    pub date_of_birth: i64,
    pub email: String,
    pub contact_number: String,
    pub name: String,
    pub due_date: i64,
    pub amount: i64,
}

impl InitiatePayment {
    pub const ARGS: &'static [&'static str] = &[
        "PolicyNumber",
        "DOB",
        "Email",
        "ContactNumber",
        "Name",
        "DueDate",
        "Amount",
    ];

    /// Parses `[policyNumber, dob, email, contactNumber, name, dueDate, amount]`
    ///
    /// The four integer fields must be decimal integers; email, contact
    /// number, and name are lowercased.
    pub fn from_args(args: &[String]) -> Result<Self, CoreError> {
        let reader = ArgReader::new(args, Self::ARGS)?;
        Ok(Self {
            policy_number: reader.int(0)?,
            date_of_birth: reader.int(1)?,
            email: reader.lowercase(2)?,
            contact_number: reader.lowercase(3)?,
            name: reader.lowercase(4)?,
            due_date: reader.int(5)?,
            amount: reader.int(6)?,
        })
    }

    /// Builds the payment record this command writes
    pub fn into_payment(self) -> PremiumPayment {
        PremiumPayment {
            policy_number: self.policy_number,
            date_of_birth: self.date_of_birth,
            email: self.email,
            contact_number: self.contact_number,
            name: self.name,
            due_date: self.due_date,
            amount: self.amount,
        }
    }
}
