//! Billing Domain - Premium Payments
//!
//! This crate records premium payments against policy numbers. Initiating a
//! payment is a feasibility check followed by a record write:
//!
//! 1. Read the reference account selected by the configured [`BalanceLookup`]
//! 2. Reject the payment if the account balance is below the amount
//! 3. Write the payment record, replacing any earlier payment for the policy
//!
//! The reference balance is never debited.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{BalanceLookup, InitiatePayment, PaymentProcessor};
//!
//! let processor = PaymentProcessor::new(store, BalanceLookup::Sentinel);
//! processor.initiate_payment(InitiatePayment::from_args(&args)?).await?;
//! ```

pub mod commands;
pub mod error;
pub mod payment;
pub mod processor;

pub use commands::InitiatePayment;
pub use error::BillingError;
pub use payment::PremiumPayment;
pub use processor::{BalanceLookup, PaymentProcessor};
