//! Account Domain
//!
//! This crate manages user accounts on the policy ledger: creation, balance
//! top-ups, and policy purchases.
//!
//! # Account Lifecycle
//!
//! ```text
//! create_account -> (add_balance | buy_policy)*
//! ```
//!
//! Accounts are never deleted. Every account starts with a zero balance and
//! no policies, whatever initial balance the caller passes.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_account::{AccountManager, CreateAccount};
//!
//! let manager = AccountManager::new(store);
//! manager.create_account(CreateAccount::from_args(&args)?).await?;
//! ```

pub mod account;
pub mod commands;
pub mod error;
pub mod service;

pub use account::Account;
pub use commands::{AddBalance, BuyPolicy, CreateAccount};
pub use error::AccountError;
pub use service::{require_account, AccountManager};
