//! Claims Domain
//!
//! This crate files insurance claims against policies an account has
//! purchased. A claim is written once per policy number and never updated.
//!
//! # Policy Lifecycle
//!
//! ```text
//! NoPolicy -> Purchased -> Claimed
//! ```

pub mod claim;
pub mod commands;
pub mod error;
pub mod processor;

pub use claim::{ClaimInsurance, PolicyClaimState};
pub use commands::FileClaim;
pub use error::ClaimError;
pub use processor::ClaimProcessor;
