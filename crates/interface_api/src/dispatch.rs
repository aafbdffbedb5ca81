//! Function dispatch
//!
//! Maps an invoked function name and its positional arguments onto the
//! ledger services. Names are accepted in camelCase and snake_case.
//! Invoke functions mutate the ledger and return nothing; query functions
//! return the raw stored bytes.

use std::sync::Arc;

use tracing::{debug, info};

use core_kernel::{parse_int, AccountId, ArgReader, CoreError, LedgerStore, PolicyNumber};
use domain_account::{AccountManager, AddBalance, BuyPolicy, CreateAccount};
use domain_billing::{BalanceLookup, InitiatePayment, PaymentProcessor};
use domain_claims::{ClaimProcessor, FileClaim};

use crate::error::ApiError;

/// Key written by the `init` function
pub const INIT_KEY: &str = "hello_world";

/// Functions that change ledger state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeFunction {
    Init,
    Write,
    CreateAccount,
    AddBalance,
    BuyPolicy,
    InitiatePayment,
    ClaimInsurance,
}

impl InvokeFunction {
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "init" => InvokeFunction::Init,
            "write" => InvokeFunction::Write,
            "createAccount" | "create_account" => InvokeFunction::CreateAccount,
            "addBalance" | "add_balance" => InvokeFunction::AddBalance,
            "buyPolicy" | "buy_policy" => InvokeFunction::BuyPolicy,
            "initiatePayment" | "init_payment" => InvokeFunction::InitiatePayment,
            "claimInsurance" | "claim_insurance" => InvokeFunction::ClaimInsurance,
            _ => return None,
        })
    }
}

/// Read-only functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFunction {
    Read,
    GetBalance,
    GetClaim,
    GetPayment,
}

impl QueryFunction {
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "read" => QueryFunction::Read,
            "getBalance" | "get_balance" => QueryFunction::GetBalance,
            "getClaim" | "get_claim" => QueryFunction::GetClaim,
            "getPayment" | "get_payment" => QueryFunction::GetPayment,
            _ => return None,
        })
    }
}

/// Routes function calls to the ledger services
pub struct Dispatcher {
    store: Arc<dyn LedgerStore>,
    accounts: AccountManager,
    payments: PaymentProcessor,
    claims: ClaimProcessor,
}

impl Dispatcher {
    /// Builds the dispatcher and the services it routes to
    ///
    /// # Arguments
    ///
    /// * `store` - Ledger store shared by every service
    /// * `balance_lookup` - Reference account strategy for payments
    pub fn new(store: Arc<dyn LedgerStore>, balance_lookup: BalanceLookup) -> Self {
        Self {
            accounts: AccountManager::new(store.clone()),
            payments: PaymentProcessor::new(store.clone(), balance_lookup),
            claims: ClaimProcessor::new(store.clone()),
            store,
        }
    }

    pub fn store(&self) -> &Arc<dyn LedgerStore> {
        &self.store
    }

    /// Runs a state-changing function
    ///
    /// # Errors
    ///
    /// `UnknownFunction` for an unrecognized name, otherwise whatever the
    /// target operation fails with
    pub async fn invoke(&self, function: &str, args: &[String]) -> Result<(), ApiError> {
        let Some(target) = InvokeFunction::parse(function) else {
            return Err(ApiError::UnknownFunction(function.to_string()));
        };
        debug!(function, ?target, args = args.len(), "Invoke");

        match target {
            InvokeFunction::Init => {
                expect_count(args, 1)?;
                self.store.put(INIT_KEY, args[0].clone().into_bytes()).await?;
                info!(key = INIT_KEY, "Initialized ledger");
            }
            InvokeFunction::Write => {
                expect_count(args, 2)?;
                let key = non_empty_key(&args[0])?;
                self.store.put(key, args[1].clone().into_bytes()).await?;
                info!(key, "Wrote raw value");
            }
            InvokeFunction::CreateAccount => {
                self.accounts.create_account(CreateAccount::from_args(args)?).await?;
            }
            InvokeFunction::AddBalance => {
                self.accounts.add_balance(AddBalance::from_args(args)?).await?;
            }
            InvokeFunction::BuyPolicy => {
                self.accounts.buy_policy(BuyPolicy::from_args(args)?).await?;
            }
            InvokeFunction::InitiatePayment => {
                self.payments.initiate_payment(InitiatePayment::from_args(args)?).await?;
            }
            InvokeFunction::ClaimInsurance => {
                self.claims.file_claim(FileClaim::from_args(args)?).await?;
            }
        }
        Ok(())
    }

    /// Runs a read-only function and returns the stored bytes
    ///
    /// # Errors
    ///
    /// `UnknownFunction` for an unrecognized name, `NotFound` if the target
    /// key holds nothing
    pub async fn query(&self, function: &str, args: &[String]) -> Result<Vec<u8>, ApiError> {
        let Some(target) = QueryFunction::parse(function) else {
            return Err(ApiError::UnknownFunction(function.to_string()));
        };
        debug!(function, ?target, args = args.len(), "Query");

        let bytes = match target {
            QueryFunction::Read => {
                expect_count(args, 1)?;
                let key = non_empty_key(&args[0])?;
                self.store
                    .get(key)
                    .await?
                    .ok_or_else(|| CoreError::not_found(format!("No value stored for key {}", key)))?
                    .bytes
            }
            QueryFunction::GetBalance => {
                let reader = ArgReader::new(args, &["UserName"])?;
                let id = AccountId::parse(reader.text(0)?)?;
                self.accounts.get_balance(&id).await?
            }
            QueryFunction::GetClaim => {
                let reader = ArgReader::new(args, &["PolicyNumber"])?;
                let policy = PolicyNumber::parse(reader.text(0)?)?;
                self.claims.get_claim(&policy).await?
            }
            QueryFunction::GetPayment => {
                let reader = ArgReader::new(args, &["PolicyNumber"])?;
                let policy_number = parse_int(reader.text(0)?, "PolicyNumber")?;
                self.payments.get_payment(policy_number).await?
            }
        };
        Ok(bytes)
    }
}

fn expect_count(args: &[String], expected: usize) -> Result<(), CoreError> {
    if args.len() != expected {
        return Err(CoreError::InvalidArgumentCount {
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

fn non_empty_key(key: &str) -> Result<&str, CoreError> {
    if key.is_empty() {
        return Err(CoreError::invalid_argument("Key", "must be non-empty"));
    }
    Ok(key)
}
