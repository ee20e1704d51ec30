//! Ledger Operation Errors
//!
//! Every failure is synchronous and operation-aborting: an `Err` return
//! means the ledger is exactly as it was before the call. Nothing is
//! retried internally.

use lib_types::{Address, Amount};
use thiserror::Error;

/// Error during ledger operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("payment below minimum: paid {paid}, minimum {min}")]
    BelowMinimumPayment { paid: Amount, min: Amount },

    #[error("supply cap exceeded: max {max}, would have {would_have}")]
    SupplyCapExceeded { max: Amount, would_have: Amount },

    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: Amount, need: Amount },

    #[error("insufficient owner balance: have {have}, need {need}")]
    InsufficientOwnerBalance { have: Amount, need: Amount },

    #[error("allowance exceeded: allowed {allowed}, requested {requested}")]
    AllowanceExceeded { allowed: Amount, requested: Amount },

    #[error("caller is not the admin: {caller}")]
    NotAdmin { caller: Address },

    #[error("ledger is deactivated")]
    LedgerDeactivated,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("arithmetic overflow")]
    AmountOverflow,

    #[error("supply conservation violated: total supply {supply}, sum of balances {balances}")]
    SupplyConservationViolated { supply: Amount, balances: Amount },
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
