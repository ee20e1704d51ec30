//! Payment-Minted Token Ledger
//!
//! A fungible-token ledger that issues units in exchange for received
//! native-currency payments, burns a fixed unit on every direct
//! transfer, enforces a hard supply ceiling, and grants a single admin
//! account the right to sweep collected funds or permanently deactivate
//! the ledger.
//!
//! # Key Types
//!
//! - [`TokenLedger`]: the single owned state aggregate
//! - [`LedgerConfig`]: immutable economic parameters fixed at creation
//! - [`LedgerError`]: the full failure taxonomy
//! - [`LedgerEvent`]: the committed-operation journal entries
//!
//! # Execution Model
//!
//! Every operation is synchronous and atomic: all checks run before the
//! first state write, so a returned error means nothing changed. The
//! host environment is responsible for serializing operations and for
//! physically moving native currency named in receipts (mint refunds,
//! fund sweeps) within the same atomic step.

pub mod admin;
pub mod allowance;
pub mod config;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod mint;
pub mod transfer;

pub use admin::SweepReceipt;
pub use config::LedgerConfig;
pub use errors::{LedgerError, LedgerResult};
pub use events::LedgerEvent;
pub use ledger::TokenLedger;
pub use mint::{quote_payment, MintQuote, MintReceipt};
pub use transfer::{TransferReceipt, TRANSFER_BURN};
