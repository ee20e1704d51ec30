//! Token Ledger Aggregate
//!
//! The single owned aggregate holding all mutable ledger state: account
//! balances, allowances, total supply, retained native funds, and the
//! active flag. It is created once with a validated [`LedgerConfig`] and
//! passed by reference into each operation; there is no process-wide
//! singleton.
//!
//! # Invariants
//!
//! - `total_supply == Σ balances` after every committed operation
//! - `total_supply <= max_supply`
//! - No balance or allowance map entry is kept for a zero value
//! - Once `active` is false, no further mutation succeeds
//!
//! # Mutation discipline
//!
//! Every operation in this crate follows validate, stage, commit: all
//! checks and all checked-arithmetic results are obtained before the
//! first state write, so an `Err` return leaves the aggregate untouched.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use lib_types::{Address, Amount};

use crate::config::LedgerConfig;
use crate::errors::{LedgerError, LedgerResult};
use crate::events::LedgerEvent;

/// The ledger state aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenLedger {
    /// Immutable configuration fixed at creation
    config: LedgerConfig,

    /// Per-account balances, in ledger units; absent entry means zero
    balances: HashMap<Address, Amount>,

    /// Remaining spend limits, keyed by (owner, spender); absent means zero
    allowances: HashMap<(Address, Address), Amount>,

    /// Units in circulation; always equals the sum of all balances
    total_supply: Amount,

    /// Native-currency units retained from mint payments
    contract_funds: Amount,

    /// Cleared permanently by deactivation
    active: bool,

    /// Append-only event journal, in commit order
    events: Vec<LedgerEvent>,
}

impl TokenLedger {
    /// Create an empty ledger from a validated configuration
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            balances: HashMap::new(),
            allowances: HashMap::new(),
            total_supply: 0,
            contract_funds: 0,
            active: true,
            events: Vec::new(),
        }
    }

    // =========================================================================
    // Read-Only Queries
    // =========================================================================
    // These never fail and remain answerable after deactivation.

    /// Balance of an account, in ledger units; 0 for unknown accounts
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Remaining spend limit for a (owner, spender) pair; 0 if none set
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances.get(&(*owner, *spender)).copied().unwrap_or(0)
    }

    /// Units currently in circulation
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Hard supply ceiling
    pub fn max_supply(&self) -> Amount {
        self.config.max_supply
    }

    /// Precision exponent for the native-to-ledger conversion rate
    pub fn decimals(&self) -> u8 {
        self.config.decimals
    }

    /// Native-currency units retained from mint payments
    pub fn contract_funds(&self) -> Amount {
        self.contract_funds
    }

    /// The single privileged account
    pub fn admin(&self) -> Address {
        self.config.admin
    }

    /// Whether mutating operations are still accepted
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The full immutable configuration
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Remaining mintable units before the cap is reached
    pub fn mintable_supply(&self) -> Amount {
        self.config.max_supply.saturating_sub(self.total_supply)
    }

    /// Events committed so far, in order
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Hand the journal to the host, leaving it empty
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    // =========================================================================
    // Invariant Audit
    // =========================================================================

    /// Re-verify the conservation and cap invariants
    ///
    /// # Errors
    /// - `SupplyConservationViolated` if the supply counter disagrees with
    ///   the sum of balances
    /// - `SupplyCapExceeded` if circulation exceeds the ceiling
    pub fn check_invariants(&self) -> LedgerResult<()> {
        let mut balances: Amount = 0;
        for amount in self.balances.values() {
            balances = balances
                .checked_add(*amount)
                .ok_or(LedgerError::AmountOverflow)?;
        }

        if balances != self.total_supply {
            return Err(LedgerError::SupplyConservationViolated {
                supply: self.total_supply,
                balances,
            });
        }

        if self.total_supply > self.config.max_supply {
            return Err(LedgerError::SupplyCapExceeded {
                max: self.config.max_supply,
                would_have: self.total_supply,
            });
        }

        Ok(())
    }

    // =========================================================================
    // Crate-Internal Mutation Primitives
    // =========================================================================
    // Callers stage every post-state value before the first write; these
    // primitives themselves never fail.

    /// Reject when the ledger has been deactivated
    pub(crate) fn require_active(&self) -> LedgerResult<()> {
        if self.active {
            Ok(())
        } else {
            Err(LedgerError::LedgerDeactivated)
        }
    }

    /// Overwrite an account balance; a zero balance removes the entry
    pub(crate) fn set_balance(&mut self, account: Address, amount: Amount) {
        if amount == 0 {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, amount);
        }
    }

    /// Overwrite an allowance; a zero limit removes the entry
    pub(crate) fn set_allowance(&mut self, owner: Address, spender: Address, amount: Amount) {
        if amount == 0 {
            self.allowances.remove(&(owner, spender));
        } else {
            self.allowances.insert((owner, spender), amount);
        }
    }

    /// Overwrite the supply counter
    pub(crate) fn set_total_supply(&mut self, supply: Amount) {
        self.total_supply = supply;
    }

    /// Overwrite the retained native-fund pool
    pub(crate) fn set_contract_funds(&mut self, funds: Amount) {
        self.contract_funds = funds;
    }

    /// Clear the active flag permanently
    pub(crate) fn set_inactive(&mut self) {
        self.active = false;
    }

    /// Append one event to the journal
    pub(crate) fn record(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }
}
