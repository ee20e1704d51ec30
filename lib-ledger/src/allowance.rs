//! Spending Allowances
//!
//! Per-(owner, spender) limits consumed by the allowance transfer path.
//! `approve` overwrites, `increase_allowance` adds with overflow
//! checking, `decrease_allowance` clamps at zero instead of failing.
//! Every change appends an `Approved` event carrying the resulting
//! limit.

use lib_types::{Address, Amount};

use crate::errors::{LedgerError, LedgerResult};
use crate::events::LedgerEvent;
use crate::ledger::TokenLedger;

impl TokenLedger {
    /// Set the (owner, spender) allowance to exactly `amount`
    ///
    /// Overwrites any prior value. `owner` is the authenticated caller.
    ///
    /// # Errors
    /// - `LedgerDeactivated` once the ledger has been shut down
    pub fn approve(
        &mut self,
        owner: Address,
        spender: Address,
        amount: Amount,
    ) -> LedgerResult<()> {
        self.require_active()?;

        self.set_allowance(owner, spender, amount);
        self.record(LedgerEvent::Approved {
            owner,
            spender,
            amount,
        });

        Ok(())
    }

    /// Raise the (owner, spender) allowance by `delta`
    ///
    /// Returns the resulting limit.
    ///
    /// # Errors
    /// - `LedgerDeactivated` once the ledger has been shut down
    /// - `AmountOverflow` if the limit would pass `u128::MAX`
    pub fn increase_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        delta: Amount,
    ) -> LedgerResult<Amount> {
        self.require_active()?;

        let updated = self
            .allowance(&owner, &spender)
            .checked_add(delta)
            .ok_or(LedgerError::AmountOverflow)?;

        self.set_allowance(owner, spender, updated);
        self.record(LedgerEvent::Approved {
            owner,
            spender,
            amount: updated,
        });

        Ok(updated)
    }

    /// Lower the (owner, spender) allowance by `delta`, flooring at zero
    ///
    /// Never fails on an oversized `delta`: lowering below zero truncates
    /// to zero. Returns the resulting limit.
    ///
    /// # Errors
    /// - `LedgerDeactivated` once the ledger has been shut down
    pub fn decrease_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        delta: Amount,
    ) -> LedgerResult<Amount> {
        self.require_active()?;

        let updated = self.allowance(&owner, &spender).saturating_sub(delta);

        self.set_allowance(owner, spender, updated);
        self.record(LedgerEvent::Approved {
            owner,
            spender,
            amount: updated,
        });

        Ok(updated)
    }
}
