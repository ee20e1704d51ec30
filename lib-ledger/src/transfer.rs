//! Unit Transfers
//!
//! Two movement paths with deliberately different fee behavior:
//!
//! - [`TokenLedger::transfer`] is the direct path. The caller is the
//!   debited account, and every transfer destroys [`TRANSFER_BURN`]
//!   units on top of the moved amount, shrinking total supply.
//! - [`TokenLedger::transfer_from`] is the allowance path. It consumes
//!   the (owner, caller) allowance and carries no burn.
//!
//! The asymmetry is intentional and preserved as observed in the system
//! this ledger models.

use serde::{Deserialize, Serialize};

use lib_types::{Address, Amount};

use crate::errors::{LedgerError, LedgerResult};
use crate::events::LedgerEvent;
use crate::ledger::TokenLedger;

/// Units destroyed on every direct transfer
pub const TRANSFER_BURN: Amount = 1;

/// Outcome of a successful transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    /// Units received by the recipient
    pub amount: Amount,
    /// Units destroyed, removed from total supply
    pub burned: Amount,
    /// Total units debited from the source account
    pub total_debit: Amount,
}

impl TokenLedger {
    /// Move units directly from the caller to `to`, burning the fee
    ///
    /// `caller` is the authenticated source account; nobody can invoke
    /// the direct path on another account's behalf.
    ///
    /// # Errors
    /// - `LedgerDeactivated` once the ledger has been shut down
    /// - `InsufficientBalance` unless the caller holds
    ///   `amount + TRANSFER_BURN`
    pub fn transfer(
        &mut self,
        caller: Address,
        to: Address,
        amount: Amount,
    ) -> LedgerResult<TransferReceipt> {
        self.require_active()?;

        let total_debit = amount
            .checked_add(TRANSFER_BURN)
            .ok_or(LedgerError::AmountOverflow)?;
        let have = self.balance_of(&caller);
        if have < total_debit {
            return Err(LedgerError::InsufficientBalance {
                have,
                need: total_debit,
            });
        }

        // Stage every post-state value before the first write.
        let staged_from = have - total_debit;
        let staged_to = if to == caller {
            staged_from + amount
        } else {
            self.balance_of(&to)
                .checked_add(amount)
                .ok_or(LedgerError::AmountOverflow)?
        };
        // have <= total_supply by conservation, so the burn always fits
        let staged_supply = self
            .total_supply()
            .checked_sub(TRANSFER_BURN)
            .ok_or(LedgerError::AmountOverflow)?;

        // Commit.
        self.set_balance(caller, staged_from);
        self.set_balance(to, staged_to);
        self.set_total_supply(staged_supply);
        self.record(LedgerEvent::Transferred {
            from: caller,
            to,
            amount,
        });

        tracing::debug!(
            from = %caller,
            to = %to,
            amount,
            burned = TRANSFER_BURN,
            "direct transfer committed"
        );

        Ok(TransferReceipt {
            amount,
            burned: TRANSFER_BURN,
            total_debit,
        })
    }

    /// Move units from `owner` to `to` against the caller's allowance
    ///
    /// Consumes the (owner, caller) allowance by `amount`. This path is
    /// fee-free: no units are burned.
    ///
    /// # Errors
    /// - `LedgerDeactivated` once the ledger has been shut down
    /// - `AllowanceExceeded` unless the caller's allowance covers `amount`
    /// - `InsufficientOwnerBalance` unless the owner holds `amount`
    pub fn transfer_from(
        &mut self,
        caller: Address,
        owner: Address,
        to: Address,
        amount: Amount,
    ) -> LedgerResult<TransferReceipt> {
        self.require_active()?;

        let allowed = self.allowance(&owner, &caller);
        if allowed < amount {
            return Err(LedgerError::AllowanceExceeded {
                allowed,
                requested: amount,
            });
        }
        let have = self.balance_of(&owner);
        if have < amount {
            return Err(LedgerError::InsufficientOwnerBalance { have, need: amount });
        }

        // Stage every post-state value before the first write.
        let staged_allowance = allowed - amount;
        let staged_owner = have - amount;
        let staged_to = if to == owner {
            staged_owner + amount
        } else {
            self.balance_of(&to)
                .checked_add(amount)
                .ok_or(LedgerError::AmountOverflow)?
        };

        // Commit: allowance, then owner debit, then recipient credit.
        self.set_allowance(owner, caller, staged_allowance);
        self.set_balance(owner, staged_owner);
        self.set_balance(to, staged_to);
        self.record(LedgerEvent::Transferred {
            from: owner,
            to,
            amount,
        });

        tracing::debug!(
            spender = %caller,
            owner = %owner,
            to = %to,
            amount,
            "allowance transfer committed"
        );

        Ok(TransferReceipt {
            amount,
            burned: 0,
            total_debit: amount,
        })
    }
}
