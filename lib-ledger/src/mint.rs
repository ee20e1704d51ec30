//! Payment-Driven Issuance
//!
//! Converts an incoming native-currency payment into newly issued ledger
//! units. The arithmetic is pure and integer-only: units are floored,
//! the remainder is refunded, and the cap is enforced all-or-nothing.
//!
//! # Enforcement
//!
//! - **Minimum payment**: anything below the price of one unit is
//!   rejected and the whole payment goes back to the sender
//! - **Supply cap**: if the full mintable amount does not fit under
//!   `max_supply`, the operation fails entirely; there is no partial fill
//! - **Refund conservation**: `paid == retained + refund` on success

use serde::{Deserialize, Serialize};

use lib_types::{Address, Amount};

use crate::errors::{LedgerError, LedgerResult};
use crate::events::LedgerEvent;
use crate::ledger::TokenLedger;

/// Deterministic split of a payment into units, refund, and retained funds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintQuote {
    /// Units the payment buys, floored
    pub mintable: Amount,
    /// Smallest native units returned to the payer
    pub refund: Amount,
    /// Smallest native units kept by the ledger
    pub retained: Amount,
}

/// Outcome of a successful mint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintReceipt {
    /// Units credited to the payer
    pub minted: Amount,
    /// Native units the host must transmit back to the payer
    pub refund: Amount,
    /// Native units added to the contract fund pool
    pub retained: Amount,
}

/// Split a payment at the given unit price
///
/// Pure function: no state access, no floats, deterministic on every
/// platform. `unit_price` must be non-zero (guaranteed by
/// [`LedgerConfig::new`]).
///
/// [`LedgerConfig::new`]: crate::config::LedgerConfig::new
pub fn quote_payment(paid: Amount, unit_price: Amount) -> MintQuote {
    let mintable = paid / unit_price;
    let refund = paid % unit_price;
    MintQuote {
        mintable,
        refund,
        retained: paid - refund,
    }
}

impl TokenLedger {
    /// Mint units for a plain payment
    ///
    /// See [`TokenLedger::receive_payment_with_payload`]; this is the
    /// payload-free entry point.
    pub fn receive_payment(&mut self, payer: Address, paid: Amount) -> LedgerResult<MintReceipt> {
        self.receive_payment_with_payload(payer, paid, &[])
    }

    /// Mint units for a payment carrying an opaque payload
    ///
    /// The payload has no semantic effect; a payment with arbitrary data
    /// attached mints exactly like a plain one.
    ///
    /// On success the payer is credited with `floor(paid / unit_price)`
    /// units, the remainder is reported as `refund` for the host to
    /// transmit back within the same atomic operation, and the rest of
    /// the payment is retained in the contract fund pool.
    ///
    /// # Errors
    /// - `LedgerDeactivated` once the ledger has been shut down
    /// - `BelowMinimumPayment` if `paid` does not buy one unit; the whole
    ///   payment is returned
    /// - `SupplyCapExceeded` if the full mintable amount would pass
    ///   `max_supply`; no partial mint, the whole payment is returned
    pub fn receive_payment_with_payload(
        &mut self,
        payer: Address,
        paid: Amount,
        payload: &[u8],
    ) -> LedgerResult<MintReceipt> {
        self.require_active()?;

        let min = self.config().min_payment();
        if paid < min {
            return Err(LedgerError::BelowMinimumPayment { paid, min });
        }

        let quote = quote_payment(paid, self.config().unit_price());

        let staged_supply = self
            .total_supply()
            .checked_add(quote.mintable)
            .ok_or(LedgerError::AmountOverflow)?;
        if staged_supply > self.max_supply() {
            return Err(LedgerError::SupplyCapExceeded {
                max: self.max_supply(),
                would_have: staged_supply,
            });
        }

        // Stage every post-state value before the first write.
        let staged_payer = self
            .balance_of(&payer)
            .checked_add(quote.mintable)
            .ok_or(LedgerError::AmountOverflow)?;
        let staged_funds = self
            .contract_funds()
            .checked_add(quote.retained)
            .ok_or(LedgerError::AmountOverflow)?;

        // Commit.
        self.set_balance(payer, staged_payer);
        self.set_total_supply(staged_supply);
        self.set_contract_funds(staged_funds);
        self.record(LedgerEvent::Issued {
            to: payer,
            amount: quote.mintable,
        });

        tracing::info!(
            payer = %payer,
            minted = quote.mintable,
            refund = quote.refund,
            payload_bytes = payload.len(),
            "issued units for payment"
        );

        Ok(MintReceipt {
            minted: quote.mintable,
            refund: quote.refund,
            retained: quote.retained,
        })
    }
}
