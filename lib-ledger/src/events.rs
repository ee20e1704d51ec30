//! Ledger Events
//!
//! Every successful mutating operation that changes balance, supply, or
//! allowance state appends exactly one event, in commit order. The journal
//! is the source of truth for hosts that index or display activity.
//!
//! There is no asynchronous publisher here: operations are synchronous
//! end-to-end, so events land in a journal owned by the ledger aggregate
//! and are handed to the host via [`TokenLedger::events`] or
//! [`TokenLedger::drain_events`].
//!
//! [`TokenLedger::events`]: crate::ledger::TokenLedger::events
//! [`TokenLedger::drain_events`]: crate::ledger::TokenLedger::drain_events

use serde::{Deserialize, Serialize};

use lib_types::{Address, Amount};

/// Ledger state-change events
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum LedgerEvent {
    /// New units issued against a received payment
    ///
    /// Conceptually a transfer from the zero address to `to`.
    Issued {
        /// Account credited with the new units
        to: Address,
        /// Units issued
        amount: Amount,
    },

    /// Units moved between accounts
    ///
    /// Emitted for both direct transfers and allowance-consuming
    /// transfers; `amount` is what the recipient received, excluding any
    /// burned fee.
    Transferred {
        /// Debited account
        from: Address,
        /// Credited account
        to: Address,
        /// Units received by `to`
        amount: Amount,
    },

    /// Spending limit set for a (owner, spender) pair
    ///
    /// Carries the resulting limit, whether set directly or adjusted.
    Approved {
        /// Account whose units may be spent
        owner: Address,
        /// Account authorized to spend
        spender: Address,
        /// Remaining spend limit after the change
        amount: Amount,
    },
}

impl std::fmt::Display for LedgerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerEvent::Issued { to, amount } => {
                write!(f, "Issued(to={:?}, amount={})", to, amount)
            }
            LedgerEvent::Transferred { from, to, amount } => {
                write!(f, "Transferred(from={:?}, to={:?}, amount={})", from, to, amount)
            }
            LedgerEvent::Approved { owner, spender, amount } => {
                write!(
                    f,
                    "Approved(owner={:?}, spender={:?}, amount={})",
                    owner, spender, amount
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        let event = LedgerEvent::Issued {
            to: Address::new([1u8; 32]),
            amount: 100,
        };
        let rendered = format!("{}", event);
        assert!(rendered.starts_with("Issued("));
        assert!(rendered.contains("amount=100"));
    }

    #[test]
    fn test_event_serialization_round_trip() {
        let events = vec![
            LedgerEvent::Issued {
                to: Address::new([1u8; 32]),
                amount: 100,
            },
            LedgerEvent::Transferred {
                from: Address::new([1u8; 32]),
                to: Address::new([2u8; 32]),
                amount: 50,
            },
            LedgerEvent::Approved {
                owner: Address::new([1u8; 32]),
                spender: Address::new([3u8; 32]),
                amount: 25,
            },
        ];

        for event in &events {
            let serialized = serde_json::to_string(event).expect("serialization failed");
            let deserialized: LedgerEvent =
                serde_json::from_str(&serialized).expect("deserialization failed");
            assert_eq!(*event, deserialized);
        }
    }
}
