//! Privileged Operations
//!
//! Two operations are restricted to the single admin account fixed at
//! creation: sweeping the retained native funds, and permanently
//! deactivating the ledger. Authority is a plain address equality check;
//! there are no roles.

use serde::{Deserialize, Serialize};

use lib_types::{Address, Amount};

use crate::errors::{LedgerError, LedgerResult};
use crate::ledger::TokenLedger;

/// Outcome of a fund sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReceipt {
    /// Native units the host must transmit to the recipient
    pub swept: Amount,
    /// The admin account receiving the funds
    pub recipient: Address,
}

impl TokenLedger {
    /// Sweep all retained native funds to the admin
    ///
    /// Leaves the pool at zero. Idempotent-safe: sweeping an empty pool
    /// succeeds with a zero receipt. Remains callable after
    /// deactivation, where the pool is already empty.
    ///
    /// # Errors
    /// - `NotAdmin` unless `caller` is the admin account
    pub fn extract_funds(&mut self, caller: Address) -> LedgerResult<SweepReceipt> {
        if caller != self.admin() {
            tracing::warn!(caller = %caller, "fund extraction rejected");
            return Err(LedgerError::NotAdmin { caller });
        }

        let swept = self.contract_funds();
        self.set_contract_funds(0);

        tracing::info!(recipient = %caller, swept, "contract funds swept");

        Ok(SweepReceipt {
            swept,
            recipient: caller,
        })
    }

    /// Sweep remaining funds and shut the ledger down for good
    ///
    /// Terminal: afterwards every mutating operation fails with
    /// `LedgerDeactivated`, while read-only queries keep answering for
    /// historical inspection. A second deactivation is rejected, never
    /// silently ignored.
    ///
    /// # Errors
    /// - `NotAdmin` unless `caller` is the admin account
    /// - `LedgerDeactivated` if the ledger is already shut down
    pub fn deactivate(&mut self, caller: Address) -> LedgerResult<SweepReceipt> {
        if caller != self.admin() {
            tracing::warn!(caller = %caller, "deactivation rejected");
            return Err(LedgerError::NotAdmin { caller });
        }
        self.require_active()?;

        let swept = self.contract_funds();
        self.set_contract_funds(0);
        self.set_inactive();

        tracing::info!(recipient = %caller, swept, "ledger deactivated");

        Ok(SweepReceipt {
            swept,
            recipient: caller,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerConfig;
    use crate::errors::LedgerError;

    const UNIT_PRICE: Amount = 10_000_000;

    fn admin() -> Address {
        Address::new([9u8; 32])
    }

    fn outsider() -> Address {
        Address::new([5u8; 32])
    }

    fn funded_ledger() -> TokenLedger {
        let config =
            LedgerConfig::new("Test Token", "TST", 2, 1_000_000_000, 1_000_000, admin()).unwrap();
        let mut ledger = TokenLedger::new(config);
        ledger
            .receive_payment(Address::new([1u8; 32]), 100 * UNIT_PRICE)
            .unwrap();
        ledger
    }

    #[test]
    fn test_extract_funds_requires_admin() {
        let mut ledger = funded_ledger();

        let result = ledger.extract_funds(outsider());
        assert_eq!(result, Err(LedgerError::NotAdmin { caller: outsider() }));
        assert_eq!(ledger.contract_funds(), 100 * UNIT_PRICE);
    }

    #[test]
    fn test_extract_funds_sweeps_everything_once() {
        let mut ledger = funded_ledger();

        let receipt = ledger.extract_funds(admin()).unwrap();
        assert_eq!(receipt.swept, 100 * UNIT_PRICE);
        assert_eq!(receipt.recipient, admin());
        assert_eq!(ledger.contract_funds(), 0);

        // Sweeping an empty pool is a harmless no-op.
        let receipt = ledger.extract_funds(admin()).unwrap();
        assert_eq!(receipt.swept, 0);
    }

    #[test]
    fn test_deactivate_requires_admin() {
        let mut ledger = funded_ledger();

        let result = ledger.deactivate(outsider());
        assert_eq!(result, Err(LedgerError::NotAdmin { caller: outsider() }));
        assert!(ledger.is_active());
    }

    #[test]
    fn test_deactivate_sweeps_and_is_terminal() {
        let mut ledger = funded_ledger();
        let holder = Address::new([1u8; 32]);

        let receipt = ledger.deactivate(admin()).unwrap();
        assert_eq!(receipt.swept, 100 * UNIT_PRICE);
        assert_eq!(ledger.contract_funds(), 0);
        assert!(!ledger.is_active());

        // Never a silent no-op the second time.
        let result = ledger.deactivate(admin());
        assert_eq!(result, Err(LedgerError::LedgerDeactivated));

        // Read-only queries keep answering.
        assert_eq!(ledger.balance_of(&holder), 100);
        assert_eq!(ledger.total_supply(), 100);

        // The admin can still run the (empty) sweep.
        let receipt = ledger.extract_funds(admin()).unwrap();
        assert_eq!(receipt.swept, 0);

        // A non-admin is still turned away by the authority check.
        let result = ledger.extract_funds(outsider());
        assert_eq!(result, Err(LedgerError::NotAdmin { caller: outsider() }));
    }

    #[test]
    fn test_admin_ops_emit_no_ledger_events() {
        let mut ledger = funded_ledger();
        ledger.drain_events();

        ledger.extract_funds(admin()).unwrap();
        ledger.deactivate(admin()).unwrap();
        assert!(ledger.events().is_empty());
    }
}
