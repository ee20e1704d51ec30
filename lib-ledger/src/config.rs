//! Ledger Configuration
//!
//! Every economic parameter of the ledger is fixed here at construction
//! time and never changes afterwards. The conversion between the native
//! payment currency and ledger units is defined by `decimals`: one whole
//! native unit mints `10^decimals` ledger units.

use serde::{Deserialize, Serialize};

use lib_types::{Address, Amount};

use crate::errors::{LedgerError, LedgerResult};

/// Maximum symbol length
pub const MAX_SYMBOL_LEN: usize = 10;

/// Immutable ledger configuration
///
/// Validated once by [`LedgerConfig::new`]; all fields are fixed for the
/// lifetime of the ledger instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Human-readable token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Precision exponent: one whole native unit mints `10^decimals` ledger units
    pub decimals: u8,
    /// Smallest native-currency units per whole native unit
    pub native_base: Amount,
    /// Hard ceiling on total supply, in ledger units
    pub max_supply: Amount,
    /// The single account granted privileged rights
    pub admin: Address,
}

impl LedgerConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `LedgerError::InvalidConfig` when any parameter is out of
    /// range or the native base is not divisible by `10^decimals`.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
        native_base: Amount,
        max_supply: Amount,
        admin: Address,
    ) -> LedgerResult<Self> {
        let name = name.into();
        let symbol = symbol.into();

        if name.is_empty() {
            return Err(LedgerError::InvalidConfig("Name cannot be empty".to_string()));
        }
        if symbol.is_empty() {
            return Err(LedgerError::InvalidConfig("Symbol cannot be empty".to_string()));
        }
        if symbol.len() > MAX_SYMBOL_LEN {
            return Err(LedgerError::InvalidConfig(format!(
                "Symbol too long (max {})",
                MAX_SYMBOL_LEN
            )));
        }
        if max_supply == 0 {
            return Err(LedgerError::InvalidConfig("Max supply cannot be zero".to_string()));
        }
        if admin.is_zero() {
            return Err(LedgerError::InvalidConfig(
                "Admin cannot be the zero address".to_string(),
            ));
        }

        let units_per_native = (10 as Amount)
            .checked_pow(decimals as u32)
            .ok_or_else(|| LedgerError::InvalidConfig(format!("Decimals too large: {}", decimals)))?;
        if native_base == 0 || native_base % units_per_native != 0 {
            return Err(LedgerError::InvalidConfig(format!(
                "Native base {} is not a positive multiple of 10^{}",
                native_base, decimals
            )));
        }

        Ok(Self {
            name,
            symbol,
            decimals,
            native_base,
            max_supply,
            admin,
        })
    }

    /// Ledger units minted per whole native unit
    pub fn units_per_native(&self) -> Amount {
        // checked at construction
        (10 as Amount).pow(self.decimals as u32)
    }

    /// Smallest native units required to mint one ledger unit
    pub fn unit_price(&self) -> Amount {
        self.native_base / self.units_per_native()
    }

    /// Minimum accepted payment: the exact price of one ledger unit
    pub fn min_payment(&self) -> Amount {
        self.unit_price()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Address {
        Address::new([9u8; 32])
    }

    fn test_config() -> LedgerConfig {
        LedgerConfig::new("Test Token", "TST", 2, 1_000_000_000, 1_000_000, admin()).unwrap()
    }

    #[test]
    fn test_unit_price_derivation() {
        let config = test_config();

        // 10^9 native base, 2 decimals: one unit costs 10^7 smallest native units
        assert_eq!(config.units_per_native(), 100);
        assert_eq!(config.unit_price(), 10_000_000);
        assert_eq!(config.min_payment(), config.unit_price());
    }

    #[test]
    fn test_rejects_empty_name_and_symbol() {
        let result = LedgerConfig::new("", "TST", 2, 1_000_000_000, 1_000_000, admin());
        assert!(matches!(result, Err(LedgerError::InvalidConfig(_))));

        let result = LedgerConfig::new("Test Token", "", 2, 1_000_000_000, 1_000_000, admin());
        assert!(matches!(result, Err(LedgerError::InvalidConfig(_))));

        let result = LedgerConfig::new(
            "Test Token",
            "TOOLONGSYMBOL",
            2,
            1_000_000_000,
            1_000_000,
            admin(),
        );
        assert!(matches!(result, Err(LedgerError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_max_supply_and_zero_admin() {
        let result = LedgerConfig::new("Test Token", "TST", 2, 1_000_000_000, 0, admin());
        assert!(matches!(result, Err(LedgerError::InvalidConfig(_))));

        let result =
            LedgerConfig::new("Test Token", "TST", 2, 1_000_000_000, 1_000_000, Address::zero());
        assert!(matches!(result, Err(LedgerError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_indivisible_native_base() {
        // 10^9 + 1 is not a multiple of 10^2
        let result = LedgerConfig::new("Test Token", "TST", 2, 1_000_000_001, 1_000_000, admin());
        assert!(matches!(result, Err(LedgerError::InvalidConfig(_))));

        let result = LedgerConfig::new("Test Token", "TST", 2, 0, 1_000_000, admin());
        assert!(matches!(result, Err(LedgerError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_oversized_decimals() {
        // 10^60 overflows u128
        let result = LedgerConfig::new("Test Token", "TST", 60, 1_000_000_000, 1_000_000, admin());
        assert!(matches!(result, Err(LedgerError::InvalidConfig(_))));
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = test_config();
        let serialized = serde_json::to_string(&config).expect("serialization failed");
        let deserialized: LedgerConfig =
            serde_json::from_str(&serialized).expect("deserialization failed");
        assert_eq!(config, deserialized);
    }
}
