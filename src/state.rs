use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer matching the remote ledger's word size.
    ///
    /// All monetary quantities are base units carried in this type; products
    /// of two in-range amounts always fit, so intermediate math never needs
    /// a wider type.
    pub struct U256(4);
}

/// One point-in-time read of the pool's on-ledger state.
///
/// The three values are advisory snapshots: they may be stale by the time a
/// dependent calculation is submitted back, and the ledger, not this crate,
/// is the final arbiter of acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSnapshot {
    /// Native-currency balance held by the exchange contract.
    pub native_reserve: U256,
    /// Token balance held by the exchange contract.
    pub token_reserve: U256,
    /// Total pool-share tokens minted minus burned.
    pub lp_total_supply: U256,
}

impl PoolSnapshot {
    pub fn new(native_reserve: U256, token_reserve: U256, lp_total_supply: U256) -> Self {
        Self {
            native_reserve,
            token_reserve,
            lp_total_supply,
        }
    }

    /// True when no liquidity exists yet. Deposits against an empty pool must
    /// go through the initial-liquidity path where the user picks both
    /// amounts freely.
    pub fn is_empty(&self) -> bool {
        self.lp_total_supply.is_zero()
    }
}

/// Amounts returned for a pool-share redemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalAmounts {
    pub native_amount: U256,
    pub token_amount: U256,
}

/// Which side of the pair the user is giving up in a swap.
///
/// Selecting the direction here fixes the `(input_reserve, output_reserve)`
/// orientation once, so callers cannot pass the reserves flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    /// Pay native currency, receive tokens.
    NativeToToken,
    /// Pay tokens, receive native currency.
    TokenToNative,
}

/// 20-byte ledger account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(pub [u8; 20]);

#[derive(Debug, thiserror::Error)]
#[error("invalid address: expected 0x-prefixed 40 hex digits")]
pub struct AddressParseError;

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix("0x").ok_or(AddressParseError)?;
        if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AddressParseError);
        }
        let mut bytes = [0u8; 20];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = &hex[i * 2..i * 2 + 2];
            *byte = u8::from_str_radix(pair, 16).map_err(|_| AddressParseError)?;
        }
        Ok(Address(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
