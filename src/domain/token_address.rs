//! EVM token address.

use core::fmt;
use core::str::FromStr;

use alloy_primitives::{hex, Address};

use crate::error::KitError;

/// Width of an EVM address in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// A 20-byte EVM address identifying a token, pool or factory.
///
/// Ordering is the raw byte ordering, which is the ordering the v3
/// factory uses to decide which token of a pair is `token0`. Display
/// prints the EIP-55 checksummed form.
///
/// # Examples
///
/// ```
/// use v3kit::domain::TokenAddress;
///
/// let usdc: TokenAddress = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"
///     .parse()
///     .expect("valid hex");
/// assert_eq!(usdc.to_string(), "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenAddress(Address);

impl TokenAddress {
    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(Address::new(bytes))
    }

    /// Wraps an [`alloy_primitives::Address`].
    #[must_use]
    pub const fn from_address(address: Address) -> Self {
        Self(address)
    }

    /// Builds an address from a 20-byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidToken`] if `bytes` is not exactly 20
    /// bytes long.
    pub fn from_slice(bytes: &[u8]) -> crate::error::Result<Self> {
        let arr: [u8; ADDRESS_SIZE] = bytes
            .try_into()
            .map_err(|_| KitError::InvalidToken("address must be 20 bytes"))?;
        Ok(Self::from_bytes(arr))
    }

    /// Returns the underlying 20-byte representation.
    #[must_use]
    pub fn as_bytes(&self) -> [u8; ADDRESS_SIZE] {
        self.0 .0 .0
    }

    /// Returns the wrapped [`alloy_primitives::Address`].
    #[must_use]
    pub const fn address(&self) -> Address {
        self.0
    }

    /// Returns the all-zero address.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Address::ZERO)
    }

    /// EIP-55 checksummed hex with `0x` prefix.
    #[must_use]
    pub fn to_checksum(&self) -> String {
        self.0.to_checksum(None)
    }

    /// Lowercase hex with `0x` prefix.
    #[must_use]
    pub fn to_lower_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for TokenAddress {
    type Err = KitError;

    /// Parses `0x`-prefixed or bare hex in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_str(s.trim())
            .map(Self)
            .map_err(|_| KitError::InvalidToken("address must be 20 bytes of hex"))
    }
}

impl From<Address> for TokenAddress {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl From<TokenAddress> for Address {
    fn from(address: TokenAddress) -> Self {
        address.0
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}
