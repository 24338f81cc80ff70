//! Token metadata supplied by the caller.

use core::fmt;

use num_bigint::BigUint;

use super::{Decimals, TokenAddress};

/// Address, symbol and decimal count of a token.
///
/// Immutable once built. Equality covers all three fields; pool-side
/// ordering only looks at the address (see [`TokenPair`](super::TokenPair)).
///
/// # Examples
///
/// ```
/// use v3kit::domain::{Decimals, TokenAddress, TokenDescriptor};
///
/// let usdc = TokenDescriptor::new(
///     TokenAddress::from_bytes([1u8; 20]),
///     "USDC",
///     Decimals::new(6),
/// );
/// assert_eq!(usdc.symbol(), "USDC");
/// assert_eq!(usdc.decimals().get(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenDescriptor {
    address: TokenAddress,
    symbol: String,
    decimals: Decimals,
}

impl TokenDescriptor {
    /// Creates a new descriptor. Both address and decimals are validated at
    /// their own construction site, so this cannot fail.
    #[must_use]
    pub fn new(address: TokenAddress, symbol: impl Into<String>, decimals: Decimals) -> Self {
        Self {
            address,
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Returns the token address.
    #[must_use]
    pub const fn address(&self) -> TokenAddress {
        self.address
    }

    /// Returns the ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the token decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Parses a human amount of this token into raw units.
    ///
    /// # Errors
    ///
    /// See [`Decimals::parse_units`].
    pub fn parse_units(&self, text: &str) -> crate::error::Result<BigUint> {
        self.decimals.parse_units(text)
    }

    /// Formats raw units of this token as a human amount.
    #[must_use]
    pub fn format_units(&self, raw: &BigUint) -> String {
        self.decimals.format_units(raw)
    }
}

impl fmt::Display for TokenDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.address)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn sample_token(addr_byte: u8, symbol: &str, dec: u8) -> TokenDescriptor {
        TokenDescriptor::new(
            TokenAddress::from_bytes([addr_byte; 20]),
            symbol,
            Decimals::new(dec),
        )
    }

    #[test]
    fn accessors() {
        let tok = sample_token(1, "USDC", 6);
        assert_eq!(tok.address(), TokenAddress::from_bytes([1u8; 20]));
        assert_eq!(tok.symbol(), "USDC");
        assert_eq!(tok.decimals().get(), 6);
    }

    #[test]
    fn unit_helpers_delegate_to_decimals() {
        let tok = sample_token(1, "WBTC", 8);
        let Ok(raw) = tok.parse_units("2.5") else {
            panic!("expected Ok");
        };
        assert_eq!(raw, BigUint::from(250_000_000u64));
        assert_eq!(tok.format_units(&raw), "2.5");
    }

    #[test]
    fn equality_requires_all_fields() {
        assert_ne!(sample_token(1, "A", 6), sample_token(1, "A", 8));
        assert_ne!(sample_token(1, "A", 6), sample_token(1, "B", 6));
        assert_eq!(sample_token(1, "A", 6), sample_token(1, "A", 6));
    }

    #[test]
    fn display_includes_symbol_and_address() {
        let tok = sample_token(0, "ZERO", 18);
        assert_eq!(
            tok.to_string(),
            "ZERO (0x0000000000000000000000000000000000000000)"
        );
    }
}
