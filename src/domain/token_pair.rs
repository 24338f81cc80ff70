//! Ordered pair of distinct tokens.

use super::{TokenAddress, TokenDescriptor};
use crate::error::KitError;

/// The two tokens of a pool, canonically sorted by address.
///
/// `token0().address() < token1().address()` always holds, which is the
/// order the v3 factory assigns when creating a pool.
///
/// # Examples
///
/// ```
/// use v3kit::domain::{Decimals, TokenAddress, TokenDescriptor, TokenPair};
///
/// let a = TokenDescriptor::new(TokenAddress::from_bytes([1u8; 20]), "A", Decimals::new(6));
/// let b = TokenDescriptor::new(TokenAddress::from_bytes([2u8; 20]), "B", Decimals::new(18));
///
/// let pair = TokenPair::new(b.clone(), a.clone()).expect("distinct tokens");
/// assert_eq!(pair.token0(), &a);
/// assert_eq!(pair.token1(), &b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenPair {
    token0: TokenDescriptor,
    token1: TokenDescriptor,
}

impl TokenPair {
    /// Creates a canonically-ordered pair from two tokens in any order.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidToken`] if both tokens share an address.
    pub fn new(token_a: TokenDescriptor, token_b: TokenDescriptor) -> crate::error::Result<Self> {
        if token_a.address() == token_b.address() {
            return Err(KitError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }

        let (token0, token1) = if token_a.address() < token_b.address() {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        Ok(Self { token0, token1 })
    }

    /// Returns the lower-address token.
    #[must_use]
    pub const fn token0(&self) -> &TokenDescriptor {
        &self.token0
    }

    /// Returns the higher-address token.
    #[must_use]
    pub const fn token1(&self) -> &TokenDescriptor {
        &self.token1
    }

    /// Returns `true` if a token with this address is part of the pair.
    #[must_use]
    pub fn contains(&self, address: TokenAddress) -> bool {
        self.token0.address() == address || self.token1.address() == address
    }

    /// Returns the counterpart of the token at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidToken`] if `address` is not in the pair.
    pub fn other(&self, address: TokenAddress) -> crate::error::Result<&TokenDescriptor> {
        if address == self.token0.address() {
            Ok(&self.token1)
        } else if address == self.token1.address() {
            Ok(&self.token0)
        } else {
            Err(KitError::InvalidToken("token is not part of this pair"))
        }
    }
}

/// Sorts two addresses into `(token0, token1)` order.
///
/// # Errors
///
/// Returns [`KitError::InvalidToken`] if the addresses are equal.
pub fn sort_tokens(
    token_a: TokenAddress,
    token_b: TokenAddress,
) -> crate::error::Result<(TokenAddress, TokenAddress)> {
    match token_a.cmp(&token_b) {
        core::cmp::Ordering::Less => Ok((token_a, token_b)),
        core::cmp::Ordering::Greater => Ok((token_b, token_a)),
        core::cmp::Ordering::Equal => Err(KitError::InvalidToken(
            "token pair requires two distinct addresses",
        )),
    }
}
