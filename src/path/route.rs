//! Multi-hop swap routes.

use crate::domain::{PoolFee, TokenAddress};
use crate::error::KitError;

use super::codec::{encode_hops, EncodedPath};

/// One pool of a route: the token going in, the pool fee and the token
/// coming out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolHop {
    /// Token entering the pool.
    pub token_a: TokenAddress,
    /// Fee tier of the pool.
    pub fee: PoolFee,
    /// Token leaving the pool.
    pub token_b: TokenAddress,
}

/// Ordered token addresses and the fee of each pool between them.
///
/// Always holds at least two tokens and exactly one fee per consecutive
/// pair (`tokens.len() - 1 == fees.len()`).
///
/// # Examples
///
/// ```
/// use v3kit::domain::{PoolFee, TokenAddress};
/// use v3kit::path::SwapRoute;
///
/// let a = TokenAddress::from_bytes([1u8; 20]);
/// let b = TokenAddress::from_bytes([2u8; 20]);
/// let c = TokenAddress::from_bytes([3u8; 20]);
///
/// let route = SwapRoute::new(vec![a, b, c], vec![PoolFee::MEDIUM, PoolFee::LOW])
///     .expect("matching lengths");
/// assert_eq!(route.hop_count(), 2);
/// assert_eq!(route.reversed().first_token(), c);
///
/// let decoded = route.encode().decode().expect("well formed");
/// assert_eq!(decoded, route);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RouteParts", into = "RouteParts")
)]
pub struct SwapRoute {
    tokens: Vec<TokenAddress>,
    fees: Vec<PoolFee>,
}

impl SwapRoute {
    /// Creates a new route.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidPathLength`] unless there are at least two
    /// tokens and exactly one fee fewer than tokens.
    pub fn new(tokens: Vec<TokenAddress>, fees: Vec<PoolFee>) -> crate::error::Result<Self> {
        check_lengths(&tokens, &fees)?;
        Ok(Self { tokens, fees })
    }

    /// Builds a route from explicit hops, checking that each hop starts
    /// where the previous one ended.
    ///
    /// # Errors
    ///
    /// - [`KitError::InvalidPathLength`] if `hops` is empty.
    /// - [`KitError::InvalidToken`] if two consecutive hops do not connect.
    pub fn from_hops(hops: &[PoolHop]) -> crate::error::Result<Self> {
        let Some(first) = hops.first() else {
            return Err(KitError::InvalidPathLength { tokens: 0, fees: 0 });
        };

        let mut tokens = Vec::with_capacity(hops.len() + 1);
        let mut fees = Vec::with_capacity(hops.len());
        tokens.push(first.token_a);
        for hop in hops {
            if tokens.last() != Some(&hop.token_a) {
                return Err(KitError::InvalidToken("consecutive hops do not connect"));
            }
            fees.push(hop.fee);
            tokens.push(hop.token_b);
        }
        Self::new(tokens, fees)
    }

    /// Token addresses in swap order.
    #[must_use]
    pub fn tokens(&self) -> &[TokenAddress] {
        &self.tokens
    }

    /// Pool fees in swap order.
    #[must_use]
    pub fn fees(&self) -> &[PoolFee] {
        &self.fees
    }

    /// Number of pools crossed.
    #[must_use]
    pub fn hop_count(&self) -> usize {
        self.fees.len()
    }

    /// Iterates over the pools in swap order.
    pub fn hops(&self) -> impl Iterator<Item = PoolHop> + '_ {
        self.tokens
            .windows(2)
            .zip(&self.fees)
            .filter_map(|(pair, fee)| match pair {
                [token_a, token_b] => Some(PoolHop {
                    token_a: *token_a,
                    fee: *fee,
                    token_b: *token_b,
                }),
                _ => None,
            })
    }

    /// Token the swap starts from.
    #[must_use]
    pub fn first_token(&self) -> TokenAddress {
        self.tokens.first().copied().unwrap_or_default()
    }

    /// Token the swap ends with.
    #[must_use]
    pub fn last_token(&self) -> TokenAddress {
        self.tokens.last().copied().unwrap_or_default()
    }

    /// The same pools walked backwards, as used for exact-output quotes.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            tokens: self.tokens.iter().rev().copied().collect(),
            fees: self.fees.iter().rev().copied().collect(),
        }
    }

    /// Packs the route into its byte encoding.
    #[must_use]
    pub fn encode(&self) -> EncodedPath {
        encode_hops(&self.tokens, &self.fees)
    }
}

pub(super) fn check_lengths(tokens: &[TokenAddress], fees: &[PoolFee]) -> crate::error::Result<()> {
    if tokens.len() < 2 || tokens.len() - 1 != fees.len() {
        return Err(KitError::InvalidPathLength {
            tokens: tokens.len(),
            fees: fees.len(),
        });
    }
    Ok(())
}

/// Unvalidated field layout used for (de)serialisation.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RouteParts {
    tokens: Vec<TokenAddress>,
    fees: Vec<PoolFee>,
}

#[cfg(feature = "serde")]
impl TryFrom<RouteParts> for SwapRoute {
    type Error = KitError;

    fn try_from(parts: RouteParts) -> Result<Self, Self::Error> {
        Self::new(parts.tokens, parts.fees)
    }
}

#[cfg(feature = "serde")]
impl From<SwapRoute> for RouteParts {
    fn from(route: SwapRoute) -> Self {
        Self {
            tokens: route.tokens,
            fees: route.fees,
        }
    }
}
