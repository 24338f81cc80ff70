//! Packed byte encoding of multi-hop swap paths.
//!
//! Layout: `token0 | fee0 | token1 | fee1 | ... | tokenN`, each token a
//! 20-byte address and each fee a 3-byte big-endian integer.

use core::fmt;
use core::str::FromStr;

use alloy_primitives::{hex, Bytes};
use tracing::debug;

use super::route::{check_lengths, PoolHop, SwapRoute};
use crate::domain::{PoolFee, TokenAddress, ADDRESS_SIZE};
use crate::error::KitError;

/// Width of an encoded address.
pub const ADDR_SIZE: usize = ADDRESS_SIZE;
/// Width of an encoded fee.
pub const FEE_SIZE: usize = 3;
/// Width of one hop: an address followed by a fee.
pub const OFFSET: usize = ADDR_SIZE + FEE_SIZE;
/// Shortest valid path: one hop plus the final address.
pub const DATA_SIZE: usize = OFFSET + ADDR_SIZE;

/// Encoded swap path.
///
/// Prints as lowercase `0x`-prefixed hex and parses from hex with or
/// without the prefix. Parsing only checks the hex; use
/// [`decode`](Self::decode) to validate the layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct EncodedPath(Bytes);

impl EncodedPath {
    /// Wraps raw bytes without validating them.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the path holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decodes the path back into a route.
    ///
    /// # Errors
    ///
    /// See [`decode_path`].
    pub fn decode(&self) -> crate::error::Result<SwapRoute> {
        decode_path(&self.0)
    }
}

impl AsRef<[u8]> for EncodedPath {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<EncodedPath> for Bytes {
    fn from(path: EncodedPath) -> Self {
        path.0
    }
}

impl FromStr for EncodedPath {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim()).map_err(|_| KitError::MalformedPath {
            len: s.len(),
            reason: "path is not valid hex",
        })?;
        Ok(Self(bytes.into()))
    }
}

impl TryFrom<String> for EncodedPath {
    type Error = KitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EncodedPath> for String {
    fn from(path: EncodedPath) -> Self {
        path.to_string()
    }
}

impl fmt::Display for EncodedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_prefixed(&self.0))
    }
}

/// Encodes `tokens` and the `fees` between them into a packed path.
///
/// # Errors
///
/// Returns [`KitError::InvalidPathLength`] unless there are at least two
/// tokens and `tokens.len() - 1 == fees.len()`.
///
/// # Examples
///
/// ```
/// use v3kit::domain::{PoolFee, TokenAddress};
/// use v3kit::path::encode_path;
///
/// let a = TokenAddress::from_bytes([0xaa; 20]);
/// let b = TokenAddress::from_bytes([0xbb; 20]);
/// let path = encode_path(&[a, b], &[PoolFee::MEDIUM]).expect("one hop");
/// assert_eq!(path.len(), 43);
/// assert_eq!(&path.to_string()[42..48], "000bb8");
///
/// assert!(encode_path(&[a, b], &[PoolFee::LOW, PoolFee::LOW]).is_err());
/// ```
pub fn encode_path(tokens: &[TokenAddress], fees: &[PoolFee]) -> crate::error::Result<EncodedPath> {
    check_lengths(tokens, fees)?;
    Ok(encode_hops(tokens, fees))
}

/// Packs already-validated tokens and fees.
pub(super) fn encode_hops(tokens: &[TokenAddress], fees: &[PoolFee]) -> EncodedPath {
    let mut out = Vec::with_capacity(ADDR_SIZE + fees.len() * OFFSET);
    for (token, fee) in tokens.iter().zip(fees) {
        out.extend_from_slice(&token.as_bytes());
        out.extend_from_slice(&fee.to_be_bytes());
    }
    if let Some(last) = tokens.last() {
        out.extend_from_slice(&last.as_bytes());
    }
    debug!(hops = fees.len(), bytes = out.len(), "encoded swap path");
    EncodedPath(out.into())
}

/// Reads the first pool of a path.
///
/// # Errors
///
/// Returns [`KitError::MalformedPath`] if `bytes` is shorter than
/// [`DATA_SIZE`].
pub fn decode_first_pool(bytes: &[u8]) -> crate::error::Result<PoolHop> {
    let malformed = KitError::MalformedPath {
        len: bytes.len(),
        reason: "path shorter than one hop",
    };
    let (Some(token_a), Some(fee), Some(token_b)) = (
        bytes.get(..ADDR_SIZE),
        bytes.get(ADDR_SIZE..OFFSET),
        bytes.get(OFFSET..DATA_SIZE),
    ) else {
        return Err(malformed);
    };

    let fee: [u8; FEE_SIZE] = fee.try_into().map_err(|_| malformed)?;
    Ok(PoolHop {
        token_a: TokenAddress::from_slice(token_a)?,
        fee: PoolFee::from_be_bytes(fee),
        token_b: TokenAddress::from_slice(token_b)?,
    })
}

/// Decodes a packed path into a route.
///
/// The cursor advances by exactly one hop ([`OFFSET`] bytes) per pool,
/// and the last pool's output token closes the route.
///
/// # Errors
///
/// Returns [`KitError::MalformedPath`] if `bytes` is shorter than
/// [`DATA_SIZE`] or its length is not `20 + 23k`.
///
/// # Examples
///
/// ```
/// use v3kit::path::decode_path;
///
/// let one_hop = [0u8; 43];
/// let route = decode_path(&one_hop).expect("one hop");
/// assert_eq!(route.tokens().len(), 2);
/// assert_eq!(route.fees().len(), 1);
///
/// assert!(decode_path(&[0u8; 42]).is_err());
/// assert!(decode_path(&[0u8; 50]).is_err());
/// ```
pub fn decode_path(bytes: &[u8]) -> crate::error::Result<SwapRoute> {
    if bytes.len() < DATA_SIZE {
        return Err(KitError::MalformedPath {
            len: bytes.len(),
            reason: "path shorter than one hop",
        });
    }
    if (bytes.len() - ADDR_SIZE) % OFFSET != 0 {
        return Err(KitError::MalformedPath {
            len: bytes.len(),
            reason: "path length is not aligned to hop boundaries",
        });
    }

    let hop_count = (bytes.len() - ADDR_SIZE) / OFFSET;
    let mut tokens = Vec::with_capacity(hop_count + 1);
    let mut fees = Vec::with_capacity(hop_count);
    let mut last_out = None;

    let mut rest = bytes;
    while rest.len() >= DATA_SIZE {
        let hop = decode_first_pool(rest)?;
        tokens.push(hop.token_a);
        fees.push(hop.fee);
        last_out = Some(hop.token_b);
        rest = rest.get(OFFSET..).unwrap_or_default();
    }

    let Some(last) = last_out else {
        return Err(KitError::MalformedPath {
            len: bytes.len(),
            reason: "path contains no hop",
        });
    };
    tokens.push(last);

    debug!(hops = fees.len(), "decoded swap path");
    SwapRoute::new(tokens, fees)
}
