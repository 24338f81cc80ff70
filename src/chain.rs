//! Supported networks and their per-chain addresses.

use core::fmt;

use alloy_primitives::address;

use crate::domain::TokenAddress;
use crate::error::KitError;

/// Uniswap v3 factory on every supported chain except Celo.
pub const V3_FACTORY: TokenAddress =
    TokenAddress::from_address(address!("1F98431c8aD98523631AE4a59f267346ea31F984"));

/// Uniswap v3 factory on Celo.
pub const V3_FACTORY_CELO: TokenAddress =
    TokenAddress::from_address(address!("AfE208a311B21f13EF87E33A90049fC17A7acDEc"));

/// Networks the kit knows factory and wrapped-native addresses for.
///
/// # Examples
///
/// ```
/// use v3kit::chain::ChainId;
///
/// let chain = ChainId::try_from(42_161u64).expect("known chain");
/// assert_eq!(chain, ChainId::Arbitrum);
/// assert_eq!(chain.wrapped_native_symbol(), "WETH");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u64", into = "u64")
)]
pub enum ChainId {
    /// Ethereum mainnet.
    #[default]
    Mainnet,
    /// Local fork of mainnet (Hardhat / Anvil default id).
    MainnetFork,
    /// Optimism.
    Optimism,
    /// Polygon PoS.
    Polygon,
    /// Arbitrum One.
    Arbitrum,
    /// Celo.
    Celo,
}

impl ChainId {
    /// All supported chains.
    pub const ALL: [Self; 6] = [
        Self::Mainnet,
        Self::MainnetFork,
        Self::Optimism,
        Self::Polygon,
        Self::Arbitrum,
        Self::Celo,
    ];

    /// EIP-155 chain id.
    #[must_use]
    pub const fn id(&self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::MainnetFork => 31_337,
            Self::Optimism => 10,
            Self::Polygon => 137,
            Self::Arbitrum => 42_161,
            Self::Celo => 42_220,
        }
    }

    /// Uniswap v3 factory deployed on this chain.
    #[must_use]
    pub const fn factory(&self) -> TokenAddress {
        match self {
            Self::Celo => V3_FACTORY_CELO,
            _ => V3_FACTORY,
        }
    }

    /// Wrapped native token (WETH, WMATIC or CELO).
    #[must_use]
    pub const fn wrapped_native(&self) -> TokenAddress {
        let addr = match self {
            Self::Mainnet | Self::MainnetFork => {
                address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2")
            }
            Self::Optimism => address!("4200000000000000000000000000000000000006"),
            Self::Polygon => address!("0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"),
            Self::Arbitrum => address!("82aF49447D8a07e3bd95BD0d56f35241523fBab1"),
            Self::Celo => address!("471EcE3750Da237f93B8E339c536989b8978a438"),
        };
        TokenAddress::from_address(addr)
    }

    /// Symbol of the wrapped native token.
    #[must_use]
    pub const fn wrapped_native_symbol(&self) -> &'static str {
        match self {
            Self::Mainnet | Self::MainnetFork | Self::Optimism | Self::Arbitrum => "WETH",
            Self::Polygon => "WMATIC",
            Self::Celo => "CELO",
        }
    }

    /// Returns `true` if `token` is this chain's wrapped native token.
    #[must_use]
    pub fn is_wrapped_native(&self, token: TokenAddress) -> bool {
        token == self.wrapped_native()
    }

    /// Human-readable network name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::MainnetFork => "mainnet-fork",
            Self::Optimism => "optimism",
            Self::Polygon => "polygon",
            Self::Arbitrum => "arbitrum",
            Self::Celo => "celo",
        }
    }
}

impl TryFrom<u64> for ChainId {
    type Error = KitError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|chain| chain.id() == value)
            .ok_or(KitError::InvalidConfiguration("unsupported chain id"))
    }
}

impl From<ChainId> for u64 {
    fn from(chain: ChainId) -> Self {
        chain.id()
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for chain in ChainId::ALL {
            assert_eq!(ChainId::try_from(chain.id()), Ok(chain));
        }
        assert!(ChainId::try_from(56u64).is_err());
    }

    #[test]
    fn celo_uses_its_own_factory() {
        assert_eq!(ChainId::Celo.factory(), V3_FACTORY_CELO);
        for chain in ChainId::ALL.into_iter().filter(|c| *c != ChainId::Celo) {
            assert_eq!(chain.factory(), V3_FACTORY);
        }
    }

    #[test]
    fn fork_shares_mainnet_weth() {
        assert_eq!(
            ChainId::MainnetFork.wrapped_native(),
            ChainId::Mainnet.wrapped_native()
        );
        assert_eq!(
            ChainId::Mainnet.wrapped_native().to_string(),
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
        );
    }

    #[test]
    fn wrapped_native_check() {
        let wmatic = ChainId::Polygon.wrapped_native();
        assert!(ChainId::Polygon.is_wrapped_native(wmatic));
        assert!(!ChainId::Mainnet.is_wrapped_native(wmatic));
    }

    #[test]
    fn display() {
        assert_eq!(ChainId::Arbitrum.to_string(), "arbitrum (42161)");
    }
}
