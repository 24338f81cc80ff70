//! Well-known token descriptors.

/// Ethereum mainnet tokens.
///
/// # Examples
///
/// ```
/// use v3kit::tokens::mainnet;
///
/// assert_eq!(mainnet::usdc().decimals().get(), 6);
/// assert_eq!(mainnet::by_symbol("wbtc").map(|t| t.decimals().get()), Some(8));
/// ```
pub mod mainnet {
    use alloy_primitives::{address, Address};

    use crate::domain::{Decimals, TokenAddress, TokenDescriptor};

    const DAI: Address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");
    const USDC: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
    const USDT: Address = address!("dAC17F958D2ee523a2206206994597C13D831ec7");
    const WBTC: Address = address!("2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599");
    const WETH: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
    const LINK: Address = address!("514910771AF9Ca656af840dff83E8264EcF986CA");
    const UNI: Address = address!("1f9840a85d5aF5bf1D1762F925BDADdC4201F984");

    fn token(address: Address, symbol: &str, decimals: Decimals) -> TokenDescriptor {
        TokenDescriptor::new(TokenAddress::from_address(address), symbol, decimals)
    }

    /// Dai Stablecoin.
    #[must_use]
    pub fn dai() -> TokenDescriptor {
        token(DAI, "DAI", Decimals::EIGHTEEN)
    }

    /// USD Coin.
    #[must_use]
    pub fn usdc() -> TokenDescriptor {
        token(USDC, "USDC", Decimals::SIX)
    }

    /// Tether USD.
    #[must_use]
    pub fn usdt() -> TokenDescriptor {
        token(USDT, "USDT", Decimals::SIX)
    }

    /// Wrapped BTC.
    #[must_use]
    pub fn wbtc() -> TokenDescriptor {
        token(WBTC, "WBTC", Decimals::EIGHT)
    }

    /// Wrapped Ether.
    #[must_use]
    pub fn weth() -> TokenDescriptor {
        token(WETH, "WETH", Decimals::EIGHTEEN)
    }

    /// ChainLink Token.
    #[must_use]
    pub fn link() -> TokenDescriptor {
        token(LINK, "LINK", Decimals::EIGHTEEN)
    }

    /// Uniswap.
    #[must_use]
    pub fn uni() -> TokenDescriptor {
        token(UNI, "UNI", Decimals::EIGHTEEN)
    }

    /// Every token in this list.
    #[must_use]
    pub fn all() -> Vec<TokenDescriptor> {
        vec![dai(), usdc(), usdt(), wbtc(), weth(), link(), uni()]
    }

    /// Looks a token up by symbol, ignoring case.
    #[must_use]
    pub fn by_symbol(symbol: &str) -> Option<TokenDescriptor> {
        all()
            .into_iter()
            .find(|t| t.symbol().eq_ignore_ascii_case(symbol))
    }

}
