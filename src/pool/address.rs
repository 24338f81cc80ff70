//! Deterministic v3 pool addresses.

use alloy_primitives::{b256, keccak256, Address, B256};
use alloy_sol_types::SolValue;

use crate::domain::{sort_tokens, PoolFee, TokenAddress};

/// `keccak256` of the v3 pool creation code.
pub const POOL_INIT_CODE_HASH: B256 =
    b256!("e34f199b19b2b4f47f68442619d555527d244f78a3297ea89325f843f87b8b54");

/// CREATE2 address of the pool for a token pair and fee.
///
/// The salt is `keccak256(abi.encode(token0, token1, fee))` with the
/// tokens sorted by address, so argument order does not matter.
///
/// # Errors
///
/// Returns [`KitError::InvalidToken`](crate::error::KitError::InvalidToken)
/// if both tokens are the same.
///
/// # Examples
///
/// ```
/// use v3kit::chain::ChainId;
/// use v3kit::domain::PoolFee;
/// use v3kit::pool::compute_pool_address;
/// use v3kit::tokens::mainnet;
///
/// let pool = compute_pool_address(
///     ChainId::Mainnet.factory(),
///     mainnet::weth().address(),
///     mainnet::usdc().address(),
///     PoolFee::LOW,
/// )
/// .expect("distinct tokens");
/// assert_eq!(pool.to_string(), "0x88e6A0c2dDD26FEEb64F039a2c41296FcB3f5640");
/// ```
pub fn compute_pool_address(
    factory: TokenAddress,
    token_a: TokenAddress,
    token_b: TokenAddress,
    fee: PoolFee,
) -> crate::error::Result<TokenAddress> {
    let (token0, token1) = sort_tokens(token_a, token_b)?;
    let salt = pool_salt(token0, token1, fee);
    let pool = Address::from(factory).create2(salt.0, POOL_INIT_CODE_HASH.0);
    Ok(TokenAddress::from_address(pool))
}

/// `abi.encode(token0, token1, fee)`.
///
/// A uint24 occupies a full left-padded word, the same as the `u32` it is
/// encoded from here.
fn salt_preimage(token0: TokenAddress, token1: TokenAddress, fee: PoolFee) -> Vec<u8> {
    (token0.address(), token1.address(), fee.get()).abi_encode()
}

fn pool_salt(token0: TokenAddress, token1: TokenAddress, fee: PoolFee) -> B256 {
    keccak256(salt_preimage(token0, token1, fee))
}
