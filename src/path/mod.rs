//! Multi-hop swap routes and their packed byte encoding.
//!
//! A [`SwapRoute`] is the typed form; an [`EncodedPath`] is what a quoter
//! or router contract receives.

mod codec;
mod route;

pub use codec::{
    decode_first_pool, decode_path, encode_path, EncodedPath, ADDR_SIZE, DATA_SIZE, FEE_SIZE,
    OFFSET,
};
pub use route::{PoolHop, SwapRoute};
