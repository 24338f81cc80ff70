//! Pool addressing and pool-level state.

mod address;
mod state;

pub use address::{compute_pool_address, POOL_INIT_CODE_HASH};
pub use state::PoolState;
