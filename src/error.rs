//! Unified error types for the v3kit library.
//!
//! All fallible operations across the crate return [`KitError`] as their
//! error type. Every variant is a deterministic function of the input, so
//! none of them is worth retrying.

use thiserror::Error;

use crate::domain::PositionShape;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, KitError>;

/// Errors produced by the price engine, the tick snapper, the range
/// deriver and the path codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KitError {
    /// A price or ratio was zero, negative or not finite.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// A tick fell outside `[-887272, 887272]`.
    #[error("tick {tick} out of range [-887272, 887272]")]
    TickOutOfRange {
        /// The offending tick value.
        tick: i64,
    },

    /// Tick spacing is zero, negative or above the factory limit.
    #[error("invalid tick spacing: {0}")]
    InvalidTickSpacing(&'static str),

    /// Two ticks that must bound a non-empty range do not.
    #[error("invalid tick range: {0}")]
    InvalidTickRange(&'static str),

    /// Fee does not fit in a uint24 or has no standard tick spacing.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Token amount text that cannot be scaled to raw units.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// Malformed address text or an invalid token combination.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// Token and fee counts of a route do not line up.
    #[error("invalid path length: {tokens} tokens, {fees} fees")]
    InvalidPathLength {
        /// Number of token addresses supplied.
        tokens: usize,
        /// Number of fees supplied.
        fees: usize,
    },

    /// Encoded path bytes are too short or not aligned to hop boundaries.
    #[error("malformed path of {len} bytes: {reason}")]
    MalformedPath {
        /// Length of the rejected byte string.
        len: usize,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// The range configuration has no band rule for this shape.
    #[error("unsupported position shape: {0}")]
    UnsupportedPositionShape(PositionShape),

    /// Unknown wire discriminant or name for a position shape.
    #[error("unknown position shape: {0}")]
    UnknownPositionShape(&'static str),

    /// A config struct failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Division by zero in full-precision arithmetic.
    #[error("division by zero")]
    DivisionByZero,
}
