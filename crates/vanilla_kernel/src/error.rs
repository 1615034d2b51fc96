//! Error types for contract validation.

use thiserror::Error;

/// Invalid-input errors raised by the validating contract constructor.
///
/// The kernel itself never returns these: `price` and `greeks` trust their
/// documented preconditions. Callers that prefer fail-fast behaviour over
/// raw throughput construct contracts through [`Contract::try_new`], which
/// rejects each non-positive field with the matching variant.
///
/// [`Contract::try_new`]: crate::Contract::try_new
///
/// # Examples
/// ```
/// use vanilla_kernel::KernelError;
///
/// let err = KernelError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum KernelError {
    /// Non-positive spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The rejected spot value
        spot: f64,
    },

    /// Non-positive strike price.
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The rejected strike value
        strike: f64,
    },

    /// Non-positive volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The rejected volatility value
        volatility: f64,
    },

    /// Non-positive time to expiry.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The rejected expiry value, in years
        expiry: f64,
    },
}
