//! Closed-form Black-Scholes price and Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Conventions
//!
//! - Vega is quoted per one percentage point of volatility (textbook vega
//!   divided by 100).
//! - Theta is quoted per calendar day (annual rate divided by 365).

use num_traits::Float;

use crate::contract::{Contract, OptionType};
use crate::distributions::{norm_cdf, norm_pdf};

/// Price sensitivities of one contract, computed jointly by [`greeks`].
///
/// For valid inputs: call delta lies in [0, 1] and put delta in [-1, 0];
/// gamma and vega are non-negative and identical for a call and a put
/// sharing the same parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// ∂V/∂S.
    pub delta: T,
    /// ∂²V/∂S²; peaks near the money.
    pub gamma: T,
    /// ∂V/∂σ per 1% absolute volatility move.
    pub vega: T,
    /// ∂V/∂T per calendar day; usually negative (time decay).
    pub theta: T,
}

/// Terms shared by the price and every Greek, computed once per kernel call.
///
/// Sharing d₁ between gamma and vega is a consistency guarantee as much as
/// an optimisation: both consume the identical intermediate value instead
/// of two independently rounded recomputations.
struct Factors<T> {
    d1: T,
    d2: T,
    discount: T,
    sqrt_t: T,
}

impl<T: Float> Factors<T> {
    #[inline]
    fn of(contract: &Contract<T>) -> Self {
        let half = T::from(0.5).unwrap();

        let sqrt_t = contract.expiry().sqrt();
        let vol_sqrt_t = contract.volatility() * sqrt_t;

        // d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T)
        let log_moneyness = (contract.spot() / contract.strike()).ln();
        let drift =
            (contract.rate() + half * contract.volatility() * contract.volatility())
                * contract.expiry();
        let d1 = (log_moneyness + drift) / vol_sqrt_t;

        Self {
            d1,
            d2: d1 - vol_sqrt_t,
            discount: (-contract.rate() * contract.expiry()).exp(),
            sqrt_t,
        }
    }
}

/// Black-Scholes present value of a European option.
///
/// Pure and deterministic: the result is fully determined by the contract's
/// six fields, and repeated calls are bit-identical.
///
/// # Preconditions
/// `spot > 0`, `strike > 0`, `volatility > 0`, `expiry > 0`. These are not
/// checked here: a zero volatility or expiry divides by zero in d₁ and the
/// result is NaN or infinite. Validate up front via
/// [`Contract::try_new`](crate::Contract::try_new) if needed.
///
/// # Examples
/// ```
/// use vanilla_kernel::{price, Contract, OptionType};
///
/// let call: Contract<f64> = Contract::new(100.0, 105.0, 0.05, 0.2, 0.5, OptionType::Call);
/// assert!((price(&call) - 4.5817).abs() < 1e-3);
/// ```
#[inline]
pub fn price<T: Float>(contract: &Contract<T>) -> T {
    let f = Factors::of(contract);
    let k_disc = contract.strike() * f.discount;

    match contract.option_type() {
        OptionType::Call => contract.spot() * norm_cdf(f.d1) - k_disc * norm_cdf(f.d2),
        OptionType::Put => k_disc * norm_cdf(-f.d2) - contract.spot() * norm_cdf(-f.d1),
    }
}

/// All four Greeks of a European option in a single pass.
///
/// d₁, d₂, the discount factor and N'(d₁) are computed once and shared
/// across delta, gamma, vega and theta.
///
/// # Preconditions
/// Same as [`price`]; degenerate inputs propagate NaN/inf unchecked.
///
/// # Examples
/// ```
/// use vanilla_kernel::{greeks, Contract, OptionType};
///
/// let call: Contract<f64> = Contract::new(100.0, 105.0, 0.05, 0.2, 0.5, OptionType::Call);
/// let g = greeks(&call);
/// assert!((g.delta - 0.4612).abs() < 1e-3);
/// assert!((g.gamma - 0.0281).abs() < 1e-3);
/// ```
#[inline]
pub fn greeks<T: Float>(contract: &Contract<T>) -> Greeks<T> {
    let f = Factors::of(contract);
    let pdf_d1 = norm_pdf(f.d1); // N'(d1): shared by gamma, vega and theta

    let two = T::from(2.0).unwrap();
    let per_vol_point = T::from(100.0).unwrap();
    let days_per_year = T::from(365.0).unwrap();

    let delta = match contract.option_type() {
        OptionType::Call => norm_cdf(f.d1),
        // Equivalent to -N(-d1)
        OptionType::Put => norm_cdf(f.d1) - T::one(),
    };

    let gamma = pdf_d1 / (contract.spot() * contract.volatility() * f.sqrt_t);

    let vega = contract.spot() * pdf_d1 * f.sqrt_t / per_vol_point;

    let decay = -(contract.spot() * pdf_d1 * contract.volatility()) / (two * f.sqrt_t);
    let carry = contract.rate() * contract.strike() * f.discount;
    let theta = match contract.option_type() {
        OptionType::Call => (decay - carry * norm_cdf(f.d2)) / days_per_year,
        OptionType::Put => (decay + carry * norm_cdf(-f.d2)) / days_per_year,
    };

    Greeks {
        delta,
        gamma,
        vega,
        theta,
    }
}
