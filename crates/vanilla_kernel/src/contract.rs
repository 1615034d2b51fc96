//! Option contract inputs to the pricing kernel.
//!
//! A [`Contract`] is an immutable value type: it carries no identity beyond
//! its field values and is consumed by a single kernel call.

use num_traits::Float;

use crate::error::KernelError;

/// European option style.
///
/// A closed two-variant discriminator; there is no behavioural extension
/// point, so pricing code matches on it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionType {
    /// Returns `true` for a call option.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }
}

/// The five scalar Black-Scholes inputs plus the option type.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use vanilla_kernel::{Contract, OptionType};
///
/// let contract = Contract::new(100.0_f64, 105.0, 0.05, 0.2, 0.5, OptionType::Call);
/// assert_eq!(contract.spot(), 100.0);
/// assert_eq!(contract.strike(), 105.0);
/// assert!(contract.option_type().is_call());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contract<T: Float> {
    spot: T,
    strike: T,
    rate: T,
    volatility: T,
    expiry: T,
    option_type: OptionType,
}

impl<T: Float> Contract<T> {
    /// Creates a contract without validating its fields.
    ///
    /// This is the high-throughput entry point: no branch is spent on
    /// degenerate inputs. All six fields are mandatory; nothing defaults.
    ///
    /// # Preconditions
    /// `spot > 0`, `strike > 0`, `volatility > 0` and `expiry > 0`. The
    /// rate may be any real. Violating these is not detected here or in the
    /// kernel: zero volatility or expiry divides by zero in `d1` and the
    /// price/Greeks come back NaN or infinite. Use [`Contract::try_new`]
    /// when fail-fast validation is preferred.
    #[inline]
    pub fn new(
        spot: T,
        strike: T,
        rate: T,
        volatility: T,
        expiry: T,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            rate,
            volatility,
            expiry,
            option_type,
        }
    }

    /// Creates a contract, rejecting non-positive spot, strike, volatility
    /// or expiry.
    ///
    /// # Errors
    /// - [`KernelError::InvalidSpot`] if `spot <= 0`
    /// - [`KernelError::InvalidStrike`] if `strike <= 0`
    /// - [`KernelError::InvalidVolatility`] if `volatility <= 0`
    /// - [`KernelError::InvalidExpiry`] if `expiry <= 0`
    ///
    /// # Examples
    /// ```
    /// use vanilla_kernel::{Contract, OptionType};
    ///
    /// let ok = Contract::try_new(100.0_f64, 100.0, 0.05, 0.2, 1.0, OptionType::Put);
    /// assert!(ok.is_ok());
    ///
    /// let expired = Contract::try_new(100.0_f64, 100.0, 0.05, 0.2, 0.0, OptionType::Put);
    /// assert!(expired.is_err());
    /// ```
    pub fn try_new(
        spot: T,
        strike: T,
        rate: T,
        volatility: T,
        expiry: T,
        option_type: OptionType,
    ) -> Result<Self, KernelError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(KernelError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if strike <= zero {
            return Err(KernelError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if volatility <= zero {
            return Err(KernelError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        if expiry <= zero {
            return Err(KernelError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self::new(spot, strike, rate, volatility, expiry, option_type))
    }

    /// Returns the spot price (S).
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price (K).
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the continuously compounded risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility (σ).
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the time to expiry in years (T).
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_all_fields() {
        let contract = Contract::new(100.0_f64, 105.0, 0.05, 0.2, 0.5, OptionType::Call);
        assert_eq!(contract.spot(), 100.0);
        assert_eq!(contract.strike(), 105.0);
        assert_eq!(contract.rate(), 0.05);
        assert_eq!(contract.volatility(), 0.2);
        assert_eq!(contract.expiry(), 0.5);
        assert_eq!(contract.option_type(), OptionType::Call);
    }

    #[test]
    fn test_try_new_valid() {
        let contract = Contract::try_new(100.0_f64, 105.0, 0.05, 0.2, 0.5, OptionType::Put);
        assert!(contract.is_ok());
    }

    #[test]
    fn test_try_new_negative_rate_allowed() {
        // Negative rates are a valid market regime
        let contract = Contract::try_new(100.0_f64, 105.0, -0.01, 0.2, 0.5, OptionType::Call);
        assert!(contract.is_ok());
    }

    #[test]
    fn test_try_new_invalid_spot() {
        let result = Contract::try_new(-100.0_f64, 105.0, 0.05, 0.2, 0.5, OptionType::Call);
        match result.unwrap_err() {
            KernelError::InvalidSpot { spot } => assert_eq!(spot, -100.0),
            other => panic!("Expected InvalidSpot, got {:?}", other),
        }
    }

    #[test]
    fn test_try_new_invalid_strike() {
        let result = Contract::try_new(100.0_f64, 0.0, 0.05, 0.2, 0.5, OptionType::Call);
        match result.unwrap_err() {
            KernelError::InvalidStrike { strike } => assert_eq!(strike, 0.0),
            other => panic!("Expected InvalidStrike, got {:?}", other),
        }
    }

    #[test]
    fn test_try_new_invalid_volatility() {
        let result = Contract::try_new(100.0_f64, 105.0, 0.05, -0.2, 0.5, OptionType::Call);
        match result.unwrap_err() {
            KernelError::InvalidVolatility { volatility } => assert_eq!(volatility, -0.2),
            other => panic!("Expected InvalidVolatility, got {:?}", other),
        }
    }

    #[test]
    fn test_try_new_invalid_expiry() {
        let result = Contract::try_new(100.0_f64, 105.0, 0.05, 0.2, 0.0, OptionType::Call);
        match result.unwrap_err() {
            KernelError::InvalidExpiry { expiry } => assert_eq!(expiry, 0.0),
            other => panic!("Expected InvalidExpiry, got {:?}", other),
        }
    }

    #[test]
    fn test_option_type_is_call() {
        assert!(OptionType::Call.is_call());
        assert!(!OptionType::Put.is_call());
    }

    #[test]
    fn test_contract_is_copy() {
        let a = Contract::new(100.0_f64, 100.0, 0.05, 0.2, 1.0, OptionType::Call);
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn test_f32_compatibility() {
        let contract = Contract::try_new(100.0_f32, 105.0, 0.05, 0.2, 0.5, OptionType::Call);
        assert!(contract.is_ok());
    }
}
