//! Standard normal distribution functions.
//!
//! The CDF is evaluated through the complementary error function rather
//! than a series expansion, which keeps the tails accurate over the whole
//! real line. Both functions are generic over `T: Float` so the kernel
//! works with `f64` and `f32` alike.

use num_traits::Float;

/// 1 / sqrt(2π), the normalising constant of the standard normal density.
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function.
///
/// Abramowitz & Stegun rational approximation 7.1.26, evaluated with
/// Horner's method; maximum absolute error 1.5e-7 for all x.
#[inline]
fn erfc<T: Float>(x: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();

    // A&S 7.1.26 coefficients
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let abs_x = x.abs();
    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let tail = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < T::zero() {
        two - tail
    } else {
        tail
    }
}

/// Standard normal cumulative distribution function N(x).
///
/// Computed as `erfc(-x / √2) / 2`, so the reflection identity
/// `N(x) + N(-x) = 1` holds to machine precision. Accurate to at least
/// 1.5e-7 for all finite x.
///
/// # Examples
/// ```
/// use vanilla_kernel::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();

    half * erfc(-x / sqrt_2)
}

/// Standard normal probability density function N'(x).
///
/// N'(x) = exp(-x² / 2) / √(2π)
///
/// # Examples
/// ```
/// use vanilla_kernel::distributions::norm_pdf;
///
/// // N'(0) = 1 / sqrt(2π)
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    let norm = T::from(FRAC_1_SQRT_2PI).unwrap();

    norm * (-half * x * x).exp()
}
