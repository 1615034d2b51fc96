//! # Vanilla Batch (L2: Batch Evaluation)
//!
//! Prices an ordered collection of contracts through the
//! [`vanilla_kernel`] pricing kernel.
//!
//! Every element is computed independently: no aggregation, no ordering
//! dependency, no shared mutable accumulator. Output index `i` always
//! corresponds to input index `i` and the output length always equals the
//! input length. That independence is what makes the parallel variant a
//! plain data-parallel map with no synchronisation.
//!
//! The batch layer performs no per-element validation or error capture: a
//! contract that violates the kernel's preconditions produces a degenerate
//! numeric output at its own index without affecting any other index.
//!
//! ## Examples
//! ```
//! use vanilla_batch::price_batch;
//! use vanilla_kernel::{Contract, OptionType};
//!
//! let book = vec![
//!     Contract::new(100.0, 105.0, 0.05, 0.2, 0.5, OptionType::Call),
//!     Contract::new(100.0, 105.0, 0.05, 0.2, 0.5, OptionType::Put),
//! ];
//!
//! let prices = price_batch(&book);
//! assert_eq!(prices.len(), 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

use num_traits::Float;
use rayon::prelude::*;
use vanilla_kernel::{price, Contract};

/// Default element count at which [`price_batch_with`] switches from the
/// sequential pass to the rayon pass.
///
/// Each kernel call is a handful of transcendental evaluations, so the
/// fork-join overhead only pays off on sizeable books.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

/// Prices each contract in order, sequentially.
///
/// This is the reference behaviour: a single pass with the output capacity
/// reserved up front. At millions of contracts the per-element
/// floating-point work dominates, so the one allocation here is the only
/// memory cost.
///
/// An empty slice yields an empty vector.
///
/// # Examples
/// ```
/// use vanilla_batch::price_batch;
/// use vanilla_kernel::{price, Contract, OptionType};
///
/// let book = vec![
///     Contract::new(100.0, 90.0, 0.05, 0.2, 1.0, OptionType::Call),
///     Contract::new(100.0, 110.0, 0.05, 0.2, 1.0, OptionType::Put),
/// ];
///
/// let prices = price_batch(&book);
/// assert_eq!(prices[0], price(&book[0]));
/// assert_eq!(prices[1], price(&book[1]));
/// ```
pub fn price_batch<T: Float>(contracts: &[Contract<T>]) -> Vec<T> {
    let mut prices = Vec::with_capacity(contracts.len());

    for contract in contracts {
        prices.push(price(contract));
    }

    prices
}

/// Prices each contract in order, in parallel across the rayon thread pool.
///
/// Results are identical to [`price_batch`] element for element: the
/// indexed parallel map collects into the output slot matching each input
/// index regardless of execution order.
pub fn par_price_batch<T>(contracts: &[Contract<T>]) -> Vec<T>
where
    T: Float + Send + Sync,
{
    contracts.par_iter().map(price).collect()
}

/// Configuration for threshold-gated batch evaluation.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Minimum contract count before the parallel pass is used.
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl BatchConfig {
    /// Creates a configuration with the given parallel threshold.
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    /// Returns whether a batch of `n_contracts` should run in parallel.
    #[inline]
    pub fn should_parallelize(&self, n_contracts: usize) -> bool {
        n_contracts >= self.parallel_threshold
    }
}

/// Prices a batch, choosing the sequential or parallel pass by size.
///
/// Small books stay on the calling thread; books at or above the
/// configured threshold are sharded across the rayon pool. Ordering and
/// results are the same either way.
pub fn price_batch_with<T>(contracts: &[Contract<T>], config: &BatchConfig) -> Vec<T>
where
    T: Float + Send + Sync,
{
    if config.should_parallelize(contracts.len()) {
        par_price_batch(contracts)
    } else {
        price_batch(contracts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanilla_kernel::OptionType;

    fn sample_book(n: usize) -> Vec<Contract<f64>> {
        (0..n)
            .map(|i| {
                let option_type = if i % 2 == 0 {
                    OptionType::Call
                } else {
                    OptionType::Put
                };
                Contract::new(
                    90.0 + i as f64,
                    100.0,
                    0.05,
                    0.15 + 0.01 * i as f64,
                    0.5 + 0.1 * i as f64,
                    option_type,
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_batch() {
        let prices = price_batch::<f64>(&[]);
        assert!(prices.is_empty());
    }

    #[test]
    fn test_length_preserved() {
        let book = sample_book(7);
        assert_eq!(price_batch(&book).len(), 7);
    }

    #[test]
    fn test_order_matches_kernel() {
        let book = sample_book(10);
        let prices = price_batch(&book);
        for (i, contract) in book.iter().enumerate() {
            assert_eq!(prices[i], price(contract));
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let book = sample_book(25);
        assert_eq!(par_price_batch(&book), price_batch(&book));
    }

    #[test]
    fn test_config_default_threshold() {
        let config = BatchConfig::default();
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert!(!config.should_parallelize(DEFAULT_PARALLEL_THRESHOLD - 1));
        assert!(config.should_parallelize(DEFAULT_PARALLEL_THRESHOLD));
    }

    #[test]
    fn test_price_batch_with_both_regimes() {
        let book = sample_book(20);
        let sequential = price_batch_with(&book, &BatchConfig::new(1_000));
        let parallel = price_batch_with(&book, &BatchConfig::new(1));
        assert_eq!(sequential, parallel);
    }
}
