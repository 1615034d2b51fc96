//! # Vanilla Kernel (L1: Pricing Kernel)
//!
//! Closed-form Black-Scholes pricing and analytical Greeks for European
//! call and put options.
//!
//! This crate provides:
//! - [`Contract`]: the five scalar model inputs plus the option type
//! - [`price`]: theoretical present value of a single contract
//! - [`greeks`]: delta, gamma, vega and theta computed in one pass
//! - [`distributions`]: erfc-based standard normal CDF and PDF
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: works with both `f64` and `f32`
//! - **Unchecked hot path**: `price` and `greeks` trust their documented
//!   preconditions and never branch on degenerate inputs; callers that
//!   want fail-fast behaviour construct contracts via [`Contract::try_new`]
//! - **Numerical stability**: the normal CDF is evaluated through the
//!   complementary error function, accurate across the whole real line
//!
//! ## Examples
//! ```
//! use vanilla_kernel::{greeks, price, Contract, OptionType};
//!
//! let contract: Contract<f64> = Contract::new(100.0, 105.0, 0.05, 0.2, 0.5, OptionType::Call);
//!
//! let value = price(&contract);
//! assert!((value - 4.5817).abs() < 1e-3);
//!
//! let g = greeks(&contract);
//! assert!(g.delta > 0.0 && g.delta < 1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod black_scholes;
pub mod contract;
pub mod distributions;
pub mod error;

// Re-export the full kernel surface at crate level
pub use black_scholes::{greeks, price, Greeks};
pub use contract::{Contract, OptionType};
pub use error::KernelError;
