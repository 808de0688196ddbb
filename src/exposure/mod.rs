//! Gamma exposure module.
//!
//! ## Pipeline
//!
//! ```text
//! GexCalculator::calc(&OptionChain)
//!   ├── closest_contracts   (strike selection around spot)
//!   ├── GammaSource         (observed gamma or Black-Scholes fallback)
//!   ├── ExposureBars        (signed per-strike call/put accumulation)
//!   └── ExposureResult      (symbol, as_of, total_gex, bars)
//! ```
//!
//! ## Components
//!
//! - [`GexCalculator`]: Entry point holding a [`crate::config::GexConfig`]
//! - [`calculate_gex`]: One-shot calculation with explicit strike count and rate
//! - [`closest_contracts`]: Stable nearest-to-spot selection
//! - [`GammaSource`]: Observed or modeled gamma for a contract
//! - [`black_scholes_gamma`]: Closed-form gamma with degenerate-input guard
//! - [`ExposureBars`]: Per-strike accumulator
//! - [`ExposureResult`]: Calculation output
//!
//! ## Example
//!
//! ```rust,ignore
//! use gex_calculator::config::GexConfig;
//! use gex_calculator::exposure::GexCalculator;
//!
//! let calculator = GexCalculator::try_new(GexConfig::default().with_strikes(30))?;
//! let result = calculator.calc(&chain);
//! println!("{}", result);
//! ```

mod aggregator;
mod calculator;
mod gamma;
mod result;
mod selector;

// Re-export all public types
pub use aggregator::{ExposureBars, contract_exposure, signed_exposure};
pub use calculator::{GexCalculator, calculate_gex};
pub use gamma::{GammaSource, ModelInputs, black_scholes_gamma, norm_pdf};
pub use result::{ExposureResult, Strike, StrikeExposure};
pub use selector::closest_contracts;
