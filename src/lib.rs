//! # GEX Calculator - Gamma Exposure for Option Chains
//!
//! Computes Gamma Exposure (GEX) for an option chain snapshot: for the strikes
//! nearest the current spot price it aggregates the dealer-direction-signed
//! gamma exposure of calls and puts into a per-strike breakdown and a
//! chain-level total.
//!
//! ## Key Features
//!
//! - **Closest-Strike Selection**: Keeps the `n` contracts nearest spot
//!   (default 20), stable on ties.
//!
//! - **Observed or Modeled Gamma**: Uses provider gamma when present and falls
//!   back to Black-Scholes gamma at a fixed 40% volatility otherwise.
//!
//! - **Degenerate-Input Safety**: Expired contracts, zero volatility or a
//!   non-positive spot yield zero gamma, never NaN.
//!
//! - **Dealer-Direction Sign Convention**: Calls contribute positive exposure,
//!   puts negative.
//!
//! - **OptionStratLib Integration**: Contracts use `OptionStyle` from
//!   OptionStratLib, so call/put handling is exhaustive.
//!
//! - **Result-Based Error Handling**: Configuration and encoding errors return
//!   `Result<T, Error>`; the calculation itself always produces a result.
//!
//! ## Formula
//!
//! ```text
//! exposure = gamma × open_interest × 100 × spot² × 0.01
//! ```
//!
//! The result is the dollar change in dealer delta for a 1% move of the
//! underlying.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`market`] | Ticker, option contract and option chain snapshots |
//! | [`exposure`] | Strike selection, gamma resolution, aggregation, results |
//! | [`config`] | Calculation parameters and constants |
//! | [`error`] | Error types and `Result` type alias |
//! | [`utils`] | Date and option-style helpers |
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use gex_calculator::config::GexConfig;
//! use gex_calculator::exposure::GexCalculator;
//! use gex_calculator::market::{OptionChain, OptionContract, Ticker};
//! use optionstratlib::OptionStyle;
//!
//! let as_of = Utc.with_ymd_and_hms(2025, 7, 1, 15, 30, 0).unwrap();
//! let expiry = NaiveDate::from_ymd_opt(2025, 7, 25).unwrap();
//!
//! let ticker = Ticker::new("AAPL", 190.0, 10_000_000, as_of);
//! let contracts = vec![
//!     OptionContract::new(187.5, expiry, OptionStyle::Call, 200).with_gamma(0.012),
//!     OptionContract::new(190.0, expiry, OptionStyle::Put, 180).with_gamma(0.013),
//!     // No observed gamma: modeled with Black-Scholes
//!     OptionContract::new(192.5, expiry, OptionStyle::Call, 150),
//! ];
//! let chain = OptionChain::new(ticker, contracts, as_of);
//!
//! let calculator = GexCalculator::try_new(GexConfig::default()).unwrap();
//! let result = calculator.calc(&chain);
//!
//! assert_eq!(result.symbol, "AAPL");
//! assert_eq!(result.strike_count(), 3);
//! assert!((result.total_gex - result.bars_total()).abs() < 1e-6);
//! ```
//!
//! ## Benchmarks
//!
//! ```bash
//! cargo bench
//! cargo bench -- calculator_benches
//! ```
//!
//! ## Dependencies
//!
//! - **optionstratlib** (0.13): `OptionStyle` for call/put classification
//! - **chrono** (0.4): Snapshot timestamps and expiration dates
//! - **serde** / **serde_json** (1.0): Result and configuration encoding
//! - **thiserror** (2.0): Error handling
//! - **tracing** (0.1): Structured diagnostics

pub mod config;
pub mod error;
pub mod exposure;
pub mod market;
pub mod utils;

pub use error::{Error, Result};
