//! Market snapshot module.
//!
//! Immutable value types describing the market data a GEX calculation reads:
//!
//! ```text
//! OptionChain (snapshot at an as-of timestamp)
//!   ├── Ticker (underlying quote: symbol, spot, volume)
//!   └── OptionContract (per strike/expiry/style)
//! ```
//!
//! ## Components
//!
//! - [`Ticker`]: Underlying quote
//! - [`OptionContract`]: Single option contract with observed greeks and open interest
//! - [`OptionChain`]: Ticker plus contracts at a snapshot time

mod chain;
mod contract;
mod ticker;

pub use chain::OptionChain;
pub use contract::OptionContract;
pub use ticker::Ticker;
