//! Underlying quote.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Quote for the underlying asset of an option chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    /// The underlying symbol (e.g., "AAPL").
    symbol: String,
    /// Spot price.
    price: f64,
    /// Traded volume.
    volume: u64,
    /// Time of the last quote, in the quoting venue's offset.
    as_of: DateTime<FixedOffset>,
}

impl Ticker {
    /// Creates a new ticker quote.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The underlying symbol
    /// * `price` - The spot price
    /// * `volume` - The traded volume
    /// * `as_of` - Time of the quote; any `DateTime` convertible to a fixed offset
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        price: f64,
        volume: u64,
        as_of: impl Into<DateTime<FixedOffset>>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            volume,
            as_of: as_of.into(),
        }
    }

    /// Returns the underlying symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the spot price.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Returns the traded volume.
    #[must_use]
    pub const fn volume(&self) -> u64 {
        self.volume
    }

    /// Returns the quote timestamp.
    #[must_use]
    pub const fn as_of(&self) -> DateTime<FixedOffset> {
        self.as_of
    }
}
