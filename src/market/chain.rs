//! Option chain snapshot module.
//!
//! This module provides the [`OptionChain`], a ticker quote plus the option
//! contracts listed on it, captured at a single as-of timestamp.

use super::contract::OptionContract;
use super::ticker::Ticker;
use crate::exposure::closest_contracts;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Option chain snapshot for a single underlying.
///
/// All contracts are assumed to refer to the ticker's underlying; this is not
/// checked. The chain is never mutated in place: slicing operations such as
/// [`OptionChain::closest_strikes`] return a new chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChain {
    /// The underlying quote.
    ticker: Ticker,
    /// Contracts in provider order.
    contracts: Vec<OptionContract>,
    /// Snapshot time of the chain in the snapshot's own offset. May differ
    /// slightly from the quote time.
    as_of: DateTime<FixedOffset>,
}

impl OptionChain {
    /// Creates a new option chain.
    ///
    /// # Arguments
    ///
    /// * `ticker` - The underlying quote
    /// * `contracts` - The option contracts, in provider order
    /// * `as_of` - Snapshot time of the chain; any `DateTime` convertible to a
    ///   fixed offset. The offset decides the snapshot's calendar date.
    #[must_use]
    pub fn new(
        ticker: Ticker,
        contracts: Vec<OptionContract>,
        as_of: impl Into<DateTime<FixedOffset>>,
    ) -> Self {
        Self {
            ticker,
            contracts,
            as_of: as_of.into(),
        }
    }

    /// Returns the underlying quote.
    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Returns the contracts in provider order.
    #[must_use]
    pub fn contracts(&self) -> &[OptionContract] {
        &self.contracts
    }

    /// Returns the snapshot time of the chain.
    #[must_use]
    pub const fn as_of(&self) -> DateTime<FixedOffset> {
        self.as_of
    }

    /// Returns the calendar date of the snapshot in its own offset.
    #[must_use]
    pub fn as_of_date(&self) -> NaiveDate {
        self.as_of.date_naive()
    }

    /// Returns the underlying symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        self.ticker.symbol()
    }

    /// Returns the spot price of the underlying.
    #[must_use]
    pub const fn spot(&self) -> f64 {
        self.ticker.price()
    }

    /// Returns the number of contracts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    /// Returns true if the chain has no contracts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Returns the distinct strike prices (sorted).
    pub fn strikes(&self) -> Vec<f64> {
        let mut strikes: Vec<f64> = self.contracts.iter().map(OptionContract::strike).collect();
        strikes.sort_by(f64::total_cmp);
        strikes.dedup();
        strikes
    }

    /// Returns a new chain holding the `n` contracts closest to spot.
    ///
    /// The ticker and as-of timestamp are carried over unchanged. Contracts
    /// at equal distance from spot keep their original relative order.
    #[must_use]
    pub fn closest_strikes(&self, n: usize) -> Self {
        let contracts = closest_contracts(&self.contracts, self.spot(), n)
            .into_iter()
            .cloned()
            .collect();
        Self::new(self.ticker.clone(), contracts, self.as_of)
    }
}
