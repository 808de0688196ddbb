//! Exposure result module.
//!
//! This module provides the [`ExposureResult`] returned by a GEX calculation,
//! the per-strike [`StrikeExposure`] buckets and the [`Strike`] map key.

use crate::error::Result;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Strike price usable as an ordered map key.
///
/// Ordering follows [`f64::total_cmp`]. Serialized as a string so it can key
/// a JSON object.
#[derive(Debug, Clone, Copy)]
pub struct Strike(f64);

impl Strike {
    /// Creates a strike key.
    #[must_use]
    pub const fn new(price: f64) -> Self {
        Self(price)
    }

    /// Returns the strike price.
    #[must_use]
    pub const fn price(self) -> f64 {
        self.0
    }
}

impl From<f64> for Strike {
    fn from(price: f64) -> Self {
        Self(price)
    }
}

impl PartialEq for Strike {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Strike {}

impl PartialOrd for Strike {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Strike {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Strike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Strike {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct StrikeVisitor;

impl Visitor<'_> for StrikeVisitor {
    type Value = Strike;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a strike price as a number or numeric string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Strike, E> {
        value
            .parse::<f64>()
            .map(Strike)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Strike, E> {
        Ok(Strike(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Strike, E> {
        Ok(Strike(value as f64))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Strike, E> {
        Ok(Strike(value as f64))
    }
}

impl<'de> Deserialize<'de> for Strike {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(StrikeVisitor)
    }
}

/// Signed exposure at one strike, split by option side.
///
/// Calls accumulate non-negative values and puts non-positive values for
/// non-negative gamma.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StrikeExposure {
    /// Summed exposure of call contracts at this strike.
    pub call_exposure: f64,
    /// Summed (negated) exposure of put contracts at this strike.
    pub put_exposure: f64,
}

impl StrikeExposure {
    /// Returns the net exposure at this strike.
    #[must_use]
    pub fn net(&self) -> f64 {
        self.call_exposure + self.put_exposure
    }
}

/// Result of a GEX calculation over one option chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureResult {
    /// The underlying symbol.
    pub symbol: String,
    /// Snapshot time of the chain as an RFC 3339 string.
    pub as_of: String,
    /// Dealer delta change in USD for a 1% move of the underlying.
    pub total_gex: f64,
    /// Per-strike exposure, ascending by strike.
    pub bars: BTreeMap<Strike, StrikeExposure>,
}

impl ExposureResult {
    /// Returns the bucket at `strike`, if any contract contributed to it.
    #[must_use]
    pub fn bar(&self, strike: f64) -> Option<&StrikeExposure> {
        self.bars.get(&Strike(strike))
    }

    /// Returns the number of strikes with a bucket.
    #[must_use]
    pub fn strike_count(&self) -> usize {
        self.bars.len()
    }

    /// Returns the summed call exposure across strikes.
    #[must_use]
    pub fn call_total(&self) -> f64 {
        self.bars.values().map(|b| b.call_exposure).sum()
    }

    /// Returns the summed put exposure across strikes.
    #[must_use]
    pub fn put_total(&self) -> f64 {
        self.bars.values().map(|b| b.put_exposure).sum()
    }

    /// Returns the sum of every bucket. Equals `total_gex` up to rounding.
    #[must_use]
    pub fn bars_total(&self) -> f64 {
        self.bars.values().map(StrikeExposure::net).sum()
    }

    /// Encodes the result as JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a result from JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialization` for malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for ExposureResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {}: total GEX {:.2} across {} strikes",
            self.symbol,
            self.as_of,
            self.total_gex,
            self.bars.len()
        )
    }
}
