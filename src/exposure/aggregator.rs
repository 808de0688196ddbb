//! Signed exposure aggregation.
//!
//! Exposure per contract is `gamma × open_interest × 100 × spot² × 0.01`: the
//! dollar change in dealer delta for a 1% move of the underlying. Calls add
//! it, puts subtract it.

use super::result::{Strike, StrikeExposure};
use crate::config::{CONTRACT_MULTIPLIER, ONE_PERCENT_MOVE};
use optionstratlib::OptionStyle;
use std::collections::BTreeMap;

/// Unsigned exposure of a position for a 1% move of the underlying.
#[must_use]
pub fn contract_exposure(gamma: f64, open_interest: u64, spot: f64) -> f64 {
    gamma * open_interest as f64 * CONTRACT_MULTIPLIER * spot * spot * ONE_PERCENT_MOVE
}

/// Applies the dealer-direction sign: calls positive, puts negative.
#[must_use]
pub fn signed_exposure(option_style: OptionStyle, exposure: f64) -> f64 {
    match option_style {
        OptionStyle::Call => exposure,
        OptionStyle::Put => -exposure,
    }
}

/// Per-strike accumulator of signed exposure.
///
/// A strike's bucket is created zeroed the first time a contract at that
/// strike is added, so only strikes that were touched appear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExposureBars {
    buckets: BTreeMap<Strike, StrikeExposure>,
}

impl ExposureBars {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bucket for `strike`, inserting a zeroed one if absent.
    pub fn bucket_mut(&mut self, strike: f64) -> &mut StrikeExposure {
        self.buckets.entry(Strike::new(strike)).or_default()
    }

    /// Adds a signed exposure to the call or put side of `strike`.
    pub fn add(&mut self, strike: f64, option_style: OptionStyle, signed: f64) {
        let bucket = self.bucket_mut(strike);
        match option_style {
            OptionStyle::Call => bucket.call_exposure += signed,
            OptionStyle::Put => bucket.put_exposure += signed,
        }
    }

    /// Returns the bucket at `strike`, if any.
    #[must_use]
    pub fn get(&self, strike: f64) -> Option<&StrikeExposure> {
        self.buckets.get(&Strike::new(strike))
    }

    /// Returns the number of strikes with a bucket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if no strike has been touched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Returns the net exposure summed over every bucket.
    #[must_use]
    pub fn net_total(&self) -> f64 {
        self.buckets.values().map(StrikeExposure::net).sum()
    }

    /// Folds another accumulator into this one, side by side.
    pub fn merge(&mut self, other: Self) {
        for (strike, exposure) in other.buckets {
            let bucket = self.buckets.entry(strike).or_default();
            bucket.call_exposure += exposure.call_exposure;
            bucket.put_exposure += exposure.put_exposure;
        }
    }

    /// Consumes the accumulator, returning the per-strike map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<Strike, StrikeExposure> {
        self.buckets
    }
}
