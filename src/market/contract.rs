//! Option contract module.

use crate::utils::format_expiration_yyyymmdd;
use chrono::NaiveDate;
use optionstratlib::OptionStyle;
use serde::{Deserialize, Serialize};

/// A single option contract in a chain snapshot.
///
/// Observed greeks are optional. A contract without an observed gamma has it
/// modeled during the exposure calculation. Delta is carried for consumers
/// and is not used in GEX.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    /// The strike price.
    strike: f64,
    /// The expiration date.
    expiration: NaiveDate,
    /// Call or put.
    option_style: OptionStyle,
    /// Observed gamma, if the provider supplied one.
    gamma: Option<f64>,
    /// Observed delta, if the provider supplied one.
    delta: Option<f64>,
    /// Traded volume.
    volume: u64,
    /// Outstanding contracts.
    open_interest: u64,
}

impl OptionContract {
    /// Creates a new contract with no observed greeks and zero volume.
    ///
    /// # Arguments
    ///
    /// * `strike` - The strike price
    /// * `expiration` - The expiration date
    /// * `option_style` - Call or put
    /// * `open_interest` - Outstanding contracts
    #[must_use]
    pub const fn new(
        strike: f64,
        expiration: NaiveDate,
        option_style: OptionStyle,
        open_interest: u64,
    ) -> Self {
        Self {
            strike,
            expiration,
            option_style,
            gamma: None,
            delta: None,
            volume: 0,
            open_interest,
        }
    }

    /// Sets the observed gamma.
    #[must_use]
    pub const fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = Some(gamma);
        self
    }

    /// Sets the observed delta.
    #[must_use]
    pub const fn with_delta(mut self, delta: f64) -> Self {
        self.delta = Some(delta);
        self
    }

    /// Sets the traded volume.
    #[must_use]
    pub const fn with_volume(mut self, volume: u64) -> Self {
        self.volume = volume;
        self
    }

    /// Returns the strike price.
    #[must_use]
    pub const fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the expiration date.
    #[must_use]
    pub const fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    /// Returns the option style.
    #[must_use]
    pub const fn option_style(&self) -> OptionStyle {
        self.option_style
    }

    /// Returns the observed gamma, if any.
    #[must_use]
    pub const fn gamma(&self) -> Option<f64> {
        self.gamma
    }

    /// Returns the observed delta, if any.
    #[must_use]
    pub const fn delta(&self) -> Option<f64> {
        self.delta
    }

    /// Returns the traded volume.
    #[must_use]
    pub const fn volume(&self) -> u64 {
        self.volume
    }

    /// Returns the open interest.
    #[must_use]
    pub const fn open_interest(&self) -> u64 {
        self.open_interest
    }

    /// Returns true for call contracts.
    #[must_use]
    pub fn is_call(&self) -> bool {
        matches!(self.option_style, OptionStyle::Call)
    }

    /// Returns true for put contracts.
    #[must_use]
    pub fn is_put(&self) -> bool {
        matches!(self.option_style, OptionStyle::Put)
    }

    /// Returns the contract symbol for the given underlying, formatted as
    /// `{UNDERLYING}-{YYYYMMDD}-{STRIKE}-{C|P}`.
    #[must_use]
    pub fn symbol(&self, underlying: &str) -> String {
        let side = match self.option_style {
            OptionStyle::Call => "C",
            OptionStyle::Put => "P",
        };
        format!(
            "{}-{}-{}-{}",
            underlying,
            format_expiration_yyyymmdd(self.expiration),
            self.strike,
            side
        )
    }
}
