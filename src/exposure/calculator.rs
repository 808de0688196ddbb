//! GEX calculator module.
//!
//! This module provides the [`GexCalculator`], which turns an
//! [`OptionChain`] snapshot into an [`ExposureResult`]:
//!
//! ```text
//! OptionChain
//!   └── closest_contracts (n nearest to spot, stable on ties)
//!         └── GammaSource (observed, or Black-Scholes at the fallback vol)
//!               └── signed exposure (calls +, puts -)
//!                     ├── ExposureBars (per strike, call/put)
//!                     └── total_gex
//! ```

use super::aggregator::{ExposureBars, contract_exposure, signed_exposure};
use super::gamma::GammaSource;
use super::result::ExposureResult;
use super::selector::closest_contracts;
use crate::config::GexConfig;
use crate::error::Result;
use crate::market::OptionChain;
use chrono::SecondsFormat;
use tracing::{debug, trace};

/// Computes gamma exposure for option chain snapshots.
///
/// The calculator holds only its configuration. Each call to
/// [`GexCalculator::calc`] reads the chain and builds a fresh result, so one
/// calculator can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GexCalculator {
    config: GexConfig,
}

impl GexCalculator {
    /// Creates a calculator with the given configuration.
    #[must_use]
    pub const fn new(config: GexConfig) -> Self {
        Self { config }
    }

    /// Creates a calculator after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration is rejected by
    /// [`GexConfig::validate`].
    pub fn try_new(config: GexConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &GexConfig {
        &self.config
    }

    /// Computes per-strike and total gamma exposure for `chain`.
    ///
    /// Only the `strikes` contracts closest to spot are used. The total is
    /// accumulated alongside the per-strike buckets rather than re-summed
    /// from them.
    #[must_use]
    pub fn calc(&self, chain: &OptionChain) -> ExposureResult {
        let spot = chain.spot();
        let as_of_date = chain.as_of_date();
        let selected = closest_contracts(chain.contracts(), spot, self.config.strikes);

        debug!(
            symbol = chain.symbol(),
            selected = selected.len(),
            available = chain.len(),
            "selected contracts closest to spot"
        );

        let mut bars = ExposureBars::new();
        let mut total = 0.0;
        let mut modeled = 0usize;

        for contract in selected {
            let source = GammaSource::for_contract(
                contract,
                spot,
                as_of_date,
                self.config.risk_free,
                self.config.fallback_volatility,
            );
            let gamma = source.resolve();
            if source.is_modeled() {
                modeled += 1;
                trace!(strike = contract.strike(), gamma, "modeled gamma");
            }

            let exposure = contract_exposure(gamma, contract.open_interest(), spot);
            let signed = signed_exposure(contract.option_style(), exposure);

            bars.add(contract.strike(), contract.option_style(), signed);
            total += signed;
        }

        debug!(
            symbol = chain.symbol(),
            strikes = bars.len(),
            modeled,
            total_gex = total,
            "gamma exposure calculated"
        );

        ExposureResult {
            symbol: chain.symbol().to_string(),
            as_of: chain.as_of().to_rfc3339_opts(SecondsFormat::AutoSi, true),
            total_gex: total,
            bars: bars.into_inner(),
        }
    }
}

/// Computes gamma exposure for `chain` keeping `strikes` contracts and using
/// `risk_free` for the fallback model.
///
/// A non-finite `risk_free` neutralises modeled gamma to zero; observed gamma
/// is unaffected.
///
/// # Examples
///
/// ```rust
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use gex_calculator::exposure::calculate_gex;
/// use gex_calculator::market::{OptionChain, OptionContract, Ticker};
/// use optionstratlib::OptionStyle;
///
/// let as_of = Utc.with_ymd_and_hms(2025, 7, 1, 15, 30, 0).unwrap();
/// let expiry = NaiveDate::from_ymd_opt(2025, 7, 25).unwrap();
/// let chain = OptionChain::new(
///     Ticker::new("AAPL", 190.0, 10_000_000, as_of),
///     vec![OptionContract::new(190.0, expiry, OptionStyle::Call, 100).with_gamma(0.01)],
///     as_of,
/// );
///
/// let result = calculate_gex(&chain, 20, 0.05);
/// assert_eq!(result.strike_count(), 1);
/// assert!(result.total_gex > 0.0);
/// ```
#[must_use]
pub fn calculate_gex(chain: &OptionChain, strikes: usize, risk_free: f64) -> ExposureResult {
    GexCalculator::new(GexConfig::new(strikes, risk_free)).calc(chain)
}
