//! Gamma resolution.
//!
//! A contract's gamma comes either from the data provider or, when the
//! provider left it out, from the Black-Scholes closed form evaluated at a
//! fixed fallback volatility.

use crate::market::OptionContract;
use crate::utils::years_to_expiry;
use chrono::NaiveDate;
use std::f64::consts::PI;

/// Inputs of the Black-Scholes gamma model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelInputs {
    /// Spot price of the underlying.
    pub spot: f64,
    /// Strike price.
    pub strike: f64,
    /// Time to expiry in years.
    pub time_to_expiry: f64,
    /// Annual risk-free rate.
    pub risk_free: f64,
    /// Annualised volatility.
    pub volatility: f64,
}

/// Where a contract's gamma comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GammaSource {
    /// Gamma supplied by the data provider.
    Observed(f64),
    /// Gamma computed from the Black-Scholes model.
    Modeled(ModelInputs),
}

impl GammaSource {
    /// Chooses the gamma source for a contract.
    ///
    /// Observed gamma wins. Otherwise the model inputs are built from the
    /// chain's spot, the contract's strike and the time from `as_of` to the
    /// contract's expiration.
    #[must_use]
    pub fn for_contract(
        contract: &OptionContract,
        spot: f64,
        as_of: NaiveDate,
        risk_free: f64,
        volatility: f64,
    ) -> Self {
        match contract.gamma() {
            Some(gamma) => Self::Observed(gamma),
            None => Self::Modeled(ModelInputs {
                spot,
                strike: contract.strike(),
                time_to_expiry: years_to_expiry(as_of, contract.expiration()),
                risk_free,
                volatility,
            }),
        }
    }

    /// Returns true if the gamma has to be modeled.
    #[must_use]
    pub const fn is_modeled(&self) -> bool {
        matches!(self, Self::Modeled(_))
    }

    /// Returns the gamma value to use in the exposure formula.
    #[must_use]
    pub fn resolve(&self) -> f64 {
        match *self {
            Self::Observed(gamma) => gamma,
            Self::Modeled(inputs) => black_scholes_gamma(
                inputs.spot,
                inputs.strike,
                inputs.time_to_expiry,
                inputs.risk_free,
                inputs.volatility,
            ),
        }
    }
}

/// Standard normal PDF.
#[must_use]
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes gamma of a European option (identical for calls and puts).
///
/// Returns `0.0` when the time to expiry, the volatility, the spot or the
/// strike is not a strictly positive finite number, or when the rate is not
/// finite, so expired contracts and malformed snapshots contribute nothing
/// instead of producing NaN or infinite values.
///
/// # Examples
///
/// ```rust
/// use gex_calculator::exposure::black_scholes_gamma;
///
/// let gamma = black_scholes_gamma(100.0, 100.0, 30.0 / 365.0, 0.05, 0.40);
/// assert!(gamma > 0.0 && gamma.is_finite());
/// assert_eq!(black_scholes_gamma(100.0, 100.0, 0.0, 0.05, 0.40), 0.0);
/// ```
#[must_use]
pub fn black_scholes_gamma(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    let usable = |x: f64| x > 0.0 && x.is_finite();
    if !(usable(time) && usable(vol) && usable(spot) && usable(strike) && rate.is_finite()) {
        return 0.0;
    }
    let sqrt_t = time.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * sqrt_t);
    if d1.is_nan() {
        return 0.0;
    }
    norm_pdf(d1) / (spot * vol * sqrt_t)
}
