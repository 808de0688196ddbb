//! Calculation parameters for the GEX calculator.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default number of contracts kept around spot.
pub const DEFAULT_STRIKES: usize = 20;

/// Default annual risk-free rate for the Black-Scholes fallback.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.05;

/// Volatility assumed when a contract carries no observed gamma.
pub const FALLBACK_VOLATILITY: f64 = 0.40;

/// Shares controlled by one equity option contract.
pub const CONTRACT_MULTIPLIER: f64 = 100.0;

/// Scaling that expresses exposure per 1% move in the underlying.
pub const ONE_PERCENT_MOVE: f64 = 0.01;

/// Day count used to convert days to expiry into years.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Parameters of a GEX calculation.
///
/// Missing fields fall back to their defaults when deserialized, so a
/// partial document such as `{"strikes": 10}` is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GexConfig {
    /// Number of contracts closest to spot to keep. Zero selects nothing.
    pub strikes: usize,
    /// Annual risk-free rate for the fallback model.
    pub risk_free: f64,
    /// Volatility used by the fallback model.
    pub fallback_volatility: f64,
}

impl Default for GexConfig {
    fn default() -> Self {
        Self {
            strikes: DEFAULT_STRIKES,
            risk_free: DEFAULT_RISK_FREE_RATE,
            fallback_volatility: FALLBACK_VOLATILITY,
        }
    }
}

impl GexConfig {
    /// Creates a configuration with the given strike count and risk-free
    /// rate, using the default fallback volatility.
    #[must_use]
    pub fn new(strikes: usize, risk_free: f64) -> Self {
        Self {
            strikes,
            risk_free,
            ..Self::default()
        }
    }

    /// Sets the number of contracts to keep.
    #[must_use]
    pub const fn with_strikes(mut self, strikes: usize) -> Self {
        self.strikes = strikes;
        self
    }

    /// Sets the annual risk-free rate.
    #[must_use]
    pub const fn with_risk_free(mut self, risk_free: f64) -> Self {
        self.risk_free = risk_free;
        self
    }

    /// Sets the fallback volatility.
    #[must_use]
    pub const fn with_fallback_volatility(mut self, volatility: f64) -> Self {
        self.fallback_volatility = volatility;
        self
    }

    /// Checks that the numeric parameters are usable.
    ///
    /// A zero volatility is accepted: the model then yields zero gamma.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `risk_free` is not finite or
    /// `fallback_volatility` is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.risk_free.is_finite() {
            return Err(Error::invalid_config(format!(
                "risk_free must be finite, got {}",
                self.risk_free
            )));
        }
        if !self.fallback_volatility.is_finite() || self.fallback_volatility < 0.0 {
            return Err(Error::invalid_config(format!(
                "fallback_volatility must be finite and non-negative, got {}",
                self.fallback_volatility
            )));
        }
        Ok(())
    }

    /// Parses and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialization` for malformed JSON and
    /// `Error::InvalidConfig` if validation fails.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
