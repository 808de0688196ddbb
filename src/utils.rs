//! Utility functions for the GEX calculator.

use crate::config::DAYS_PER_YEAR;
use crate::error::{Error, Result};
use chrono::NaiveDate;
use optionstratlib::OptionStyle;

/// Formats an expiration date as a string in `YYYYMMDD` format.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use gex_calculator::utils::format_expiration_yyyymmdd;
///
/// let expiration = NaiveDate::from_ymd_opt(2025, 7, 25).unwrap();
/// assert_eq!(format_expiration_yyyymmdd(expiration), "20250725");
/// ```
#[must_use]
pub fn format_expiration_yyyymmdd(expiration: NaiveDate) -> String {
    expiration.format("%Y%m%d").to_string()
}

/// Returns the number of calendar days from `as_of` until `expiration`,
/// clamped at zero for contracts that have already expired.
#[must_use]
pub fn days_to_expiry(as_of: NaiveDate, expiration: NaiveDate) -> i64 {
    (expiration - as_of).num_days().max(0)
}

/// Returns the time to expiry in years on an ACT/365 basis.
///
/// Expired contracts yield `0.0`.
#[must_use]
pub fn years_to_expiry(as_of: NaiveDate, expiration: NaiveDate) -> f64 {
    days_to_expiry(as_of, expiration) as f64 / DAYS_PER_YEAR
}

/// Maps a provider option-type string to an [`OptionStyle`].
///
/// Accepts `C`, `CALL`, `P` and `PUT`, case-insensitively and ignoring
/// surrounding whitespace.
///
/// # Errors
///
/// Returns `Error::InvalidOptionStyle` for any other value, so an unknown
/// type is never silently treated as a put.
pub fn parse_option_style(value: &str) -> Result<OptionStyle> {
    match value.trim().to_ascii_uppercase().as_str() {
        "C" | "CALL" => Ok(OptionStyle::Call),
        "P" | "PUT" => Ok(OptionStyle::Put),
        _ => Err(Error::invalid_option_style(value)),
    }
}
