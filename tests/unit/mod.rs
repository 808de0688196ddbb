//! Integration tests for the GEX calculator.

mod exposure_tests;
mod market_tests;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use gex_calculator::market::{OptionChain, OptionContract, Ticker};
use optionstratlib::OptionStyle;

/// Installs a test subscriber so `RUST_LOG=gex_calculator=debug` shows the
/// calculator's diagnostics. Safe to call from every test.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub(crate) fn snapshot_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 1, 15, 30, 0).unwrap()
}

pub(crate) fn expiry(days: u64) -> NaiveDate {
    snapshot_time().date_naive() + chrono::Days::new(days)
}

/// Builds an AAPL chain at spot 190 with a call and a put at every 2.5 strike
/// from 160 to 220. Every third contract has no observed gamma.
pub(crate) fn aapl_chain() -> OptionChain {
    let ticker = Ticker::new("AAPL", 190.0, 10_000_000, snapshot_time());
    let mut contracts = Vec::new();
    for i in 0..=24u32 {
        let strike = 160.0 + 2.5 * f64::from(i);
        for (j, style) in [OptionStyle::Call, OptionStyle::Put].into_iter().enumerate() {
            let n = 2 * i + j as u32;
            let contract = OptionContract::new(strike, expiry(30), style, u64::from(100 + 13 * n))
                .with_volume(u64::from(10 * n));
            contracts.push(if n % 3 == 0 {
                contract
            } else {
                contract.with_gamma(0.001 * f64::from(n % 7 + 1))
            });
        }
    }
    OptionChain::new(ticker, contracts, snapshot_time())
}
