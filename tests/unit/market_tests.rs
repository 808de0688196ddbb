//! Integration tests for the market snapshot types.

use super::{aapl_chain, expiry, snapshot_time};
use chrono::{TimeZone, Utc};
use gex_calculator::market::{OptionChain, OptionContract, Ticker};
use gex_calculator::utils::parse_option_style;
use optionstratlib::OptionStyle;

#[test]
fn test_chain_slice() {
    let ticker = Ticker::new("AAPL", 190.0, 10_000_000, snapshot_time());
    let contracts = vec![
        OptionContract::new(187.5, expiry(24), OptionStyle::Call, 200)
            .with_gamma(0.012)
            .with_delta(0.45)
            .with_volume(1000),
        OptionContract::new(190.0, expiry(24), OptionStyle::Put, 180)
            .with_gamma(0.013)
            .with_delta(-0.55)
            .with_volume(900),
    ];
    let chain = OptionChain::new(ticker, contracts, snapshot_time());
    assert_eq!(chain.contracts().len(), 2);
}

#[test]
fn test_closest_strikes_preserves_ticker_and_as_of() {
    let quote_time = Utc.with_ymd_and_hms(2025, 7, 1, 15, 29, 59).unwrap();
    let ticker = Ticker::new("AAPL", 190.0, 10_000_000, quote_time);
    let source = aapl_chain();
    let chain = OptionChain::new(ticker.clone(), source.contracts().to_vec(), snapshot_time());

    let sliced = chain.closest_strikes(6);

    assert_eq!(sliced.ticker(), &ticker);
    assert_eq!(sliced.as_of(), snapshot_time());
    assert_eq!(sliced.len(), 6);
    assert_eq!(chain.len(), 50);
    for contract in sliced.contracts() {
        assert!((contract.strike() - 190.0).abs() <= 2.5);
    }
}

#[test]
fn test_closest_strikes_larger_than_chain() {
    let chain = aapl_chain();
    let sliced = chain.closest_strikes(500);
    assert_eq!(sliced.len(), chain.len());
}

#[test]
fn test_chain_json_round_trip_keeps_fields() {
    let chain = aapl_chain().closest_strikes(4);
    let json = serde_json::to_string(&chain).unwrap();
    let decoded: OptionChain = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, chain);
}

#[test]
fn test_provider_option_types() {
    let style = parse_option_style("C").unwrap();
    let contract = OptionContract::new(190.0, expiry(7), style, 1);
    assert!(contract.is_call());
    assert!(parse_option_style("W").is_err());
}
