//! Integration tests for the exposure calculation.

use super::{aapl_chain, expiry, init_tracing, snapshot_time};
use gex_calculator::config::GexConfig;
use gex_calculator::exposure::{GexCalculator, black_scholes_gamma, calculate_gex};
use chrono::{FixedOffset, NaiveDate, TimeZone};
use gex_calculator::market::{OptionChain, OptionContract, Ticker};
use optionstratlib::OptionStyle;

#[test]
fn test_scenario_two_contracts() {
    init_tracing();
    let ticker = Ticker::new("AAPL", 190.0, 10_000_000, snapshot_time());
    let contracts = vec![
        OptionContract::new(187.5, expiry(24), OptionStyle::Call, 200).with_gamma(0.012),
        OptionContract::new(190.0, expiry(24), OptionStyle::Put, 180).with_gamma(0.013),
    ];
    let chain = OptionChain::new(ticker, contracts, snapshot_time());

    let result = calculate_gex(&chain, 20, 0.05);

    assert!((result.bar(187.5).unwrap().call_exposure - 86_640.0).abs() < 1e-6);
    assert!((result.bar(190.0).unwrap().put_exposure + 84_474.0).abs() < 1e-6);
    assert!((result.total_gex - 2_166.0).abs() < 1e-6);
}

#[test]
fn test_fallback_model_matches_reference() {
    init_tracing();
    let ticker = Ticker::new("SPY", 550.0, 1_000, snapshot_time());
    let contract = OptionContract::new(550.0, expiry(30), OptionStyle::Call, 1);
    let chain = OptionChain::new(ticker, vec![contract], snapshot_time());

    let result = calculate_gex(&chain, 20, 0.05);

    let t: f64 = 30.0 / 365.0;
    let sigma: f64 = 0.40;
    let d1 = (0.05 + 0.5 * sigma * sigma) * t / (sigma * t.sqrt());
    let pdf = (-0.5 * d1 * d1).exp() / (2.0 * std::f64::consts::PI).sqrt();
    let reference_gamma = pdf / (550.0 * sigma * t.sqrt());
    let reference = reference_gamma * 100.0 * 550.0 * 550.0 * 0.01;

    let gamma = black_scholes_gamma(550.0, 550.0, t, 0.05, sigma);
    assert!(gamma > 0.0 && gamma.is_finite());
    assert!(((gamma - reference_gamma) / reference_gamma).abs() < 1e-9);
    assert!(((result.total_gex - reference) / reference).abs() < 1e-9);
}

#[test]
fn test_single_contract_boundary() {
    let ticker = Ticker::new("AAPL", 190.0, 10_000_000, snapshot_time());
    let contract = OptionContract::new(200.0, expiry(10), OptionStyle::Put, 40).with_gamma(0.01);
    let chain = OptionChain::new(ticker, vec![contract.clone()], snapshot_time());

    assert_eq!(chain.closest_strikes(20).contracts(), &[contract]);

    let result = calculate_gex(&chain, 20, 0.05);
    assert_eq!(result.strike_count(), 1);
    assert!(result.total_gex < 0.0);
}

#[test]
fn test_full_chain_properties() {
    init_tracing();
    let chain = aapl_chain();
    let result = GexCalculator::default().calc(&chain);

    assert_eq!(result.symbol, "AAPL");
    assert_eq!(result.as_of, "2025-07-01T15:30:00Z");
    // 20 contracts around spot cover strikes 177.5..=200.0 in call/put pairs
    assert_eq!(result.strike_count(), 10);

    for (strike, bucket) in &result.bars {
        assert!((strike.price() - 190.0).abs() <= 12.5);
        assert!(bucket.call_exposure >= 0.0);
        assert!(bucket.put_exposure <= 0.0);
        assert!(bucket.call_exposure.is_finite() && bucket.put_exposure.is_finite());
    }

    let tolerance = 1e-9 * result.bars_total().abs().max(1.0);
    assert!((result.total_gex - result.bars_total()).abs() < tolerance);
}

#[test]
fn test_calculation_does_not_mutate_chain() {
    let chain = aapl_chain();
    let before = chain.clone();
    let calculator = GexCalculator::default();

    let first = calculator.calc(&chain);
    let second = calculator.calc(&chain);

    assert_eq!(chain, before);
    assert_eq!(first, second);
}

#[test]
fn test_more_strikes_widens_bars() {
    let chain = aapl_chain();
    let narrow = GexCalculator::new(GexConfig::default().with_strikes(4)).calc(&chain);
    let wide = GexCalculator::new(GexConfig::default().with_strikes(50)).calc(&chain);

    assert_eq!(narrow.strike_count(), 2);
    assert_eq!(wide.strike_count(), 25);
}

#[test]
fn test_result_json_shape() {
    let chain = aapl_chain();
    let result = calculate_gex(&chain, 2, 0.05);
    let value: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();

    assert_eq!(value["symbol"], "AAPL");
    assert!(value["total_gex"].is_number());
    let bar = &value["bars"]["190"];
    assert!(bar["call_exposure"].is_number());
    assert!(bar["put_exposure"].is_number());
}

#[test]
fn test_zero_strikes_configured_from_json() {
    let config = GexConfig::from_json(r#"{"strikes": 0}"#).unwrap();
    let result = GexCalculator::try_new(config).unwrap().calc(&aapl_chain());
    assert_eq!(result.total_gex, 0.0);
    assert!(result.bars.is_empty());
}

#[test]
fn test_evening_snapshot_models_one_day_to_expiry() {
    init_tracing();
    let eastern = FixedOffset::west_opt(4 * 3600).unwrap();
    let evening = eastern.with_ymd_and_hms(2025, 7, 1, 20, 30, 0).unwrap();
    let ticker = Ticker::new("AAPL", 190.0, 10_000_000, evening);
    let contract = OptionContract::new(
        190.0,
        NaiveDate::from_ymd_opt(2025, 7, 2).unwrap(),
        OptionStyle::Put,
        100,
    );
    let chain = OptionChain::new(ticker, vec![contract], evening);

    let result = calculate_gex(&chain, 20, 0.05);

    let gamma = black_scholes_gamma(190.0, 190.0, 1.0 / 365.0, 0.05, 0.40);
    let expected = -(gamma * 100.0 * 100.0 * 190.0 * 190.0 * 0.01);
    assert!(result.total_gex < 0.0);
    assert!(((result.total_gex - expected) / expected).abs() < 1e-12);
    assert_eq!(result.as_of, "2025-07-01T20:30:00-04:00");
}

#[test]
fn test_nan_risk_free_result_round_trips() {
    let result = calculate_gex(&aapl_chain(), 20, f64::NAN);
    assert!(result.total_gex.is_finite());

    let json = result.to_json().unwrap();
    assert!(!json.contains("null"));
    let decoded = gex_calculator::exposure::ExposureResult::from_json(&json).unwrap();
    assert_eq!(decoded, result);
}
