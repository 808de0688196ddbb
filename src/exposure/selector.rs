//! Closest-strike selection.

use crate::market::OptionContract;

/// Returns the `n` contracts whose strike is closest to `spot`.
///
/// Contracts are ranked by `|strike - spot|` ascending. The sort is stable,
/// so contracts at equal distance keep their input order. If fewer than `n`
/// contracts are available all of them are returned; `n == 0` returns an
/// empty selection.
pub fn closest_contracts(
    contracts: &[OptionContract],
    spot: f64,
    n: usize,
) -> Vec<&OptionContract> {
    if n == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<&OptionContract> = contracts.iter().collect();
    ranked.sort_by(|a, b| distance(a, spot).total_cmp(&distance(b, spot)));
    ranked.truncate(n);
    ranked
}

#[inline]
fn distance(contract: &OptionContract, spot: f64) -> f64 {
    (contract.strike() - spot).abs()
}
