//! End-to-end integration tests

use land_feasibility::config::Config;
use land_feasibility::feasibility::{
    FeasibilityCalculator, ParcelInput, PolicyConfig, ProfitInput, Rating, Underwriter,
};
use land_feasibility::report;
use rust_decimal_macros::dec;

#[test]
fn test_config_example_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example");
    let config = Config::load(path).unwrap();
    assert_eq!(config.policy, PolicyConfig::default());
}

#[test]
fn test_sweet_spot_lot() {
    let calc = FeasibilityCalculator::default();
    let parcel = ParcelInput::new(dec!(14527), 10, dec!(2200000), dec!(830), dec!(350)).unwrap();
    let result = calc.evaluate(&parcel, None).unwrap();

    assert_eq!(result.buildable.far_capacity_sf, dec!(18158.75));
    assert_eq!(result.effective_buildable_sf(), dec!(17500));
    assert_eq!(result.land_basis.psf.round(), dec!(126));
    assert_eq!(result.land_basis.rating, Rating::Yellow);
    assert_eq!(result.lot_efficiency.ratio.round_dp(3), dec!(0.964));
    assert_eq!(result.lot_efficiency.rating, Rating::Green);
    assert_eq!(result.target.target_all_in_psf, dec!(581));
    assert_eq!(result.target.target_land_basis_psf, dec!(231));
    assert_eq!(result.target.target_buy_price, dec!(4042500));
    assert_eq!(result.headroom.amount, dec!(1842500));
    assert_eq!(result.headroom.rating, Rating::Green);
}

#[test]
fn test_oversized_lot() {
    let calc = FeasibilityCalculator::default();
    let parcel = ParcelInput::new(dec!(31730), 10, dec!(4500000), dec!(830), dec!(350)).unwrap();
    let result = calc.evaluate(&parcel, None).unwrap();

    assert_eq!(result.buildable.far_capacity_sf, dec!(39662.5));
    assert_eq!(result.effective_buildable_sf(), dec!(17500));
    assert_eq!(result.buildable.wasted_far_sf, dec!(22162.5));
    assert_eq!(result.lot_efficiency.ratio.round_dp(3), dec!(0.441));
    assert_eq!(result.lot_efficiency.rating, Rating::Red);
}

#[test]
fn test_profitability_comparison() {
    let calc = FeasibilityCalculator::default();
    let parcel = ParcelInput::new(dec!(14527), 10, dec!(2200000), dec!(830), dec!(350)).unwrap();
    let profit = ProfitInput {
        profit: dec!(850000),
        total_cost: dec!(3200000),
        net_revenue: dec!(4050000),
    };
    let result = calc.evaluate(&parcel, Some(&profit)).unwrap();
    let cmp = result.profitability.as_ref().unwrap();

    assert_eq!(cmp.return_on_cost_pct.round_dp(1), dec!(26.6));
    assert_eq!(cmp.margin_on_revenue_pct.round_dp(1), dec!(21.0));

    let json = report::to_json(&result).unwrap();
    assert!(json.contains("return_on_cost_pct"));
}

#[test]
fn test_jurisdiction_policy_swap() {
    let parcel = ParcelInput::new(dec!(14527), 10, dec!(2200000), dec!(830), dec!(350)).unwrap();
    let looser = PolicyConfig {
        product_sf_per_unit: dec!(2000),
        ..PolicyConfig::default()
    };
    let result = FeasibilityCalculator::new(looser)
        .unwrap()
        .evaluate(&parcel, None)
        .unwrap();

    // 10 x 2000 = 20000 now exceeds the 18158.75 FAR capacity
    assert_eq!(result.effective_buildable_sf(), dec!(18158.75));
    assert_eq!(result.lot_efficiency.ratio, dec!(1));
}
