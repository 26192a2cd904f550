//! Property tests for the metric invariants

use land_feasibility::feasibility::{
    effective_buildable_sf, evaluate, headroom, land_basis_psf, lot_efficiency, return_vs_margin,
    ParcelInput, PolicyConfig,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Lot sizes from 0.01 SF to 1,000,000 SF with two decimals
fn lot_sf() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn units() -> impl Strategy<Value = u32> {
    1u32..500
}

fn dollars() -> impl Strategy<Value = Decimal> {
    (1i64..50_000_000).prop_map(Decimal::from)
}

proptest! {
    #[test]
    fn effective_area_is_min_of_caps(lot in lot_sf(), max_units in units()) {
        let policy = PolicyConfig::default();
        let area = effective_buildable_sf(lot, max_units, &policy).unwrap();
        let far_cap = lot * policy.far_multiplier;
        let product_cap = Decimal::from(max_units) * policy.product_sf_per_unit;

        prop_assert!(area.effective_sf <= far_cap);
        prop_assert!(area.effective_sf <= product_cap);
        prop_assert_eq!(area.effective_sf, far_cap.min(product_cap));
        prop_assert!(area.wasted_far_sf >= Decimal::ZERO);
    }

    #[test]
    fn efficiency_in_unit_interval(lot in lot_sf(), max_units in units()) {
        let policy = PolicyConfig::default();
        let area = effective_buildable_sf(lot, max_units, &policy).unwrap();
        let eff = lot_efficiency(area.effective_sf, lot, &policy).unwrap();

        prop_assert!(eff.ratio > Decimal::ZERO);
        prop_assert!(eff.ratio <= Decimal::ONE);

        let lot_constrained =
            lot * policy.far_multiplier <= Decimal::from(max_units) * policy.product_sf_per_unit;
        prop_assert_eq!(eff.ratio == Decimal::ONE, lot_constrained);
    }

    #[test]
    fn headroom_decreases_with_asking_price(
        target in (-10_000_000i64..10_000_000).prop_map(Decimal::from),
        asking in dollars(),
        bump in dollars(),
    ) {
        let policy = PolicyConfig::default();
        let low = headroom(target, asking, &policy).unwrap();
        let high = headroom(target, asking + bump, &policy).unwrap();

        prop_assert!(high.amount < low.amount);
        // pct = target/asking - 1 falls with asking only while the target is positive
        if target > Decimal::ZERO {
            prop_assert!(high.pct < low.pct);
        } else {
            prop_assert!(high.pct >= low.pct);
        }
    }

    #[test]
    fn land_basis_rating_is_monotone(price in dollars(), extra in dollars()) {
        let policy = PolicyConfig::default();
        let area = Decimal::from(17_500);
        let cheap = land_basis_psf(price, area, &policy).unwrap();
        let dear = land_basis_psf(price + extra, area, &policy).unwrap();
        prop_assert!(cheap.rating <= dear.rating);
    }

    #[test]
    fn return_and_margin_differ_unless_cost_equals_revenue(
        profit in dollars(),
        cost in dollars(),
        revenue in dollars(),
    ) {
        let cmp = return_vs_margin(profit, cost, revenue).unwrap();
        prop_assert_eq!(cmp.return_on_cost_pct == cmp.margin_on_revenue_pct, cost == revenue);
    }

    #[test]
    fn evaluation_is_idempotent(
        lot in lot_sf(),
        max_units in units(),
        price in dollars(),
        hood in (100i64..2_000).prop_map(Decimal::from),
        build in (0i64..1_000).prop_map(Decimal::from),
    ) {
        let policy = PolicyConfig::default();
        let parcel = ParcelInput::new(lot, max_units, price, hood, build).unwrap();
        let first = evaluate(&parcel, None, &policy).unwrap();
        let second = evaluate(&parcel, None, &policy).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        prop_assert_eq!(first, second);
    }
}
