//! Integration tests for batch evaluation with a parcel cache

use land_feasibility::batch::{load_deals, BatchEvaluator, OutcomeStatus};
use land_feasibility::config::BatchConfig;
use land_feasibility::feasibility::{FeasibilityCalculator, Rating};
use land_feasibility::parcel::ParcelCache;
use land_feasibility::report;
use std::io::Write;

const PARCELS: &str = r#"{
    "34.05,-118.25": {"lotSf": 14527, "ain": "5012003014", "fireZone": false},
    "34.1,-118.3": {"lotSf": 31730, "ain": "5012003015", "fireZone": true},
    "34.2,-118.4": {"ain": "5012003016", "fireZone": false}
}"#;

const DEALS: &str = r#"
    [[deal]]
    id = "sweet-spot"
    lat = 34.05
    lng = -118.25
    max_units = 10
    price = 2200000
    hood_ppsf = 830
    build_cost_per_sf = 350

    [[deal]]
    id = "oversized"
    lat = 34.1
    lng = -118.3
    max_units = 10
    price = 4500000
    hood_ppsf = 830
    build_cost_per_sf = 350

    [[deal]]
    id = "no-lot-size"
    lat = 34.2
    lng = -118.4
    max_units = 10
    price = 1000000
    hood_ppsf = 830
    build_cost_per_sf = 350

    [[deal]]
    id = "explicit"
    lot_sf = 8000
    max_units = 10
    price = 800000
    hood_ppsf = 830
    build_cost_per_sf = 350
"#;

#[test]
fn test_batch_with_parcel_cache() {
    let mut deals_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(deals_file, "{}", DEALS).unwrap();
    let mut parcels_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(parcels_file, "{}", PARCELS).unwrap();

    let deals = load_deals(deals_file.path()).unwrap();
    let cache = ParcelCache::load(parcels_file.path()).unwrap();

    let evaluator = BatchEvaluator::new(FeasibilityCalculator::default(), BatchConfig::default());
    let report = evaluator.run(&deals, Some(&cache)).unwrap();

    let ids: Vec<&str> = report.outcomes.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, ["sweet-spot", "oversized", "no-lot-size", "explicit"]);

    assert_eq!(report.outcomes[0].metrics().unwrap().overall, Rating::Yellow);
    assert_eq!(report.outcomes[1].metrics().unwrap().overall, Rating::Red);
    assert!(report.outcomes[1].fire_zone);
    assert!(matches!(
        report.outcomes[2].status,
        OutcomeStatus::Failed { .. }
    ));

    // 8000 SF lot, lot-constrained: 10000 SF, $80/sf, efficiency 1
    let explicit = report.outcomes[3].metrics().unwrap();
    assert_eq!(explicit.overall, Rating::Green);

    assert_eq!(report.summary.total, 4);
    assert_eq!(report.summary.evaluated, 3);
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.summary.fire_zone, 1);

    let json = report::to_json(&report).unwrap();
    assert!(json.contains("\"status\": \"failed\""));
    assert!(report::format_batch_table(&report).contains("(fire zone)"));
}
