//! Batch input and output types

use crate::feasibility::{FeasibilityError, MetricsResult, ParcelInput, ProfitInput, Rating};
use crate::parcel::{ParcelCache, ParcelError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Batch evaluation errors
#[derive(Debug, Error)]
pub enum BatchError {
    /// Deal gives neither a lot size nor coordinates
    #[error("Deal {0} has neither lot_sf nor lat/lng")]
    MissingLocation(String),
    /// Deal needs a parcel cache lookup but none was supplied
    #[error("Deal {0} needs a parcel cache to resolve its lot size")]
    NoParcelCache(String),
    #[error(transparent)]
    Parcel(#[from] ParcelError),
    #[error(transparent)]
    Feasibility(#[from] FeasibilityError),
    #[error("Failed to read deal file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed deal file: {0}")]
    Parse(String),
    #[error("Unsupported deal file extension: {0:?}")]
    UnsupportedFormat(PathBuf),
    #[error("No deals to evaluate")]
    NoDeals,
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

impl BatchError {
    /// Short kind label, used for metric labels
    pub fn kind(&self) -> &'static str {
        match self {
            BatchError::MissingLocation(_) | BatchError::NoParcelCache(_) => "missing_location",
            BatchError::Parcel(_) => "parcel_lookup",
            BatchError::Feasibility(e) => e.kind(),
            BatchError::Io(_) | BatchError::Parse(_) | BatchError::UnsupportedFormat(_) => {
                "input"
            }
            BatchError::NoDeals => "no_deals",
            BatchError::ThreadPool(_) => "thread_pool",
        }
    }
}

/// One deal in a batch file
///
/// The lot size is either given directly or looked up in the parcel cache by
/// coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealSpec {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lot_sf: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    pub max_units: u32,
    pub price: Decimal,
    pub hood_ppsf: Decimal,
    pub build_cost_per_sf: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit: Option<ProfitInput>,
}

/// A deal with its lot size settled
#[derive(Debug, Clone)]
pub struct ResolvedDeal {
    pub parcel: ParcelInput,
    pub fire_zone: bool,
}

impl DealSpec {
    /// Settle the lot size and validate the parcel input
    pub fn resolve(&self, cache: Option<&ParcelCache>) -> Result<ResolvedDeal, BatchError> {
        let (lot_sf, fire_zone) = match (self.lot_sf, self.lat, self.lng) {
            (Some(lot_sf), lat, lng) => {
                // Fire zone is informational; a cache miss is not an error here
                let fire_zone = match (cache, lat, lng) {
                    (Some(cache), Some(lat), Some(lng)) => cache
                        .lookup(lat, lng)
                        .map(|r| r.in_fire_zone())
                        .unwrap_or(false),
                    _ => false,
                };
                (lot_sf, fire_zone)
            }
            (None, Some(lat), Some(lng)) => {
                let cache = cache.ok_or_else(|| BatchError::NoParcelCache(self.id.clone()))?;
                let record = cache.lookup(lat, lng)?;
                let lot_sf = cache.lot_sf(lat, lng)?;
                (lot_sf, record.in_fire_zone())
            }
            _ => return Err(BatchError::MissingLocation(self.id.clone())),
        };

        let parcel = ParcelInput::new(
            lot_sf,
            self.max_units,
            self.price,
            self.hood_ppsf,
            self.build_cost_per_sf,
        )?;

        Ok(ResolvedDeal { parcel, fire_zone })
    }
}

/// Result of evaluating one deal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    Evaluated { metrics: MetricsResult },
    Failed { error: String },
}

/// One row of a batch report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealOutcome {
    pub id: String,
    #[serde(default)]
    pub fire_zone: bool,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

impl DealOutcome {
    pub fn metrics(&self) -> Option<&MetricsResult> {
        match &self.status {
            OutcomeStatus::Evaluated { metrics } => Some(metrics),
            OutcomeStatus::Failed { .. } => None,
        }
    }
}

/// Counts across a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub evaluated: usize,
    pub failed: usize,
    pub green: usize,
    pub yellow: usize,
    pub red: usize,
    pub fire_zone: usize,
}

impl BatchSummary {
    /// Tally a set of outcomes
    pub fn from_outcomes(outcomes: &[DealOutcome]) -> Self {
        let mut summary = Self {
            total: outcomes.len(),
            ..Default::default()
        };
        for outcome in outcomes {
            if outcome.fire_zone {
                summary.fire_zone += 1;
            }
            match outcome.metrics() {
                Some(metrics) => {
                    summary.evaluated += 1;
                    match metrics.overall {
                        Rating::Green => summary.green += 1,
                        Rating::Yellow => summary.yellow += 1,
                        Rating::Red => summary.red += 1,
                    }
                }
                None => summary.failed += 1,
            }
        }
        summary
    }
}

/// Complete batch results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub outcomes: Vec<DealOutcome>,
    pub summary: BatchSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn deal(id: &str) -> DealSpec {
        DealSpec {
            id: id.to_string(),
            lot_sf: Some(dec!(14527)),
            lat: None,
            lng: None,
            max_units: 10,
            price: dec!(2200000),
            hood_ppsf: dec!(830),
            build_cost_per_sf: dec!(350),
            profit: None,
        }
    }

    const CACHE: &str = r#"{
        "34.05,-118.25": {"lotSf": 31730, "ain": "1", "fireZone": true},
        "34.2,-118.4": {"ain": "3"}
    }"#;

    #[test]
    fn test_resolve_explicit_lot() {
        let resolved = deal("a").resolve(None).unwrap();
        assert_eq!(resolved.parcel.lot_sf, dec!(14527));
        assert!(!resolved.fire_zone);
    }

    #[test]
    fn test_resolve_from_cache() {
        let cache = ParcelCache::from_json_str(CACHE).unwrap();
        let spec = DealSpec {
            lot_sf: None,
            lat: Some(34.05),
            lng: Some(-118.25),
            ..deal("b")
        };
        let resolved = spec.resolve(Some(&cache)).unwrap();
        assert_eq!(resolved.parcel.lot_sf, dec!(31730));
        assert!(resolved.fire_zone);
    }

    #[test]
    fn test_resolve_explicit_lot_keeps_fire_flag() {
        let cache = ParcelCache::from_json_str(CACHE).unwrap();
        let spec = DealSpec {
            lat: Some(34.05),
            lng: Some(-118.25),
            ..deal("c")
        };
        let resolved = spec.resolve(Some(&cache)).unwrap();
        assert_eq!(resolved.parcel.lot_sf, dec!(14527));
        assert!(resolved.fire_zone);
    }

    #[test]
    fn test_resolve_errors() {
        let cache = ParcelCache::from_json_str(CACHE).unwrap();
        let no_location = DealSpec {
            lot_sf: None,
            ..deal("d")
        };
        assert!(matches!(
            no_location.resolve(Some(&cache)),
            Err(BatchError::MissingLocation(_))
        ));

        let by_coords = DealSpec {
            lot_sf: None,
            lat: Some(34.2),
            lng: Some(-118.4),
            ..deal("e")
        };
        assert!(matches!(
            by_coords.resolve(None),
            Err(BatchError::NoParcelCache(_))
        ));
        let err = by_coords.resolve(Some(&cache)).unwrap_err();
        assert!(matches!(err, BatchError::Parcel(ParcelError::MissingLotSize(_))));
        assert_eq!(err.kind(), "parcel_lookup");
    }

    #[test]
    fn test_resolve_invalid_parcel() {
        let spec = DealSpec {
            max_units: 0,
            ..deal("f")
        };
        let err = spec.resolve(None).unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
    }

    #[test]
    fn test_summary_counts() {
        let outcomes = vec![
            DealOutcome {
                id: "x".to_string(),
                fire_zone: true,
                status: OutcomeStatus::Failed {
                    error: "boom".to_string(),
                },
            },
            DealOutcome {
                id: "y".to_string(),
                fire_zone: false,
                status: OutcomeStatus::Failed {
                    error: "boom".to_string(),
                },
            },
        ];
        let summary = BatchSummary::from_outcomes(&outcomes);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.evaluated, 0);
        assert_eq!(summary.fire_zone, 1);
    }

    #[test]
    fn test_outcome_serializes_status_tag() {
        let outcome = DealOutcome {
            id: "z".to_string(),
            fire_zone: false,
            status: OutcomeStatus::Failed {
                error: "bad".to_string(),
            },
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"], "bad");
    }
}
