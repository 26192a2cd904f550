//! Parcel record types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Assessor data cached for one listing location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelRecord {
    /// Lot area (SF)
    #[serde(default)]
    pub lot_sf: Option<Decimal>,
    /// Assessor identification number
    #[serde(default)]
    pub ain: String,
    /// Assessed land value
    #[serde(default)]
    pub land_value: Option<Decimal>,
    /// Assessed improvement value
    #[serde(default)]
    pub imp_value: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situs_address: Option<String>,
    /// Inside a very-high fire hazard severity zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fire_zone: Option<bool>,
}

impl ParcelRecord {
    /// Lot area when known and positive
    pub fn usable_lot_sf(&self) -> Option<Decimal> {
        self.lot_sf.filter(|sf| *sf > Decimal::ZERO)
    }

    pub fn in_fire_zone(&self) -> bool {
        self.fire_zone.unwrap_or(false)
    }
}

/// Rectangular coordinate bounds a listing must fall inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceArea {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl ServiceArea {
    /// Whether a point lies within the bounds (inclusive)
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat) && (self.lng_min..=self.lng_max).contains(&lng)
    }
}

impl Default for ServiceArea {
    /// Los Angeles County
    fn default() -> Self {
        Self {
            lat_min: 33.70,
            lat_max: 34.85,
            lng_min: -118.95,
            lng_max: -117.55,
        }
    }
}

/// Parcel lookup errors
#[derive(Debug, Error)]
pub enum ParcelError {
    /// No cached record at the given coordinates
    #[error("No parcel cached for {0}")]
    NotFound(String),
    /// Record exists but has no usable lot size
    #[error("Parcel {0} has no lot size")]
    MissingLotSize(String),
    /// Coordinates fall outside the service area
    #[error("Location {0} is outside the service area")]
    OutsideServiceArea(String),
    #[error("Failed to read parcel cache: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed parcel cache: {0}")]
    Parse(#[from] serde_json::Error),
}
