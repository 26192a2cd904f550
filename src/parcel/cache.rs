//! Parcel cache keyed by listing coordinates

use super::types::{ParcelError, ParcelRecord, ServiceArea};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::path::Path;

/// Cache key for a listing location: `"lat,lng"` rounded to 6 places
///
/// Whole-number coordinates keep a trailing `.0` (`"34.0,-118.0"`), matching
/// the keys the cache files are written with.
pub fn parcel_key(lat: f64, lng: f64) -> String {
    format!("{},{}", key_part(lat), key_part(lng))
}

fn key_part(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        rounded.to_string()
    }
}

/// Coverage statistics for a loaded cache
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub total: usize,
    pub with_lot_size: usize,
    pub in_fire_zone: usize,
    pub median_lot_sf: Option<Decimal>,
    pub min_lot_sf: Option<Decimal>,
    pub max_lot_sf: Option<Decimal>,
}

/// Read-only parcel lookup table
#[derive(Debug, Clone, Default)]
pub struct ParcelCache {
    records: HashMap<String, ParcelRecord>,
    area: ServiceArea,
}

impl ParcelCache {
    /// Parse a cache from its JSON object form
    pub fn from_json_str(json: &str) -> Result<Self, ParcelError> {
        let records: HashMap<String, ParcelRecord> = serde_json::from_str(json)?;
        Ok(Self {
            records,
            area: ServiceArea::default(),
        })
    }

    /// Load a cache file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParcelError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let cache = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.as_ref().display(),
            parcels = cache.len(),
            "Loaded parcel cache"
        );
        Ok(cache)
    }

    /// Restrict lookups to a different service area
    pub fn with_service_area(mut self, area: ServiceArea) -> Self {
        self.area = area;
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at the given coordinates
    pub fn lookup(&self, lat: f64, lng: f64) -> Result<&ParcelRecord, ParcelError> {
        let key = parcel_key(lat, lng);
        if !self.area.contains(lat, lng) {
            return Err(ParcelError::OutsideServiceArea(key));
        }
        self.records.get(&key).ok_or(ParcelError::NotFound(key))
    }

    /// Lot size at the given coordinates, failing when absent
    pub fn lot_sf(&self, lat: f64, lng: f64) -> Result<Decimal, ParcelError> {
        let record = self.lookup(lat, lng)?;
        record
            .usable_lot_sf()
            .ok_or_else(|| ParcelError::MissingLotSize(parcel_key(lat, lng)))
    }

    /// Coverage statistics
    pub fn stats(&self) -> CacheStats {
        let mut lots: Vec<Decimal> = self
            .records
            .values()
            .filter_map(ParcelRecord::usable_lot_sf)
            .collect();
        lots.sort();

        CacheStats {
            total: self.records.len(),
            with_lot_size: lots.len(),
            in_fire_zone: self.records.values().filter(|r| r.in_fire_zone()).count(),
            median_lot_sf: lots.get(lots.len() / 2).copied(),
            min_lot_sf: lots.first().copied(),
            max_lot_sf: lots.last().copied(),
        }
    }
}
