//! Parcel data module
//!
//! Read-only access to cached assessor data (lot size, AIN, assessed values,
//! fire hazard zone) keyed by listing coordinates.

mod cache;
mod types;

pub use cache::{parcel_key, CacheStats, ParcelCache};
pub use types::{ParcelError, ParcelRecord, ServiceArea};
