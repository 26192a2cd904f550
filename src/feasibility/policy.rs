//! Underwriting policy parameters

use super::error::{FeasibilityError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Policy constants applied to every parcel
///
/// Defaults are the density-bonus rule used for small-lot subdivisions:
/// a 1.25 FAR, 1,750 SF of product per unit and a 30% target margin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Lot area multiplier giving the physical buildable area
    #[serde(default = "default_far_multiplier")]
    pub far_multiplier: Decimal,

    /// Statutory product allowance per permitted unit (SF)
    #[serde(default = "default_product_sf_per_unit")]
    pub product_sf_per_unit: Decimal,

    /// Target margin on exit value, as a fraction
    #[serde(default = "default_target_margin_fraction")]
    pub target_margin_fraction: Decimal,

    /// Land basis strictly below this is GREEN ($/SF)
    #[serde(default = "default_land_basis_green_max")]
    pub land_basis_green_max: Decimal,

    /// Land basis at or below this is YELLOW ($/SF)
    #[serde(default = "default_land_basis_yellow_max")]
    pub land_basis_yellow_max: Decimal,

    /// Lot efficiency at or above this is GREEN
    #[serde(default = "default_lot_efficiency_green_min")]
    pub lot_efficiency_green_min: Decimal,

    /// Lot efficiency at or above this is YELLOW
    #[serde(default = "default_lot_efficiency_yellow_min")]
    pub lot_efficiency_yellow_min: Decimal,

    /// Negative headroom down to this percentage is YELLOW
    #[serde(default = "default_headroom_yellow_floor_pct")]
    pub headroom_yellow_floor_pct: Decimal,
}

fn default_far_multiplier() -> Decimal {
    Decimal::new(125, 2) // 1.25
}
fn default_product_sf_per_unit() -> Decimal {
    Decimal::new(1750, 0)
}
fn default_target_margin_fraction() -> Decimal {
    Decimal::new(30, 2) // 0.30 = 30%
}
fn default_land_basis_green_max() -> Decimal {
    Decimal::new(120, 0)
}
fn default_land_basis_yellow_max() -> Decimal {
    Decimal::new(160, 0)
}
fn default_lot_efficiency_green_min() -> Decimal {
    Decimal::new(85, 2) // 0.85
}
fn default_lot_efficiency_yellow_min() -> Decimal {
    Decimal::new(60, 2) // 0.60
}
fn default_headroom_yellow_floor_pct() -> Decimal {
    Decimal::new(-15, 0)
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            far_multiplier: default_far_multiplier(),
            product_sf_per_unit: default_product_sf_per_unit(),
            target_margin_fraction: default_target_margin_fraction(),
            land_basis_green_max: default_land_basis_green_max(),
            land_basis_yellow_max: default_land_basis_yellow_max(),
            lot_efficiency_green_min: default_lot_efficiency_green_min(),
            lot_efficiency_yellow_min: default_lot_efficiency_yellow_min(),
            headroom_yellow_floor_pct: default_headroom_yellow_floor_pct(),
        }
    }
}

impl PolicyConfig {
    /// Reject policies whose thresholds cannot classify consistently
    pub fn validate(&self) -> Result<()> {
        const OP: &str = "policy";
        let invalid = |field: &'static str, value: Decimal| FeasibilityError::InvalidInput {
            operation: OP,
            field,
            value,
        };

        if self.far_multiplier <= Decimal::ZERO {
            return Err(invalid("far_multiplier", self.far_multiplier));
        }
        if self.product_sf_per_unit <= Decimal::ZERO {
            return Err(invalid("product_sf_per_unit", self.product_sf_per_unit));
        }
        if self.target_margin_fraction < Decimal::ZERO
            || self.target_margin_fraction >= Decimal::ONE
        {
            return Err(invalid(
                "target_margin_fraction",
                self.target_margin_fraction,
            ));
        }
        if self.land_basis_green_max > self.land_basis_yellow_max {
            return Err(invalid("land_basis_green_max", self.land_basis_green_max));
        }
        if self.lot_efficiency_yellow_min > self.lot_efficiency_green_min {
            return Err(invalid(
                "lot_efficiency_yellow_min",
                self.lot_efficiency_yellow_min,
            ));
        }
        if self.headroom_yellow_floor_pct > Decimal::ZERO {
            return Err(invalid(
                "headroom_yellow_floor_pct",
                self.headroom_yellow_floor_pct,
            ));
        }
        Ok(())
    }
}
