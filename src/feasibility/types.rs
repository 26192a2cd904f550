//! Feasibility input and result types

use super::error::{require_non_negative, require_positive, FeasibilityError, Result};
use super::Rating;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One candidate land deal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParcelInput {
    /// Lot area (SF)
    pub lot_sf: Decimal,
    /// Statutory unit cap
    pub max_units: u32,
    /// Asking price
    pub price: Decimal,
    /// Comparable neighborhood sale price per SF
    pub hood_ppsf: Decimal,
    /// Construction cost per SF
    pub build_cost_per_sf: Decimal,
}

impl ParcelInput {
    /// Create a validated parcel input
    pub fn new(
        lot_sf: Decimal,
        max_units: u32,
        price: Decimal,
        hood_ppsf: Decimal,
        build_cost_per_sf: Decimal,
    ) -> Result<Self> {
        let parcel = Self {
            lot_sf,
            max_units,
            price,
            hood_ppsf,
            build_cost_per_sf,
        };
        parcel.validate()?;
        Ok(parcel)
    }

    /// Check every field against its domain
    pub fn validate(&self) -> Result<()> {
        const OP: &str = "parcel_input";
        require_positive(OP, "lot_sf", self.lot_sf)?;
        if self.max_units == 0 {
            return Err(FeasibilityError::InvalidInput {
                operation: OP,
                field: "max_units",
                value: Decimal::ZERO,
            });
        }
        require_positive(OP, "price", self.price)?;
        require_positive(OP, "hood_ppsf", self.hood_ppsf)?;
        require_non_negative(OP, "build_cost_per_sf", self.build_cost_per_sf)?;
        Ok(())
    }
}

/// Profit figures for the return-on-cost comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitInput {
    pub profit: Decimal,
    pub total_cost: Decimal,
    pub net_revenue: Decimal,
}

/// Which cap sets the effective buildable area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingCap {
    /// Lot area times FAR is the smaller cap
    Lot,
    /// Units times per-unit allowance is the smaller cap
    Product,
}

/// Buildable area under the two competing caps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildableArea {
    /// Lot area times FAR multiplier
    pub far_capacity_sf: Decimal,
    /// Unit cap times per-unit product allowance
    pub product_cap_sf: Decimal,
    /// Lesser of the two caps
    pub effective_sf: Decimal,
    /// FAR capacity the product cap prevents building
    pub wasted_far_sf: Decimal,
    pub binding: BindingCap,
}

/// Land cost normalized per buildable SF
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandBasis {
    pub psf: Decimal,
    pub rating: Rating,
}

/// Share of FAR capacity the product cap lets you build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotEfficiency {
    pub ratio: Decimal,
    pub rating: Rating,
}

/// Acquisition price that still clears the target margin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetBuy {
    /// Exit value per SF net of target margin
    pub target_all_in_psf: Decimal,
    /// What remains per SF for land after build cost
    pub target_land_basis_psf: Decimal,
    pub target_buy_price: Decimal,
}

impl TargetBuy {
    /// False when build cost alone exceeds the margin-adjusted exit value
    pub fn is_feasible(&self) -> bool {
        self.target_land_basis_psf >= Decimal::ZERO
    }
}

/// Target buy price against the asking price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headroom {
    pub amount: Decimal,
    pub pct: Decimal,
    pub rating: Rating,
}

/// Two framings of the same profit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitComparison {
    /// Profit over total cost (%)
    pub return_on_cost_pct: Decimal,
    /// Profit over net revenue (%)
    pub margin_on_revenue_pct: Decimal,
}

/// Every metric derived for one parcel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsResult {
    pub buildable: BuildableArea,
    pub land_basis: LandBasis,
    pub lot_efficiency: LotEfficiency,
    pub target: TargetBuy,
    pub headroom: Headroom,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profitability: Option<ProfitComparison>,
    /// Worst of the per-metric ratings
    pub overall: Rating,
}

impl MetricsResult {
    /// Shorthand for the effective buildable area
    pub fn effective_buildable_sf(&self) -> Decimal {
        self.buildable.effective_sf
    }
}
