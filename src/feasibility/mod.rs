//! Feasibility metrics module
//!
//! Buildable area under competing FAR and product caps, land basis, lot
//! efficiency, target buy price with headroom, and return-on-cost vs.
//! margin-on-revenue.

mod calculator;
mod error;
mod policy;
mod rating;
mod types;

pub use calculator::{
    effective_buildable_sf, evaluate, headroom, land_basis_psf, lot_efficiency,
    return_vs_margin, target_buy_price, FeasibilityCalculator,
};
pub use error::{FeasibilityError, Result};
pub use policy::PolicyConfig;
pub use rating::Rating;
pub use types::{
    BindingCap, BuildableArea, Headroom, LandBasis, LotEfficiency, MetricsResult, ParcelInput,
    ProfitComparison, ProfitInput, TargetBuy,
};

/// Trait for underwriting implementations
pub trait Underwriter: Send + Sync {
    /// Derive all metrics for one parcel
    fn evaluate(&self, parcel: &ParcelInput, profit: Option<&ProfitInput>) -> Result<MetricsResult>;
}
