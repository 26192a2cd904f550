//! Metric formulas
//!
//! Every function here is pure: it reads its arguments and the policy and
//! returns a value or an error, nothing else.

use super::error::{
    div, guard_denominator, mul, require_non_negative, require_positive, sub, Result,
};
use super::types::{
    BindingCap, BuildableArea, Headroom, LandBasis, LotEfficiency, MetricsResult, ParcelInput,
    ProfitComparison, ProfitInput, TargetBuy,
};
use super::{PolicyConfig, Rating, Underwriter};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Effective buildable area: the lesser of the FAR cap and the product cap
pub fn effective_buildable_sf(
    lot_sf: Decimal,
    max_units: u32,
    policy: &PolicyConfig,
) -> Result<BuildableArea> {
    const OP: &str = "effective_buildable_sf";
    require_positive(OP, "lot_sf", lot_sf)?;
    require_positive(OP, "max_units", Decimal::from(max_units))?;

    let far_capacity_sf = mul(OP, "far_capacity_sf", lot_sf, policy.far_multiplier)?;
    let product_cap_sf = mul(
        OP,
        "product_cap_sf",
        Decimal::from(max_units),
        policy.product_sf_per_unit,
    )?;

    let (effective_sf, binding) = if far_capacity_sf <= product_cap_sf {
        (far_capacity_sf, BindingCap::Lot)
    } else {
        (product_cap_sf, BindingCap::Product)
    };

    Ok(BuildableArea {
        far_capacity_sf,
        product_cap_sf,
        effective_sf,
        wasted_far_sf: far_capacity_sf - effective_sf,
        binding,
    })
}

/// Asking price per effective buildable SF
pub fn land_basis_psf(
    price: Decimal,
    effective_sf: Decimal,
    policy: &PolicyConfig,
) -> Result<LandBasis> {
    const OP: &str = "land_basis_psf";
    require_positive(OP, "price", price)?;
    let effective_sf = guard_denominator(OP, "effective_buildable_sf", effective_sf)?;

    let psf = div(OP, "land_basis_psf", price, effective_sf)?;
    Ok(LandBasis {
        psf,
        rating: Rating::below(
            psf,
            policy.land_basis_green_max,
            policy.land_basis_yellow_max,
        ),
    })
}

/// Fraction of FAR capacity that the product cap allows to be built
///
/// A low ratio means the buyer is paying for lot area the unit cap
/// prevents monetizing.
pub fn lot_efficiency(
    effective_sf: Decimal,
    lot_sf: Decimal,
    policy: &PolicyConfig,
) -> Result<LotEfficiency> {
    const OP: &str = "lot_efficiency";
    require_positive(OP, "effective_buildable_sf", effective_sf)?;
    require_positive(OP, "lot_sf", lot_sf)?;
    let far_capacity_sf = mul(OP, "far_capacity_sf", lot_sf, policy.far_multiplier)?;
    let far_capacity_sf = guard_denominator(OP, "far_capacity_sf", far_capacity_sf)?;

    let ratio = div(OP, "lot_efficiency", effective_sf, far_capacity_sf)?;
    Ok(LotEfficiency {
        ratio,
        rating: Rating::at_least(
            ratio,
            policy.lot_efficiency_green_min,
            policy.lot_efficiency_yellow_min,
        ),
    })
}

/// Price the land can carry while keeping the target margin
///
/// A negative result means build cost alone exceeds the margin-adjusted exit
/// value; it is returned as-is.
pub fn target_buy_price(
    hood_ppsf: Decimal,
    build_cost_per_sf: Decimal,
    effective_sf: Decimal,
    policy: &PolicyConfig,
) -> Result<TargetBuy> {
    const OP: &str = "target_buy_price";
    require_positive(OP, "hood_ppsf", hood_ppsf)?;
    require_non_negative(OP, "build_cost_per_sf", build_cost_per_sf)?;
    require_positive(OP, "effective_buildable_sf", effective_sf)?;

    let keep = Decimal::ONE - policy.target_margin_fraction;
    let target_all_in_psf = mul(OP, "target_all_in_psf", hood_ppsf, keep)?;
    let target_land_basis_psf = sub(
        OP,
        "target_land_basis_psf",
        target_all_in_psf,
        build_cost_per_sf,
    )?;
    let target_buy_price = mul(OP, "target_buy_price", target_land_basis_psf, effective_sf)?;

    Ok(TargetBuy {
        target_all_in_psf,
        target_land_basis_psf,
        target_buy_price,
    })
}

/// Target buy price minus asking price, absolute and relative to asking
pub fn headroom(
    target_buy_price: Decimal,
    asking_price: Decimal,
    policy: &PolicyConfig,
) -> Result<Headroom> {
    const OP: &str = "headroom";
    let asking_price = require_positive(OP, "asking_price", asking_price)?;

    let amount = sub(OP, "headroom", target_buy_price, asking_price)?;
    let ratio = div(OP, "headroom_pct", amount, asking_price)?;
    let pct = mul(OP, "headroom_pct", ratio, dec!(100))?;

    let rating = if amount >= Decimal::ZERO {
        Rating::Green
    } else if pct >= policy.headroom_yellow_floor_pct {
        Rating::Yellow
    } else {
        Rating::Red
    };

    Ok(Headroom {
        amount,
        pct,
        rating,
    })
}

/// Return on cost and margin on revenue for the same profit
pub fn return_vs_margin(
    profit: Decimal,
    total_cost: Decimal,
    net_revenue: Decimal,
) -> Result<ProfitComparison> {
    const OP: &str = "return_vs_margin";
    let total_cost = require_positive(OP, "total_cost", total_cost)?;
    let net_revenue = require_positive(OP, "net_revenue", net_revenue)?;

    let return_on_cost = div(OP, "return_on_cost_pct", profit, total_cost)?;
    let margin_on_revenue = div(OP, "margin_on_revenue_pct", profit, net_revenue)?;

    Ok(ProfitComparison {
        return_on_cost_pct: mul(OP, "return_on_cost_pct", return_on_cost, dec!(100))?,
        margin_on_revenue_pct: mul(OP, "margin_on_revenue_pct", margin_on_revenue, dec!(100))?,
    })
}

/// Derive every metric for one parcel
pub fn evaluate(
    parcel: &ParcelInput,
    profit: Option<&ProfitInput>,
    policy: &PolicyConfig,
) -> Result<MetricsResult> {
    parcel.validate()?;

    let buildable = effective_buildable_sf(parcel.lot_sf, parcel.max_units, policy)?;
    let effective_sf = buildable.effective_sf;

    let land_basis = land_basis_psf(parcel.price, effective_sf, policy)?;
    let lot_efficiency = lot_efficiency(effective_sf, parcel.lot_sf, policy)?;
    let target = target_buy_price(
        parcel.hood_ppsf,
        parcel.build_cost_per_sf,
        effective_sf,
        policy,
    )?;
    let headroom = headroom(target.target_buy_price, parcel.price, policy)?;
    let profitability = profit
        .map(|p| return_vs_margin(p.profit, p.total_cost, p.net_revenue))
        .transpose()?;

    let overall = Rating::worst([land_basis.rating, lot_efficiency.rating, headroom.rating]);

    Ok(MetricsResult {
        buildable,
        land_basis,
        lot_efficiency,
        target,
        headroom,
        profitability,
        overall,
    })
}

/// Calculator bound to one policy
#[derive(Debug, Clone, Default)]
pub struct FeasibilityCalculator {
    policy: PolicyConfig,
}

impl FeasibilityCalculator {
    /// Create a calculator for the given policy
    pub fn new(policy: PolicyConfig) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }
}

impl Underwriter for FeasibilityCalculator {
    fn evaluate(&self, parcel: &ParcelInput, profit: Option<&ProfitInput>) -> Result<MetricsResult> {
        let result = evaluate(parcel, profit, &self.policy)?;
        tracing::debug!(
            lot_sf = %parcel.lot_sf,
            effective_sf = %result.buildable.effective_sf,
            land_basis_psf = %result.land_basis.psf.round_dp(2),
            headroom_pct = %result.headroom.pct.round_dp(2),
            overall = %result.overall,
            "Evaluated parcel"
        );
        Ok(result)
    }
}
