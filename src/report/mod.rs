//! Console and JSON rendering of computed metrics
//!
//! Nothing here computes a metric; it only formats what the calculator
//! returned.

mod format;

pub use format::{currency, percent, ratio_percent, signed_currency, square_feet};

use crate::batch::{BatchReport, OutcomeStatus};
use crate::feasibility::{BindingCap, MetricsResult, ParcelInput, PolicyConfig};
use serde::Serialize;
use std::fmt::Write;

/// Output format for CLI reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Pretty-printed JSON for any report value
pub fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format a single parcel's metrics as a table
pub fn format_table(parcel: &ParcelInput, result: &MetricsResult, policy: &PolicyConfig) -> String {
    let area = &result.buildable;
    let binding = match area.binding {
        BindingCap::Lot => "lot (FAR)",
        BindingCap::Product => "product cap",
    };

    let mut out = format!(
        r#"
══════════════════════════════════════════════════════
               FEASIBILITY METRICS
══════════════════════════════════════════════════════

BUILDABLE AREA
───────────────────────────────────────────────────────
Lot SF:             {}
FAR capacity:       {} SF ({}x)
Product cap:        {} SF ({} x {})
Effective SF:       {} SF (binding: {})
Wasted FAR:         {} SF

LAND
───────────────────────────────────────────────────────
Land basis:         {}/sf  [{}]
Lot efficiency:     {}  [{}]

TARGET BUY ({} margin)
───────────────────────────────────────────────────────
Exit $/SF:          {}
Target all-in:      {}/sf
Target land basis:  {}/sf
Target buy price:   {}
Asking price:       {}
Headroom:           {} ({})  [{}]
"#,
        square_feet(parcel.lot_sf),
        square_feet(area.far_capacity_sf),
        policy.far_multiplier,
        square_feet(area.product_cap_sf),
        parcel.max_units,
        square_feet(policy.product_sf_per_unit),
        square_feet(area.effective_sf),
        binding,
        square_feet(area.wasted_far_sf),
        currency(result.land_basis.psf),
        result.land_basis.rating,
        ratio_percent(result.lot_efficiency.ratio),
        result.lot_efficiency.rating,
        ratio_percent(policy.target_margin_fraction),
        currency(parcel.hood_ppsf),
        currency(result.target.target_all_in_psf),
        currency(result.target.target_land_basis_psf),
        currency(result.target.target_buy_price),
        currency(parcel.price),
        signed_currency(result.headroom.amount),
        percent(result.headroom.pct),
        result.headroom.rating,
    );

    if !result.target.is_feasible() {
        out.push_str("Build cost exceeds margin-adjusted exit value; infeasible at target margin\n");
    }

    if let Some(profit) = &result.profitability {
        let _ = write!(
            out,
            r#"
PROFITABILITY
───────────────────────────────────────────────────────
Return on cost:     {}
Margin on revenue:  {}
"#,
            percent(profit.return_on_cost_pct),
            percent(profit.margin_on_revenue_pct),
        );
    }

    let _ = write!(
        out,
        "══════════════════════════════════════════════════════\nOverall:            {}\n",
        result.overall
    );
    out
}

/// Format a batch report, one line per deal
pub fn format_batch_table(report: &BatchReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<20} {:>12} {:>10} {:>8} {:>16} {:>8}  {}",
        "DEAL", "EFFECTIVE SF", "BASIS/SF", "EFF", "HEADROOM", "HR %", "RATING"
    );
    let _ = writeln!(out, "{}", "─".repeat(90));

    for outcome in &report.outcomes {
        let fire = if outcome.fire_zone { " (fire zone)" } else { "" };
        match &outcome.status {
            OutcomeStatus::Evaluated { metrics } => {
                let _ = writeln!(
                    out,
                    "{:<20} {:>12} {:>10} {:>8} {:>16} {:>8}  {}{}",
                    outcome.id,
                    square_feet(metrics.buildable.effective_sf),
                    currency(metrics.land_basis.psf),
                    ratio_percent(metrics.lot_efficiency.ratio),
                    signed_currency(metrics.headroom.amount),
                    percent(metrics.headroom.pct),
                    metrics.overall,
                    fire,
                );
            }
            OutcomeStatus::Failed { error } => {
                let _ = writeln!(out, "{:<20} ERROR: {}{}", outcome.id, error, fire);
            }
        }
    }

    let s = &report.summary;
    let _ = writeln!(out, "{}", "─".repeat(90));
    let _ = writeln!(
        out,
        "{} deals: {} GREEN, {} YELLOW, {} RED, {} failed, {} in fire zones",
        s.total, s.green, s.yellow, s.red, s.failed, s.fire_zone
    );
    out
}

/// Format the active policy
pub fn format_policy(policy: &PolicyConfig) -> String {
    format!(
        r#"Active policy:
  FAR multiplier:        {}x
  Product SF per unit:   {}
  Target margin:         {}
  Land basis bands:      GREEN < {} <= YELLOW <= {} < RED ($/sf)
  Lot efficiency bands:  GREEN >= {}, YELLOW >= {}
  Headroom YELLOW floor: {}
"#,
        policy.far_multiplier,
        square_feet(policy.product_sf_per_unit),
        ratio_percent(policy.target_margin_fraction),
        policy.land_basis_green_max,
        policy.land_basis_yellow_max,
        ratio_percent(policy.lot_efficiency_green_min),
        ratio_percent(policy.lot_efficiency_yellow_min),
        percent(policy.headroom_yellow_floor_pct),
    )
}
