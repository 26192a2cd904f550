//! Prometheus metrics

use crate::feasibility::MetricsResult;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use rust_decimal::prelude::ToPrimitive;

const PARCELS_EVALUATED: &str = "landfeas_parcels_evaluated_total";
const EVALUATION_ERRORS: &str = "landfeas_evaluation_errors_total";
const LAND_BASIS_PSF: &str = "landfeas_land_basis_psf";
const HEADROOM_PCT: &str = "landfeas_headroom_pct";
const LOT_EFFICIENCY: &str = "landfeas_lot_efficiency";

/// Install an in-process Prometheus recorder
///
/// The returned handle renders the text exposition on demand; no listener
/// is started.
pub fn install_recorder() -> anyhow::Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics recorder: {}", e))
}

/// Record a successful evaluation
pub fn record_evaluation(result: &MetricsResult) {
    metrics::counter!(PARCELS_EVALUATED, "rating" => result.overall.as_str()).increment(1);

    if let Some(psf) = result.land_basis.psf.to_f64() {
        metrics::histogram!(LAND_BASIS_PSF).record(psf);
    }
    if let Some(pct) = result.headroom.pct.to_f64() {
        metrics::histogram!(HEADROOM_PCT).record(pct);
    }
    if let Some(ratio) = result.lot_efficiency.ratio.to_f64() {
        metrics::histogram!(LOT_EFFICIENCY).record(ratio);
    }

    tracing::trace!(metric = PARCELS_EVALUATED, rating = %result.overall, "Recorded evaluation");
}

/// Record a failed evaluation
pub fn record_error(kind: &'static str) {
    metrics::counter!(EVALUATION_ERRORS, "kind" => kind).increment(1);
}
