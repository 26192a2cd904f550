//! Batch command implementation

use crate::batch::{load_deals, BatchEvaluator};
use crate::config::Config;
use crate::feasibility::FeasibilityCalculator;
use crate::parcel::ParcelCache;
use crate::report::{self, OutputFormat};
use crate::telemetry;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Deal file (.toml with [[deal]] tables, or .json array)
    pub deals: PathBuf,

    /// Cached parcel data keyed by "lat,lng"
    #[arg(long)]
    pub parcels: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Print Prometheus metrics after the run
    #[arg(long)]
    pub metrics: bool,
}

impl BatchArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let handle = if self.metrics {
            Some(telemetry::install_recorder()?)
        } else {
            None
        };

        let deals = load_deals(&self.deals)?;
        let cache = self
            .parcels
            .as_ref()
            .map(ParcelCache::load)
            .transpose()?
            .map(|cache| cache.with_service_area(config.batch.service_area));
        if let Some(cache) = &cache {
            let stats = cache.stats();
            tracing::info!(
                total = stats.total,
                with_lot_size = stats.with_lot_size,
                in_fire_zone = stats.in_fire_zone,
                "Parcel cache coverage"
            );
        }

        let calculator = FeasibilityCalculator::new(config.policy.clone())?;
        let evaluator = BatchEvaluator::new(calculator, config.batch.clone()).with_thread_pool()?;
        let report = evaluator.run(&deals, cache.as_ref())?;

        match self.format {
            OutputFormat::Table => print!("{}", report::format_batch_table(&report)),
            OutputFormat::Json => println!("{}", report::to_json(&report)?),
        }

        if let Some(handle) = handle {
            eprintln!("{}", handle.render());
        }
        Ok(())
    }
}
