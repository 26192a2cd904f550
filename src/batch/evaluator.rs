//! Parallel batch evaluator using Rayon

use super::types::{BatchError, BatchReport, BatchSummary, DealOutcome, DealSpec, OutcomeStatus};
use crate::config::BatchConfig;
use crate::feasibility::{FeasibilityCalculator, Underwriter};
use crate::parcel::ParcelCache;
use crate::telemetry;
use chrono::Utc;
use rayon::prelude::*;
use std::time::Instant;

/// Evaluates many deals against one shared policy
pub struct BatchEvaluator<U = FeasibilityCalculator> {
    underwriter: U,
    config: BatchConfig,
    pool: Option<rayon::ThreadPool>,
}

impl<U: Underwriter> BatchEvaluator<U> {
    /// Create a new batch evaluator
    pub fn new(underwriter: U, config: BatchConfig) -> Self {
        Self {
            underwriter,
            config,
            pool: None,
        }
    }

    /// Run parallel batches on a dedicated pool of `max_threads` workers
    ///
    /// With `max_threads = 0` the rayon global pool is used.
    pub fn with_thread_pool(mut self) -> Result<Self, BatchError> {
        if self.config.max_threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.max_threads)
                .thread_name(|i| format!("batch-worker-{i}"))
                .build()
                .map_err(|e| BatchError::ThreadPool(e.to_string()))?;
            self.pool = Some(pool);
        }
        Ok(self)
    }

    /// Worker threads available to a parallel run
    pub fn num_threads(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, |pool| pool.current_num_threads())
    }

    /// Evaluate every deal; a failing deal is reported, not fatal
    ///
    /// Outcomes keep the input order.
    pub fn run(
        &self,
        deals: &[DealSpec],
        cache: Option<&ParcelCache>,
    ) -> Result<BatchReport, BatchError> {
        if deals.is_empty() {
            return Err(BatchError::NoDeals);
        }

        let start = Instant::now();
        let outcomes: Vec<DealOutcome> = if deals.len() >= self.config.min_parallel_jobs {
            let par_run = || -> Vec<DealOutcome> {
                deals
                    .par_iter()
                    .map(|deal| self.evaluate_one(deal, cache))
                    .collect()
            };
            match &self.pool {
                Some(pool) => pool.install(par_run),
                None => par_run(),
            }
        } else {
            deals
                .iter()
                .map(|deal| self.evaluate_one(deal, cache))
                .collect()
        };

        let summary = BatchSummary::from_outcomes(&outcomes);
        tracing::info!(
            deals = summary.total,
            evaluated = summary.evaluated,
            failed = summary.failed,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Batch evaluation complete"
        );

        Ok(BatchReport {
            generated_at: Utc::now(),
            outcomes,
            summary,
        })
    }

    fn evaluate_one(&self, deal: &DealSpec, cache: Option<&ParcelCache>) -> DealOutcome {
        let mut fire_zone = false;
        let result = deal.resolve(cache).and_then(|resolved| {
            fire_zone = resolved.fire_zone;
            self.underwriter
                .evaluate(&resolved.parcel, deal.profit.as_ref())
                .map_err(BatchError::from)
        });

        let status = match result {
            Ok(metrics) => {
                telemetry::record_evaluation(&metrics);
                OutcomeStatus::Evaluated { metrics }
            }
            Err(e) => {
                tracing::warn!(deal = %deal.id, error = %e, "Deal evaluation failed");
                telemetry::record_error(e.kind());
                OutcomeStatus::Failed {
                    error: e.to_string(),
                }
            }
        };

        DealOutcome {
            id: deal.id.clone(),
            fire_zone,
            status,
        }
    }
}
