//! Batch evaluation module
//!
//! Loads deal files and evaluates them in parallel against a shared,
//! read-only policy.

mod evaluator;
mod loader;
mod types;

pub use evaluator::BatchEvaluator;
pub use loader::{deals_from_json, deals_from_toml, load_deals};
pub use types::{
    BatchError, BatchReport, BatchSummary, DealOutcome, DealSpec, OutcomeStatus, ResolvedDeal,
};
