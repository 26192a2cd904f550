//! land-feasibility: underwriting metrics for raw-land acquisitions
//!
//! This library provides the core components for:
//! - Effective buildable area under competing FAR and per-unit product caps
//! - Land basis, lot efficiency, target buy price and headroom, each rated
//!   GREEN / YELLOW / RED against an injectable policy
//! - Return on cost vs. margin on revenue
//! - Cached parcel data lookup by listing coordinates
//! - Parallel batch evaluation of deal files
//! - Table and JSON reporting
//! - Structured logging and metrics

pub mod batch;
pub mod cli;
pub mod config;
pub mod feasibility;
pub mod parcel;
pub mod report;
pub mod telemetry;
