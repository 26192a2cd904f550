//! CLI interface for land-feasibility
//!
//! Provides subcommands for:
//! - `evaluate`: Underwrite a single deal from flags
//! - `batch`: Underwrite every deal in a TOML/JSON file
//! - `policy`: Show the active policy

mod batch;
mod evaluate;

pub use batch::BatchArgs;
pub use evaluate::EvaluateArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "land-feasibility")]
#[command(about = "Underwriting metrics for raw-land deals under density-bonus caps")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Underwrite a single deal
    Evaluate(EvaluateArgs),
    /// Underwrite every deal in a file
    Batch(BatchArgs),
    /// Show the active policy
    Policy,
}
