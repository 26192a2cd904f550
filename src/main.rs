use clap::Parser;
use land_feasibility::cli::{Cli, Commands};
use land_feasibility::config::Config;
use land_feasibility::report;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    // A missing file falls back to defaults; a present but invalid one is fatal
    let config = if std::path::Path::new(&cli.config).exists() {
        Config::load(&cli.config)?
    } else {
        eprintln!("Warning: Could not load config from {}: file not found", cli.config);
        eprintln!("Using default configuration");
        Config::default()
    };

    // Initialize telemetry
    land_feasibility::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Evaluate(args) => {
            tracing::debug!("Evaluating single deal");
            args.execute(&config.policy)?;
        }
        Commands::Batch(args) => {
            tracing::info!(deals = %args.deals.display(), "Starting batch evaluation");
            args.execute(&config)?;
        }
        Commands::Policy => {
            print!("{}", report::format_policy(&config.policy));
        }
    }

    Ok(())
}
