//! Evaluate command implementation

use crate::feasibility::{
    FeasibilityCalculator, ParcelInput, PolicyConfig, ProfitInput, Underwriter,
};
use crate::report::{self, OutputFormat};
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Lot area in square feet
    #[arg(long)]
    pub lot_sf: Decimal,

    /// Statutory maximum unit count
    #[arg(long)]
    pub max_units: u32,

    /// Asking price
    #[arg(long)]
    pub price: Decimal,

    /// Comparable neighborhood price per SF
    #[arg(long)]
    pub hood_ppsf: Decimal,

    /// Build cost per SF
    #[arg(long = "build-cost-psf")]
    pub build_cost_per_sf: Decimal,

    /// Projected profit, for return on cost vs. margin on revenue
    #[arg(long, requires_all = ["total_cost", "net_revenue"])]
    pub profit: Option<Decimal>,

    /// Projected total cost
    #[arg(long, requires = "profit")]
    pub total_cost: Option<Decimal>,

    /// Projected net revenue
    #[arg(long, requires = "profit")]
    pub net_revenue: Option<Decimal>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl EvaluateArgs {
    /// Profit figures when all three were given
    pub fn profit_input(&self) -> Option<ProfitInput> {
        match (self.profit, self.total_cost, self.net_revenue) {
            (Some(profit), Some(total_cost), Some(net_revenue)) => Some(ProfitInput {
                profit,
                total_cost,
                net_revenue,
            }),
            _ => None,
        }
    }

    pub fn execute(&self, policy: &PolicyConfig) -> anyhow::Result<()> {
        let parcel = ParcelInput::new(
            self.lot_sf,
            self.max_units,
            self.price,
            self.hood_ppsf,
            self.build_cost_per_sf,
        )?;
        let profit = self.profit_input();

        let calculator = FeasibilityCalculator::new(policy.clone())?;
        let result = calculator.evaluate(&parcel, profit.as_ref())?;

        match self.format {
            OutputFormat::Table => print!("{}", report::format_table(&parcel, &result, policy)),
            OutputFormat::Json => println!("{}", report::to_json(&result)?),
        }
        Ok(())
    }
}
