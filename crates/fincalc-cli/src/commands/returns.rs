//! Return measures: ROI and CAGR.

use anyhow::Result;
use clap::Args;

use fincalc_formulas::calculator::{CagrParams, CalculatorInput, RoiParams};

use crate::commands::{parse_amount, run};
use crate::output::OutputContext;

/// Arguments for the roi command.
#[derive(Args, Debug)]
pub struct RoiArgs {
    /// Amount invested
    #[arg(short, long, value_parser = parse_amount)]
    pub initial_investment: f64,

    /// Current or exit value
    #[arg(long, value_parser = parse_amount)]
    pub final_value: f64,

    /// Holding period in years (informational; ROI is not annualized)
    #[arg(short, long)]
    pub time: Option<f64>,
}

/// Arguments for the cagr command.
#[derive(Args, Debug)]
pub struct CagrArgs {
    /// Starting value
    #[arg(short, long, value_parser = parse_amount)]
    pub initial_value: f64,

    /// Ending value
    #[arg(long, value_parser = parse_amount)]
    pub final_value: f64,

    /// Period in years
    #[arg(short, long)]
    pub time: f64,
}

/// Execute the roi command.
pub fn execute_roi(args: RoiArgs, ctx: &OutputContext) -> Result<()> {
    run(
        CalculatorInput::Roi(RoiParams {
            initial_investment: args.initial_investment,
            final_value: args.final_value,
            time: args.time,
        }),
        ctx,
    )
}

/// Execute the cagr command.
pub fn execute_cagr(args: CagrArgs, ctx: &OutputContext) -> Result<()> {
    run(
        CalculatorInput::Cagr(CagrParams {
            initial_value: args.initial_value,
            final_value: args.final_value,
            time: args.time,
        }),
        ctx,
    )
}
