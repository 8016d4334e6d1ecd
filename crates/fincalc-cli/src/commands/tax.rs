//! Tax commands: long-term capital gains and GST.

use anyhow::Result;
use clap::Args;

use fincalc_formulas::calculator::{CalculatorInput, GstParams, LtcgParams};

use crate::commands::{parse_amount, run};
use crate::output::OutputContext;

/// Arguments for the ltcg command.
#[derive(Args, Debug)]
pub struct LtcgArgs {
    /// Sale consideration
    #[arg(short, long, value_parser = parse_amount)]
    pub selling_price: f64,

    /// Cost of acquisition
    #[arg(short, long, value_parser = parse_amount)]
    pub cost_price: f64,

    /// Holding period in years
    #[arg(long)]
    pub holding_period: f64,
}

/// Arguments for the gst command.
#[derive(Args, Debug)]
pub struct GstArgs {
    /// Amount before tax
    #[arg(short, long, value_parser = parse_amount)]
    pub amount: f64,

    /// GST rate (as percentage, e.g., 18)
    #[arg(short, long)]
    pub rate: f64,
}

/// Execute the ltcg command.
pub fn execute_ltcg(args: LtcgArgs, ctx: &OutputContext) -> Result<()> {
    run(
        CalculatorInput::Ltcg(LtcgParams {
            selling_price: args.selling_price,
            cost_price: args.cost_price,
            holding_period: args.holding_period,
        }),
        ctx,
    )
}

/// Execute the gst command.
pub fn execute_gst(args: GstArgs, ctx: &OutputContext) -> Result<()> {
    run(
        CalculatorInput::Gst(GstParams {
            amount: args.amount,
            rate: args.rate,
        }),
        ctx,
    )
}
