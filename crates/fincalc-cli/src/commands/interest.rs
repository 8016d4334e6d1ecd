//! Simple and compound interest commands.

use anyhow::Result;
use clap::Args;

use fincalc_formulas::calculator::{CalculatorInput, CompoundInterestParams, PrincipalRateTime};

use crate::commands::{parse_amount, run};
use crate::output::OutputContext;

/// Arguments for the simple-interest command.
#[derive(Args, Debug)]
pub struct SimpleInterestArgs {
    /// Principal amount
    #[arg(short, long, value_parser = parse_amount)]
    pub principal: f64,

    /// Annual interest rate (as percentage, e.g., 5.0 for 5%)
    #[arg(short, long)]
    pub rate: f64,

    /// Term in years
    #[arg(short, long)]
    pub time: f64,
}

/// Arguments for the compound-interest command.
#[derive(Args, Debug)]
pub struct CompoundInterestArgs {
    /// Principal amount
    #[arg(short, long, value_parser = parse_amount)]
    pub principal: f64,

    /// Annual interest rate (as percentage)
    #[arg(short, long)]
    pub rate: f64,

    /// Term in years
    #[arg(short, long)]
    pub time: f64,

    /// Compounding periods per year: 1=Annual, 2=SemiAnnual, 4=Quarterly, 12=Monthly, 365=Daily
    #[arg(long, default_value = "1")]
    pub frequency: u32,
}

/// Execute the simple-interest command.
pub fn execute_simple(args: SimpleInterestArgs, ctx: &OutputContext) -> Result<()> {
    run(
        CalculatorInput::SimpleInterest(PrincipalRateTime {
            principal: args.principal,
            rate: args.rate,
            time: args.time,
        }),
        ctx,
    )
}

/// Execute the compound-interest command.
pub fn execute_compound(args: CompoundInterestArgs, ctx: &OutputContext) -> Result<()> {
    run(
        CalculatorInput::CompoundInterest(CompoundInterestParams {
            principal: args.principal,
            rate: args.rate,
            time: args.time,
            frequency: args.frequency,
        }),
        ctx,
    )
}
