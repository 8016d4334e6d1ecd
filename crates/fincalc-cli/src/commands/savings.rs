//! Savings scheme commands: PPF, NPS, recurring and fixed deposits.

use anyhow::Result;
use clap::Args;

use fincalc_formulas::calculator::{
    CalculatorInput, NpsParams, PpfParams, PrincipalRateTime, RecurringDepositParams,
};

use crate::commands::{parse_amount, run};
use crate::output::OutputContext;

/// Arguments for the ppf command.
#[derive(Args, Debug)]
pub struct PpfArgs {
    /// Amount invested each year
    #[arg(short = 'i', long, value_parser = parse_amount)]
    pub yearly_investment: f64,

    /// Term in years
    #[arg(short, long)]
    pub time: f64,
}

/// Arguments for the nps command.
#[derive(Args, Debug)]
pub struct NpsArgs {
    /// Monthly contribution
    #[arg(short = 'm', long, value_parser = parse_amount)]
    pub monthly_contribution: f64,

    /// Expected annual return (as percentage)
    #[arg(short = 'r', long)]
    pub expected_return: f64,

    /// Term in years
    #[arg(short, long)]
    pub time: f64,
}

/// Arguments for the recurring-deposit command.
#[derive(Args, Debug)]
pub struct RecurringDepositArgs {
    /// Monthly deposit
    #[arg(short = 'm', long, value_parser = parse_amount)]
    pub monthly_deposit: f64,

    /// Annual interest rate (as percentage)
    #[arg(short, long)]
    pub rate: f64,

    /// Term in years
    #[arg(short, long)]
    pub time: f64,
}

/// Arguments for the fixed-deposit command.
#[derive(Args, Debug)]
pub struct FixedDepositArgs {
    /// Amount deposited
    #[arg(short, long, value_parser = parse_amount)]
    pub principal: f64,

    /// Annual interest rate (as percentage)
    #[arg(short, long)]
    pub rate: f64,

    /// Term in years
    #[arg(short, long)]
    pub time: f64,
}

/// Execute the ppf command.
pub fn execute_ppf(args: PpfArgs, ctx: &OutputContext) -> Result<()> {
    run(
        CalculatorInput::Ppf(PpfParams {
            yearly_investment: args.yearly_investment,
            time: args.time,
        }),
        ctx,
    )
}

/// Execute the nps command.
pub fn execute_nps(args: NpsArgs, ctx: &OutputContext) -> Result<()> {
    run(
        CalculatorInput::Nps(NpsParams {
            monthly_contribution: args.monthly_contribution,
            expected_return: args.expected_return,
            time: args.time,
        }),
        ctx,
    )
}

/// Execute the recurring-deposit command.
pub fn execute_recurring(args: RecurringDepositArgs, ctx: &OutputContext) -> Result<()> {
    run(
        CalculatorInput::RecurringDeposit(RecurringDepositParams {
            monthly_deposit: args.monthly_deposit,
            rate: args.rate,
            time: args.time,
        }),
        ctx,
    )
}

/// Execute the fixed-deposit command.
pub fn execute_fixed(args: FixedDepositArgs, ctx: &OutputContext) -> Result<()> {
    run(
        CalculatorInput::FixedDeposit(PrincipalRateTime {
            principal: args.principal,
            rate: args.rate,
            time: args.time,
        }),
        ctx,
    )
}
