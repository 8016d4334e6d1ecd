//! Loan and purchase commands: EMI (with amortization schedule), down
//! payment, discount.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use fincalc_core::ValueKind;
use fincalc_formulas::amortization::{emi_schedule, AmortizationSchedule};
use fincalc_formulas::calculator::{
    CalculatorInput, DiscountParams, DownPaymentParams, PrincipalRateTime,
};

use crate::cli::OutputFormat;
use crate::commands::{parse_amount, run};
use crate::output::{print_csv, print_output, KeyValue, OutputContext};

/// Arguments for the emi command.
#[derive(Args, Debug)]
pub struct EmiArgs {
    /// Loan amount
    #[arg(short, long, value_parser = parse_amount)]
    pub principal: f64,

    /// Annual interest rate (as percentage)
    #[arg(short, long)]
    pub rate: f64,

    /// Loan term in years
    #[arg(short, long)]
    pub time: f64,

    /// Print the month-by-month repayment schedule
    #[arg(long)]
    pub schedule: bool,
}

/// Arguments for the down-payment command.
#[derive(Args, Debug)]
pub struct DownPaymentArgs {
    /// Price of the asset
    #[arg(short, long, value_parser = parse_amount)]
    pub asset_price: f64,

    /// Down payment (% of price)
    #[arg(short, long)]
    pub down_payment_percentage: f64,
}

/// Arguments for the discount command.
#[derive(Args, Debug)]
pub struct DiscountArgs {
    /// List price
    #[arg(short = 'p', long, value_parser = parse_amount)]
    pub original_price: f64,

    /// Discount (as percentage)
    #[arg(short, long)]
    pub discount_percentage: f64,
}

/// One schedule row, formatted for display.
#[derive(Debug, Serialize, Tabled)]
pub struct ScheduleRow {
    #[tabled(rename = "Month")]
    pub month: u32,
    #[tabled(rename = "Opening")]
    pub opening_balance: String,
    #[tabled(rename = "EMI")]
    pub installment: String,
    #[tabled(rename = "Interest")]
    pub interest: String,
    #[tabled(rename = "Principal")]
    pub principal: String,
    #[tabled(rename = "Closing")]
    pub closing_balance: String,
}

/// Execute the emi command.
pub fn execute_emi(args: EmiArgs, ctx: &OutputContext) -> Result<()> {
    if args.schedule {
        let schedule = emi_schedule(args.principal, args.rate, args.time)?;
        return print_schedule(&schedule, ctx);
    }

    run(
        CalculatorInput::Emi(PrincipalRateTime {
            principal: args.principal,
            rate: args.rate,
            time: args.time,
        }),
        ctx,
    )
}

/// Execute the down-payment command.
pub fn execute_down_payment(args: DownPaymentArgs, ctx: &OutputContext) -> Result<()> {
    run(
        CalculatorInput::DownPayment(DownPaymentParams {
            asset_price: args.asset_price,
            down_payment_percentage: args.down_payment_percentage,
        }),
        ctx,
    )
}

/// Execute the discount command.
pub fn execute_discount(args: DiscountArgs, ctx: &OutputContext) -> Result<()> {
    run(
        CalculatorInput::Discount(DiscountParams {
            original_price: args.original_price,
            discount_percentage: args.discount_percentage,
        }),
        ctx,
    )
}

fn print_schedule(schedule: &AmortizationSchedule, ctx: &OutputContext) -> Result<()> {
    tracing::debug!(months = schedule.rows.len(), "printing amortization schedule");

    match ctx.format {
        OutputFormat::Table => {
            let money = |v: f64| ctx.format_value(v, ValueKind::Currency);
            let rows: Vec<ScheduleRow> = schedule
                .rows
                .iter()
                .map(|r| ScheduleRow {
                    month: r.month,
                    opening_balance: money(r.opening_balance),
                    installment: money(r.installment),
                    interest: money(r.interest),
                    principal: money(r.principal),
                    closing_balance: money(r.closing_balance),
                })
                .collect();

            ctx.header("Amortization Schedule");
            print_output(&rows, OutputFormat::Table)?;

            if !ctx.quiet {
                let summary = vec![
                    KeyValue::new("Monthly EMI", money(schedule.emi.emi)),
                    KeyValue::new("Total Interest", money(schedule.total_interest())),
                    KeyValue::new("Total Paid", money(schedule.total_paid())),
                ];
                print_output(&summary, OutputFormat::Table)?;
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(schedule)?);
        }
        OutputFormat::Csv => {
            print_csv(&schedule.rows)?;
        }
        OutputFormat::Minimal => {
            println!("{}", schedule.emi.emi);
        }
    }
    Ok(())
}
