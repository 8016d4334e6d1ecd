//! Salary-linked commands: gratuity, provident fund, salary.

use anyhow::Result;
use clap::Args;

use fincalc_formulas::calculator::{CalculatorInput, GratuityParams, ProvidentFundParams, SalaryParams};
use fincalc_formulas::employment::DEFAULT_PF_CONTRIBUTION;

use crate::commands::{parse_amount, run};
use crate::output::OutputContext;

/// Arguments for the gratuity command.
#[derive(Args, Debug)]
pub struct GratuityArgs {
    /// Last drawn monthly salary (basic + DA)
    #[arg(short, long, value_parser = parse_amount)]
    pub salary: f64,

    /// Completed years of service
    #[arg(short, long)]
    pub years: f64,
}

/// Arguments for the provident-fund command.
#[derive(Args, Debug)]
pub struct ProvidentFundArgs {
    /// Monthly basic salary
    #[arg(short, long, value_parser = parse_amount)]
    pub salary: f64,

    /// Employer contribution (% of salary)
    #[arg(long, default_value_t = DEFAULT_PF_CONTRIBUTION)]
    pub employer_contribution: f64,

    /// Employee contribution (% of salary)
    #[arg(long, default_value_t = DEFAULT_PF_CONTRIBUTION)]
    pub employee_contribution: f64,
}

/// Arguments for the salary command.
#[derive(Args, Debug)]
pub struct SalaryArgs {
    /// Basic pay
    #[arg(short, long, value_parser = parse_amount)]
    pub basic: f64,

    /// House rent allowance
    #[arg(long, default_value = "0", value_parser = parse_amount)]
    pub hra: f64,

    /// Dearness allowance
    #[arg(long, default_value = "0", value_parser = parse_amount)]
    pub da: f64,

    /// Other allowances
    #[arg(long, default_value = "0", value_parser = parse_amount)]
    pub allowances: f64,

    /// Total deductions
    #[arg(long, default_value = "0", value_parser = parse_amount)]
    pub deductions: f64,
}

/// Execute the gratuity command.
pub fn execute_gratuity(args: GratuityArgs, ctx: &OutputContext) -> Result<()> {
    run(
        CalculatorInput::Gratuity(GratuityParams {
            salary: args.salary,
            years: args.years,
        }),
        ctx,
    )
}

/// Execute the provident-fund command.
pub fn execute_provident_fund(args: ProvidentFundArgs, ctx: &OutputContext) -> Result<()> {
    run(
        CalculatorInput::ProvidentFund(ProvidentFundParams {
            salary: args.salary,
            employer_contribution: args.employer_contribution,
            employee_contribution: args.employee_contribution,
        }),
        ctx,
    )
}

/// Execute the salary command.
pub fn execute_salary(args: SalaryArgs, ctx: &OutputContext) -> Result<()> {
    run(
        CalculatorInput::Salary(SalaryParams {
            basic: args.basic,
            hra: args.hra,
            da: args.da,
            allowances: args.allowances,
            deductions: args.deductions,
        }),
        ctx,
    )
}
