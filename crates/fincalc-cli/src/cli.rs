//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{
    CagrArgs, CompoundInterestArgs, ConfigArgs, DiscountArgs, DownPaymentArgs, EmiArgs,
    FixedDepositArgs, GratuityArgs, GstArgs, LtcgArgs, NpsArgs, PpfArgs, ProvidentFundArgs,
    RecurringDepositArgs, RoiArgs, SalaryArgs, SimpleInterestArgs,
};

/// FinCalc - personal finance calculators
#[derive(Parser)]
#[command(name = "fincalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format [default: from config, else table]
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Simple interest on a principal
    #[command(alias = "si")]
    SimpleInterest(SimpleInterestArgs),

    /// Compound interest with periodic compounding
    #[command(alias = "ci")]
    CompoundInterest(CompoundInterestArgs),

    /// Gratuity payable on leaving employment
    Gratuity(GratuityArgs),

    /// Employer and employee provident fund contributions
    #[command(alias = "pf")]
    ProvidentFund(ProvidentFundArgs),

    /// Gross and net salary
    Salary(SalaryArgs),

    /// Public Provident Fund maturity (7.1%, compounded yearly)
    Ppf(PpfArgs),

    /// National Pension System maturity
    Nps(NpsArgs),

    /// Recurring deposit maturity
    #[command(alias = "rd")]
    RecurringDeposit(RecurringDepositArgs),

    /// Fixed deposit maturity (compounded quarterly)
    #[command(alias = "fd")]
    FixedDeposit(FixedDepositArgs),

    /// Long-term capital gains tax
    Ltcg(LtcgArgs),

    /// Return on investment
    Roi(RoiArgs),

    /// Goods and services tax
    Gst(GstArgs),

    /// Price after a percentage discount
    Discount(DiscountArgs),

    /// Loan EMI, or the full repayment schedule with --schedule
    Emi(EmiArgs),

    /// Down payment and loan amount for a purchase
    #[command(alias = "dp")]
    DownPayment(DownPaymentArgs),

    /// Compound annual growth rate
    Cagr(CagrArgs),

    /// List the available calculators and their parameters
    List,

    /// Manage configurations
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
