//! FinCalc CLI - personal finance calculators on the command line.
//!
//! # Usage
//!
//! ```bash
//! # Loan EMI
//! fincalc emi --principal 1,00,000 --rate 10 --time 1
//!
//! # Month-by-month repayment schedule
//! fincalc emi -p 2500000 -r 9 -t 15 --schedule
//!
//! # Compound interest, quarterly, as JSON
//! fincalc --format json ci -p 100000 -r 8 -t 5 --frequency 4
//!
//! # Available calculators
//! fincalc list
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod settings;

use cli::{Cli, Commands};
use output::OutputContext;
use settings::Settings;

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "fincalc=info,fincalc_formulas=info",
        2 => "fincalc=debug,fincalc_formulas=debug,fincalc_core=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries results; logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let settings = Settings::load().unwrap_or_else(|e| {
        tracing::warn!("using default settings: {e}");
        Settings::default()
    });
    let ctx = OutputContext::new(cli.format, cli.quiet, settings);

    // Execute command
    match cli.command {
        Commands::SimpleInterest(args) => commands::interest::execute_simple(args, &ctx)?,
        Commands::CompoundInterest(args) => commands::interest::execute_compound(args, &ctx)?,
        Commands::Gratuity(args) => commands::employment::execute_gratuity(args, &ctx)?,
        Commands::ProvidentFund(args) => commands::employment::execute_provident_fund(args, &ctx)?,
        Commands::Salary(args) => commands::employment::execute_salary(args, &ctx)?,
        Commands::Ppf(args) => commands::savings::execute_ppf(args, &ctx)?,
        Commands::Nps(args) => commands::savings::execute_nps(args, &ctx)?,
        Commands::RecurringDeposit(args) => commands::savings::execute_recurring(args, &ctx)?,
        Commands::FixedDeposit(args) => commands::savings::execute_fixed(args, &ctx)?,
        Commands::Ltcg(args) => commands::tax::execute_ltcg(args, &ctx)?,
        Commands::Roi(args) => commands::returns::execute_roi(args, &ctx)?,
        Commands::Gst(args) => commands::tax::execute_gst(args, &ctx)?,
        Commands::Discount(args) => commands::loans::execute_discount(args, &ctx)?,
        Commands::Emi(args) => commands::loans::execute_emi(args, &ctx)?,
        Commands::DownPayment(args) => commands::loans::execute_down_payment(args, &ctx)?,
        Commands::Cagr(args) => commands::returns::execute_cagr(args, &ctx)?,
        Commands::List => commands::list::execute(&ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}
