//! CLI command implementations.

pub mod config;
pub mod employment;
pub mod interest;
pub mod list;
pub mod loans;
pub mod returns;
pub mod savings;
pub mod tax;

// Re-export submodules for convenience
pub use config::ConfigArgs;
pub use employment::{GratuityArgs, ProvidentFundArgs, SalaryArgs};
pub use interest::{CompoundInterestArgs, SimpleInterestArgs};
pub use loans::{DiscountArgs, DownPaymentArgs, EmiArgs};
pub use returns::{CagrArgs, RoiArgs};
pub use savings::{FixedDepositArgs, NpsArgs, PpfArgs, RecurringDepositArgs};
pub use tax::{GstArgs, LtcgArgs};

use anyhow::Result;

use fincalc_formulas::calculator::CalculatorInput;

use crate::output::OutputContext;

/// Evaluates a calculator and prints the result.
pub fn run(input: CalculatorInput, ctx: &OutputContext) -> Result<()> {
    tracing::debug!(calculator = %input.calculator(), "running calculation");
    let output = input.evaluate()?;
    ctx.print_calculation(&input, &output)
}

/// Parses an amount, accepting digit-group commas (`1,00,000`).
pub fn parse_amount(s: &str) -> Result<f64, String> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
    cleaned
        .parse::<f64>()
        .map_err(|_| format!("'{s}' is not a number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,00,000").unwrap(), 100_000.0);
        assert_eq!(parse_amount(" 7.5 ").unwrap(), 7.5);
        assert_eq!(parse_amount("2_500").unwrap(), 2_500.0);
        assert!(parse_amount("ten").is_err());
    }
}
