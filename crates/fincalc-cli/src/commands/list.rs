//! List command: the calculator catalogue.

use anyhow::Result;
use serde::Serialize;
use serde_json::json;
use tabled::Tabled;

use fincalc_formulas::calculator::{Calculator, ParameterSpec};

use crate::cli::OutputFormat;
use crate::output::{print_output, OutputContext};

/// One catalogue entry, formatted for display.
#[derive(Debug, Serialize, Tabled)]
pub struct CalculatorRow {
    #[tabled(rename = "Command")]
    pub command: String,
    #[tabled(rename = "Calculator")]
    pub title: String,
    #[tabled(rename = "Parameters")]
    pub parameters: String,
}

fn describe(spec: &ParameterSpec) -> String {
    let flag = format!("--{}", spec.name.replace('_', "-"));
    match (spec.default, spec.optional) {
        (Some(default), _) => format!("{flag} [{default}]"),
        (None, true) => format!("{flag} [optional]"),
        (None, false) => flag,
    }
}

/// Execute the list command.
pub fn execute(ctx: &OutputContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let catalogue: Vec<_> = Calculator::ALL
                .iter()
                .map(|calc| {
                    json!({
                        "name": calc.name(),
                        "title": calc.title(),
                        "parameters": calc.parameters(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&catalogue)?);
        }
        OutputFormat::Minimal => {
            for calc in Calculator::ALL {
                println!("{}", calc.name());
            }
        }
        format => {
            let rows: Vec<CalculatorRow> = Calculator::ALL
                .iter()
                .map(|calc| CalculatorRow {
                    command: calc.name().replace('_', "-"),
                    title: calc.title().to_string(),
                    parameters: calc
                        .parameters()
                        .iter()
                        .map(describe)
                        .collect::<Vec<_>>()
                        .join(" "),
                })
                .collect();

            if format == OutputFormat::Table {
                ctx.header("Available Calculators");
            }
            print_output(&rows, format)?;
        }
    }
    Ok(())
}
