//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use serde_json::{json, Value};
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use fincalc_core::display::{format_currency, format_grouped, format_percent_with, round_to};
use fincalc_core::ValueKind;
use fincalc_formulas::calculator::{CalculationOutput, CalculatorInput};

use crate::cli::OutputFormat;
use crate::settings::Settings;

/// Where and how results are printed.
#[derive(Debug, Clone)]
pub struct OutputContext {
    pub format: OutputFormat,
    pub quiet: bool,
    pub settings: Settings,
}

impl OutputContext {
    pub fn new(format: Option<OutputFormat>, quiet: bool, settings: Settings) -> Self {
        if !settings.use_colors {
            colored::control::set_override(false);
        }
        Self {
            format: format.unwrap_or(settings.default_format),
            quiet,
            settings,
        }
    }

    /// Formats a value for display according to its kind.
    pub fn format_value(&self, value: f64, kind: ValueKind) -> String {
        match kind {
            ValueKind::Currency => format_currency(
                value,
                &self.settings.currency_symbol,
                self.settings.grouping,
                self.settings.precision,
            ),
            ValueKind::Percent => format_percent_with(value, self.settings.precision),
        }
    }

    /// Formats a plain number with digit grouping.
    pub fn format_number(&self, value: f64) -> String {
        let places = if value.fract() == 0.0 { 0 } else { self.settings.precision };
        format_grouped(value, self.settings.grouping, places)
    }

    /// Prints a section header unless quiet.
    pub fn header(&self, title: &str) {
        if !self.quiet {
            print_header(title);
        }
    }

    /// Prints the inputs and result of one calculation.
    pub fn print_calculation(&self, input: &CalculatorInput, output: &CalculationOutput) -> anyhow::Result<()> {
        let calc = input.calculator();
        let fields = output.fields();

        match self.format {
            OutputFormat::Table => {
                let params = input_params(input)?;
                let mut rows: Vec<KeyValue> = calc
                    .parameters()
                    .iter()
                    .filter_map(|spec| {
                        params
                            .get(spec.name)
                            .and_then(Value::as_f64)
                            .map(|v| KeyValue::new(spec.description, self.format_number(v)))
                    })
                    .collect();
                rows.push(KeyValue::new("", ""));
                rows.extend(
                    fields
                        .iter()
                        .map(|f| KeyValue::new(f.label, self.format_value(f.value, f.kind))),
                );

                self.header(calc.title());
                print_table(&rows);
            }
            OutputFormat::Json => {
                let doc = json!({
                    "calculator": calc.name(),
                    "params": input_params(input)?,
                    "result": output,
                });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            }
            OutputFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(std::io::stdout());
                wtr.write_record(fields.iter().map(|f| f.name))?;
                wtr.write_record(fields.iter().map(|f| round_to(f.value, self.settings.precision).to_string()))?;
                wtr.flush()?;
            }
            OutputFormat::Minimal => {
                let primary = output.primary();
                println!(
                    "{:.prec$}",
                    round_to(primary.value, self.settings.precision),
                    prec = self.settings.precision as usize
                );
            }
        }
        Ok(())
    }
}

fn input_params(input: &CalculatorInput) -> anyhow::Result<Value> {
    let tagged = serde_json::to_value(input)?;
    Ok(tagged.get("params").cloned().unwrap_or(Value::Null))
}

/// Formats and prints output based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data)?,
        OutputFormat::Csv => print_csv(data)?,
        OutputFormat::Minimal => print_minimal(data)?,
    }
    Ok(())
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
pub fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints minimal output (first value only).
fn print_minimal<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    if let Some(first) = data.first() {
        println!("{}", serde_json::to_string(first)?);
    }
    Ok(())
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
