//! WebAssembly bindings for the FinCalc calculators.
//!
//! Lets a browser page run every calculator locally, without a round trip
//! to `fincalc-server`. Inputs and outputs are plain JavaScript objects
//! with the same field names as the HTTP API.

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use fincalc_core::display;
use fincalc_formulas::amortization::{emi_schedule as build_schedule, AmortizationSchedule};
use fincalc_formulas::calculator::{Calculator, CalculationOutput, CalculatorInput, ParameterSpec};

// ============================================================================
// Initialization
// ============================================================================

/// Initialize the WASM module (sets up panic hook for better error messages).
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// ============================================================================
// Input/Output Types
// ============================================================================

/// Result of a calculation: exactly one of `result` or `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct CalculateResponse<T> {
    /// Calculator output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// Error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> CalculateResponse<T> {
    fn ok(result: T) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            result: None,
            error: Some(message.into()),
        }
    }
}

/// One catalogue entry.
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorInfo {
    /// Name accepted by [`calculate`].
    pub name: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Accepted parameters.
    pub parameters: &'static [ParameterSpec],
}

// ============================================================================
// Calculators
// ============================================================================

/// Run a calculator.
///
/// `name` is a calculator name or alias (`"emi"`, `"si"`, `"down-payment"`).
/// `params` is an object of parameters; numeric strings are accepted.
/// Returns `{ result }` on success or `{ error }` on failure.
#[wasm_bindgen]
pub fn calculate(name: &str, params: JsValue) -> JsValue {
    let result = match serde_wasm_bindgen::from_value::<Value>(params) {
        Ok(params) => calculate_impl(name, params),
        Err(e) => CalculateResponse::err(format!("Failed to parse parameters: {e}")),
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn calculate_impl(name: &str, params: Value) -> CalculateResponse<CalculationOutput> {
    let output = name
        .parse::<Calculator>()
        .and_then(|calc| calc.parse_input(params))
        .and_then(|input| input.evaluate());

    match output {
        Ok(output) => CalculateResponse::ok(output),
        Err(e) => CalculateResponse::err(e.to_string()),
    }
}

/// Build the month-by-month repayment schedule for an EMI loan.
///
/// Takes the same parameters as the `emi` calculator.
#[wasm_bindgen]
pub fn emi_schedule(params: JsValue) -> JsValue {
    let result = match serde_wasm_bindgen::from_value::<Value>(params) {
        Ok(params) => emi_schedule_impl(params),
        Err(e) => CalculateResponse::err(format!("Failed to parse parameters: {e}")),
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn emi_schedule_impl(params: Value) -> CalculateResponse<AmortizationSchedule> {
    let loan = match Calculator::Emi.parse_input(params) {
        Ok(CalculatorInput::Emi(loan)) => loan,
        Ok(_) => return CalculateResponse::err("emi parameters did not parse as a loan"),
        Err(e) => return CalculateResponse::err(e.to_string()),
    };

    match build_schedule(loan.principal, loan.rate, loan.time) {
        Ok(schedule) => CalculateResponse::ok(schedule),
        Err(e) => CalculateResponse::err(e.to_string()),
    }
}

/// List every calculator with its parameters.
#[wasm_bindgen]
pub fn list_calculators() -> JsValue {
    serde_wasm_bindgen::to_value(&list_calculators_impl()).unwrap_or(JsValue::NULL)
}

fn list_calculators_impl() -> Vec<CalculatorInfo> {
    Calculator::ALL
        .iter()
        .map(|calc| CalculatorInfo {
            name: calc.name(),
            title: calc.title(),
            parameters: calc.parameters(),
        })
        .collect()
}

// ============================================================================
// Formatting
// ============================================================================

/// Format an amount as rupees with Indian digit grouping (`₹1,05,499.08`).
#[wasm_bindgen]
pub fn format_inr(amount: f64) -> String {
    display::format_inr(amount)
}

/// Format a percentage with two decimals (`14.87%`).
#[wasm_bindgen]
pub fn format_percent(value: f64) -> String {
    display::format_percent(value)
}
