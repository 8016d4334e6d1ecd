//! Request handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use fincalc_core::FinCalcError;
use fincalc_formulas::amortization::emi_schedule as build_schedule;
use fincalc_formulas::calculator::{Calculator, CalculatorInput};

/// Handler response: a status and a JSON body.
pub type ApiResponse = (StatusCode, Json<Value>);

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// List every calculator with its parameters.
pub async fn list_calculators() -> Json<Value> {
    let catalogue: Vec<Value> = Calculator::ALL
        .iter()
        .map(|calc| {
            json!({
                "name": calc.name(),
                "title": calc.title(),
                "parameters": calc.parameters(),
            })
        })
        .collect();
    Json(Value::Array(catalogue))
}

/// Run a calculator.
///
/// The path segment is the calculator name (aliases such as `si` or
/// `down-payment` are accepted). The body is a JSON object of parameters.
pub async fn calculate(
    Path(name): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResponse {
    let params = match payload {
        Ok(Json(params)) => params,
        Err(rejection) => return bad_body(&rejection),
    };

    let result = name
        .parse::<Calculator>()
        .and_then(|calc| calc.parse_input(params))
        .and_then(|input| Ok((input.calculator(), input.evaluate()?)));

    match result {
        Ok((calc, output)) => (
            StatusCode::OK,
            Json(json!({
                "calculator": calc.name(),
                "result": output,
            })),
        ),
        Err(e) => error_response(&name, &e),
    }
}

/// Build the month-by-month EMI repayment schedule.
///
/// Takes the same parameters as the `emi` calculator.
pub async fn emi_schedule(payload: Result<Json<Value>, JsonRejection>) -> ApiResponse {
    let params = match payload {
        Ok(Json(params)) => params,
        Err(rejection) => return bad_body(&rejection),
    };

    let input = match Calculator::Emi.parse_input(params) {
        Ok(input) => input,
        Err(e) => return error_response("emi", &e),
    };
    let CalculatorInput::Emi(loan) = input else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "emi parameters did not parse as a loan" })),
        );
    };

    match build_schedule(loan.principal, loan.rate, loan.time) {
        Ok(schedule) => (
            StatusCode::OK,
            Json(json!({
                "calculator": Calculator::Emi.name(),
                "result": schedule,
            })),
        ),
        Err(e) => error_response("emi", &e),
    }
}

fn status_for(error: &FinCalcError) -> StatusCode {
    if error.is_input_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::NOT_FOUND
    }
}

fn error_response(calculator: &str, error: &FinCalcError) -> ApiResponse {
    tracing::debug!(calculator, "request rejected: {}", error);
    (status_for(error), Json(json!({ "error": error.to_string() })))
}

fn bad_body(rejection: &JsonRejection) -> ApiResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": format!("Invalid JSON body: {}", rejection.body_text()) })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&FinCalcError::unknown_calculator("mortgage")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&FinCalcError::invalid_input("rate", -1.0, "must not be negative")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_for(&FinCalcError::non_finite("total")), StatusCode::BAD_REQUEST);
    }
}
