//! Browser-side tests. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use fincalc_wasm::{calculate, format_inr, list_calculators};

wasm_bindgen_test_configure!(run_in_browser);

fn params(json: &str) -> JsValue {
    js_sys::JSON::parse(json).unwrap()
}

#[wasm_bindgen_test]
fn calculate_returns_result_object() {
    let response = calculate("gst", params(r#"{"amount": 1000, "rate": 18}"#));
    let result = js_sys::Reflect::get(&response, &"result".into()).unwrap();
    let total = js_sys::Reflect::get(&result, &"total".into()).unwrap();
    assert_eq!(total.as_f64(), Some(1180.0));
}

#[wasm_bindgen_test]
fn calculate_reports_errors() {
    let response = calculate("cagr", params(r#"{"initial_value": 0, "final_value": 1, "time": 1}"#));
    let error = js_sys::Reflect::get(&response, &"error".into()).unwrap();
    assert!(error.as_string().unwrap().contains("initial_value"));
}

#[wasm_bindgen_test]
fn frequency_from_javascript_number() {
    let response = calculate(
        "compound_interest",
        params(r#"{"principal": 1000, "rate": 10, "time": 1, "frequency": 1}"#),
    );
    let result = js_sys::Reflect::get(&response, &"result".into()).unwrap();
    let amount = js_sys::Reflect::get(&result, &"amount".into()).unwrap();
    assert!((amount.as_f64().unwrap() - 1100.0).abs() < 1e-9);
}

#[wasm_bindgen_test]
fn catalogue_is_an_array() {
    assert!(js_sys::Array::is_array(&list_calculators()));
    assert_eq!(format_inr(1000.0), "₹1,000.00");
}
