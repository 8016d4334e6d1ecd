//! Investment return measures. Both results are percentages.

use fincalc_core::validation::{finite_result, non_negative, positive};
use fincalc_core::FinCalcResult;

/// Absolute return on investment, in percent.
///
/// The holding period is accepted for call-site symmetry with [`cagr`] but
/// does not enter the result: ROI is not annualized.
///
/// ```text
/// ROI = (final − initial) / initial × 100
/// ```
pub fn roi(initial_investment: f64, final_value: f64, _years: f64) -> FinCalcResult<f64> {
    let initial = positive("initial_investment", initial_investment)?;
    let final_value = non_negative("final_value", final_value)?;
    finite_result("roi", (final_value - initial) / initial * 100.0)
}

/// Compound annual growth rate, in percent.
///
/// ```text
/// CAGR = ((final / initial)^(1 / years) − 1) × 100
/// ```
///
/// # Errors
///
/// `initial_value` and `years` must be strictly positive; the growth rate
/// is undefined otherwise.
///
/// ```
/// use fincalc_formulas::returns::cagr;
///
/// let rate = cagr(1_000.0, 2_000.0, 5.0).unwrap();
/// assert!((rate - 14.87).abs() < 0.005);
/// ```
pub fn cagr(initial_value: f64, final_value: f64, years: f64) -> FinCalcResult<f64> {
    let initial = positive("initial_value", initial_value)?;
    let final_value = non_negative("final_value", final_value)?;
    let years = positive("time", years)?;
    finite_result(
        "cagr",
        ((final_value / initial).powf(1.0 / years) - 1.0) * 100.0,
    )
}
