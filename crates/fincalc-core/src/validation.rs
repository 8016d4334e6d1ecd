//! Input validation helpers shared by every formula.
//!
//! Each helper returns the value unchanged on success so it can be used
//! inline: `let years = non_negative("years", years)?;`.

use crate::error::{FinCalcError, FinCalcResult};

/// Rejects `NaN` and infinities.
pub fn finite(parameter: &str, value: f64) -> FinCalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::debug!("rejected {parameter}={value}: not finite");
        Err(FinCalcError::invalid_input(
            parameter,
            value,
            "must be a finite number",
        ))
    }
}

/// Requires a finite value `>= 0`.
pub fn non_negative(parameter: &str, value: f64) -> FinCalcResult<f64> {
    let value = finite(parameter, value)?;
    if value < 0.0 {
        log::debug!("rejected {parameter}={value}: negative");
        return Err(FinCalcError::invalid_input(
            parameter,
            value,
            "must not be negative",
        ));
    }
    Ok(value)
}

/// Requires a finite value `> 0`. Used for divisors and exponents.
pub fn positive(parameter: &str, value: f64) -> FinCalcResult<f64> {
    let value = finite(parameter, value)?;
    if value <= 0.0 {
        log::debug!("rejected {parameter}={value}: not positive");
        return Err(FinCalcError::invalid_input(
            parameter,
            value,
            "must be greater than zero",
        ));
    }
    Ok(value)
}

/// Requires a compounding frequency of at least one period per year.
pub fn periods_per_year(parameter: &str, value: u32) -> FinCalcResult<u32> {
    if value == 0 {
        return Err(FinCalcError::invalid_input(
            parameter,
            0.0,
            "must be at least one period per year",
        ));
    }
    Ok(value)
}

/// Checks that a computed quantity did not overflow.
pub fn finite_result(quantity: &str, value: f64) -> FinCalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::debug!("{quantity} overflowed to {value}");
        Err(FinCalcError::non_finite(quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite() {
        assert_eq!(finite("x", 1.5).unwrap(), 1.5);
        assert_eq!(finite("x", -3.0).unwrap(), -3.0);
        assert!(finite("x", f64::NAN).is_err());
        assert!(finite("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative("x", 0.0).unwrap(), 0.0);
        assert!(non_negative("x", -0.01).is_err());
        assert!(non_negative("x", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_positive() {
        assert_eq!(positive("x", 0.5).unwrap(), 0.5);
        assert!(positive("x", 0.0).is_err());
        assert!(positive("x", -2.0).is_err());
    }

    #[test]
    fn test_error_names_parameter() {
        let err = positive("initial_value", 0.0).unwrap_err();
        match err {
            FinCalcError::InvalidInput { parameter, .. } => assert_eq!(parameter, "initial_value"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_periods_per_year() {
        assert_eq!(periods_per_year("frequency", 4).unwrap(), 4);
        assert!(periods_per_year("frequency", 0).is_err());
    }

    #[test]
    fn test_finite_result() {
        assert!(finite_result("amount", f64::INFINITY).is_err());
        assert_eq!(finite_result("amount", 10.0).unwrap(), 10.0);
    }
}
