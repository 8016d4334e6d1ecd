//! Simple and compound interest.
//!
//! Rates are annual percentages (`7.5` for 7.5%) and time is in years.
//! [`compound_interest`] is the building block for the fixed-rate savings
//! products in [`crate::savings`].

use serde::{Deserialize, Serialize};

use fincalc_core::validation::{finite_result, non_negative, periods_per_year};
use fincalc_core::FinCalcResult;

/// Result of a simple interest calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterest {
    /// Interest earned over the term.
    pub interest: f64,
    /// Principal plus interest.
    pub total: f64,
}

/// Result of a compound interest calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterest {
    /// Amount minus principal.
    pub interest: f64,
    /// Value at the end of the term.
    pub amount: f64,
}

/// Calculates simple interest.
///
/// # Formula
///
/// ```text
/// interest = P × R × T / 100
/// total    = P + interest
/// ```
///
/// # Example
///
/// ```
/// use fincalc_formulas::interest::simple_interest;
///
/// let si = simple_interest(10_000.0, 5.0, 2.0).unwrap();
/// assert_eq!(si.interest, 1_000.0);
/// assert_eq!(si.total, 11_000.0);
/// ```
pub fn simple_interest(principal: f64, rate: f64, time: f64) -> FinCalcResult<SimpleInterest> {
    let principal = non_negative("principal", principal)?;
    let rate = non_negative("rate", rate)?;
    let time = non_negative("time", time)?;

    let interest = finite_result("interest", principal * rate * time / 100.0)?;
    Ok(SimpleInterest {
        interest,
        total: finite_result("total", principal + interest)?,
    })
}

/// Calculates compound interest with `frequency` compounding periods per year.
///
/// # Formula
///
/// ```text
/// amount   = P × (1 + R / (100 × F))^(F × T)
/// interest = amount − P
/// ```
///
/// # Errors
///
/// Negative or non-finite amounts, a zero `frequency`, or an amount that
/// overflows `f64`.
pub fn compound_interest(
    principal: f64,
    rate: f64,
    time: f64,
    frequency: u32,
) -> FinCalcResult<CompoundInterest> {
    let principal = non_negative("principal", principal)?;
    let rate = non_negative("rate", rate)?;
    let time = non_negative("time", time)?;
    let periods = f64::from(periods_per_year("frequency", frequency)?);

    let growth = (1.0 + rate / (100.0 * periods)).powf(periods * time);
    let amount = finite_result("amount", principal * growth)?;

    Ok(CompoundInterest {
        interest: amount - principal,
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_simple_interest() {
        let si = simple_interest(50_000.0, 8.0, 3.0).unwrap();
        assert_relative_eq!(si.interest, 12_000.0);
        assert_relative_eq!(si.total, 62_000.0);
    }

    #[test]
    fn test_simple_interest_zero_time() {
        let si = simple_interest(50_000.0, 8.0, 0.0).unwrap();
        assert_eq!(si.interest, 0.0);
        assert_eq!(si.total, 50_000.0);
    }

    #[test]
    fn test_simple_interest_rejects_negative() {
        assert!(simple_interest(-1.0, 8.0, 1.0).is_err());
        assert!(simple_interest(1.0, -8.0, 1.0).is_err());
        assert!(simple_interest(1.0, 8.0, -1.0).is_err());
        assert!(simple_interest(f64::NAN, 8.0, 1.0).is_err());
    }

    #[test]
    fn test_compound_interest_annual() {
        // 10,000 at 10% for 2 years, annually: 12,100
        let ci = compound_interest(10_000.0, 10.0, 2.0, 1).unwrap();
        assert_relative_eq!(ci.amount, 12_100.0, epsilon = 1e-9);
        assert_relative_eq!(ci.interest, 2_100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_compound_interest_quarterly() {
        // 100,000 at 8% quarterly for 1 year: 100000 * 1.02^4
        let ci = compound_interest(100_000.0, 8.0, 1.0, 4).unwrap();
        assert_relative_eq!(ci.amount, 108_243.216, epsilon = 1e-6);
    }

    #[test]
    fn test_compound_interest_fractional_years() {
        let ci = compound_interest(1_000.0, 12.0, 0.5, 12).unwrap();
        assert_relative_eq!(ci.amount, 1_000.0 * 1.01_f64.powi(6), epsilon = 1e-9);
    }

    #[test]
    fn test_compound_interest_zero_frequency() {
        assert!(compound_interest(1_000.0, 5.0, 1.0, 0).is_err());
    }

    #[test]
    fn test_compound_interest_overflow() {
        let err = compound_interest(1e300, 100.0, 1_000.0, 365).unwrap_err();
        assert!(err.to_string().contains("amount"));
    }

    #[test]
    fn test_interest_plus_principal_is_amount() {
        let ci = compound_interest(25_000.0, 6.5, 7.0, 2).unwrap();
        assert_relative_eq!(ci.interest + 25_000.0, ci.amount, epsilon = 1e-9);
    }
}
