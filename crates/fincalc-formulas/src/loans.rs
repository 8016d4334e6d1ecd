//! Loan repayment: EMI and down payment.

use serde::{Deserialize, Serialize};

use fincalc_core::display::round_to;
use fincalc_core::validation::{finite_result, non_negative, positive};
use fincalc_core::FinCalcResult;

pub(crate) const MONTHS_PER_YEAR: f64 = 12.0;

/// Installments are paid in whole paise.
pub const INSTALLMENT_DECIMALS: u32 = 2;

/// Equated monthly installment and loan totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Emi {
    /// Fixed monthly payment, rounded to [`INSTALLMENT_DECIMALS`].
    pub emi: f64,
    /// `emi × months`.
    pub total_amount: f64,
    /// Total paid minus principal.
    pub total_interest: f64,
}

/// Split of an asset price into down payment and loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DownPayment {
    /// Cash paid upfront.
    pub down_payment: f64,
    /// Remainder to be financed.
    pub loan_amount: f64,
}

/// Monthly rate as a fraction (`10%` per year becomes `0.008333…`).
pub(crate) fn monthly_rate(annual_rate: f64) -> f64 {
    annual_rate / (MONTHS_PER_YEAR * 100.0)
}

/// Calculates the EMI of an amortizing loan.
///
/// # Formula
///
/// ```text
/// i = R / 1200,  n = 12 × T
/// EMI = P × i × (1 + i)^n / ((1 + i)^n − 1)
/// ```
///
/// The installment is rounded to paise before the totals are taken, so
/// `total_amount` is what the borrower actually pays. An interest-free loan
/// (`annual_rate == 0`) repays `P / n` a month.
///
/// # Errors
///
/// `years` must be positive; amounts must be non-negative and finite.
///
/// # Example
///
/// ```
/// use fincalc_formulas::loans::emi;
///
/// let loan = emi(100_000.0, 10.0, 1.0).unwrap();
/// assert!((loan.emi - 8_791.59).abs() < 0.005);
/// ```
pub fn emi(principal: f64, annual_rate: f64, years: f64) -> FinCalcResult<Emi> {
    let principal = non_negative("principal", principal)?;
    let rate = non_negative("rate", annual_rate)?;
    let years = positive("time", years)?;

    let months = years * MONTHS_PER_YEAR;
    let i = monthly_rate(rate);

    let installment = if i == 0.0 {
        principal / months
    } else {
        let growth = (months * i.ln_1p()).exp_m1();
        principal * i * (growth + 1.0) / growth
    };
    let installment = round_to(finite_result("emi", installment)?, INSTALLMENT_DECIMALS);
    let total_amount = finite_result("total_amount", installment * months)?;

    Ok(Emi {
        emi: installment,
        total_amount,
        total_interest: total_amount - principal,
    })
}

/// Splits `asset_price` into a down payment of `down_payment_pct` percent
/// and the loan for the rest.
pub fn down_payment(asset_price: f64, down_payment_pct: f64) -> FinCalcResult<DownPayment> {
    let price = non_negative("asset_price", asset_price)?;
    let pct = non_negative("down_payment_percentage", down_payment_pct)?;

    let down = finite_result("down_payment", price * pct / 100.0)?;
    Ok(DownPayment {
        down_payment: down,
        loan_amount: price - down,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_emi_reference() {
        let loan = emi(100_000.0, 10.0, 1.0).unwrap();
        assert_relative_eq!(loan.emi, 8_791.59, epsilon = 1e-9);
        assert_relative_eq!(loan.total_amount, 105_499.08, epsilon = 1e-6);
        assert_relative_eq!(loan.total_interest, 5_499.08, epsilon = 1e-6);
    }

    #[test]
    fn test_emi_home_loan() {
        // 50 lakh at 8.5% for 20 years
        let loan = emi(5_000_000.0, 8.5, 20.0).unwrap();
        assert_relative_eq!(loan.emi, 43_391.16, epsilon = 1e-9);
        assert_relative_eq!(loan.total_amount, 43_391.16 * 240.0, epsilon = 1e-6);
        assert_relative_eq!(loan.total_interest, loan.total_amount - 5_000_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_emi_zero_rate() {
        let loan = emi(120_000.0, 0.0, 2.0).unwrap();
        assert_relative_eq!(loan.emi, 5_000.0);
        assert_relative_eq!(loan.total_amount, 120_000.0);
        assert_relative_eq!(loan.total_interest, 0.0);
    }

    #[test]
    fn test_emi_zero_term() {
        assert!(emi(100_000.0, 10.0, 0.0).is_err());
    }

    #[test]
    fn test_down_payment() {
        let dp = down_payment(1_200_000.0, 20.0).unwrap();
        assert_relative_eq!(dp.down_payment, 240_000.0);
        assert_relative_eq!(dp.loan_amount, 960_000.0);
    }

    #[test]
    fn test_down_payment_full_cash() {
        let dp = down_payment(800_000.0, 100.0).unwrap();
        assert_relative_eq!(dp.loan_amount, 0.0);
    }
}
