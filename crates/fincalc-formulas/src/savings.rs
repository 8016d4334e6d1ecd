//! Savings and deposit schemes.
//!
//! PPF, NPS and fixed deposits are compound interest with a fixed
//! compounding convention. Recurring deposits accumulate a monthly annuity.

use fincalc_core::validation::{finite_result, non_negative};
use fincalc_core::{Compounding, FinCalcResult};

use crate::interest::compound_interest;

/// Public Provident Fund rate, % per year.
pub const PPF_RATE: f64 = 7.1;

/// PPF compounds once a year.
pub const PPF_COMPOUNDING: u32 = Compounding::Annual.periods_per_year();

/// NPS returns are compounded monthly.
pub const NPS_COMPOUNDING: u32 = Compounding::Monthly.periods_per_year();

/// Bank fixed deposits compound quarterly.
pub const FD_COMPOUNDING: u32 = Compounding::Quarterly.periods_per_year();

const MONTHS_PER_YEAR: f64 = 12.0;

/// Maturity amount of a Public Provident Fund investment.
///
/// The rate is fixed at [`PPF_RATE`]; it is not a parameter.
pub fn ppf(yearly_investment: f64, years: f64) -> FinCalcResult<f64> {
    let yearly_investment = non_negative("yearly_investment", yearly_investment)?;
    let years = non_negative("time", years)?;
    Ok(compound_interest(yearly_investment, PPF_RATE, years, PPF_COMPOUNDING)?.amount)
}

/// Maturity amount of a National Pension System contribution.
///
/// One year's contributions (`monthly_contribution × 12`) compounded monthly
/// at `return_rate` for `years`.
pub fn nps(monthly_contribution: f64, return_rate: f64, years: f64) -> FinCalcResult<f64> {
    let monthly_contribution = non_negative("monthly_contribution", monthly_contribution)?;
    let return_rate = non_negative("expected_return", return_rate)?;
    let years = non_negative("time", years)?;
    let yearly = monthly_contribution * MONTHS_PER_YEAR;
    Ok(compound_interest(yearly, return_rate, years, NPS_COMPOUNDING)?.amount)
}

/// Maturity amount of a recurring deposit.
///
/// # Formula
///
/// Future value of an ordinary annuity with monthly compounding:
///
/// ```text
/// i = R / 1200,  n = 12 × T
/// maturity = D × ((1 + i)^n − 1) / i
/// ```
///
/// At a zero rate this is the limit `D × n`.
pub fn recurring_deposit(monthly_deposit: f64, annual_rate: f64, years: f64) -> FinCalcResult<f64> {
    let deposit = non_negative("monthly_deposit", monthly_deposit)?;
    let rate = non_negative("rate", annual_rate)?;
    let years = non_negative("time", years)?;

    let months = years * MONTHS_PER_YEAR;
    let monthly_rate = rate / (MONTHS_PER_YEAR * 100.0);

    let maturity = if monthly_rate == 0.0 {
        deposit * months
    } else {
        deposit * (months * monthly_rate.ln_1p()).exp_m1() / monthly_rate
    };
    finite_result("maturity_amount", maturity)
}

/// Maturity amount of a fixed deposit, compounded quarterly.
pub fn fixed_deposit(principal: f64, rate: f64, years: f64) -> FinCalcResult<f64> {
    Ok(compound_interest(principal, rate, years, FD_COMPOUNDING)?.amount)
}
