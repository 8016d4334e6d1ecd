//! Month-by-month amortization of an EMI loan.

use serde::{Deserialize, Serialize};

use fincalc_core::{FinCalcError, FinCalcResult};

use crate::loans::{emi, monthly_rate, Emi, MONTHS_PER_YEAR};

/// Longest schedule generated: 100 years of monthly rows.
pub const MAX_SCHEDULE_MONTHS: u32 = 1_200;

const WHOLE_MONTH_TOLERANCE: f64 = 1e-9;

/// One month of a repayment schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based month number.
    pub month: u32,
    /// Balance before this month's payment.
    pub opening_balance: f64,
    /// Amount paid this month.
    pub installment: f64,
    /// Interest portion of the installment.
    pub interest: f64,
    /// Principal portion of the installment.
    pub principal: f64,
    /// Balance after this month's payment.
    pub closing_balance: f64,
}

/// Full repayment schedule for an EMI loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// The loan summary the schedule repays.
    pub emi: Emi,
    /// One row per month.
    pub rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    /// Sum of the interest column.
    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest).sum()
    }

    /// Sum of the principal column.
    pub fn total_principal(&self) -> f64 {
        self.rows.iter().map(|r| r.principal).sum()
    }

    /// Sum of all installments.
    pub fn total_paid(&self) -> f64 {
        self.rows.iter().map(|r| r.installment).sum()
    }
}

/// Builds the monthly repayment schedule for [`emi`].
///
/// Every month pays the rounded EMI. The month that clears the loan pays
/// whatever balance remains plus its interest and closes at exactly zero.
/// Rounding the EMI up can clear a small loan early; the months after that
/// pay nothing.
///
/// # Errors
///
/// Same as [`emi`], plus: the term must be a whole number of months, at
/// least one and no longer than [`MAX_SCHEDULE_MONTHS`].
pub fn emi_schedule(principal: f64, annual_rate: f64, years: f64) -> FinCalcResult<AmortizationSchedule> {
    let summary = emi(principal, annual_rate, years)?;

    let months_exact = years * MONTHS_PER_YEAR;
    let months = months_exact.round();
    if (months_exact - months).abs() > WHOLE_MONTH_TOLERANCE {
        return Err(FinCalcError::invalid_input(
            "time",
            years,
            "schedule needs a whole number of months",
        ));
    }
    if months < 1.0 {
        return Err(FinCalcError::invalid_input(
            "time",
            years,
            "schedule needs at least one month",
        ));
    }
    if months > f64::from(MAX_SCHEDULE_MONTHS) {
        return Err(FinCalcError::invalid_input(
            "time",
            years,
            format!("schedule is limited to {MAX_SCHEDULE_MONTHS} months"),
        ));
    }
    let months = months as u32;
    let i = monthly_rate(annual_rate);

    log::trace!("building {months}-month schedule, emi {}", summary.emi);

    let mut rows = Vec::with_capacity(months as usize);
    let mut balance = principal;
    for month in 1..=months {
        let interest = balance * i;
        let pays_off = month == months || balance + interest <= summary.emi;
        let (installment, repaid, closing) = if pays_off {
            (balance + interest, balance, 0.0)
        } else {
            (summary.emi, summary.emi - interest, balance - (summary.emi - interest))
        };

        rows.push(AmortizationRow {
            month,
            opening_balance: balance,
            installment,
            interest,
            principal: repaid,
            closing_balance: closing,
        });
        balance = closing;
    }

    Ok(AmortizationSchedule { emi: summary, rows })
}
