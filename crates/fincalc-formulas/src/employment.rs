//! Salary-linked calculations: gratuity, provident fund, and pay breakdown.

use serde::{Deserialize, Serialize};

use fincalc_core::validation::{finite_result, non_negative};
use fincalc_core::FinCalcResult;

/// Days of wages paid per completed year of service.
pub const GRATUITY_DAYS_PER_YEAR: f64 = 15.0;

/// Working days in a month for the gratuity formula.
pub const GRATUITY_WORKING_DAYS: f64 = 26.0;

/// Statutory provident fund contribution, % of basic salary.
pub const DEFAULT_PF_CONTRIBUTION: f64 = 12.0;

/// Employer and employee provident fund contributions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProvidentFund {
    /// Employer's share.
    pub employer: f64,
    /// Employee's share.
    pub employee: f64,
    /// Sum of both shares.
    pub total: f64,
}

/// Gross and net monthly pay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Sum of all earnings components.
    pub gross: f64,
    /// Gross minus deductions. May be negative.
    pub net: f64,
}

/// Gratuity payable on leaving: `15 × last salary × years / 26`.
pub fn gratuity(last_salary: f64, years_of_service: f64) -> FinCalcResult<f64> {
    let salary = non_negative("salary", last_salary)?;
    let years = non_negative("years", years_of_service)?;
    finite_result(
        "gratuity",
        GRATUITY_DAYS_PER_YEAR * salary * years / GRATUITY_WORKING_DAYS,
    )
}

/// Provident fund contributions as percentages of `salary`.
///
/// Percentages are not capped at 100; voluntary contributions can exceed
/// the statutory [`DEFAULT_PF_CONTRIBUTION`].
pub fn provident_fund(salary: f64, employer_pct: f64, employee_pct: f64) -> FinCalcResult<ProvidentFund> {
    let salary = non_negative("salary", salary)?;
    let employer_pct = non_negative("employer_contribution", employer_pct)?;
    let employee_pct = non_negative("employee_contribution", employee_pct)?;

    let employer = finite_result("employer", salary * employer_pct / 100.0)?;
    let employee = finite_result("employee", salary * employee_pct / 100.0)?;
    Ok(ProvidentFund {
        employer,
        employee,
        total: finite_result("total", employer + employee)?,
    })
}

/// Gross pay from its components, and net pay after deductions.
pub fn salary_breakdown(
    basic: f64,
    hra: f64,
    da: f64,
    allowances: f64,
    deductions: f64,
) -> FinCalcResult<SalaryBreakdown> {
    let gross = non_negative("basic", basic)?
        + non_negative("hra", hra)?
        + non_negative("da", da)?
        + non_negative("allowances", allowances)?;
    let deductions = non_negative("deductions", deductions)?;

    let gross = finite_result("gross", gross)?;
    Ok(SalaryBreakdown {
        gross,
        net: gross - deductions,
    })
}
