//! Name-based dispatch over every calculator.
//!
//! Front-ends (CLI, HTTP, WebAssembly) pick a [`Calculator`] by name, hand it
//! a JSON object of parameters, and get back a [`CalculationOutput`]. The
//! parameter names match the JSON API the calculators were first exposed
//! through (`principal`, `rate`, `time`, ...).
//!
//! # Example
//!
//! ```
//! use fincalc_formulas::calculator::Calculator;
//! use serde_json::json;
//!
//! let calc: Calculator = "gst".parse().unwrap();
//! let input = calc.parse_input(json!({"amount": 1000, "rate": "18"})).unwrap();
//! let output = input.evaluate().unwrap();
//! assert_eq!(serde_json::to_value(output).unwrap(), json!({"gst_amount": 180.0, "total": 1180.0}));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;
use std::str::FromStr;

use fincalc_core::{FinCalcError, FinCalcResult, ValueKind};

use crate::employment::{
    gratuity, provident_fund, salary_breakdown, ProvidentFund, SalaryBreakdown,
    DEFAULT_PF_CONTRIBUTION,
};
use crate::interest::{compound_interest, simple_interest, CompoundInterest, SimpleInterest};
use crate::loans::{down_payment, emi, DownPayment, Emi};
use crate::retail::{discount, Discount};
use crate::returns::{cagr, roi};
use crate::savings::{fixed_deposit, nps, ppf, recurring_deposit};
use crate::tax::{gst, ltcg, CapitalGains, Gst};

// ============================================================================
// CALCULATOR CATALOGUE
// ============================================================================

/// Every calculator the library offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calculator {
    /// Simple interest.
    SimpleInterest,
    /// Compound interest.
    CompoundInterest,
    /// Gratuity on leaving employment.
    Gratuity,
    /// Provident fund contributions.
    ProvidentFund,
    /// Gross and net salary.
    Salary,
    /// Public Provident Fund maturity.
    Ppf,
    /// National Pension System maturity.
    Nps,
    /// Recurring deposit maturity.
    RecurringDeposit,
    /// Fixed deposit maturity.
    FixedDeposit,
    /// Long-term capital gains tax.
    Ltcg,
    /// Return on investment.
    Roi,
    /// Goods and services tax.
    Gst,
    /// Price discount.
    Discount,
    /// Equated monthly installment.
    Emi,
    /// Down payment and loan amount.
    DownPayment,
    /// Compound annual growth rate.
    Cagr,
}

/// Description of one calculator parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSpec {
    /// JSON field name.
    pub name: &'static str,
    /// What the parameter means, with units.
    pub description: &'static str,
    /// Value used when the parameter is omitted. `None` means required,
    /// unless `optional` is set.
    pub default: Option<f64>,
    /// The parameter may be omitted and has no default.
    pub optional: bool,
}

const fn required(name: &'static str, description: &'static str) -> ParameterSpec {
    ParameterSpec {
        name,
        description,
        default: None,
        optional: false,
    }
}

const fn defaulted(name: &'static str, description: &'static str, default: f64) -> ParameterSpec {
    ParameterSpec {
        name,
        description,
        default: Some(default),
        optional: false,
    }
}

const fn optional(name: &'static str, description: &'static str) -> ParameterSpec {
    ParameterSpec {
        name,
        description,
        default: None,
        optional: true,
    }
}

const DEFAULT_FREQUENCY: u32 = 1;

const PRINCIPAL: ParameterSpec = required("principal", "Principal amount");
const RATE: ParameterSpec = required("rate", "Annual rate, % per year");
const TIME: ParameterSpec = required("time", "Term in years");

const PRINCIPAL_RATE_TIME_PARAMS: &[ParameterSpec] = &[PRINCIPAL, RATE, TIME];

const COMPOUND_INTEREST_PARAMS: &[ParameterSpec] = &[
    PRINCIPAL,
    RATE,
    TIME,
    defaulted(
        "frequency",
        "Compounding periods per year",
        DEFAULT_FREQUENCY as f64,
    ),
];

const GRATUITY_PARAMS: &[ParameterSpec] = &[
    required("salary", "Last drawn monthly salary (basic + DA)"),
    required("years", "Completed years of service"),
];

const PROVIDENT_FUND_PARAMS: &[ParameterSpec] = &[
    required("salary", "Monthly basic salary"),
    defaulted(
        "employer_contribution",
        "Employer contribution, % of salary",
        DEFAULT_PF_CONTRIBUTION,
    ),
    defaulted(
        "employee_contribution",
        "Employee contribution, % of salary",
        DEFAULT_PF_CONTRIBUTION,
    ),
];

const SALARY_PARAMS: &[ParameterSpec] = &[
    required("basic", "Basic pay"),
    defaulted("hra", "House rent allowance", 0.0),
    defaulted("da", "Dearness allowance", 0.0),
    defaulted("allowances", "Other allowances", 0.0),
    defaulted("deductions", "Total deductions", 0.0),
];

const PPF_PARAMS: &[ParameterSpec] = &[
    required("yearly_investment", "Amount invested each year"),
    TIME,
];

const NPS_PARAMS: &[ParameterSpec] = &[
    required("monthly_contribution", "Monthly contribution"),
    required("expected_return", "Expected return, % per year"),
    TIME,
];

const RECURRING_DEPOSIT_PARAMS: &[ParameterSpec] =
    &[required("monthly_deposit", "Monthly deposit"), RATE, TIME];

const LTCG_PARAMS: &[ParameterSpec] = &[
    required("selling_price", "Sale consideration"),
    required("cost_price", "Cost of acquisition"),
    required("holding_period", "Holding period in years"),
];

const ROI_PARAMS: &[ParameterSpec] = &[
    required("initial_investment", "Amount invested"),
    required("final_value", "Current or exit value"),
    optional("time", "Holding period in years (not used)"),
];

const GST_PARAMS: &[ParameterSpec] = &[
    required("amount", "Amount before tax"),
    required("rate", "GST rate, %"),
];

const DISCOUNT_PARAMS: &[ParameterSpec] = &[
    required("original_price", "List price"),
    required("discount_percentage", "Discount, %"),
];

const DOWN_PAYMENT_PARAMS: &[ParameterSpec] = &[
    required("asset_price", "Price of the asset"),
    required("down_payment_percentage", "Down payment, % of price"),
];

const CAGR_PARAMS: &[ParameterSpec] = &[
    required("initial_value", "Starting value"),
    required("final_value", "Ending value"),
    TIME,
];

impl Calculator {
    /// All calculators, in catalogue order.
    pub const ALL: [Calculator; 16] = [
        Calculator::SimpleInterest,
        Calculator::CompoundInterest,
        Calculator::Gratuity,
        Calculator::ProvidentFund,
        Calculator::Salary,
        Calculator::Ppf,
        Calculator::Nps,
        Calculator::RecurringDeposit,
        Calculator::FixedDeposit,
        Calculator::Ltcg,
        Calculator::Roi,
        Calculator::Gst,
        Calculator::Discount,
        Calculator::Emi,
        Calculator::DownPayment,
        Calculator::Cagr,
    ];

    /// Stable snake_case identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Calculator::SimpleInterest => "simple_interest",
            Calculator::CompoundInterest => "compound_interest",
            Calculator::Gratuity => "gratuity",
            Calculator::ProvidentFund => "provident_fund",
            Calculator::Salary => "salary",
            Calculator::Ppf => "ppf",
            Calculator::Nps => "nps",
            Calculator::RecurringDeposit => "recurring_deposit",
            Calculator::FixedDeposit => "fixed_deposit",
            Calculator::Ltcg => "ltcg",
            Calculator::Roi => "roi",
            Calculator::Gst => "gst",
            Calculator::Discount => "discount",
            Calculator::Emi => "emi",
            Calculator::DownPayment => "down_payment",
            Calculator::Cagr => "cagr",
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Calculator::SimpleInterest => "Simple Interest",
            Calculator::CompoundInterest => "Compound Interest",
            Calculator::Gratuity => "Gratuity",
            Calculator::ProvidentFund => "Provident Fund",
            Calculator::Salary => "Salary",
            Calculator::Ppf => "Public Provident Fund",
            Calculator::Nps => "National Pension System",
            Calculator::RecurringDeposit => "Recurring Deposit",
            Calculator::FixedDeposit => "Fixed Deposit",
            Calculator::Ltcg => "Long-Term Capital Gains",
            Calculator::Roi => "Return on Investment",
            Calculator::Gst => "GST",
            Calculator::Discount => "Discount",
            Calculator::Emi => "EMI",
            Calculator::DownPayment => "Down Payment",
            Calculator::Cagr => "CAGR",
        }
    }

    /// Parameters in positional order.
    pub fn parameters(&self) -> &'static [ParameterSpec] {
        match self {
            Calculator::SimpleInterest | Calculator::FixedDeposit | Calculator::Emi => {
                PRINCIPAL_RATE_TIME_PARAMS
            }
            Calculator::CompoundInterest => COMPOUND_INTEREST_PARAMS,
            Calculator::Gratuity => GRATUITY_PARAMS,
            Calculator::ProvidentFund => PROVIDENT_FUND_PARAMS,
            Calculator::Salary => SALARY_PARAMS,
            Calculator::Ppf => PPF_PARAMS,
            Calculator::Nps => NPS_PARAMS,
            Calculator::RecurringDeposit => RECURRING_DEPOSIT_PARAMS,
            Calculator::Ltcg => LTCG_PARAMS,
            Calculator::Roi => ROI_PARAMS,
            Calculator::Gst => GST_PARAMS,
            Calculator::Discount => DISCOUNT_PARAMS,
            Calculator::DownPayment => DOWN_PAYMENT_PARAMS,
            Calculator::Cagr => CAGR_PARAMS,
        }
    }

    /// Builds a typed input from a JSON object of parameters.
    ///
    /// Numeric strings are accepted (`"1,00,000"` reads as `100000`), since
    /// form fields arrive as text.
    pub fn parse_input(self, params: Value) -> FinCalcResult<CalculatorInput> {
        let Value::Object(fields) = params else {
            return Err(FinCalcError::malformed(
                self.name(),
                "parameters must be a JSON object",
            ));
        };

        let tagged = serde_json::json!({
            "calculator": self.name(),
            "params": Value::Object(normalize_numbers(fields)),
        });
        serde_json::from_value(tagged).map_err(|e| FinCalcError::malformed(self.name(), e.to_string()))
    }
}

impl fmt::Display for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Calculator {
    type Err = FinCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        let calc = match key.as_str() {
            "simple_interest" | "si" => Calculator::SimpleInterest,
            "compound_interest" | "ci" => Calculator::CompoundInterest,
            "gratuity" => Calculator::Gratuity,
            "provident_fund" | "pf" => Calculator::ProvidentFund,
            "salary" => Calculator::Salary,
            "ppf" => Calculator::Ppf,
            "nps" => Calculator::Nps,
            "recurring_deposit" | "rd" => Calculator::RecurringDeposit,
            "fixed_deposit" | "fd" => Calculator::FixedDeposit,
            "ltcg" => Calculator::Ltcg,
            "roi" => Calculator::Roi,
            "gst" => Calculator::Gst,
            "discount" => Calculator::Discount,
            "emi" => Calculator::Emi,
            "down_payment" | "dp" => Calculator::DownPayment,
            "cagr" => Calculator::Cagr,
            _ => return Err(FinCalcError::unknown_calculator(s)),
        };
        Ok(calc)
    }
}

/// Rewrites numeric strings as JSON numbers. Integral values stay integers
/// so they can fill `u32` fields.
fn normalize_numbers(fields: Map<String, Value>) -> Map<String, Value> {
    fields
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(text) => parse_number(&text).unwrap_or(Value::String(text)),
                Value::Number(n) => Value::Number(integral(n)),
                other => other,
            };
            (key, value)
        })
        .collect()
}

fn parse_number(text: &str) -> Option<Value> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if let Ok(int) = cleaned.parse::<i64>() {
        return Some(Value::Number(int.into()));
    }
    cleaned
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(|n| Value::Number(integral(n)))
}

/// `4.0` becomes `4`. JavaScript callers cannot tell the two apart.
fn integral(n: Number) -> Number {
    const I64_LIMIT: f64 = 9.007_199_254_740_992e15;
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= I64_LIMIT => {
            Number::from(f as i64)
        }
        _ => n,
    }
}

// ============================================================================
// TYPED PARAMETERS
// ============================================================================

fn default_frequency() -> u32 {
    DEFAULT_FREQUENCY
}

fn default_pf_contribution() -> f64 {
    DEFAULT_PF_CONTRIBUTION
}

/// Principal, annual rate and term. Shared by several calculators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrincipalRateTime {
    /// Principal amount.
    pub principal: f64,
    /// Annual rate, % per year.
    pub rate: f64,
    /// Term in years.
    pub time: f64,
}

/// Compound interest parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestParams {
    /// Principal amount.
    pub principal: f64,
    /// Annual rate, % per year.
    pub rate: f64,
    /// Term in years.
    pub time: f64,
    /// Compounding periods per year.
    #[serde(default = "default_frequency")]
    pub frequency: u32,
}

/// Gratuity parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GratuityParams {
    /// Last drawn monthly salary.
    pub salary: f64,
    /// Completed years of service.
    pub years: f64,
}

/// Provident fund parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProvidentFundParams {
    /// Monthly basic salary.
    #[serde(alias = "basic_salary")]
    pub salary: f64,
    /// Employer contribution, %.
    #[serde(default = "default_pf_contribution")]
    pub employer_contribution: f64,
    /// Employee contribution, %.
    #[serde(default = "default_pf_contribution")]
    pub employee_contribution: f64,
}

/// Salary components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryParams {
    /// Basic pay.
    pub basic: f64,
    /// House rent allowance.
    #[serde(default)]
    pub hra: f64,
    /// Dearness allowance.
    #[serde(default)]
    pub da: f64,
    /// Other allowances.
    #[serde(default)]
    pub allowances: f64,
    /// Total deductions.
    #[serde(default)]
    pub deductions: f64,
}

/// PPF parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PpfParams {
    /// Amount invested each year.
    #[serde(alias = "investment")]
    pub yearly_investment: f64,
    /// Term in years.
    pub time: f64,
}

/// NPS parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NpsParams {
    /// Monthly contribution.
    pub monthly_contribution: f64,
    /// Expected return, % per year.
    #[serde(alias = "return_rate")]
    pub expected_return: f64,
    /// Term in years.
    pub time: f64,
}

/// Recurring deposit parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecurringDepositParams {
    /// Monthly deposit.
    pub monthly_deposit: f64,
    /// Annual rate, % per year.
    pub rate: f64,
    /// Term in years.
    pub time: f64,
}

/// Capital gains parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LtcgParams {
    /// Sale consideration.
    pub selling_price: f64,
    /// Cost of acquisition.
    pub cost_price: f64,
    /// Holding period in years.
    pub holding_period: f64,
}

/// ROI parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiParams {
    /// Amount invested.
    pub initial_investment: f64,
    /// Current or exit value.
    pub final_value: f64,
    /// Holding period in years; accepted but not used.
    #[serde(default)]
    pub time: Option<f64>,
}

/// GST parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GstParams {
    /// Amount before tax.
    pub amount: f64,
    /// GST rate, %.
    pub rate: f64,
}

/// Discount parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountParams {
    /// List price.
    #[serde(alias = "price")]
    pub original_price: f64,
    /// Discount, %.
    pub discount_percentage: f64,
}

/// Down payment parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DownPaymentParams {
    /// Price of the asset.
    pub asset_price: f64,
    /// Down payment, % of price.
    pub down_payment_percentage: f64,
}

/// CAGR parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CagrParams {
    /// Starting value.
    pub initial_value: f64,
    /// Ending value.
    pub final_value: f64,
    /// Period in years.
    pub time: f64,
}

/// A calculator together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", content = "params", rename_all = "snake_case")]
pub enum CalculatorInput {
    /// Simple interest.
    SimpleInterest(PrincipalRateTime),
    /// Compound interest.
    CompoundInterest(CompoundInterestParams),
    /// Gratuity.
    Gratuity(GratuityParams),
    /// Provident fund.
    ProvidentFund(ProvidentFundParams),
    /// Salary.
    Salary(SalaryParams),
    /// Public Provident Fund.
    Ppf(PpfParams),
    /// National Pension System.
    Nps(NpsParams),
    /// Recurring deposit.
    RecurringDeposit(RecurringDepositParams),
    /// Fixed deposit.
    FixedDeposit(PrincipalRateTime),
    /// Long-term capital gains.
    Ltcg(LtcgParams),
    /// Return on investment.
    Roi(RoiParams),
    /// GST.
    Gst(GstParams),
    /// Discount.
    Discount(DiscountParams),
    /// EMI.
    Emi(PrincipalRateTime),
    /// Down payment.
    DownPayment(DownPaymentParams),
    /// CAGR.
    Cagr(CagrParams),
}

impl CalculatorInput {
    /// The calculator this input is for.
    pub fn calculator(&self) -> Calculator {
        match self {
            CalculatorInput::SimpleInterest(_) => Calculator::SimpleInterest,
            CalculatorInput::CompoundInterest(_) => Calculator::CompoundInterest,
            CalculatorInput::Gratuity(_) => Calculator::Gratuity,
            CalculatorInput::ProvidentFund(_) => Calculator::ProvidentFund,
            CalculatorInput::Salary(_) => Calculator::Salary,
            CalculatorInput::Ppf(_) => Calculator::Ppf,
            CalculatorInput::Nps(_) => Calculator::Nps,
            CalculatorInput::RecurringDeposit(_) => Calculator::RecurringDeposit,
            CalculatorInput::FixedDeposit(_) => Calculator::FixedDeposit,
            CalculatorInput::Ltcg(_) => Calculator::Ltcg,
            CalculatorInput::Roi(_) => Calculator::Roi,
            CalculatorInput::Gst(_) => Calculator::Gst,
            CalculatorInput::Discount(_) => Calculator::Discount,
            CalculatorInput::Emi(_) => Calculator::Emi,
            CalculatorInput::DownPayment(_) => Calculator::DownPayment,
            CalculatorInput::Cagr(_) => Calculator::Cagr,
        }
    }

    /// Runs the formula.
    pub fn evaluate(&self) -> FinCalcResult<CalculationOutput> {
        log::debug!("evaluating {}", self.calculator());

        let output = match *self {
            CalculatorInput::SimpleInterest(p) => {
                CalculationOutput::SimpleInterest(simple_interest(p.principal, p.rate, p.time)?)
            }
            CalculatorInput::CompoundInterest(p) => CalculationOutput::CompoundInterest(
                compound_interest(p.principal, p.rate, p.time, p.frequency)?,
            ),
            CalculatorInput::Gratuity(p) => CalculationOutput::Gratuity {
                amount: gratuity(p.salary, p.years)?,
            },
            CalculatorInput::ProvidentFund(p) => CalculationOutput::ProvidentFund(provident_fund(
                p.salary,
                p.employer_contribution,
                p.employee_contribution,
            )?),
            CalculatorInput::Salary(p) => CalculationOutput::Salary(salary_breakdown(
                p.basic,
                p.hra,
                p.da,
                p.allowances,
                p.deductions,
            )?),
            CalculatorInput::Ppf(p) => CalculationOutput::Maturity {
                maturity_amount: ppf(p.yearly_investment, p.time)?,
            },
            CalculatorInput::Nps(p) => CalculationOutput::Maturity {
                maturity_amount: nps(p.monthly_contribution, p.expected_return, p.time)?,
            },
            CalculatorInput::RecurringDeposit(p) => CalculationOutput::Maturity {
                maturity_amount: recurring_deposit(p.monthly_deposit, p.rate, p.time)?,
            },
            CalculatorInput::FixedDeposit(p) => CalculationOutput::Maturity {
                maturity_amount: fixed_deposit(p.principal, p.rate, p.time)?,
            },
            CalculatorInput::Ltcg(p) => CalculationOutput::CapitalGains(ltcg(
                p.selling_price,
                p.cost_price,
                p.holding_period,
            )?),
            CalculatorInput::Roi(p) => CalculationOutput::Percentage {
                percentage: roi(p.initial_investment, p.final_value, p.time.unwrap_or(0.0))?,
            },
            CalculatorInput::Gst(p) => CalculationOutput::Gst(gst(p.amount, p.rate)?),
            CalculatorInput::Discount(p) => {
                CalculationOutput::Discount(discount(p.original_price, p.discount_percentage)?)
            }
            CalculatorInput::Emi(p) => CalculationOutput::Emi(emi(p.principal, p.rate, p.time)?),
            CalculatorInput::DownPayment(p) => CalculationOutput::DownPayment(down_payment(
                p.asset_price,
                p.down_payment_percentage,
            )?),
            CalculatorInput::Cagr(p) => CalculationOutput::Percentage {
                percentage: cagr(p.initial_value, p.final_value, p.time)?,
            },
        };
        Ok(output)
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// The result of any calculator.
///
/// Serializes as the bare record, e.g. `{"interest": 1000.0, "total": 11000.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalculationOutput {
    /// Simple interest result.
    SimpleInterest(SimpleInterest),
    /// Compound interest result.
    CompoundInterest(CompoundInterest),
    /// Gratuity amount.
    Gratuity {
        /// Gratuity payable.
        amount: f64,
    },
    /// Provident fund contributions.
    ProvidentFund(ProvidentFund),
    /// Gross and net salary.
    Salary(SalaryBreakdown),
    /// Maturity value of a savings scheme.
    Maturity {
        /// Value at the end of the term.
        maturity_amount: f64,
    },
    /// Capital gains and tax.
    CapitalGains(CapitalGains),
    /// A percentage (ROI, CAGR).
    Percentage {
        /// Value in percent.
        percentage: f64,
    },
    /// GST breakdown.
    Gst(Gst),
    /// Discount breakdown.
    Discount(Discount),
    /// Loan installment and totals.
    Emi(Emi),
    /// Down payment split.
    DownPayment(DownPayment),
}

/// One named number in a [`CalculationOutput`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutputField {
    /// JSON field name.
    pub name: &'static str,
    /// Display label.
    pub label: &'static str,
    /// The value.
    pub value: f64,
    /// Unit for display.
    pub kind: ValueKind,
}

const fn money(name: &'static str, label: &'static str, value: f64) -> OutputField {
    OutputField {
        name,
        label,
        value,
        kind: ValueKind::Currency,
    }
}

impl CalculationOutput {
    /// The output's values in display order.
    pub fn fields(&self) -> Vec<OutputField> {
        match *self {
            CalculationOutput::SimpleInterest(r) => vec![
                money("interest", "Interest", r.interest),
                money("total", "Total Amount", r.total),
            ],
            CalculationOutput::CompoundInterest(r) => vec![
                money("interest", "Interest", r.interest),
                money("amount", "Maturity Amount", r.amount),
            ],
            CalculationOutput::Gratuity { amount } => vec![money("amount", "Gratuity", amount)],
            CalculationOutput::ProvidentFund(r) => vec![
                money("employer", "Employer Contribution", r.employer),
                money("employee", "Employee Contribution", r.employee),
                money("total", "Total Contribution", r.total),
            ],
            CalculationOutput::Salary(r) => vec![
                money("gross", "Gross Salary", r.gross),
                money("net", "Net Salary", r.net),
            ],
            CalculationOutput::Maturity { maturity_amount } => {
                vec![money("maturity_amount", "Maturity Amount", maturity_amount)]
            }
            CalculationOutput::CapitalGains(r) => vec![
                money("gain", "Capital Gain", r.gain),
                money("tax", "Tax", r.tax),
            ],
            CalculationOutput::Percentage { percentage } => vec![OutputField {
                name: "percentage",
                label: "Rate",
                value: percentage,
                kind: ValueKind::Percent,
            }],
            CalculationOutput::Gst(r) => vec![
                money("gst_amount", "GST Amount", r.gst_amount),
                money("total", "Total Amount", r.total),
            ],
            CalculationOutput::Discount(r) => vec![
                money("discount_amount", "Discount", r.discount_amount),
                money("final_price", "Final Price", r.final_price),
            ],
            CalculationOutput::Emi(r) => vec![
                money("emi", "Monthly EMI", r.emi),
                money("total_amount", "Total Amount", r.total_amount),
                money("total_interest", "Total Interest", r.total_interest),
            ],
            CalculationOutput::DownPayment(r) => vec![
                money("down_payment", "Down Payment", r.down_payment),
                money("loan_amount", "Loan Amount", r.loan_amount),
            ],
        }
    }

    /// The headline number: the last field, which is the total or the
    /// only value for every calculator except EMI, where it is the installment.
    pub fn primary(&self) -> OutputField {
        let fields = self.fields();
        match self {
            CalculationOutput::Emi(_) => fields[0],
            _ => fields[fields.len() - 1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_names_round_trip() {
        for calc in Calculator::ALL {
            assert_eq!(calc.name().parse::<Calculator>().unwrap(), calc);
            assert_eq!(calc.to_string(), calc.name());
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("SI".parse::<Calculator>().unwrap(), Calculator::SimpleInterest);
        assert_eq!("compound-interest".parse::<Calculator>().unwrap(), Calculator::CompoundInterest);
        assert_eq!("Down Payment".parse::<Calculator>().unwrap(), Calculator::DownPayment);
        assert_eq!("fd".parse::<Calculator>().unwrap(), Calculator::FixedDeposit);
    }

    #[test]
    fn test_unknown_name() {
        let err = "mortgage".parse::<Calculator>().unwrap_err();
        assert_eq!(err, FinCalcError::unknown_calculator("mortgage"));
    }

    #[test]
    fn test_serde_name_matches_name() {
        for calc in Calculator::ALL {
            assert_eq!(serde_json::to_value(calc).unwrap(), json!(calc.name()));
        }
    }

    #[test]
    fn test_every_calculator_has_parameters() {
        for calc in Calculator::ALL {
            assert!(!calc.parameters().is_empty(), "{calc} has no parameters");
        }
    }

    #[test]
    fn test_parse_input_simple_interest() {
        let input = Calculator::SimpleInterest
            .parse_input(json!({"principal": 10000, "rate": 5, "time": 2}))
            .unwrap();
        assert_eq!(
            input,
            CalculatorInput::SimpleInterest(PrincipalRateTime {
                principal: 10_000.0,
                rate: 5.0,
                time: 2.0
            })
        );
    }

    #[test]
    fn test_parse_input_defaults() {
        let input = Calculator::CompoundInterest
            .parse_input(json!({"principal": 1000, "rate": 10, "time": 1}))
            .unwrap();
        match input {
            CalculatorInput::CompoundInterest(p) => assert_eq!(p.frequency, 1),
            other => panic!("unexpected input {other:?}"),
        }

        let input = Calculator::ProvidentFund
            .parse_input(json!({"basic_salary": 15000}))
            .unwrap();
        match input {
            CalculatorInput::ProvidentFund(p) => {
                assert_eq!(p.salary, 15_000.0);
                assert_eq!(p.employer_contribution, 12.0);
                assert_eq!(p.employee_contribution, 12.0);
            }
            other => panic!("unexpected input {other:?}"),
        }
    }

    #[test]
    fn test_parse_input_numeric_strings() {
        let input = Calculator::CompoundInterest
            .parse_input(json!({"principal": "1,00,000", "rate": "7.5", "time": "3", "frequency": "4"}))
            .unwrap();
        assert_eq!(
            input,
            CalculatorInput::CompoundInterest(CompoundInterestParams {
                principal: 100_000.0,
                rate: 7.5,
                time: 3.0,
                frequency: 4,
            })
        );
    }

    #[test]
    fn test_parse_input_whole_float_frequency() {
        let input = Calculator::CompoundInterest
            .parse_input(json!({"principal": 1000.0, "rate": 10.0, "time": 1.0, "frequency": 12.0}))
            .unwrap();
        assert!(matches!(input, CalculatorInput::CompoundInterest(p) if p.frequency == 12));

        assert!(Calculator::CompoundInterest
            .parse_input(json!({"principal": 1000, "rate": 10, "time": 1, "frequency": 2.5}))
            .is_err());
    }

    #[test]
    fn test_parse_input_missing_field() {
        let err = Calculator::Emi
            .parse_input(json!({"principal": 100000, "rate": 10}))
            .unwrap_err();
        assert!(err.is_input_error());
        assert!(err.to_string().contains("time"));
    }

    #[test]
    fn test_parse_input_non_numeric() {
        let err = Calculator::Gst
            .parse_input(json!({"amount": "lots", "rate": 18}))
            .unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_parse_input_not_object() {
        assert!(Calculator::Gst.parse_input(json!([1000, 18])).is_err());
    }

    #[test]
    fn test_evaluate_output_shape() {
        let output = Calculator::Discount
            .parse_input(json!({"price": 500, "discount_percentage": 20}))
            .unwrap()
            .evaluate()
            .unwrap();
        assert_eq!(
            serde_json::to_value(output).unwrap(),
            json!({"discount_amount": 100.0, "final_price": 400.0})
        );
    }

    #[test]
    fn test_evaluate_scalar_output() {
        let output = Calculator::Cagr
            .parse_input(json!({"initial_value": 1000, "final_value": 2000, "time": 5}))
            .unwrap()
            .evaluate()
            .unwrap();
        let field = output.primary();
        assert_eq!(field.name, "percentage");
        assert_eq!(field.kind, ValueKind::Percent);
        assert_relative_eq!(field.value, 14.869_835_5, epsilon = 1e-6);
    }

    #[test]
    fn test_evaluate_propagates_domain_error() {
        let err = Calculator::Roi
            .parse_input(json!({"initial_investment": 0, "final_value": 10}))
            .unwrap()
            .evaluate()
            .unwrap_err();
        assert!(err.to_string().contains("initial_investment"));
    }

    #[test]
    fn test_primary_field() {
        let output = CalculationOutput::Emi(emi(100_000.0, 10.0, 1.0).unwrap());
        assert_eq!(output.primary().name, "emi");
        let output = CalculationOutput::Gst(gst(1_000.0, 18.0).unwrap());
        assert_eq!(output.primary().name, "total");
    }

    #[test]
    fn test_input_tagging() {
        let input = CalculatorInput::Gst(GstParams {
            amount: 1_000.0,
            rate: 18.0,
        });
        assert_eq!(
            serde_json::to_value(input).unwrap(),
            json!({"calculator": "gst", "params": {"amount": 1000.0, "rate": 18.0}})
        );
    }
}
