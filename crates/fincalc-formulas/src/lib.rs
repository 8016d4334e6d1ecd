//! # FinCalc Formulas
//!
//! Closed-form personal finance calculators.
//!
//! Every formula is a pure function of its inputs. Rates are given in
//! percent per year, terms in years, and amounts in rupees. Inputs are
//! validated before evaluation; a formula never returns `NaN` or infinity.
//!
//! ## Modules
//!
//! - [`interest`]: simple and compound interest
//! - [`savings`]: PPF, NPS, recurring and fixed deposits
//! - [`employment`]: gratuity, provident fund, salary
//! - [`tax`]: long-term capital gains, GST
//! - [`returns`]: ROI, CAGR
//! - [`retail`]: discounts
//! - [`loans`]: EMI, down payment
//! - [`amortization`]: month-by-month EMI schedule
//! - [`calculator`]: name-based dispatch for front-ends
//!
//! ## Example
//!
//! ```rust
//! use fincalc_formulas::prelude::*;
//!
//! let loan = emi(100_000.0, 10.0, 1.0).unwrap();
//! assert!((loan.emi - 8_791.59).abs() < 1e-9);
//!
//! let si = simple_interest(10_000.0, 5.0, 2.0).unwrap();
//! assert_eq!(si.total, 11_000.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]

pub mod amortization;
pub mod calculator;
pub mod employment;
pub mod interest;
pub mod loans;
pub mod retail;
pub mod returns;
pub mod savings;
pub mod tax;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::amortization::{emi_schedule, AmortizationRow, AmortizationSchedule};
    pub use crate::calculator::{CalculationOutput, Calculator, CalculatorInput, OutputField};
    pub use crate::employment::{gratuity, provident_fund, salary_breakdown};
    pub use crate::interest::{compound_interest, simple_interest};
    pub use crate::loans::{down_payment, emi};
    pub use crate::retail::discount;
    pub use crate::returns::{cagr, roi};
    pub use crate::savings::{fixed_deposit, nps, ppf, recurring_deposit};
    pub use crate::tax::{gst, ltcg};

    pub use fincalc_core::prelude::*;
}

pub use calculator::{CalculationOutput, Calculator, CalculatorInput};
pub use fincalc_core::{FinCalcError, FinCalcResult};
