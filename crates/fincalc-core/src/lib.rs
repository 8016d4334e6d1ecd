//! # FinCalc Core
//!
//! Core types, validation, and formatting shared by the FinCalc calculators.
//!
//! - **Errors**: [`FinCalcError`] with a single input-driven taxonomy
//! - **Validation**: helpers that reject `NaN`, infinities, and out-of-domain values
//! - **Types**: [`Compounding`] frequencies and [`ValueKind`] display units
//! - **Display**: decimal rounding, Indian currency notation, percentages
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::prelude::*;
//!
//! assert_eq!(Compounding::Quarterly.periods_per_year(), 4);
//! assert_eq!(format_inr(1180.0), "₹1,180.00");
//! assert!(validation::positive("years", 0.0).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

pub mod display;
pub mod error;
pub mod types;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::display::{format_inr, format_percent, round_to, Grouping};
    pub use crate::error::{FinCalcError, FinCalcResult};
    pub use crate::types::{Compounding, ValueKind};
    pub use crate::validation;
}

// Re-export commonly used types at crate root
pub use error::{FinCalcError, FinCalcResult};
pub use types::{Compounding, ValueKind};
