//! Indian indirect and capital-gains tax.

use serde::{Deserialize, Serialize};

use fincalc_core::validation::{finite_result, non_negative};
use fincalc_core::FinCalcResult;

/// Gains up to this amount are exempt from long-term capital gains tax.
pub const LTCG_EXEMPTION: f64 = 100_000.0;

/// Tax rate on long-term gains above the exemption.
pub const LTCG_TAX_RATE: f64 = 0.10;

/// Minimum holding period, in years, for a gain to count as long-term.
pub const LTCG_MIN_HOLDING_YEARS: f64 = 1.0;

/// Long-term capital gain and the tax on it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CapitalGains {
    /// Selling price minus cost. Negative for a loss.
    pub gain: f64,
    /// Tax payable on the gain above the exemption.
    pub tax: f64,
}

/// GST on an amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gst {
    /// Tax component.
    pub gst_amount: f64,
    /// Amount including tax.
    pub total: f64,
}

/// Long-term capital gains tax.
///
/// Holdings shorter than [`LTCG_MIN_HOLDING_YEARS`] are short-term and
/// return a zero result; they are not an error.
///
/// ```text
/// gain = selling − cost
/// tax  = max(0, gain − 100,000) × 10%
/// ```
pub fn ltcg(selling_price: f64, cost_price: f64, holding_years: f64) -> FinCalcResult<CapitalGains> {
    let selling_price = non_negative("selling_price", selling_price)?;
    let cost_price = non_negative("cost_price", cost_price)?;
    let holding_years = non_negative("holding_period", holding_years)?;

    if holding_years < LTCG_MIN_HOLDING_YEARS {
        return Ok(CapitalGains::default());
    }

    let gain = finite_result("gain", selling_price - cost_price)?;
    let tax = (gain - LTCG_EXEMPTION).max(0.0) * LTCG_TAX_RATE;
    Ok(CapitalGains { gain, tax })
}

/// Adds GST at `rate_pct` to `amount`.
///
/// ```
/// use fincalc_formulas::tax::gst;
///
/// let g = gst(1_000.0, 18.0).unwrap();
/// assert_eq!(g.gst_amount, 180.0);
/// assert_eq!(g.total, 1_180.0);
/// ```
pub fn gst(amount: f64, rate_pct: f64) -> FinCalcResult<Gst> {
    let amount = non_negative("amount", amount)?;
    let rate = non_negative("rate", rate_pct)?;

    let gst_amount = finite_result("gst_amount", amount * rate / 100.0)?;
    Ok(Gst {
        gst_amount,
        total: finite_result("total", amount + gst_amount)?,
    })
}
