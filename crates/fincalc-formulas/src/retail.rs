//! Retail price discounts.

use serde::{Deserialize, Serialize};

use fincalc_core::validation::{finite_result, non_negative};
use fincalc_core::FinCalcResult;

/// Discount off a list price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    /// Amount taken off.
    pub discount_amount: f64,
    /// Price after the discount.
    pub final_price: f64,
}

/// Applies a percentage discount to `price`.
///
/// A discount above 100% is allowed and yields a negative final price.
pub fn discount(price: f64, discount_pct: f64) -> FinCalcResult<Discount> {
    let price = non_negative("original_price", price)?;
    let pct = non_negative("discount_percentage", discount_pct)?;

    let discount_amount = finite_result("discount_amount", price * pct / 100.0)?;
    Ok(Discount {
        discount_amount,
        final_price: price - discount_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount() {
        let d = discount(500.0, 20.0).unwrap();
        assert_relative_eq!(d.discount_amount, 100.0);
        assert_relative_eq!(d.final_price, 400.0);
    }

    #[test]
    fn test_no_discount() {
        let d = discount(799.0, 0.0).unwrap();
        assert_eq!(d.discount_amount, 0.0);
        assert_eq!(d.final_price, 799.0);
    }

    #[test]
    fn test_discount_rejects_negative_price() {
        assert!(discount(-10.0, 5.0).is_err());
    }
}
