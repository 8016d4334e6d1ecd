//! Property-based tests for formula invariants.
//!
//! - Totals equal their parts
//! - Savings schemes are compound interest under a fixed convention
//! - Short holdings never attract capital gains tax
//! - Formulas are deterministic

use fincalc_formulas::prelude::*;
use fincalc_formulas::savings::{FD_COMPOUNDING, NPS_COMPOUNDING, PPF_COMPOUNDING, PPF_RATE};
use fincalc_formulas::tax::LTCG_EXEMPTION;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

fn amount() -> impl Strategy<Value = f64> {
    0.0..1.0e9
}

fn rate() -> impl Strategy<Value = f64> {
    0.0..50.0
}

fn years() -> impl Strategy<Value = f64> {
    0.0..40.0
}

fn frequency() -> impl Strategy<Value = u32> {
    prop_oneof![Just(1u32), Just(2), Just(4), Just(12), Just(365)]
}

fn close(actual: f64, expected: f64, relative: f64) -> bool {
    (actual - expected).abs() <= relative * expected.abs().max(1.0)
}

// =============================================================================
// INTEREST
// =============================================================================

proptest! {
    #[test]
    fn simple_interest_total_is_principal_plus_interest(p in amount(), r in rate(), t in years()) {
        let si = simple_interest(p, r, t).unwrap();
        prop_assert_eq!(si.total, p + si.interest);
        prop_assert!(close(si.interest, p * r * t / 100.0, 1e-12));
    }

    #[test]
    fn compound_interest_never_loses_principal(
        p in amount(), r in rate(), t in years(), f in frequency()
    ) {
        let ci = compound_interest(p, r, t, f).unwrap();
        prop_assert!(ci.amount >= p);
        prop_assert!(ci.interest >= 0.0);
        prop_assert_eq!(ci.interest, ci.amount - p);
    }

    #[test]
    fn compound_interest_at_zero_rate_is_principal(p in amount(), t in years(), f in frequency()) {
        let ci = compound_interest(p, 0.0, t, f).unwrap();
        prop_assert_eq!(ci.amount, p);
        prop_assert_eq!(ci.interest, 0.0);
    }

    #[test]
    fn compound_beats_simple_over_whole_years(p in 1.0..1.0e7, r in 0.1..30.0, n in 1u32..30) {
        let t = f64::from(n);
        let ci = compound_interest(p, r, t, 1).unwrap();
        let si = simple_interest(p, r, t).unwrap();
        prop_assert!(ci.amount >= si.total * (1.0 - 1e-12));
    }
}

// =============================================================================
// SAVINGS
// =============================================================================

proptest! {
    #[test]
    fn fixed_deposit_is_quarterly_compound_interest(p in amount(), r in rate(), t in years()) {
        let fd = fixed_deposit(p, r, t).unwrap();
        let ci = compound_interest(p, r, t, FD_COMPOUNDING).unwrap();
        prop_assert_eq!(fd.to_bits(), ci.amount.to_bits());
    }

    #[test]
    fn ppf_is_annual_compound_interest_at_fixed_rate(x in amount(), t in years()) {
        let maturity = ppf(x, t).unwrap();
        let ci = compound_interest(x, PPF_RATE, t, PPF_COMPOUNDING).unwrap();
        prop_assert_eq!(maturity.to_bits(), ci.amount.to_bits());
    }

    #[test]
    fn nps_compounds_a_year_of_contributions(m in 0.0..1.0e6, r in rate(), t in years()) {
        let maturity = nps(m, r, t).unwrap();
        let ci = compound_interest(m * 12.0, r, t, NPS_COMPOUNDING).unwrap();
        prop_assert_eq!(maturity.to_bits(), ci.amount.to_bits());
    }

    #[test]
    fn recurring_deposit_at_least_sum_of_deposits(d in 0.0..1.0e6, r in rate(), t in years()) {
        let maturity = recurring_deposit(d, r, t).unwrap();
        prop_assert!(maturity >= d * t * 12.0 * (1.0 - 1e-9));
    }
}

// =============================================================================
// TAX, RETAIL, LOANS
// =============================================================================

proptest! {
    #[test]
    fn short_holdings_are_untaxed(s in amount(), c in amount(), h in 0.0..1.0) {
        let result = ltcg(s, c, h).unwrap();
        prop_assert_eq!(result.gain, 0.0);
        prop_assert_eq!(result.tax, 0.0);
    }

    #[test]
    fn ltcg_tax_only_above_exemption(s in amount(), c in amount(), h in 1.0..30.0) {
        let result = ltcg(s, c, h).unwrap();
        prop_assert!(result.tax >= 0.0);
        if result.gain <= LTCG_EXEMPTION {
            prop_assert_eq!(result.tax, 0.0);
        } else {
            prop_assert!(result.tax < result.gain);
        }
    }

    #[test]
    fn gst_total_is_amount_plus_tax(a in amount(), r in 0.0..40.0) {
        let g = gst(a, r).unwrap();
        prop_assert_eq!(g.total, a + g.gst_amount);
    }

    #[test]
    fn discount_parts_sum_to_price(p in amount(), pct in 0.0..100.0) {
        let d = discount(p, pct).unwrap();
        prop_assert!(close(d.discount_amount + d.final_price, p, 1e-12));
        prop_assert!(d.final_price >= 0.0);
    }

    #[test]
    fn down_payment_parts_sum_to_price(p in amount(), pct in 0.0..100.0) {
        let dp = down_payment(p, pct).unwrap();
        prop_assert!(close(dp.down_payment + dp.loan_amount, p, 1e-12));
    }

    #[test]
    fn emi_total_is_installments(p in 1_000.0..1.0e8, r in rate(), n in 1u32..30) {
        let t = f64::from(n);
        let loan = emi(p, r, t).unwrap();
        prop_assert_eq!(loan.total_amount, loan.emi * (t * 12.0));
        prop_assert_eq!(loan.total_interest, loan.total_amount - p);
        let paise = loan.emi * 100.0;
        prop_assert!((paise - paise.round()).abs() < 1e-6);
    }

    #[test]
    fn cagr_recovers_final_value(i in 1.0..1.0e7, f in 1.0..1.0e7, t in 0.5..40.0) {
        let rate = cagr(i, f, t).unwrap();
        let grown = i * (1.0 + rate / 100.0).powf(t);
        prop_assert!(close(grown, f, 1e-9));
    }
}

// =============================================================================
// DETERMINISM
// =============================================================================

proptest! {
    #[test]
    fn formulas_are_deterministic(p in amount(), r in rate(), t in 0.1..40.0) {
        let first = (
            compound_interest(p, r, t, 4).unwrap(),
            recurring_deposit(p, r, t).unwrap(),
            emi(p, r, t).unwrap(),
        );
        let second = (
            compound_interest(p, r, t, 4).unwrap(),
            recurring_deposit(p, r, t).unwrap(),
            emi(p, r, t).unwrap(),
        );
        prop_assert_eq!(first.0.amount.to_bits(), second.0.amount.to_bits());
        prop_assert_eq!(first.1.to_bits(), second.1.to_bits());
        prop_assert_eq!(first.2, second.2);
    }
}
