//! Rounding and display formatting for calculator results.
//!
//! Formulas compute in `f64`. Anything shown to a person goes through
//! [`rust_decimal`] first so that `2.675` rounds to `2.68` the way a cashier
//! would, rather than to the nearest binary neighbour.
//!
//! Currency defaults to Indian notation: the last three integer digits form
//! one group and the rest are grouped in pairs (`₹1,23,45,678.90`).

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder printed for values that cannot be formatted.
pub const NOT_A_NUMBER: &str = "—";

/// Indian rupee sign.
pub const RUPEE: &str = "₹";

/// Digit grouping style for the integer part of an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grouping {
    /// `12,34,567` - lakh/crore grouping.
    #[default]
    Indian,
    /// `1,234,567` - thousands grouping.
    International,
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grouping::Indian => write!(f, "indian"),
            Grouping::International => write!(f, "international"),
        }
    }
}

impl FromStr for Grouping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "indian" | "in" | "lakh" => Ok(Grouping::Indian),
            "international" | "intl" | "western" => Ok(Grouping::International),
            other => Err(format!("Invalid grouping: {other}. Use indian or international.")),
        }
    }
}

/// Rounds to `places` decimal digits, midpoint away from zero.
///
/// Returns `None` for non-finite values or magnitudes outside the decimal range.
pub fn round_decimal(value: f64, places: u32) -> Option<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
}

/// Rounds an `f64` to `places` decimal digits.
///
/// Values that cannot be represented as a decimal are returned unchanged.
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    round_decimal(value, places)
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Formats an amount with digit grouping and a fixed number of decimals.
///
/// ```
/// use fincalc_core::display::{format_grouped, Grouping};
///
/// assert_eq!(format_grouped(1234567.891, Grouping::Indian, 2), "12,34,567.89");
/// assert_eq!(format_grouped(1234567.891, Grouping::International, 2), "1,234,567.89");
/// ```
#[must_use]
pub fn format_grouped(amount: f64, grouping: Grouping, places: u32) -> String {
    match signed_digits(amount, grouping, places) {
        Some((true, digits)) => format!("-{digits}"),
        Some((false, digits)) => digits,
        None => NOT_A_NUMBER.to_string(),
    }
}

/// Formats a money amount with a currency symbol, e.g. `-₹1,500.00`.
#[must_use]
pub fn format_currency(amount: f64, symbol: &str, grouping: Grouping, places: u32) -> String {
    match signed_digits(amount, grouping, places) {
        Some((true, digits)) => format!("-{symbol}{digits}"),
        Some((false, digits)) => format!("{symbol}{digits}"),
        None => NOT_A_NUMBER.to_string(),
    }
}

/// Formats an amount in rupees with Indian grouping and two decimals.
///
/// ```
/// use fincalc_core::display::format_inr;
///
/// assert_eq!(format_inr(123456.789), "₹1,23,456.79");
/// ```
#[must_use]
pub fn format_inr(amount: f64) -> String {
    format_currency(amount, RUPEE, Grouping::Indian, 2)
}

/// Formats a percentage with two decimals, e.g. `14.87%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format_percent_with(value, 2)
}

/// Formats a percentage with the given number of decimals.
#[must_use]
pub fn format_percent_with(value: f64, places: u32) -> String {
    match round_decimal(value, places) {
        Some(d) => format!("{:.prec$}%", normalize_zero(d), prec = places as usize),
        None => NOT_A_NUMBER.to_string(),
    }
}

/// Rounds and groups, returning the sign separately so callers can place
/// the minus before a currency symbol.
fn signed_digits(amount: f64, grouping: Grouping, places: u32) -> Option<(bool, String)> {
    let rounded = normalize_zero(round_decimal(amount, places)?);
    let negative = rounded.is_sign_negative();
    let text = format!("{:.prec$}", rounded.abs(), prec = places as usize);

    let grouped = match text.split_once('.') {
        Some((int_part, frac_part)) => format!("{}.{}", group_digits(int_part, grouping), frac_part),
        None => group_digits(&text, grouping),
    };
    Some((negative, grouped))
}

/// `-0.00` prints as `0.00`.
fn normalize_zero(d: Decimal) -> Decimal {
    if d.is_zero() {
        Decimal::ZERO
    } else {
        d
    }
}

fn group_digits(digits: &str, grouping: Grouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let width = match grouping {
        Grouping::Indian => 2,
        Grouping::International => 3,
    };

    let mut groups = Vec::with_capacity(head.len() / width + 2);
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(width);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}
