//! Compounding frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How often interest is added to principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Compounding {
    /// Annual compounding (1x per year)
    #[default]
    Annual,
    /// Semi-annual compounding (2x per year)
    SemiAnnual,
    /// Quarterly compounding (4x per year) - bank fixed deposits
    Quarterly,
    /// Monthly compounding (12x per year)
    Monthly,
    /// Daily compounding (365x per year)
    Daily,
}

impl Compounding {
    /// Returns the number of compounding periods per year.
    #[must_use]
    pub const fn periods_per_year(self) -> u32 {
        match self {
            Compounding::Annual => 1,
            Compounding::SemiAnnual => 2,
            Compounding::Quarterly => 4,
            Compounding::Monthly => 12,
            Compounding::Daily => 365,
        }
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compounding::Annual => "Annual",
            Compounding::SemiAnnual => "Semi-Annual",
            Compounding::Quarterly => "Quarterly",
            Compounding::Monthly => "Monthly",
            Compounding::Daily => "Daily",
        };
        write!(f, "{name}")
    }
}

impl From<Compounding> for u32 {
    fn from(compounding: Compounding) -> Self {
        compounding.periods_per_year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compounding_periods() {
        assert_eq!(Compounding::Annual.periods_per_year(), 1);
        assert_eq!(Compounding::Quarterly.periods_per_year(), 4);
        assert_eq!(Compounding::Monthly.periods_per_year(), 12);
        assert_eq!(Compounding::Daily.periods_per_year(), 365);
    }

    #[test]
    fn test_default_is_annual() {
        assert_eq!(Compounding::default(), Compounding::Annual);
        assert_eq!(Compounding::SemiAnnual.to_string(), "Semi-Annual");
    }
}
