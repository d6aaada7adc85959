// File: crates/chart-core/src/period.rs
// Summary: The fixed set of history windows a user can pick.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[default]
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "3Y")]
    ThreeYears,
    #[serde(rename = "5Y")]
    FiveYears,
    #[serde(rename = "ALL")]
    All,
}

impl Period {
    pub const ALL: [Period; 7] = [
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::OneYear,
        Period::ThreeYears,
        Period::FiveYears,
        Period::All,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Period::OneMonth => "1M",
            Period::ThreeMonths => "3M",
            Period::SixMonths => "6M",
            Period::OneYear => "1Y",
            Period::ThreeYears => "3Y",
            Period::FiveYears => "5Y",
            Period::All => "ALL",
        }
    }

    /// Nominal span in days. `All` is capped at five years.
    pub fn days(&self) -> u32 {
        match self {
            Period::OneMonth => 30,
            Period::ThreeMonths => 90,
            Period::SixMonths => 180,
            Period::OneYear => 365,
            Period::ThreeYears => 365 * 3,
            Period::FiveYears | Period::All => 365 * 5,
        }
    }

    /// Short windows label the x axis by day, longer ones by month.
    pub fn is_short(&self) -> bool {
        matches!(self, Period::OneMonth)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown period '{0}' (expected one of 1M, 3M, 6M, 1Y, 3Y, 5Y, ALL)")]
pub struct ParsePeriodError(pub String);

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Period::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(t))
            .ok_or_else(|| ParsePeriodError(t.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("1m".parse::<Period>().unwrap(), Period::OneMonth);
        assert_eq!(" all ".parse::<Period>().unwrap(), Period::All);
        assert!("2W".parse::<Period>().is_err());
    }

    #[test]
    fn labels_roundtrip_through_display() {
        for p in Period::ALL {
            assert_eq!(p.to_string().parse::<Period>().unwrap(), p);
        }
        assert_eq!(Period::default(), Period::OneYear);
    }
}
