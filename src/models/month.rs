//! Month filter
//!
//! Restricts a view to one calendar month regardless of year, or shows
//! everything when set to `All`.

use chrono::Month;
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Label of the "no filter" option
pub const ALL_MONTHS: &str = "All";

/// Filter options in display order: `All` followed by the twelve months
pub const MONTH_OPTIONS: [&str; 13] = [
    ALL_MONTHS,
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Month(Month),
}

impl MonthFilter {
    /// Whether a calendar month passes the filter
    pub fn includes(&self, month: Month) -> bool {
        match self {
            Self::All => true,
            Self::Month(selected) => *selected == month,
        }
    }
}

impl From<Month> for MonthFilter {
    fn from(month: Month) -> Self {
        Self::Month(month)
    }
}

impl From<Option<Month>> for MonthFilter {
    fn from(month: Option<Month>) -> Self {
        month.map_or(Self::All, Self::Month)
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{}", ALL_MONTHS),
            Self::Month(month) => write!(f, "{}", month.name().to_uppercase()),
        }
    }
}

/// Case-insensitive: "All", "january", "JANUARY" and chrono's three-letter
/// abbreviations ("jan") are accepted.
impl FromStr for MonthFilter {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(ALL_MONTHS) {
            return Ok(Self::All);
        }

        s.parse::<Month>()
            .map(Self::Month)
            .map_err(|_| TrackerError::Parse(format!("Unknown month '{}'", s)))
    }
}
