//! Date-range formats implied by a resolved frequency term.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::error::ConfigError;

static YEAR_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{4}$").expect("valid year-range regex"));

static YEAR_MONTH_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6}-\d{6}$").expect("valid year-month-range regex"));

/// Digit layout of one side of a `<date>-<date>` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// 4-digit year (`yyyy`).
    Year,
    /// 4-digit year + 2-digit month (`yyyyMM`).
    YearMonth,
}

impl DateFormat {
    /// Derive the format from a canonical frequency term name.
    ///
    /// Only the yearly and monthly buckets have a defined layout; any other
    /// frequency paired with a date range is rejected outright rather than
    /// guessed.
    pub fn for_frequency(frequency: &str) -> Result<Self, ConfigError> {
        match frequency {
            "yr" | "decadal" => Ok(DateFormat::Year),
            "mon" | "monclim" => Ok(DateFormat::YearMonth),
            other => {
                warn!(frequency = other, "no date-range format for frequency");
                Err(ConfigError::UnsupportedFrequency {
                    frequency: other.to_string(),
                })
            }
        }
    }

    /// Human-readable pattern, used in error messages.
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::Year => "yyyy-yyyy",
            DateFormat::YearMonth => "yyyyMM-yyyyMM",
        }
    }

    /// Whether `value` is a well-formed `<date>-<date>` range in this format.
    pub fn matches_range(self, value: &str) -> bool {
        match self {
            DateFormat::Year => YEAR_RANGE.is_match(value),
            DateFormat::YearMonth => YEAR_MONTH_RANGE.is_match(value),
        }
    }
}
