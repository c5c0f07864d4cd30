//! Error types for TT/UTC instant construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing a calendar date or constructing an instant.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// `dateYmd` could not be parsed as a proleptic-Gregorian `YYYY-MM-DD`
    /// date, or names a day that does not exist in that month/year.
    InvalidDate(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid calendar date: {s}"),
        }
    }
}

impl Error for TimeError {}
