//! Error types for solar calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar validation or sunrise/sunset computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolarError {
    /// Month or day outside the Gregorian calendar for that year.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Day of year outside 1..=365 (366 in leap years).
    InvalidDayOfYear { year: i32, day: u32 },
    /// The Sun stays below the horizon all day (polar night).
    NoSunrise,
    /// The Sun stays above the horizon all day (midnight sun).
    NoSunset,
}

impl Display for SolarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidDayOfYear { year, day } => {
                write!(f, "invalid day of year {day} for {year}")
            }
            Self::NoSunrise => write!(f, "sun does not rise on this day (polar night)"),
            Self::NoSunset => write!(f, "sun does not set on this day (midnight sun)"),
        }
    }
}

impl Error for SolarError {}
