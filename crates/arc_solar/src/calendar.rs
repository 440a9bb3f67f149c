//! Gregorian calendar helpers.

use crate::error::SolarError;

const CUMULATIVE_DAYS: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Number of days in `month` (1-12), or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return None,
    };
    Some(days)
}

/// 1-based day of year for a calendar date.
///
/// Fails with [`SolarError::InvalidDate`] for month 0/13+ or a day past
/// the end of the month.
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32, SolarError> {
    let invalid = || SolarError::InvalidDate { year, month, day };
    let max_day = days_in_month(year, month).ok_or_else(invalid)?;
    if day == 0 || day > max_day {
        return Err(invalid());
    }
    let leap = u32::from(month > 2 && is_leap_year(year));
    Ok(CUMULATIVE_DAYS[(month - 1) as usize] + leap + day)
}

/// Check `day` against the length of `year`.
pub fn validate_day_of_year(year: i32, day: u32) -> Result<(), SolarError> {
    if day == 0 || day > days_in_year(year) {
        Err(SolarError::InvalidDayOfYear { year, day })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2004));
        assert!(!is_leap_year(2001));
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2023), 365);
    }

    #[test]
    fn day_of_year_known_dates() {
        assert_eq!(day_of_year(2023, 1, 1), Ok(1));
        assert_eq!(day_of_year(2023, 2, 28), Ok(59));
        assert_eq!(day_of_year(2020, 2, 29), Ok(60));
        assert_eq!(day_of_year(2020, 3, 1), Ok(61));
        assert_eq!(day_of_year(2023, 6, 21), Ok(172));
        assert_eq!(day_of_year(2023, 12, 31), Ok(365));
        assert_eq!(day_of_year(2024, 12, 31), Ok(366));
    }

    #[test]
    fn day_of_year_rejects_bad_dates() {
        for (m, d) in [(2, 29), (0, 1), (13, 1), (4, 31), (1, 0)] {
            assert_eq!(
                day_of_year(2023, m, d),
                Err(SolarError::InvalidDate {
                    year: 2023,
                    month: m,
                    day: d
                })
            );
        }
    }

    #[test]
    fn day_of_year_bounds() {
        assert!(validate_day_of_year(2023, 365).is_ok());
        assert!(validate_day_of_year(2023, 366).is_err());
        assert!(validate_day_of_year(2024, 366).is_ok());
        assert!(validate_day_of_year(2024, 0).is_err());
    }
}
