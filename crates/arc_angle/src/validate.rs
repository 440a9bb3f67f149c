//! Range checks for sexagesimal components.

use crate::error::{Component, RangeError};

/// Exclusive upper bound on the magnitude of minutes and seconds.
pub const SEXAGESIMAL_LIMIT: u32 = 60;

/// Check that arc-minutes satisfy `|minutes| < 60`.
pub fn validate_minutes(minutes: f64) -> Result<(), RangeError> {
    check(Component::Minutes, minutes)
}

/// Check that arc-seconds satisfy `|seconds| < 60`.
pub fn validate_seconds(seconds: f64) -> Result<(), RangeError> {
    check(Component::Seconds, seconds)
}

fn check(component: Component, value: f64) -> Result<(), RangeError> {
    if value.abs() < f64::from(SEXAGESIMAL_LIMIT) {
        Ok(())
    } else {
        Err(RangeError {
            component,
            limit: SEXAGESIMAL_LIMIT,
            actual: value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_exclusive() {
        assert!(validate_minutes(59.999).is_ok());
        assert!(validate_minutes(60.0).is_err());
        assert!(validate_seconds(-59.5).is_ok());
        assert!(validate_seconds(-60.0).is_err());
    }

    #[test]
    fn error_reports_component_and_value() {
        let e = validate_seconds(75.0).unwrap_err();
        assert_eq!(e.component, Component::Seconds);
        assert_eq!(e.limit, 60);
        assert_eq!(e.actual, 75.0);
        assert_eq!(
            e.to_string(),
            "invalid seconds value: must be less than 60, got 75"
        );
    }

    #[test]
    fn nan_is_rejected() {
        assert!(validate_minutes(f64::NAN).is_err());
    }
}
