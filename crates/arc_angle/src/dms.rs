//! Decimal degrees ↔ degrees-minutes-seconds.
//!
//! Integer degrees cannot carry the sign of an angle like -0° 20′, so the
//! sign is moved onto the most significant non-zero component and
//! [`Dms::negative_at_zero`] records that it happened.

use arc_math::{MINUTES_PER_DEGREE, SECONDS_PER_DEGREE, SECONDS_PER_MINUTE};

/// Degrees, arc-minutes and arc-seconds of a decimal-degree value.
///
/// At most one component is negative: degrees if non-zero, else minutes
/// if non-zero, else seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees.
    pub degrees: i64,
    /// Whole arc-minutes, magnitude in 0..60.
    pub minutes: i32,
    /// Arc-seconds with fractional part, magnitude in [0, 60).
    pub seconds: f64,
    /// The source value was negative but `degrees` truncated to 0.
    pub negative_at_zero: bool,
}

impl Dms {
    /// Whether the decomposed value was negative.
    pub fn is_negative(&self) -> bool {
        self.degrees < 0 || self.negative_at_zero
    }

    /// Unsigned `(degrees, minutes, seconds)`.
    pub fn magnitudes(&self) -> (i64, i32, f64) {
        (self.degrees.abs(), self.minutes.abs(), self.seconds.abs())
    }

    /// Decimal degrees represented by this triple.
    pub fn to_degrees(&self) -> f64 {
        let (d, m, s) = self.magnitudes();
        let magnitude = recompose(d, m, s);
        if self.is_negative() { -magnitude } else { magnitude }
    }
}

/// Split decimal degrees into a [`Dms`] triple.
///
/// Degrees and minutes are truncated toward zero; seconds keep the
/// remaining fraction.
pub fn decompose(decimal_degrees: f64) -> Dms {
    let negative = decimal_degrees < 0.0;
    let value = decimal_degrees.abs();

    let mut degrees = value.trunc() as i64;
    let remainder = (value - degrees as f64) * MINUTES_PER_DEGREE;
    let mut minutes = remainder.trunc() as i32;
    let mut seconds = (remainder - minutes as f64) * SECONDS_PER_MINUTE;

    let negative_at_zero = negative && degrees == 0;
    if negative {
        if degrees != 0 {
            degrees = -degrees;
        } else if minutes != 0 {
            minutes = -minutes;
        } else {
            seconds = -seconds;
        }
    }

    Dms {
        degrees,
        minutes,
        seconds,
        negative_at_zero,
    }
}

/// Join degrees, minutes and seconds into decimal degrees.
///
/// The result is negative when the first non-zero component is negative;
/// signs on later components are ignored. Components of 60 or more are
/// accepted and simply added.
pub fn recompose(degrees: i64, minutes: i32, seconds: f64) -> f64 {
    let negative = degrees < 0
        || (degrees == 0 && minutes < 0)
        || (degrees == 0 && minutes == 0 && seconds < 0.0);
    let magnitude = degrees.unsigned_abs() as f64
        + minutes.unsigned_abs() as f64 / MINUTES_PER_DEGREE
        + seconds.abs() / SECONDS_PER_DEGREE;
    if negative { -magnitude } else { magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_positive() {
        let d = decompose(15.5);
        assert_eq!(d.degrees, 15);
        assert_eq!(d.minutes, 30);
        assert!(d.seconds.abs() < 1e-9);
        assert!(!d.negative_at_zero);
    }

    #[test]
    fn decompose_negative_carries_sign_on_degrees() {
        let d = decompose(-8.15278);
        assert_eq!(d.degrees, -8);
        assert_eq!(d.minutes, 9);
        assert!((d.seconds - 10.008).abs() < 1e-6, "seconds = {}", d.seconds);
        assert!(!d.negative_at_zero);
    }

    #[test]
    fn decompose_small_negative_carries_sign_on_minutes() {
        let d = decompose(-0.3456);
        assert_eq!(d.degrees, 0);
        assert_eq!(d.minutes, -20);
        assert!((d.seconds - 44.16).abs() < 1e-6, "seconds = {}", d.seconds);
        assert!(d.negative_at_zero);
    }

    #[test]
    fn decompose_tiny_negative_carries_sign_on_seconds() {
        let d = decompose(-0.005);
        assert_eq!(d.degrees, 0);
        assert_eq!(d.minutes, 0);
        assert!((d.seconds + 18.0).abs() < 1e-9, "seconds = {}", d.seconds);
        assert!(d.negative_at_zero);
    }

    #[test]
    fn decompose_zero() {
        let d = decompose(0.0);
        assert_eq!((d.degrees, d.minutes), (0, 0));
        assert_eq!(d.seconds, 0.0);
        assert!(!d.is_negative());
    }

    #[test]
    fn recompose_sign_rules() {
        assert!((recompose(15, 30, 0.0) - 15.5).abs() < 1e-12);
        assert!((recompose(-8, 9, 10.0) + 8.152_777_777_8).abs() < 1e-9);
        assert!((recompose(0, 1, 0.0) - 1.0 / 60.0).abs() < 1e-12);
        assert!((recompose(0, -5, 0.0) + 5.0 / 60.0).abs() < 1e-12);
        assert!((recompose(0, 0, -36.0) + 0.01).abs() < 1e-12);
    }

    #[test]
    fn recompose_ignores_signs_below_first_nonzero() {
        assert_eq!(recompose(-1, -30, 0.0), recompose(-1, 30, 0.0));
        assert_eq!(recompose(0, 30, -36.0), recompose(0, 30, 36.0));
    }

    #[test]
    fn recompose_accepts_out_of_range_components() {
        assert!((recompose(1, 90, 0.0) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn dms_to_degrees_roundtrip() {
        for v in [0.0, 23.853, -23.853, -0.3456, -0.0001, 359.999_999, -1000.25] {
            let back = decompose(v).to_degrees();
            assert!((back - v).abs() < 1e-9, "{v} -> {back}");
        }
    }
}
