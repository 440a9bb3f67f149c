//! Unit conversions and small floating-point helpers.

use crate::constants::{DEG, RAD};

/// Convert degrees to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * RAD
}

/// Convert radians to degrees.
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * DEG
}

/// Normalize an angle to [0, 360) degrees.
///
/// Uses a floored remainder so negative inputs wrap from the top:
/// `-450` becomes `270`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    degrees - 360.0 * (degrees / 360.0).floor()
}

/// Fractional part of `x`, always in [0, 1).
///
/// `frac(-1.25) == 0.75`, unlike `f64::fract` which keeps the sign.
pub fn frac(x: f64) -> f64 {
    x - x.floor()
}

/// Floored remainder of `x / y`; the result takes the sign of `y`.
pub fn modulo(x: f64, y: f64) -> f64 {
    x - y * (x / y).floor()
}

/// Sign of a degrees/minutes/seconds triple: -1.0 if any component is
/// negative, otherwise 1.0.
pub fn dms_sign(degrees: i64, minutes: i32, seconds: f64) -> f64 {
    if degrees < 0 || minutes < 0 || seconds < 0.0 {
        -1.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn degrees_to_radians_quarter_turns() {
        let cases = [(0.0, 0.0), (90.0, PI / 2.0), (180.0, PI), (360.0, 2.0 * PI), (-90.0, -PI / 2.0)];
        for (deg, rad) in cases {
            assert!((degrees_to_radians(deg) - rad).abs() < 1e-15, "{deg} deg");
        }
    }

    #[test]
    fn radians_to_degrees_quarter_turns() {
        let cases = [(0.0, 0.0), (PI / 2.0, 90.0), (PI, 180.0), (2.0 * PI, 360.0), (-PI / 2.0, -90.0)];
        for (rad, deg) in cases {
            assert!((radians_to_degrees(rad) - deg).abs() < 1e-12, "{rad} rad");
        }
    }

    #[test]
    fn normalize_degrees_table() {
        let cases = [
            (0.0, 0.0),
            (360.0, 0.0),
            (720.0, 0.0),
            (-360.0, 0.0),
            (450.0, 90.0),
            (-450.0, 270.0),
            (1080.0, 0.0),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_degrees(input), expected, "normalize {input}");
        }
    }

    #[test]
    fn frac_is_non_negative() {
        assert!((frac(1.25) - 0.25).abs() < 1e-15);
        assert!((frac(-1.25) - 0.75).abs() < 1e-15);
        assert_eq!(frac(3.0), 0.0);
    }

    #[test]
    fn modulo_follows_divisor_sign() {
        assert!((modulo(7.0, 3.0) - 1.0).abs() < 1e-15);
        assert!((modulo(-7.0, 3.0) - 2.0).abs() < 1e-15);
        assert!((modulo(7.0, -3.0) + 2.0).abs() < 1e-15);
    }

    #[test]
    fn dms_sign_any_negative_component() {
        assert_eq!(dms_sign(12, 30, 0.0), 1.0);
        assert_eq!(dms_sign(-12, 30, 0.0), -1.0);
        assert_eq!(dms_sign(0, -5, 0.0), -1.0);
        assert_eq!(dms_sign(0, 0, -0.5), -1.0);
    }
}
