//! Angular and physical constants.

/// π.
pub const PI: f64 = std::f64::consts::PI;

/// 2π.
pub const TWO_PI: f64 = 2.0 * PI;

/// Radians per degree.
pub const RAD: f64 = PI / 180.0;

/// Degrees per radian.
pub const DEG: f64 = 180.0 / PI;

/// Arc-seconds per radian.
pub const ARCS: f64 = 3600.0 * 180.0 / PI;

/// Astronomical unit in km (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Speed of light in km/s.
pub const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;

/// Arc-minutes per degree.
pub const MINUTES_PER_DEGREE: f64 = 60.0;

/// Arc-seconds per arc-minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Arc-seconds per degree.
pub const SECONDS_PER_DEGREE: f64 = 3600.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rad_deg_are_reciprocal() {
        assert!((RAD * DEG - 1.0).abs() < 1e-15);
    }

    #[test]
    fn arcseconds_per_radian() {
        assert!((ARCS - 206_264.806_247_096_36).abs() < 1e-6);
    }
}
