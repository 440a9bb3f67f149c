//! NOAA general solar position equations.
//!
//! Accuracy is about one minute of time for the equation of time and a
//! few hundredths of a degree for the declination, which is enough for
//! sunrise/sunset tables. Angles of latitude and hour angle are taken in
//! degrees; the fractional year, declination and zenith are in radians.

use arc_math::{DEG, RAD, TWO_PI};

use crate::calendar::days_in_year;

/// Fractional year γ in radians for `day_of_year` (1-based) at `hour` UTC.
pub fn fractional_year(year: i32, day_of_year: u32, hour: f64) -> f64 {
    let days = f64::from(days_in_year(year));
    let zero_based = f64::from(day_of_year) - 1.0;
    TWO_PI / days * (zero_based + (hour - 12.0) / 24.0)
}

/// Equation of time in minutes.
pub fn equation_of_time(gamma: f64) -> f64 {
    229.18
        * (0.000_075 + 0.001_868 * gamma.cos()
            - 0.032_077 * gamma.sin()
            - 0.014_615 * (2.0 * gamma).cos()
            - 0.040_849 * (2.0 * gamma).sin())
}

/// Solar declination in radians.
pub fn solar_declination(gamma: f64) -> f64 {
    0.006_918 - 0.399_912 * gamma.cos() + 0.070_257 * gamma.sin()
        - 0.006_758 * (2.0 * gamma).cos()
        + 0.000_907 * (2.0 * gamma).sin()
        - 0.002_697 * (3.0 * gamma).cos()
        + 0.001_48 * (3.0 * gamma).sin()
}

/// Time offset in minutes for an observer at `longitude_deg` (east
/// positive) keeping clock time `timezone_h` hours from UTC.
pub fn time_offset(eqtime_min: f64, longitude_deg: f64, timezone_h: f64) -> f64 {
    eqtime_min + 4.0 * longitude_deg - 60.0 * timezone_h
}

/// True solar time in minutes for a local clock reading.
pub fn true_solar_time(hour: u32, minute: u32, second: u32, offset_min: f64) -> f64 {
    f64::from(hour * 60 + minute) + f64::from(second) / 60.0 + offset_min
}

/// Solar hour angle in degrees; zero at true solar noon.
pub fn solar_hour_angle(true_solar_time_min: f64) -> f64 {
    true_solar_time_min / 4.0 - 180.0
}

/// Solar zenith angle in radians.
pub fn solar_zenith_angle(latitude_deg: f64, declination: f64, hour_angle_deg: f64) -> f64 {
    let lat = latitude_deg * RAD;
    let cos_zenith =
        lat.sin() * declination.sin() + lat.cos() * declination.cos() * (hour_angle_deg * RAD).cos();
    cos_zenith.clamp(-1.0, 1.0).acos()
}

/// Angular distance of the Sun from due south along the horizon, in
/// degrees within [0, 180].
///
/// Morning and afternoon positions are not distinguished; the sign of the
/// hour angle tells them apart.
pub fn solar_azimuth(latitude_deg: f64, declination: f64, zenith: f64) -> f64 {
    let lat = latitude_deg * RAD;
    let cos_az = (lat.sin() * zenith.cos() - declination.sin()) / (lat.cos() * zenith.sin());
    cos_az.clamp(-1.0, 1.0).acos() * DEG
}
