//! Low-precision solar position and sunrise/sunset times.
//!
//! This crate provides:
//! - Gregorian leap-year and day-of-year helpers
//! - The NOAA general solar position equations (fractional year, equation
//!   of time, declination, hour angle, zenith, azimuth)
//! - Sunrise, solar noon and sunset in UTC minutes for a given observer
//!
//! Inputs and outputs are plain `f64` degrees, radians or minutes; the
//! crate has no notion of formatted angles.

pub mod calendar;
pub mod error;
pub mod position;
pub mod sun_times;

pub use calendar::{day_of_year, days_in_month, days_in_year, is_leap_year, validate_day_of_year};
pub use error::SolarError;
pub use position::{
    equation_of_time, fractional_year, solar_azimuth, solar_declination, solar_hour_angle,
    solar_zenith_angle, time_offset, true_solar_time,
};
pub use sun_times::{
    Observer, SUNRISE_ZENITH_DEG, SunTimes, solar_noon, sun_times, sunrise,
    sunrise_sunset_hour_angle, sunset,
};
