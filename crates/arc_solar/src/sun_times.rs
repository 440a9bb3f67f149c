//! Sunrise, solar noon and sunset in UTC minutes.
//!
//! The horizon crossing uses a zenith of 90.833°: 34′ of refraction plus
//! the 16′ solar semidiameter. Declination and equation of time are
//! evaluated once at noon, so results are good to a minute or two.

use arc_math::{DEG, RAD};
use tracing::debug;

use crate::calendar::validate_day_of_year;
use crate::error::SolarError;
use crate::position::{equation_of_time, fractional_year, solar_declination};

/// Zenith angle of the Sun's center at apparent sunrise/sunset, in degrees.
pub const SUNRISE_ZENITH_DEG: f64 = 90.833;

/// Geographic position of an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    /// Latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl Observer {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }
}

/// Times of one day's solar events, in minutes after 00:00 UTC.
///
/// Values can fall outside [0, 1440) for observers far from Greenwich.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    pub sunrise_min: f64,
    pub solar_noon_min: f64,
    pub sunset_min: f64,
}

impl SunTimes {
    pub fn day_length_min(&self) -> f64 {
        self.sunset_min - self.sunrise_min
    }
}

fn sunrise_hour_angle_cos(latitude_deg: f64, declination: f64) -> f64 {
    let lat = latitude_deg * RAD;
    (SUNRISE_ZENITH_DEG * RAD).cos() / (lat.cos() * declination.cos()) - lat.tan() * declination.tan()
}

/// Hour angle of sunrise in degrees (the negative is sunset's).
///
/// Returns NaN when the Sun does not cross the horizon; [`sun_times`]
/// reports that case as an error instead.
pub fn sunrise_sunset_hour_angle(latitude_deg: f64, declination: f64) -> f64 {
    sunrise_hour_angle_cos(latitude_deg, declination).acos() * DEG
}

/// UTC minutes of sunrise.
pub fn sunrise(longitude_deg: f64, hour_angle_deg: f64, eqtime_min: f64) -> f64 {
    720.0 - 4.0 * (longitude_deg + hour_angle_deg) - eqtime_min
}

/// UTC minutes of sunset.
pub fn sunset(longitude_deg: f64, hour_angle_deg: f64, eqtime_min: f64) -> f64 {
    720.0 - 4.0 * (longitude_deg - hour_angle_deg) - eqtime_min
}

/// UTC minutes of solar noon.
pub fn solar_noon(longitude_deg: f64, eqtime_min: f64) -> f64 {
    720.0 - 4.0 * longitude_deg - eqtime_min
}

/// Sunrise, solar noon and sunset for `observer` on `day_of_year`.
///
/// # Errors
/// * [`SolarError::InvalidDayOfYear`] if the day is outside the year
/// * [`SolarError::NoSunrise`] during polar night
/// * [`SolarError::NoSunset`] during midnight sun
pub fn sun_times(observer: Observer, year: i32, day_of_year: u32) -> Result<SunTimes, SolarError> {
    validate_day_of_year(year, day_of_year)?;

    let gamma = fractional_year(year, day_of_year, 12.0);
    let eqtime = equation_of_time(gamma);
    let decl = solar_declination(gamma);

    let cos_ha = sunrise_hour_angle_cos(observer.latitude_deg, decl);
    if cos_ha > 1.0 {
        debug!(?observer, year, day_of_year, cos_ha, "sun stays below horizon");
        return Err(SolarError::NoSunrise);
    }
    if cos_ha < -1.0 {
        debug!(?observer, year, day_of_year, cos_ha, "sun stays above horizon");
        return Err(SolarError::NoSunset);
    }
    let ha = cos_ha.acos() * DEG;

    Ok(SunTimes {
        sunrise_min: sunrise(observer.longitude_deg, ha, eqtime),
        solar_noon_min: solar_noon(observer.longitude_deg, eqtime),
        sunset_min: sunset(observer.longitude_deg, ha, eqtime),
    })
}
