//! Golden-value tests for solar times against published almanac values.
//!
//! Reference times are from the NOAA solar calculator, rounded to the
//! minute; the low-precision equations agree to within a few minutes.

use arc_solar::{Observer, SolarError, day_of_year, fractional_year, solar_declination, sun_times};

const DEG: f64 = 180.0 / std::f64::consts::PI;

fn hm(hours: u32, minutes: u32) -> f64 {
    f64::from(hours * 60 + minutes)
}

#[test]
fn london_midsummer() {
    // 2023-06-21, Greenwich: sunrise 03:43 UTC, sunset 20:21 UTC
    let doy = day_of_year(2023, 6, 21).unwrap();
    let t = sun_times(Observer::new(51.4769, -0.0005), 2023, doy).unwrap();
    assert!(
        (t.sunrise_min - hm(3, 43)).abs() < 3.0,
        "sunrise = {} min",
        t.sunrise_min
    );
    assert!(
        (t.sunset_min - hm(20, 21)).abs() < 3.0,
        "sunset = {} min",
        t.sunset_min
    );
}

#[test]
fn london_midwinter() {
    // 2023-12-21, Greenwich: sunrise 08:04 UTC, solar noon 11:58, sunset 15:53 UTC
    let doy = day_of_year(2023, 12, 21).unwrap();
    let t = sun_times(Observer::new(51.4769, -0.0005), 2023, doy).unwrap();
    assert!((t.sunrise_min - hm(8, 4)).abs() < 3.0, "sunrise = {}", t.sunrise_min);
    assert!((t.solar_noon_min - hm(11, 58)).abs() < 2.0, "noon = {}", t.solar_noon_min);
    assert!((t.sunset_min - hm(15, 53)).abs() < 3.0, "sunset = {}", t.sunset_min);
}

#[test]
fn southern_hemisphere_has_long_december_days() {
    let doy = day_of_year(2023, 12, 21).unwrap();
    let sydney = sun_times(Observer::new(-33.87, 151.21), 2023, doy).unwrap();
    let london = sun_times(Observer::new(51.48, 0.0), 2023, doy).unwrap();
    assert!(sydney.day_length_min() > 14.0 * 60.0);
    assert!(london.day_length_min() < 8.0 * 60.0);
}

#[test]
fn declination_tracks_the_seasons() {
    let decl = |m, d| {
        let doy = day_of_year(2023, m, d).unwrap();
        solar_declination(fractional_year(2023, doy, 12.0)) * DEG
    };
    assert!((decl(6, 21) - 23.44).abs() < 0.1);
    assert!((decl(12, 21) + 23.44).abs() < 0.1);
    assert!(decl(3, 20).abs() < 0.5);
    assert!(decl(9, 23).abs() < 0.5);
}

#[test]
fn tromso_polar_night_and_midnight_sun() {
    let tromso = Observer::new(69.65, 18.96);
    let winter = day_of_year(2023, 12, 21).unwrap();
    let summer = day_of_year(2023, 6, 21).unwrap();
    assert_eq!(sun_times(tromso, 2023, winter), Err(SolarError::NoSunrise));
    assert_eq!(sun_times(tromso, 2023, summer), Err(SolarError::NoSunset));
}
