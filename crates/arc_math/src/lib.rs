//! Numeric building blocks shared by the arc angle toolkit.
//!
//! This crate provides:
//! - Physical and angular constants
//! - Degree ↔ radian conversion and [0, 360) normalization
//! - Small floating-point helpers (`frac`, `modulo`, `dms_sign`)
//! - 2D and 3D vector algebra with polar, cylindrical and spherical conversions
//!
//! Everything here is a pure `f64 -> f64` function or a plain value type.

pub mod constants;
pub mod units;
pub mod vector;

pub use constants::{
    ARCS, AU_KM, DEG, MINUTES_PER_DEGREE, PI, RAD, SECONDS_PER_DEGREE, SECONDS_PER_MINUTE,
    SPEED_OF_LIGHT_KM_S, TWO_PI,
};
pub use units::{degrees_to_radians, dms_sign, frac, modulo, normalize_degrees, radians_to_degrees};
pub use vector::{Vector2, Vector3};
