//! Sexagesimal angles: representation, conversion, formatting and parsing.
//!
//! This crate provides:
//! - [`Angle`], a decimal-degree value tagged with one of five display formats
//! - Degrees-minutes-seconds decomposition that keeps the sign of angles
//!   between -1° and 0° ([`decompose`], [`recompose`])
//! - Plain, width-padded rendering ([`format_angle`], [`AngleFormatter`])
//!   and symbol rendering via `Display`
//! - A strict parser that infers the format from the input ([`parse`])
//!
//! Every plain rendering parses back to the same format and, within the
//! printed precision, the same value.

pub mod angle;
pub mod dms;
pub mod error;
pub mod format;
pub mod parse;
pub mod validate;

pub use angle::{Angle, AngleFormat, UnknownFormat};
pub use dms::{Dms, decompose, recompose};
pub use error::{Component, ParseError, ParseErrorKind, RangeError};
pub use format::{AngleFormatter, DEFAULT_PRECISION, DEFAULT_WIDTH, FormatOptions, format_angle};
pub use parse::{MAX_COMPONENTS, is_valid_char, parse};
pub use validate::{SEXAGESIMAL_LIMIT, validate_minutes, validate_seconds};
