//! The [`Angle`] value type and its display format tag.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use arc_math::{degrees_to_radians, normalize_degrees, radians_to_degrees};

use crate::dms::{Dms, decompose};
use crate::error::ParseError;
use crate::format::{Skin, render};
use crate::parse::parse;

/// How an angle is laid out as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleFormat {
    /// Decimal degrees: `12.35`.
    #[default]
    Decimal,
    /// Degrees and whole arc-minutes: `12 20`.
    DegMin,
    /// Degrees and fractional arc-minutes: `12 20.74`.
    DegMinFrac,
    /// Degrees, arc-minutes and whole arc-seconds: `12 20 44`.
    DegMinSec,
    /// Degrees, arc-minutes and fractional arc-seconds: `12 20 44.16`.
    DegMinSecFrac,
}

impl AngleFormat {
    /// All formats in display order.
    pub const ALL: [AngleFormat; 5] = [
        Self::Decimal,
        Self::DegMin,
        Self::DegMinFrac,
        Self::DegMinSec,
        Self::DegMinSecFrac,
    ];

    /// Short code: `Dd`, `DMM`, `DMMm`, `DMMSS` or `DMMSSs`.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Decimal => "Dd",
            Self::DegMin => "DMM",
            Self::DegMinFrac => "DMMm",
            Self::DegMinSec => "DMMSS",
            Self::DegMinSecFrac => "DMMSSs",
        }
    }

    /// Whether the last field carries decimal places.
    pub const fn is_fractional(self) -> bool {
        matches!(
            self,
            Self::Decimal | Self::DegMinFrac | Self::DegMinSecFrac
        )
    }

    /// Number of whitespace-separated fields in the plain rendering.
    pub const fn field_count(self) -> usize {
        match self {
            Self::Decimal => 1,
            Self::DegMin | Self::DegMinFrac => 2,
            Self::DegMinSec | Self::DegMinSecFrac => 3,
        }
    }
}

impl Display for AngleFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Unrecognised format name passed to [`AngleFormat::from_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl Display for UnknownFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown angle format '{}' (expected dd, dmm, dmmm, dmmss or dmmsss)",
            self.0
        )
    }
}

impl Error for UnknownFormat {}

impl FromStr for AngleFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dd" | "decimal" => Ok(Self::Decimal),
            "dmm" | "deg-min" => Ok(Self::DegMin),
            "dmmm" | "deg-min-frac" => Ok(Self::DegMinFrac),
            "dmmss" | "deg-min-sec" => Ok(Self::DegMinSec),
            "dmmsss" | "deg-min-sec-frac" => Ok(Self::DegMinSecFrac),
            _ => Err(UnknownFormat(s.to_owned())),
        }
    }
}

/// A decimal-degree magnitude paired with the format it is displayed in.
///
/// The magnitude is unrestricted; values beyond ±360° are kept as given
/// until [`Angle::normalized`] is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angle {
    degrees: f64,
    format: AngleFormat,
}

impl Angle {
    pub const fn new(degrees: f64, format: AngleFormat) -> Self {
        Self { degrees, format }
    }

    /// Angle in decimal degrees, displayed as [`AngleFormat::Decimal`].
    pub const fn from_degrees(degrees: f64) -> Self {
        Self::new(degrees, AngleFormat::Decimal)
    }

    pub fn from_radians(radians: f64) -> Self {
        Self::from_degrees(radians_to_degrees(radians))
    }

    pub const fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn radians(&self) -> f64 {
        degrees_to_radians(self.degrees)
    }

    pub const fn format(&self) -> AngleFormat {
        self.format
    }

    /// Same magnitude, different display format.
    pub const fn with_format(self, format: AngleFormat) -> Self {
        Self::new(self.degrees, format)
    }

    /// Magnitude wrapped into [0, 360); the format is kept.
    pub fn normalized(self) -> Self {
        Self::new(normalize_degrees(self.degrees), self.format)
    }

    pub fn dms(&self) -> Dms {
        decompose(self.degrees)
    }
}

/// Symbol notation: `-8°09'10.008"`.
///
/// Decimal degrees use 5 places, fractional minutes and seconds 3.
impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.degrees, self.format, None, Skin::Symbols))
    }
}

impl FromStr for Angle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_codes() {
        let codes: Vec<_> = AngleFormat::ALL.iter().map(|f| f.code()).collect();
        assert_eq!(codes, ["Dd", "DMM", "DMMm", "DMMSS", "DMMSSs"]);
    }

    #[test]
    fn format_from_str_accepts_codes_and_names() {
        assert_eq!("DMMSSs".parse(), Ok(AngleFormat::DegMinSecFrac));
        assert_eq!("deg-min".parse(), Ok(AngleFormat::DegMin));
        assert_eq!(" Dd ".parse(), Ok(AngleFormat::Decimal));
        assert!("hms".parse::<AngleFormat>().is_err());
    }

    #[test]
    fn default_format_is_decimal() {
        assert_eq!(Angle::from_degrees(15.5).format(), AngleFormat::Decimal);
        assert_eq!(AngleFormat::default(), AngleFormat::Decimal);
    }

    #[test]
    fn with_format_keeps_magnitude() {
        let a = Angle::new(15.5, AngleFormat::DegMinSec);
        let b = a.with_format(AngleFormat::default());
        assert_eq!(b.degrees(), 15.5);
        assert_eq!(b.format(), AngleFormat::Decimal);
        assert_eq!(a.format(), AngleFormat::DegMinSec);
    }

    #[test]
    fn radians_roundtrip() {
        let a = Angle::from_radians(std::f64::consts::FRAC_PI_2);
        assert!((a.degrees() - 90.0).abs() < 1e-12);
        assert!((a.radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn normalized_wraps_and_keeps_format() {
        let a = Angle::new(-450.0, AngleFormat::DegMin).normalized();
        assert_eq!(a.degrees(), 270.0);
        assert_eq!(a.format(), AngleFormat::DegMin);
    }

    #[test]
    fn fractional_formats() {
        assert!(AngleFormat::Decimal.is_fractional());
        assert!(!AngleFormat::DegMin.is_fractional());
        assert!(AngleFormat::DegMinFrac.is_fractional());
        assert!(!AngleFormat::DegMinSec.is_fractional());
        assert!(AngleFormat::DegMinSecFrac.is_fractional());
    }

    #[test]
    fn from_str_delegates_to_parser() {
        let a: Angle = "12 20".parse().unwrap();
        assert_eq!(a.format(), AngleFormat::DegMin);
        assert!("".parse::<Angle>().is_err());
    }
}
