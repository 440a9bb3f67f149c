//! Rendering decimal degrees as text.
//!
//! Two skins share one decomposition and sign-placement routine:
//!
//! ```text
//! Plain:    -8 9 10.01      0 -20 44.16      (configurable precision and width)
//! Symbols:  -8°09'10.008"   0°-20'44.160"    (Display for Angle)
//! ```
//!
//! The sign goes on the most significant non-zero field. For an angle like
//! -0° 20′ 44″ the degrees print as a bare `0` and the minutes carry the
//! minus sign.
//!
//! When a fractional last field would round up to `60` at the requested
//! precision, it is written as zero and the overflow is carried into the
//! next field, so every rendering parses back.

use std::fmt::{self, Display, Formatter};

use crate::angle::{Angle, AngleFormat};
use crate::dms::decompose;

/// Decimal places used when none are configured.
pub const DEFAULT_PRECISION: usize = 2;

/// Minimum field width used when none is configured.
pub const DEFAULT_WIDTH: usize = 0;

const SYMBOL_DECIMAL_PRECISION: usize = 5;
const SYMBOL_FIELD_PRECISION: usize = 3;

/// Output style of [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Skin {
    /// Space-separated numbers.
    Plain,
    /// `°`, `'` and `"` markers with fixed precision.
    Symbols,
}

impl Skin {
    fn default_precision(self, format: AngleFormat) -> usize {
        match (self, format) {
            (Self::Plain, _) => DEFAULT_PRECISION,
            (Self::Symbols, AngleFormat::Decimal) => SYMBOL_DECIMAL_PRECISION,
            (Self::Symbols, _) => SYMBOL_FIELD_PRECISION,
        }
    }
}

/// Signed fields of one rendering, sign already placed.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Fields {
    Decimal(f64),
    DegMin { deg: i64, min: i64 },
    DegMinFrac { deg: i64, min: f64 },
    DegMinSec { deg: i64, min: i64, sec: i64 },
    DegMinSecFrac { deg: i64, min: i64, sec: f64 },
}

// True when `x` prints as 60 at `precision` places.
fn rounds_to_sixty(x: f64, precision: usize) -> bool {
    format!("{x:.precision$}") == format!("{:.precision$}", 60.0)
}

fn fields(value: f64, format: AngleFormat, precision: usize) -> Fields {
    let dms = decompose(value);
    let negative = dms.is_negative();
    let (deg, min, sec) = dms.magnitudes();
    let (mut deg, mut min) = (deg, i64::from(min));
    let neg_i = |x: i64| if negative { -x } else { x };
    let neg_f = |x: f64| if negative { -x } else { x };

    match format {
        AngleFormat::Decimal => Fields::Decimal(value),
        AngleFormat::DegMin => {
            if deg != 0 {
                Fields::DegMin { deg: neg_i(deg), min }
            } else {
                Fields::DegMin { deg: 0, min: neg_i(min) }
            }
        }
        AngleFormat::DegMinFrac => {
            let mut minutes = min as f64 + sec / 60.0;
            if rounds_to_sixty(minutes, precision) {
                minutes = 0.0;
                deg += 1;
            }
            if deg != 0 {
                Fields::DegMinFrac { deg: neg_i(deg), min: minutes }
            } else {
                Fields::DegMinFrac { deg: 0, min: neg_f(minutes) }
            }
        }
        AngleFormat::DegMinSec => {
            let sec = sec.trunc() as i64;
            if deg != 0 {
                Fields::DegMinSec { deg: neg_i(deg), min, sec }
            } else if min != 0 {
                Fields::DegMinSec { deg: 0, min: neg_i(min), sec }
            } else {
                Fields::DegMinSec { deg: 0, min: 0, sec: neg_i(sec) }
            }
        }
        AngleFormat::DegMinSecFrac => {
            let mut sec = sec;
            if rounds_to_sixty(sec, precision) {
                sec = 0.0;
                min += 1;
                if min == 60 {
                    min = 0;
                    deg += 1;
                }
            }
            if deg != 0 {
                Fields::DegMinSecFrac { deg: neg_i(deg), min, sec }
            } else if min != 0 {
                Fields::DegMinSecFrac { deg: 0, min: neg_i(min), sec }
            } else {
                Fields::DegMinSecFrac { deg: 0, min: 0, sec: neg_f(sec) }
            }
        }
    }
}

/// Render `value` in `format` with one of the two skins.
///
/// `precision` of `None` picks the skin's default.
pub(crate) fn render(
    value: f64,
    format: AngleFormat,
    precision: Option<usize>,
    skin: Skin,
) -> String {
    let p = precision.unwrap_or_else(|| skin.default_precision(format));
    match (skin, fields(value, format, p)) {
        (Skin::Plain, Fields::Decimal(v)) => format!("{v:.p$}"),
        (Skin::Plain, Fields::DegMin { deg, min }) => format!("{deg} {min}"),
        (Skin::Plain, Fields::DegMinFrac { deg, min }) => format!("{deg} {min:.p$}"),
        (Skin::Plain, Fields::DegMinSec { deg, min, sec }) => format!("{deg} {min} {sec}"),
        (Skin::Plain, Fields::DegMinSecFrac { deg, min, sec }) => {
            format!("{deg} {min} {sec:.p$}")
        }
        (Skin::Symbols, Fields::Decimal(v)) => format!("{v:.p$}°"),
        (Skin::Symbols, Fields::DegMin { deg, min }) => format!("{deg}°{min:02}'"),
        (Skin::Symbols, Fields::DegMinFrac { deg, min }) => format!("{deg}°{min:.p$}'"),
        (Skin::Symbols, Fields::DegMinSec { deg, min, sec }) => {
            format!("{deg}°{min:02}'{sec:02}\"")
        }
        (Skin::Symbols, Fields::DegMinSecFrac { deg, min, sec }) => {
            format!("{deg}°{min:02}'{sec:.p$}\"")
        }
    }
}

fn clamp_precision(precision: i32) -> usize {
    usize::try_from(precision).unwrap_or(0)
}

/// Format decimal degrees as space-separated fields.
///
/// `precision` sets the decimal places of the last field for the
/// fractional formats; negative values are treated as 0. The result is
/// left-justified and right-padded with spaces to at least `width`
/// characters. It is never truncated.
///
/// ```
/// use arc_angle::{AngleFormat, format_angle};
///
/// assert_eq!(format_angle(-0.3456, AngleFormat::DegMin, 0, 0), "0 -20");
/// assert_eq!(format_angle(12.3456, AngleFormat::Decimal, 2, 10), "12.35     ");
/// ```
pub fn format_angle(value: f64, format: AngleFormat, precision: i32, width: usize) -> String {
    FormatOptions {
        format,
        precision: clamp_precision(precision),
        width,
    }
    .apply(value)
}

/// Output format, decimal places and minimum width for plain rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub format: AngleFormat,
    pub precision: usize,
    pub width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            format: AngleFormat::Decimal,
            precision: DEFAULT_PRECISION,
            width: DEFAULT_WIDTH,
        }
    }
}

impl FormatOptions {
    /// Render `value` with these options.
    pub fn apply(&self, value: f64) -> String {
        let text = render(value, self.format, Some(self.precision), Skin::Plain);
        format!("{text:<width$}", width = self.width)
    }
}

/// Builder for plain renderings of a single value.
///
/// Every setter returns a new formatter, so settings can be chained in any
/// order:
///
/// ```
/// use arc_angle::{AngleFormat, AngleFormatter};
///
/// let a = AngleFormatter::new(12.3456).precision(3).format(AngleFormat::DegMinSecFrac);
/// let b = AngleFormatter::new(12.3456).format(AngleFormat::DegMinSecFrac).precision(3);
/// assert_eq!(a.render(), b.render());
/// assert_eq!(a.render(), "12 20 44.160");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleFormatter {
    value: f64,
    options: FormatOptions,
}

impl AngleFormatter {
    /// Formatter for `value` decimal degrees with default options.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            options: FormatOptions::default(),
        }
    }

    pub fn with_options(value: f64, options: FormatOptions) -> Self {
        Self { value, options }
    }

    #[must_use]
    pub fn format(self, format: AngleFormat) -> Self {
        Self {
            options: FormatOptions { format, ..self.options },
            ..self
        }
    }

    /// Decimal places; negative values are treated as 0.
    #[must_use]
    pub fn precision(self, precision: i32) -> Self {
        Self {
            options: FormatOptions {
                precision: clamp_precision(precision),
                ..self.options
            },
            ..self
        }
    }

    #[must_use]
    pub fn width(self, width: usize) -> Self {
        Self {
            options: FormatOptions { width, ..self.options },
            ..self
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn options(&self) -> FormatOptions {
        self.options
    }

    pub fn render(&self) -> String {
        self.options.apply(self.value)
    }
}

/// Starts from the angle's own display format.
impl From<Angle> for AngleFormatter {
    fn from(angle: Angle) -> Self {
        Self::new(angle.degrees()).format(angle.format())
    }
}

impl Display for AngleFormatter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
