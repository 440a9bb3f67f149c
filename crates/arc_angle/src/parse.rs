//! Text → [`Angle`], inferring the format from the input's shape.
//!
//! | components | last field        | format            |
//! |------------|-------------------|-------------------|
//! | 1          | any number        | `Decimal`         |
//! | 2          | integer minutes   | `DegMin`          |
//! | 2          | minutes with `.`  | `DegMinFrac`      |
//! | 3          | integer seconds   | `DegMinSec`       |
//! | 3          | seconds with `.`  | `DegMinSecFrac`   |
//!
//! Degrees of a multi-component input, and minutes of a three-component
//! one, must be integers. A leading `-` on zero degrees (`-0 20`) makes the
//! whole angle negative.

use tracing::{debug, trace};

use crate::angle::{Angle, AngleFormat};
use crate::dms::recompose;
use crate::error::{Component, ParseError, ParseErrorKind, RangeError};
use crate::validate::{validate_minutes, validate_seconds};

/// Largest number of whitespace-separated components accepted.
pub const MAX_COMPONENTS: usize = 3;

/// Characters allowed anywhere in the trimmed input.
///
/// Letters are admitted so that `inf` and `nan` reach the number parser
/// and are rejected there with a precise error.
pub fn is_valid_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_alphabetic() || matches!(c, '.' | '+' | '-' | ' ' | '\t')
}

/// Parse a plain rendering such as `12.35`, `0 -20` or `12 20 44.16`.
///
/// Leading and trailing whitespace is ignored and components may be
/// separated by any run of spaces or tabs. The returned angle carries the
/// inferred format.
///
/// ```
/// use arc_angle::{AngleFormat, parse};
///
/// let a = parse("0 -20 44.16").unwrap();
/// assert_eq!(a.format(), AngleFormat::DegMinSecFrac);
/// assert!((a.degrees() + 0.3456).abs() < 1e-9);
/// ```
pub fn parse(input: &str) -> Result<Angle, ParseError> {
    let result = parse_components(input);
    match &result {
        Ok(angle) => trace!(input, format = %angle.format(), degrees = angle.degrees(), "parsed angle"),
        Err(err) => debug!(input, error = %err, "rejected angle"),
    }
    result
}

fn parse_components(input: &str) -> Result<Angle, ParseError> {
    if input.is_empty() {
        return Err(ParseError::new(input, ParseErrorKind::EmptyInput));
    }
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new(input, ParseErrorKind::WhitespaceOnly));
    }
    if let Some(c) = trimmed.chars().find(|&c| !is_valid_char(c)) {
        return Err(ParseError::new(input, ParseErrorKind::InvalidCharacter(c)));
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.len() > MAX_COMPONENTS {
        return Err(ParseError::new(
            input,
            ParseErrorKind::TooManyComponents(tokens.len()),
        ));
    }
    if let Some(i) = tokens.iter().position(|t| t.is_empty()) {
        return Err(ParseError::new(input, ParseErrorKind::EmptyComponent(i + 1)));
    }

    let cx = Context { input };
    match tokens.as_slice() {
        [deg] => cx.decimal(deg),
        [deg, min] => cx.deg_min(deg, min),
        [deg, min, sec] => cx.deg_min_sec(deg, min, sec),
        _ => Err(ParseError::new(
            input,
            ParseErrorKind::TooManyComponents(tokens.len()),
        )),
    }
}

/// The original input, kept for error messages.
struct Context<'a> {
    input: &'a str,
}

impl Context<'_> {
    fn decimal(&self, token: &str) -> Result<Angle, ParseError> {
        let value = self.float(token, Component::DecimalDegrees)?;
        Ok(Angle::new(value, AngleFormat::Decimal))
    }

    fn deg_min(&self, deg_tok: &str, min_tok: &str) -> Result<Angle, ParseError> {
        let degrees = self.integer(deg_tok, Component::Degrees)?;

        let (value, format) = if min_tok.contains('.') {
            let minutes = self.float(min_tok, Component::Minutes)?;
            validate_minutes(minutes).map_err(|e| e.into_parse_error(self.input, min_tok))?;
            let whole = minutes.trunc();
            let seconds = (minutes - whole) * 60.0;
            (
                recompose(degrees, whole as i32, seconds),
                AngleFormat::DegMinFrac,
            )
        } else {
            let minutes = self.sexagesimal_int(min_tok, Component::Minutes)?;
            (recompose(degrees, minutes, 0.0), AngleFormat::DegMin)
        };

        Ok(Angle::new(apply_negative_zero(deg_tok, degrees, value), format))
    }

    fn deg_min_sec(&self, deg_tok: &str, min_tok: &str, sec_tok: &str) -> Result<Angle, ParseError> {
        let degrees = self.integer(deg_tok, Component::Degrees)?;
        let minutes = self.sexagesimal_int(min_tok, Component::Minutes)?;

        let (seconds, format) = if sec_tok.contains('.') {
            let seconds = self.float(sec_tok, Component::Seconds)?;
            validate_seconds(seconds).map_err(|e| e.into_parse_error(self.input, sec_tok))?;
            (seconds, AngleFormat::DegMinSecFrac)
        } else {
            let seconds = self.sexagesimal_int(sec_tok, Component::Seconds)?;
            (f64::from(seconds), AngleFormat::DegMinSec)
        };

        let value = recompose(degrees, minutes, seconds);
        Ok(Angle::new(apply_negative_zero(deg_tok, degrees, value), format))
    }

    fn error(&self, token: &str, kind: ParseErrorKind) -> ParseError {
        ParseError::at_token(self.input, token, kind)
    }

    /// Sign checks shared by integer and float components.
    fn check_signs(&self, token: &str, component: Component) -> Result<(), ParseError> {
        let signs = token.chars().filter(|c| matches!(c, '+' | '-')).count();
        if signs > 1 {
            return Err(self.error(token, ParseErrorKind::MultipleSigns(component)));
        }
        if token.len() > 1 && token[1..].contains(['+', '-']) {
            return Err(self.error(token, ParseErrorKind::MisplacedSign(component)));
        }
        Ok(())
    }

    fn integer(&self, token: &str, component: Component) -> Result<i64, ParseError> {
        self.check_signs(token, component)?;
        if token.contains('.') {
            return Err(self.error(token, ParseErrorKind::UnexpectedDecimalPoint(component)));
        }
        token.parse::<i64>().map_err(|e| {
            self.error(
                token,
                ParseErrorKind::InvalidComponent {
                    component,
                    reason: e.to_string(),
                },
            )
        })
    }

    /// Integer minutes or seconds, range checked.
    fn sexagesimal_int(&self, token: &str, component: Component) -> Result<i32, ParseError> {
        let value = self.integer(token, component)?;
        let check: fn(f64) -> Result<(), RangeError> = match component {
            Component::Seconds => validate_seconds,
            _ => validate_minutes,
        };
        check(value as f64).map_err(|e| e.into_parse_error(self.input, token))?;
        // |value| < 60 after the range check
        Ok(value as i32)
    }

    fn float(&self, token: &str, component: Component) -> Result<f64, ParseError> {
        self.check_signs(token, component)?;
        if token.matches('.').count() > 1 {
            return Err(self.error(token, ParseErrorKind::MultipleDecimalPoints(component)));
        }
        let value = token.parse::<f64>().map_err(|e| {
            self.error(
                token,
                ParseErrorKind::InvalidComponent {
                    component,
                    reason: e.to_string(),
                },
            )
        })?;
        if !value.is_finite() {
            return Err(self.error(token, ParseErrorKind::NonFiniteValue(component)));
        }
        Ok(value)
    }
}

// `-0 20` has integer degrees 0, so the sign only survives in the token.
fn apply_negative_zero(deg_tok: &str, degrees: i64, value: f64) -> f64 {
    if degrees == 0 && deg_tok.starts_with('-') {
        -value.abs()
    } else {
        value
    }
}
