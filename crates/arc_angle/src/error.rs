//! Error types for angle parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Which part of the input an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// The single token of a plain decimal-degree input.
    DecimalDegrees,
    Degrees,
    Minutes,
    Seconds,
}

impl Component {
    pub const fn name(self) -> &'static str {
        match self {
            Self::DecimalDegrees => "decimal degrees",
            Self::Degrees => "degrees",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why an angle string was rejected.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The input string is empty.
    EmptyInput,
    /// The input holds nothing but whitespace.
    WhitespaceOnly,
    /// A character outside digits, `.`, `+`, `-`, space, tab and ASCII letters.
    InvalidCharacter(char),
    /// More than three whitespace-separated components.
    TooManyComponents(usize),
    /// Component at this 1-based position is empty.
    EmptyComponent(usize),
    /// A `.` in a component that must be an integer.
    UnexpectedDecimalPoint(Component),
    /// More than one `+`/`-` in a component.
    MultipleSigns(Component),
    /// A sign somewhere other than the first character.
    MisplacedSign(Component),
    /// More than one `.` in a component.
    MultipleDecimalPoints(Component),
    /// The component is not a number.
    InvalidComponent { component: Component, reason: String },
    /// The component parsed to infinity or NaN.
    NonFiniteValue(Component),
    /// Minutes or seconds with magnitude not below `limit`.
    OutOfRange {
        component: Component,
        limit: u32,
        actual: f64,
    },
}

impl ParseErrorKind {
    /// The component this error is about, if it concerns a single one.
    pub fn component(&self) -> Option<Component> {
        match self {
            Self::UnexpectedDecimalPoint(c)
            | Self::MultipleSigns(c)
            | Self::MisplacedSign(c)
            | Self::MultipleDecimalPoints(c)
            | Self::NonFiniteValue(c)
            | Self::InvalidComponent { component: c, .. }
            | Self::OutOfRange { component: c, .. } => Some(*c),
            _ => None,
        }
    }
}

/// A rejected angle string, with the input echoed for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    input: String,
    token: Option<String>,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_owned(),
            token: None,
            kind,
        }
    }

    pub(crate) fn at_token(input: &str, token: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_owned(),
            token: Some(token.to_owned()),
            kind,
        }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// The original, untrimmed input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The offending whitespace-separated token, when one is to blame.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let input = &self.input;
        if let Some(component) = self.kind.component() {
            write!(f, "invalid {component}")?;
            if let Some(token) = &self.token {
                write!(f, " '{token}'")?;
            }
            f.write_str(": ")?;
        }
        match &self.kind {
            ParseErrorKind::EmptyInput => write!(f, "empty input string"),
            ParseErrorKind::WhitespaceOnly => write!(f, "input contains only whitespace"),
            ParseErrorKind::InvalidCharacter(c) => {
                write!(f, "invalid character '{c}' in input '{input}'")
            }
            ParseErrorKind::TooManyComponents(n) => write!(
                f,
                "invalid format: expected 1-3 space-separated components, got {n} in input '{input}'"
            ),
            ParseErrorKind::EmptyComponent(i) => {
                write!(f, "component {i} is empty in input '{input}'")
            }
            ParseErrorKind::UnexpectedDecimalPoint(_) => {
                write!(f, "unexpected decimal point in integer value in '{input}'")
            }
            ParseErrorKind::MultipleSigns(_) => write!(f, "multiple signs in '{input}'"),
            ParseErrorKind::MisplacedSign(_) => {
                write!(f, "sign must be at beginning in '{input}'")
            }
            ParseErrorKind::MultipleDecimalPoints(_) => {
                write!(f, "multiple decimal points in '{input}'")
            }
            ParseErrorKind::InvalidComponent { reason, .. } => {
                write!(f, "not a number in '{input}' ({reason})")
            }
            ParseErrorKind::NonFiniteValue(_) => {
                write!(f, "value is infinite or NaN in '{input}'")
            }
            ParseErrorKind::OutOfRange { limit, actual, .. } => {
                write!(f, "must be less than {limit}, got {actual} in '{input}'")
            }
        }
    }
}

impl Error for ParseError {}

/// A minutes or seconds value outside (-60, 60).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeError {
    pub component: Component,
    pub limit: u32,
    pub actual: f64,
}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid {} value: must be less than {}, got {}",
            self.component, self.limit, self.actual
        )
    }
}

impl Error for RangeError {}

impl RangeError {
    pub(crate) fn into_parse_error(self, input: &str, token: &str) -> ParseError {
        ParseError::at_token(
            input,
            token,
            ParseErrorKind::OutOfRange {
                component: self.component,
                limit: self.limit,
                actual: self.actual,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_errors_name_component_and_token() {
        let e = ParseError::at_token(
            "12 2-0",
            "2-0",
            ParseErrorKind::MisplacedSign(Component::Minutes),
        );
        assert_eq!(
            e.to_string(),
            "invalid minutes '2-0': sign must be at beginning in '12 2-0'"
        );
    }

    #[test]
    fn whole_input_errors_have_no_prefix() {
        let e = ParseError::new("12@34", ParseErrorKind::InvalidCharacter('@'));
        assert_eq!(e.to_string(), "invalid character '@' in input '12@34'");
        assert_eq!(e.kind().component(), None);
        assert_eq!(e.token(), None);
    }

    #[test]
    fn out_of_range_message() {
        let e = RangeError {
            component: Component::Seconds,
            limit: 60,
            actual: 60.5,
        }
        .into_parse_error("12 30 60.5", "60.5");
        assert_eq!(
            e.to_string(),
            "invalid seconds '60.5': must be less than 60, got 60.5 in '12 30 60.5'"
        );
        assert_eq!(e.input(), "12 30 60.5");
    }
}
