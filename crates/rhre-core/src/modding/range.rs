//! Closed float ranges used as metadata rule keys.

use std::fmt;
use std::str::FromStr;

/// Tolerance for matching single-point ranges.
pub const EPSILON: f32 = 0.0001;

/// Separator between the bounds of a textual range.
const SEPARATOR: &str = "..";

/// A closed interval `[start, end]` over `f32`.
///
/// A range whose bounds are equal is a single point and matches within
/// [`EPSILON`]. Any other range matches by inclusive containment, so a range
/// with `start > end` never matches anything.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueRange {
    start: f32,
    end: f32,
}

impl ValueRange {
    /// Creates the range `[start, end]`.
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Creates the single-point range `[value, value]`.
    pub fn point(value: f32) -> Self {
        Self::new(value, value)
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    /// Returns true if both bounds are the same value.
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if the start lies after the end.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Returns true if either bound is NaN.
    pub fn has_nan(&self) -> bool {
        self.start.is_nan() || self.end.is_nan()
    }

    /// Returns true if some measurement can match this range.
    ///
    /// False for inverted ranges and for ranges with a NaN bound.
    pub fn can_match(&self) -> bool {
        self.start <= self.end
    }

    /// Tests a measurement against this range.
    ///
    /// # Examples
    ///
    /// ```
    /// use rhre_core::ValueRange;
    ///
    /// assert!(ValueRange::point(5.0).matches(5.00005));
    /// assert!(!ValueRange::point(5.0).matches(5.001));
    /// assert!(ValueRange::new(2.0, 4.0).matches(4.0));
    /// assert!(!ValueRange::new(5.0, 3.0).matches(4.0));
    /// ```
    pub fn matches(&self, measurement: f32) -> bool {
        if self.is_point() {
            (measurement - self.start).abs() < EPSILON
        } else {
            self.start <= measurement && measurement <= self.end
        }
    }
}

/// Prints a point as `"n"` and a span as `"a..b"`.
///
/// Only ranges with non-negative bounds print in a form [`FromStr`] reads back.
impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_point() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}{}{}", self.start, SEPARATOR, self.end)
        }
    }
}

/// Parses `"<number> .. <number>"` or a single `"<number>"`.
///
/// Whitespace around the numbers and the separator is ignored. Numbers are
/// unsigned decimals with an optional fractional part.
///
/// ```
/// use rhre_core::ValueRange;
///
/// assert_eq!(" 1.5 .. 3 ".parse::<ValueRange>().unwrap(), ValueRange::new(1.5, 3.0));
/// assert_eq!("2".parse::<ValueRange>().unwrap(), ValueRange::point(2.0));
/// assert!("1 - 3".parse::<ValueRange>().is_err());
/// ```
impl FromStr for ValueRange {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        match text.split_once(SEPARATOR) {
            Some((start, end)) => {
                let start = parse_bound(start.trim(), s)?;
                let end = parse_bound(end.trim(), s)?;
                Ok(Self::new(start, end))
            }
            None => parse_bound(text, s).map(Self::point),
        }
    }
}

fn parse_bound(part: &str, input: &str) -> Result<f32, RangeParseError> {
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let well_formed = match part.split_once('.') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => is_digits(part),
    };

    if !well_formed {
        return Err(RangeParseError {
            message: format!(
                "Invalid bound '{}' in range '{}': expected a decimal number",
                part, input
            ),
        });
    }

    part.parse::<f32>().map_err(|e| RangeParseError {
        message: format!("Invalid bound '{}' in range '{}': {}", part, input, e),
    })
}

/// Error when parsing a range from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeParseError {
    pub message: String,
}

impl fmt::Display for RangeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range parse error: {}", self.message)
    }
}

impl std::error::Error for RangeParseError {}
