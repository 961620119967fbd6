//! Rounding policy for value-to-index lookups.

use std::str::FromStr;

use crate::coordinate::errors::CoordinateError;

/// How a fractional interpolated index becomes an integer one.
/// - [`Rounding::Nearest`]  nearest integer, ties to even
/// - [`Rounding::Before`]   floor
/// - [`Rounding::After`]    ceil
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rounding {
    Nearest,
    Before,
    After,
}

impl Rounding {
    pub const fn method_name(self) -> &'static str {
        match self {
            Rounding::Nearest => "nearest",
            Rounding::Before => "before",
            Rounding::After => "after",
        }
    }

    #[inline]
    pub(crate) fn apply(self, index: f64) -> i64 {
        match self {
            Rounding::Nearest => index.round_ties_even() as i64,
            Rounding::Before => index.floor() as i64,
            Rounding::After => index.ceil() as i64,
        }
    }
}

impl std::fmt::Display for Rounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}

impl FromStr for Rounding {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest" => Ok(Rounding::Nearest),
            "before" => Ok(Rounding::Before),
            "after" => Ok(Rounding::After),
            other => Err(CoordinateError::UnknownRounding {
                got: other.to_string(),
            }),
        }
    }
}
