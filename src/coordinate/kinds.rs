//! Defines the interpolation kind variants.
//!
//! Provides the [`Kind`] enum, which enumerates all supported tie-point
//! interpolation kinds. Only [`Kind::Linear`] is defined; unknown kind
//! names parsed from metadata are rejected, never silently defaulted.

use std::str::FromStr;

use crate::coordinate::errors::CoordinateError;

/// Interpolation kind variants.
/// - [`Kind::Linear`]  piecewise-linear interpolation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Kind {
    Linear,
}

impl Kind {
    pub const fn kind_name(self) -> &'static str {
        match self {
            Kind::Linear => "linear",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind_name())
    }
}

impl FromStr for Kind {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Kind::Linear),
            other => Err(CoordinateError::UnknownKind {
                got: other.to_string(),
            }),
        }
    }
}
