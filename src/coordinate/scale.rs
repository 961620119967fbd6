//! Scale-offset normalization.
//!
//! Interpolation arithmetic always runs in plain floating point. Each
//! interpolation call derives a [`ScaleOffset`] transform from the array
//! being floatized: the identity for numeric arrays, and for calendar
//! arrays a shift to the array's first timestamp in units of one
//! microsecond. The transform is not persisted anywhere.

use chrono::{DateTime, Utc};

use crate::coordinate::errors::CoordinateError;
use crate::coordinate::values::{Value, ValueArray, ValueKind};

/// Transform between one value domain and plain floats.
///
/// `direct(v) = (v - offset) / scale`, `inverse(f) = scale * f + offset`,
/// with `scale = 1, offset = 0` for numbers and `scale = 1µs,
/// offset = first element` for timestamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleOffset {
    Identity,
    Epoch { origin: DateTime<Utc> },
}

impl ScaleOffset {
    /// Derives the transform for `arr`. Calendar arrays anchor on their
    /// first element, so `arr` must be non-empty.
    pub fn floatize(arr: &ValueArray) -> Result<Self, CoordinateError> {
        match arr {
            ValueArray::Number(_) => Ok(ScaleOffset::Identity),
            ValueArray::DateTime(v) => match v.first() {
                Some(origin) => Ok(ScaleOffset::Epoch { origin: *origin }),
                None => Err(CoordinateError::EmptyInput),
            },
        }
    }

    pub const fn kind(&self) -> ValueKind {
        match self {
            ScaleOffset::Identity => ValueKind::Number,
            ScaleOffset::Epoch { .. } => ValueKind::DateTime,
        }
    }

    pub fn direct(&self, value: Value) -> Result<f64, CoordinateError> {
        match (self, value) {
            (ScaleOffset::Identity, Value::Number(v)) => Ok(v),
            (ScaleOffset::Epoch { origin }, Value::DateTime(t)) => {
                Ok((t.timestamp_micros() - origin.timestamp_micros()) as f64)
            }
            (_, got) => Err(CoordinateError::KindMismatch {
                expected: self.kind(),
                got: got.kind(),
            }),
        }
    }

    pub fn direct_all(&self, arr: &ValueArray) -> Result<Vec<f64>, CoordinateError> {
        arr.iter().map(|v| self.direct(v)).collect()
    }

    /// Maps a float back into the value domain. Calendar results are
    /// rounded to the nearest whole microsecond (ties to even) because
    /// sub-tick fractions are not meaningful for timestamps.
    pub fn inverse(&self, float: f64) -> Result<Value, CoordinateError> {
        match self {
            ScaleOffset::Identity => Ok(Value::Number(float)),
            ScaleOffset::Epoch { origin } => {
                let micros = origin.timestamp_micros() + float.round_ties_even() as i64;
                match DateTime::from_timestamp_micros(micros) {
                    Some(t) => Ok(Value::DateTime(t)),
                    None => Err(CoordinateError::TimestampOutOfRange { micros }),
                }
            }
        }
    }

    /// Maps floats back into the value domain; the resulting array kind is
    /// the transform's own kind.
    pub fn inverse_all(&self, floats: Vec<f64>) -> Result<ValueArray, CoordinateError> {
        match self {
            ScaleOffset::Identity => Ok(ValueArray::Number(floats)),
            ScaleOffset::Epoch { origin } => {
                let base = origin.timestamp_micros();
                let mut out = Vec::with_capacity(floats.len());
                for f in floats {
                    let micros = base + f.round_ties_even() as i64;
                    match DateTime::from_timestamp_micros(micros) {
                        Some(t) => out.push(t),
                        None => return Err(CoordinateError::TimestampOutOfRange { micros }),
                    }
                }
                Ok(ValueArray::DateTime(out))
            }
        }
    }
}
