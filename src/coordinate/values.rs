//! Value domain of a coordinate axis.
//!
//! A coordinate carries values of exactly one homogeneous kind: plain
//! numbers ([`f64`]) or calendar timestamps ([`DateTime<Utc>`], handled at
//! microsecond resolution). [`Value`] is one scalar sample and
//! [`ValueArray`] an ordered sequence of one kind.

use std::fmt;

use chrono::{DateTime, Utc};

/// The two homogeneous value kinds a coordinate can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    DateTime,
}

impl ValueKind {
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::DateTime => "datetime",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One scalar coordinate value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Number(f64),
    DateTime(DateTime<Utc>),
}

impl Value {
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::DateTime(_) => ValueKind::DateTime,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{}", v),
            Value::DateTime(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::DateTime(t)
    }
}

/// An ordered sequence of values of one homogeneous kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueArray {
    Number(Vec<f64>),
    DateTime(Vec<DateTime<Utc>>),
}

impl ValueArray {
    pub const fn kind(&self) -> ValueKind {
        match self {
            ValueArray::Number(_) => ValueKind::Number,
            ValueArray::DateTime(_) => ValueKind::DateTime,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ValueArray::Number(v) => v.len(),
            ValueArray::DateTime(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, idx: usize) -> Option<Value> {
        match self {
            ValueArray::Number(v) => v.get(idx).copied().map(Value::Number),
            ValueArray::DateTime(v) => v.get(idx).copied().map(Value::DateTime),
        }
    }

    pub fn first(&self) -> Option<Value> {
        self.get(0)
    }

    pub fn last(&self) -> Option<Value> {
        match self.len() {
            0 => None,
            n => self.get(n - 1),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        (0..self.len()).map(move |i| match self {
            ValueArray::Number(v) => Value::Number(v[i]),
            ValueArray::DateTime(v) => Value::DateTime(v[i]),
        })
    }

    /// Strictness is checked in the domain's own ordering, so datetime
    /// arrays never go through floats here. `NaN` neighbors fail the check.
    pub fn is_strictly_increasing(&self) -> bool {
        match self {
            ValueArray::Number(v) => v.windows(2).all(|w| w[0] < w[1]),
            ValueArray::DateTime(v) => v.windows(2).all(|w| w[0] < w[1]),
        }
    }

    /// Position of the first non-finite element, if any. Datetime arrays
    /// have no non-finite representation.
    pub(crate) fn non_finite_idx(&self) -> Option<usize> {
        match self {
            ValueArray::Number(v) => v.iter().position(|x| !x.is_finite()),
            ValueArray::DateTime(_) => None,
        }
    }

    /// Keeps the elements whose mask bit is set. `mask.len()` must equal
    /// `self.len()`.
    pub(crate) fn filter_mask(&self, mask: &[bool]) -> ValueArray {
        debug_assert_eq!(mask.len(), self.len());
        match self {
            ValueArray::Number(v) => ValueArray::Number(
                v.iter()
                    .zip(mask)
                    .filter(|(_, &keep)| keep)
                    .map(|(x, _)| *x)
                    .collect(),
            ),
            ValueArray::DateTime(v) => ValueArray::DateTime(
                v.iter()
                    .zip(mask)
                    .filter(|(_, &keep)| keep)
                    .map(|(x, _)| *x)
                    .collect(),
            ),
        }
    }
}

impl From<Vec<f64>> for ValueArray {
    fn from(v: Vec<f64>) -> Self {
        ValueArray::Number(v)
    }
}

impl From<Vec<DateTime<Utc>>> for ValueArray {
    fn from(v: Vec<DateTime<Utc>>) -> Self {
        ValueArray::DateTime(v)
    }
}

impl From<Value> for ValueArray {
    fn from(v: Value) -> Self {
        match v {
            Value::Number(x) => ValueArray::Number(vec![x]),
            Value::DateTime(t) => ValueArray::DateTime(vec![t]),
        }
    }
}
