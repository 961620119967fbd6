use thiserror::Error;

use crate::coordinate::values::ValueKind;

#[derive(Debug, Error)]
pub enum CoordinateError {
    #[error("reference values must be strictly increasing")]
    InvalidDomain,

    #[error("unequal length: {index_len} tie indices, {value_len} tie values")]
    ShapeMismatch { index_len: usize, value_len: usize },

    #[error("insufficient tie points: got {got}, need at least 2")]
    InsufficientTiePoints { got: usize },

    #[error("empty input array")]
    EmptyInput,

    #[error("non-finite value in input array at index {idx}")]
    NonFinite { idx: usize },

    #[error("value kind mismatch: expected {expected}, got {got}")]
    KindMismatch { expected: ValueKind, got: ValueKind },

    #[error("valid rounding methods are: 'nearest', 'before', 'after'; got {got:?}")]
    UnknownRounding { got: String },

    #[error("unknown interpolation kind {got:?}, only 'linear' is supported")]
    UnknownKind { got: String },

    #[error("invalid index slice: start {start} must be less than stop {stop}")]
    InvalidSlice { start: i64, stop: i64 },

    #[error("invalid epsilon {got}: must be finite and >= 0")]
    InvalidEpsilon { got: f64 },

    #[error("timestamp of {micros} microseconds since epoch is out of range")]
    TimestampOutOfRange { micros: i64 },

    #[error("malformed coordinate interpolation mapping {got:?}")]
    MalformedMapping { got: String },
}
