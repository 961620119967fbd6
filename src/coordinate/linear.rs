//! Piecewise-linear coordinate.
//!
//! A [`LinearCoordinate`] owns an ordered set of tie points
//! `(tie_indices[i], tie_values[i])` and reconstructs the coordinate value
//! of any sample index by linear interpolation between them. It supports
//! the inverse lookup (value to index, with a rounding policy), dense
//! materialization, sub-range slicing with index re-basing, and lossy
//! tie-point simplification.

use std::fmt;
use std::ops::Range;

use crate::coordinate::errors::CoordinateError;
use crate::coordinate::interp::evaluate;
use crate::coordinate::kinds::Kind;
use crate::coordinate::report::SimplifyReport;
use crate::coordinate::rounding::Rounding;
use crate::coordinate::scale::ScaleOffset;
use crate::coordinate::simplify::keep_mask;
use crate::coordinate::values::{Value, ValueArray, ValueKind};

/// Piecewise-linear coordinate defined by tie points.
///
/// # Invariants
/// - `tie_indices.len() == tie_values.len() >= 2`
/// - `tie_indices` strictly increasing
/// - numeric tie values are finite
///
/// All of these are enforced at construction; every operation that returns
/// a new coordinate preserves them.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearCoordinate {
    tie_indices: Vec<i64>,
    tie_values: ValueArray,
}

impl LinearCoordinate {
    /// Builds a coordinate from its tie-point arrays.
    ///
    /// # Errors
    /// - [`CoordinateError::ShapeMismatch`] if the lengths differ.
    /// - [`CoordinateError::InsufficientTiePoints`] with fewer than 2 ties.
    /// - [`CoordinateError::InvalidDomain`] if `tie_indices` is not
    ///   strictly increasing.
    /// - [`CoordinateError::NonFinite`] for non-finite numeric tie values.
    pub fn new(
        tie_indices: Vec<i64>,
        tie_values: impl Into<ValueArray>,
    ) -> Result<Self, CoordinateError> {
        let tie_values = tie_values.into();

        if tie_indices.len() != tie_values.len() {
            return Err(CoordinateError::ShapeMismatch {
                index_len: tie_indices.len(),
                value_len: tie_values.len(),
            });
        }
        if tie_indices.len() < 2 {
            return Err(CoordinateError::InsufficientTiePoints {
                got: tie_indices.len(),
            });
        }
        if !tie_indices.windows(2).all(|w| w[0] < w[1]) {
            return Err(CoordinateError::InvalidDomain);
        }
        if let Some(idx) = tie_values.non_finite_idx() {
            return Err(CoordinateError::NonFinite { idx });
        }

        Ok(Self {
            tie_indices,
            tie_values,
        })
    }

    /// Builds a coordinate from tie-point arrays plus an interpolation-kind
    /// name as it appears in serialized metadata. Only `"linear"` is
    /// defined; anything else is [`CoordinateError::UnknownKind`].
    pub fn from_tie_points(
        kind: &str,
        tie_indices: Vec<i64>,
        tie_values: impl Into<ValueArray>,
    ) -> Result<Self, CoordinateError> {
        let Kind::Linear = kind.parse::<Kind>()?;
        Self::new(tie_indices, tie_values)
    }

    // accessors used by I/O collaborators to serialize the coordinate

    pub fn tie_indices(&self) -> &[i64] {
        &self.tie_indices
    }

    pub fn tie_values(&self) -> &ValueArray {
        &self.tie_values
    }

    pub fn value_kind(&self) -> ValueKind {
        self.tie_values.kind()
    }

    pub const fn kind(&self) -> Kind {
        Kind::Linear
    }

    pub fn num_tie_points(&self) -> usize {
        self.tie_indices.len()
    }

    /// Number of addressable samples, `last tie index + 1`.
    pub fn len(&self) -> usize {
        usize::try_from(self.last_index() + 1).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        false // the >= 2 tie-point invariant excludes empty coordinates
    }

    fn last_index(&self) -> i64 {
        self.tie_indices[self.tie_indices.len() - 1]
    }

    fn indices_as_floats(&self) -> ValueArray {
        ValueArray::Number(self.tie_indices.iter().map(|&i| i as f64).collect())
    }

    /// Interpolated coordinate value at `index`. Indices beyond the tie
    /// range extrapolate along the boundary segment.
    pub fn value_at(&self, index: f64) -> Result<Value, CoordinateError> {
        let out = self.values_at(&[index])?;
        Ok(out.first().unwrap_or(Value::Number(f64::NAN)))
    }

    /// Vector form of [`value_at`](Self::value_at).
    pub fn values_at(&self, indices: &[f64]) -> Result<ValueArray, CoordinateError> {
        evaluate(
            &ValueArray::Number(indices.to_vec()),
            &self.indices_as_floats(),
            &self.tie_values,
        )
    }

    /// Integer sample index whose value is closest to `value` under the
    /// given rounding policy. `Nearest` rounds ties to even.
    ///
    /// The inverse lookup uses the tie values as the interpolation
    /// reference, so it requires them to be strictly increasing and fails
    /// with [`CoordinateError::InvalidDomain`] otherwise.
    pub fn index_at(&self, value: Value, rounding: Rounding) -> Result<i64, CoordinateError> {
        let out = self.indices_at(&ValueArray::from(value), rounding)?;
        Ok(out[0])
    }

    /// Vector form of [`index_at`](Self::index_at).
    pub fn indices_at(
        &self,
        values: &ValueArray,
        rounding: Rounding,
    ) -> Result<Vec<i64>, CoordinateError> {
        let out = evaluate(values, &self.tie_values, &self.indices_as_floats())?;
        // the interpolated indices are numeric by construction
        let idx = ScaleOffset::Identity.direct_all(&out)?;
        Ok(idx.into_iter().map(|i| rounding.apply(i)).collect())
    }

    /// Dense coordinate values for every sample index `0..=last tie index`.
    ///
    /// This is the one operation whose cost scales with the coordinate's
    /// full length rather than its tie-point count.
    pub fn materialize(&self) -> Result<ValueArray, CoordinateError> {
        let indices: Vec<f64> = (0..=self.last_index()).map(|i| i as f64).collect();
        self.values_at(&indices)
    }

    /// Converts a half-open value range `[start, stop)` into a half-open
    /// index range.
    ///
    /// The start index rounds up (`After`) and the stop value's index
    /// rounds down (`Before`) before exclusivity is restored with `+ 1`,
    /// so no index whose value falls outside the requested range is ever
    /// included.
    pub fn index_slice_for(
        &self,
        start: Value,
        stop: Value,
    ) -> Result<Range<i64>, CoordinateError> {
        let first = self.index_at(start, Rounding::After)?;
        let end = self.index_at(stop, Rounding::Before)?;
        Ok(first..end + 1)
    }

    /// Extracts a new coordinate covering exactly the half-open index
    /// range `[start, stop)`, re-based so its first tie index is 0.
    ///
    /// Boundary values at `start` and `stop - 1` are interpolated; original
    /// tie points strictly between them are kept. The result always has at
    /// least the two boundary tie points, even for a one-point range.
    pub fn slice(&self, range: Range<i64>) -> Result<Self, CoordinateError> {
        if range.start >= range.end {
            return Err(CoordinateError::InvalidSlice {
                start: range.start,
                stop: range.end,
            });
        }
        let start_index = range.start;
        let end_index = range.end - 1;
        let start_value = self.value_at(start_index as f64)?;
        let end_value = self.value_at(end_index as f64)?;

        let mut tie_indices = vec![start_index];
        let keep: Vec<usize> = (0..self.num_tie_points())
            .filter(|&i| start_index < self.tie_indices[i] && self.tie_indices[i] < end_index)
            .collect();
        tie_indices.extend(keep.iter().map(|&i| self.tie_indices[i]));
        tie_indices.push(end_index);

        // re-base so the new coordinate starts at index 0
        for idx in &mut tie_indices {
            *idx -= start_index;
        }

        let tie_values = match &self.tie_values {
            ValueArray::Number(v) => {
                let (Value::Number(sv), Value::Number(ev)) = (start_value, end_value) else {
                    return Err(CoordinateError::KindMismatch {
                        expected: ValueKind::Number,
                        got: start_value.kind(),
                    });
                };
                let mut out = vec![sv];
                out.extend(keep.iter().map(|&i| v[i]));
                out.push(ev);
                ValueArray::Number(out)
            }
            ValueArray::DateTime(v) => {
                let (Value::DateTime(sv), Value::DateTime(ev)) = (start_value, end_value) else {
                    return Err(CoordinateError::KindMismatch {
                        expected: ValueKind::DateTime,
                        got: start_value.kind(),
                    });
                };
                let mut out = vec![sv];
                out.extend(keep.iter().map(|&i| v[i]));
                out.push(ev);
                ValueArray::DateTime(out)
            }
        };

        Ok(Self {
            tie_indices,
            tie_values,
        })
    }

    /// Removes unnecessary tie points with the Ramer-Douglas-Peucker
    /// algorithm, bounding the pointwise reconstruction error by
    /// `epsilon` in value units (microseconds for calendar coordinates).
    ///
    /// The reduced arrays are built first and swapped in wholesale; no
    /// partially updated state is ever observable.
    pub fn simplify(&mut self, epsilon: f64) -> Result<SimplifyReport, CoordinateError> {
        // +inf is a valid bound (reduce to the two endpoints), NaN and
        // negatives would defeat the recursion's termination argument
        if epsilon.is_nan() || epsilon < 0.0 {
            return Err(CoordinateError::InvalidEpsilon { got: epsilon });
        }

        let transform = ScaleOffset::floatize(&self.tie_values)?;
        let x: Vec<f64> = self.tie_indices.iter().map(|&i| i as f64).collect();
        let y = transform.direct_all(&self.tie_values)?;

        let mask = keep_mask(&x, &y, epsilon);
        let n_before = self.num_tie_points();

        let tie_indices: Vec<i64> = self
            .tie_indices
            .iter()
            .zip(&mask)
            .filter(|(_, &keep)| keep)
            .map(|(&i, _)| i)
            .collect();
        let tie_values = self.tie_values.filter_mask(&mask);

        self.tie_indices = tie_indices;
        self.tie_values = tie_values;

        Ok(SimplifyReport {
            epsilon,
            n_before,
            n_after: self.num_tie_points(),
        })
    }
}

impl fmt::Display for LinearCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // first()/last() are infallible under the >= 2 tie-point invariant
        let first = self.tie_values.first().unwrap_or(Value::Number(f64::NAN));
        let last = self.tie_values.last().unwrap_or(Value::Number(f64::NAN));
        write!(
            f,
            "{} tie points from {} to {}",
            self.num_tie_points(),
            first,
            last
        )
    }
}
