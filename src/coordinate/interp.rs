//! Linear interpolation primitive.
//!
//! Each consecutive pair `(xp[i], fp[i])`, `(xp[i+1], fp[i+1])` defines a
//! line segment. Queries inside `[xp[0], xp[-1]]` interpolate between the
//! enclosing pair; queries outside extrapolate along the nearest boundary
//! segment. Both the reference and the value array are normalized to plain
//! floats independently (see [`ScaleOffset`]), so calendar arrays take the
//! same code path as numeric ones.

use crate::coordinate::errors::CoordinateError;
use crate::coordinate::scale::ScaleOffset;
use crate::coordinate::values::ValueArray;

#[inline]
fn lerp(x0: f64, x1: f64, y0: f64, y1: f64, xq: f64) -> f64 {
    y0 + (y1 - y0) * (xq - x0) / (x1 - x0)
}

/// Interpolates in plain float space, assuming `xp` is sorted and
/// `xp.len() == fp.len() >= 2`.
///
/// An exact hit on a reference point returns the paired value unchanged,
/// which keeps deviations at segment endpoints exactly zero during
/// simplification.
pub(crate) fn interp_floats(query: &[f64], xp: &[f64], fp: &[f64]) -> Vec<f64> {
    let n = xp.len();
    let mut out = Vec::with_capacity(query.len());

    for &xq in query {
        match xp.binary_search_by(|xi| xi.total_cmp(&xq)) {
            Ok(idx) => out.push(fp[idx]),
            Err(idx) => {
                // xp[i] < xq < xp[i + 1]; boundary segments extrapolate
                let i = idx.clamp(1, n - 1) - 1;

                let (x0, x1) = (xp[i], xp[i + 1]);
                let (y0, y1) = (fp[i], fp[i + 1]);

                out.push(lerp(x0, x1, y0, y1, xq));
            }
        }
    }

    out
}

/// Evaluates the piecewise-linear map `reference -> values` at `query`.
///
/// # Errors
/// - [`CoordinateError::InvalidDomain`] if `reference` is not strictly
///   increasing (strict: equal neighbors are rejected).
/// - [`CoordinateError::ShapeMismatch`] if the array lengths differ.
/// - [`CoordinateError::InsufficientTiePoints`] with fewer than 2 points.
/// - [`CoordinateError::NonFinite`] for non-finite numeric input.
/// - [`CoordinateError::KindMismatch`] if `query` is of a different kind
///   than `reference`.
pub(crate) fn evaluate(
    query: &ValueArray,
    reference: &ValueArray,
    values: &ValueArray,
) -> Result<ValueArray, CoordinateError> {
    if reference.len() != values.len() {
        return Err(CoordinateError::ShapeMismatch {
            index_len: reference.len(),
            value_len: values.len(),
        });
    }
    if reference.len() < 2 {
        return Err(CoordinateError::InsufficientTiePoints {
            got: reference.len(),
        });
    }
    for arr in [query, reference, values] {
        if let Some(idx) = arr.non_finite_idx() {
            return Err(CoordinateError::NonFinite { idx });
        }
    }
    if !reference.is_strictly_increasing() {
        return Err(CoordinateError::InvalidDomain);
    }

    // the query shares the reference's transform
    let x_transform = ScaleOffset::floatize(reference)?;
    let f_transform = ScaleOffset::floatize(values)?;

    let x = x_transform.direct_all(query)?;
    let xp = x_transform.direct_all(reference)?;
    let fp = f_transform.direct_all(values)?;

    let f = interp_floats(&x, &xp, &fp);

    f_transform.inverse_all(f)
}
