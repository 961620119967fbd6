//! Tie-point simplification.
//!
//! Implements the [Ramer-Douglas-Peucker algorithm](https://en.wikipedia.org/wiki/Ramer%E2%80%93Douglas%E2%80%93Peucker_algorithm)
//! over a tie-point polyline: interior points whose removal keeps the
//! reconstruction within `epsilon` of the original are discarded, the two
//! endpoints are always retained.
//!
//! The recursion is kept as an explicit work stack so pathological inputs
//! cannot exhaust the call stack.

use crate::coordinate::interp::interp_floats;

/// Computes the keep mask for tie points `(x[i], y[i])`, both already in
/// plain float space with `x` strictly increasing.
///
/// When several points tie for the maximum deviation the first (lowest
/// position) wins. That choice is implementation-defined; any split point
/// gives the same error bound.
pub(crate) fn keep_mask(x: &[f64], y: &[f64], epsilon: f64) -> Vec<bool> {
    let n = x.len();
    let mut mask = vec![true; n];
    let mut stack = vec![(0usize, n)];

    while let Some((start, stop)) = stack.pop() {
        // straight line through the range's endpoints
        let xp = [x[start], x[stop - 1]];
        let fp = [y[start], y[stop - 1]];
        let ysimple = interp_floats(&x[start..stop], &xp, &fp);

        let mut argmax = start;
        let mut dmax = 0.0;
        for (k, ys) in ysimple.iter().enumerate() {
            let d = (y[start + k] - ys).abs();
            if d > dmax {
                dmax = d;
                argmax = start + k;
            }
        }

        if dmax > epsilon {
            // endpoint queries hit their reference point exactly, so the
            // split point is always interior and both halves shrink
            stack.push((start, argmax + 1));
            stack.push((argmax, stop));
        } else {
            for bit in &mut mask[start + 1..stop - 1] {
                *bit = false;
            }
        }
    }

    mask
}
