//! Defines the struct returned by tie-point simplification.
//!
//! Summarizes one simplification run: the error bound that was applied and
//! the tie-point counts before and after reduction.

/// Summary of a [`simplify`](crate::coordinate::linear::LinearCoordinate::simplify) run.
///
/// - `epsilon`   : maximum pointwise reconstruction error allowed
/// - `n_before`  : tie points before reduction
/// - `n_after`   : tie points after reduction (always ≥ 2)
#[derive(Debug, Clone, Copy)]
pub struct SimplifyReport {
    pub epsilon: f64,
    pub n_before: usize,
    pub n_after: usize,
}

impl SimplifyReport {
    pub fn removed(&self) -> usize {
        self.n_before - self.n_after
    }
}
