//! Block reduction: shrink the triangle from the bottom up.
//!
//! Every value of the row `block_size - 1` rows above the base is the tip of a
//! small sub-triangle reaching the base. Replacing each such value with the
//! optimum of its sub-triangle, then dropping the rows below, leaves a smaller
//! triangle with the same optimum. With a block size of 2 on
//!
//! ```text
//!          1
//!        3   2
//!      4   6   5      <- boundary
//!   10   9   8   7
//! ```
//!
//! the sub-triangles `4/10 9`, `6/9 8` and `5/8 7` solve to 14, 15 and 13, so
//! the triangle becomes `1 / 3 2 / 14 15 13`. Repeating on `3 2` gives
//! `1 / 18 17`, which solves to 19.
//!
//! Each pass costs one small solve per boundary value, so a fixed block size
//! keeps the total cost polynomial in the rank.

use tracing::debug;

use crate::error::{Result, TriangleError};
use crate::store::Triangle;
use crate::subtriangles;

/// Rows per block when nothing else is asked for.
pub const DEFAULT_BLOCK_SIZE: usize = 4;

/// Work done by [`Reducer::reduce`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReductionStats {
    /// Number of boundary rows collapsed.
    pub iterations: usize,
    /// Number of sub-triangles solved, one per boundary value.
    pub subtriangle_solves: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReductionOutcome {
    pub optimum: i64,
    pub stats: ReductionStats,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reducer {
    block_size: usize,
}

impl Default for Reducer {
    fn default() -> Self {
        Reducer {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl Reducer {
    /// A reducer that solves blocks of `block_size` rows and stops reducing
    /// once the triangle has at most `block_size` rows.
    pub fn new(block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(TriangleError::BlockSize(block_size));
        }
        Ok(Reducer { block_size })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Rows collapsed per pass. A single-row block would collapse nothing, so
    /// at least two rows are taken.
    fn span(&self) -> usize {
        self.block_size.max(2)
    }

    /// Collapses `t` in place until it has at most `block_size` rows.
    ///
    /// Afterwards every value of the last row is the best sum from that
    /// position down to the original base.
    pub fn reduce(&self, t: &mut Triangle) -> Result<ReductionStats> {
        let span = self.span();
        let mut stats = ReductionStats::default();

        while t.rank() > self.block_size {
            let boundary = t.rank() - span;
            // All optima are computed before the boundary row is written back
            let optima: Vec<i64> = (0..=boundary)
                .map(|offset| subtriangles::solve(&t.subtriangle_at(boundary, offset)))
                .collect();
            stats.iterations += 1;
            stats.subtriangle_solves += optima.len();

            t.replace_row(boundary, optima);
            t.truncate(span - 1)?;
            debug!(
                boundary,
                rank = t.rank(),
                solves = stats.subtriangle_solves,
                "collapsed block"
            );
        }

        Ok(stats)
    }

    /// Reduces `t`, then solves what is left by splitting it into
    /// sub-triangles.
    pub fn solve(&self, t: &mut Triangle) -> Result<ReductionOutcome> {
        let stats = self.reduce(t)?;
        let optimum = subtriangles::solve(t);
        debug!(
            optimum,
            iterations = stats.iterations,
            solves = stats.subtriangle_solves,
            "reduction finished"
        );
        Ok(ReductionOutcome { optimum, stats })
    }
}

/// Solves `t` by block reduction, leaving it reduced to at most `block_size`
/// rows.
///
/// # Example
///
/// ```
/// use triangle::{Triangle, reduction};
///
/// let mut t = Triangle::new(vec![vec![1], vec![3, 2], vec![4, 6, 5], vec![10, 9, 8, 7]]).unwrap();
/// assert_eq!(reduction::solve(&mut t, 2), Ok(19));
/// assert_eq!(t.rows(), &[vec![1], vec![18, 17]]);
/// ```
pub fn solve(t: &mut Triangle, block_size: usize) -> Result<i64> {
    Ok(Reducer::new(block_size)?.solve(t)?.optimum)
}
