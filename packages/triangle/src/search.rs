//! Depth-first search with bound pruning.
//!
//! Walks every path from the apex, right child before left child, keeping
//! the best completed sum seen so far. Before descending from a value the
//! search checks the running sum plus the largest sum that could still be
//! collected below, taking each lower row's maximum regardless of adjacency.
//! If that cannot beat the best completed path, the whole branch is skipped.
//!
//! Still O(2^rank) in the worst case, when the row maxima are spread across
//! paths that never meet, but triangles whose low rows hold small maxima are
//! cut down a lot.

use tracing::{debug, trace};

use crate::error::Result;
use crate::store::check_shape;

/// Work done by one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Values added to a running sum.
    pub visited: usize,
    /// Branches skipped because of the bound.
    pub pruned: usize,
    /// Paths followed all the way to the base.
    pub completed: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub optimum: i64,
    pub stats: SearchStats,
}

/// For each row `r`, the sum of the row maxima of rows `r..`.
///
/// This bounds the sum of any path segment starting at row `r` from above.
///
/// # Example
///
/// ```
/// use triangle::search::suffix_max_bound;
///
/// let rows = vec![vec![1], vec![3, 2], vec![4, 6, 5], vec![10, 9, 8, 7]];
/// assert_eq!(suffix_max_bound(&rows), vec![20, 19, 16, 10]);
/// ```
pub fn suffix_max_bound(rows: &[Vec<i64>]) -> Vec<i64> {
    let mut bound: Vec<i64> = rows
        .iter()
        .rev()
        .scan(0, |remaining, values| {
            *remaining += values.iter().copied().max().unwrap_or_default();
            Some(*remaining)
        })
        .collect();
    bound.reverse();
    bound
}

/// Solves a triangle given as raw rows with the pruned search.
///
/// # Example
///
/// ```
/// use triangle::search;
///
/// let rows = vec![vec![1], vec![3, 2], vec![4, 6, 5], vec![10, 9, 8, 7]];
/// assert_eq!(search::solve(&rows), Ok(19));
/// ```
pub fn solve(rows: &[Vec<i64>]) -> Result<i64> {
    solve_with_stats(rows).map(|outcome| outcome.optimum)
}

/// Same as [`solve`], also reporting how much of the tree was explored.
pub fn solve_with_stats(rows: &[Vec<i64>]) -> Result<SearchOutcome> {
    check_shape(rows)?;

    let bound = suffix_max_bound(rows);
    let last_row = rows.len() - 1;
    let mut stats = SearchStats::default();
    let mut best: Option<i64> = None;

    // (row, offset, running sum above this value)
    let mut stack = vec![(0, 0, 0i64)];
    while let Some((row, offset, above)) = stack.pop() {
        let running = above + rows[row][offset];
        stats.visited += 1;

        if row == last_row {
            stats.completed += 1;
            best = Some(best.map_or(running, |b| b.max(running)));
            continue;
        }

        // If we can't possibly beat our best, stop here
        if let Some(b) = best {
            if running + bound[row + 1] <= b {
                stats.pruned += 1;
                trace!(row, offset, running, best = b, "pruned");
                continue;
            }
        }

        // Left is pushed first so the right child is searched first
        stack.push((row + 1, offset, running));
        stack.push((row + 1, offset + 1, running));
    }

    // The first path down is never pruned, so there is always a best
    let optimum = best.unwrap_or_default();
    debug!(
        optimum,
        visited = stats.visited,
        pruned = stats.pruned,
        completed = stats.completed,
        "search finished"
    );
    Ok(SearchOutcome { optimum, stats })
}
