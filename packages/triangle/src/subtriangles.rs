//! Divide and conquer over sub-triangles.
//!
//! The optimum of a triangle is its apex plus the better of the optima of the
//! two sub-triangles whose tips are the apex's children:
//!
//! ```text
//!          1
//!        3   2            1 +    3       |  1 +    2
//!      4   6   5     =         4   6     |       6   5
//!   10   9   8   7           10  9   8   |     9   8   7
//! ```
//!
//! Sub-triangles of at most four rows are solved by enumeration. Every other
//! call splits in two, so this scales as O(2^rank) and is only practical for
//! small triangles or as the fixed-size step of [`crate::reduction`].

use crate::direct::solve_small;
use crate::store::Triangle;

enum Frame {
    Split(Triangle),
    Join(i64),
}

/// Solves `t` by splitting it into sub-triangles until each is small enough
/// to enumerate.
///
/// Works from an explicit stack, so the depth of the split is not limited by
/// the thread's stack.
///
/// # Example
///
/// ```
/// use triangle::{Triangle, subtriangles};
///
/// let t = Triangle::new(vec![
///     vec![1],
///     vec![3, 2],
///     vec![4, 6, 5],
///     vec![10, 9, 8, 7],
///     vec![1, 1, 1, 1, 20],
/// ])
/// .unwrap();
/// assert_eq!(subtriangles::solve(&t), 35);
/// ```
pub fn solve(t: &Triangle) -> i64 {
    if let Some(optimum) = solve_small(t) {
        return optimum;
    }

    let mut frames = vec![Frame::Split(t.clone())];
    let mut optima: Vec<i64> = Vec::new();

    while let Some(frame) = frames.pop() {
        match frame {
            Frame::Split(t) => {
                if let Some(optimum) = solve_small(&t) {
                    optima.push(optimum);
                } else if let Some((left, right)) = t.children() {
                    frames.push(Frame::Join(t.apex()));
                    frames.push(Frame::Split(right));
                    frames.push(Frame::Split(left));
                }
            }
            Frame::Join(apex) => {
                // Both halves were pushed after this frame, so both are solved
                let right = optima.pop().expect("right half solved before join");
                let left = optima.pop().expect("left half solved before join");
                optima.push(apex + left.max(right));
            }
        }
    }

    debug_assert_eq!(optima.len(), 1);
    optima.pop().expect("every split is joined")
}
