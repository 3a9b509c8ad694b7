use crate::store::Triangle;

/// Largest rank [`solve_small`] will enumerate.
pub const MAX_DIRECT_RANK: usize = 4;

/// Solves a triangle of at most [`MAX_DIRECT_RANK`] rows by trying every path.
///
/// A 4-row triangle has only 8 paths, so enumerating them is cheaper than
/// splitting it further. Returns `None` for larger triangles.
///
/// # Example
///
/// ```
/// use triangle::{Triangle, direct::solve_small};
///
/// let t = Triangle::new(vec![vec![1], vec![3, 2], vec![4, 6, 5], vec![10, 9, 8, 7]]).unwrap();
/// assert_eq!(solve_small(&t), Some(19));
/// ```
pub fn solve_small(t: &Triangle) -> Option<i64> {
    let rank = t.rank();
    if rank > MAX_DIRECT_RANK {
        return None;
    }

    let rows = t.rows();
    // Bit `r - 1` of the mask picks the right child when stepping into row `r`
    (0..1u32 << (rank - 1))
        .map(|mask| {
            let mut offset = 0;
            let mut sum = rows[0][0];
            for (r, values) in rows.iter().enumerate().skip(1) {
                offset += ((mask >> (r - 1)) & 1) as usize;
                sum += values[offset];
            }
            sum
        })
        .max()
}
