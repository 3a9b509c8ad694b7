use crate::error::Result;
use crate::store::check_shape;

/// Solves a triangle by carrying the best sum into each value row by row.
///
/// Each value receives the larger of the sums of its two parents, so the whole
/// triangle is visited once. Used to cross-check the other strategies.
///
/// # Example
///
/// ```
/// use triangle::accumulate;
///
/// let rows = vec![vec![1], vec![3, 2], vec![4, 6, 5], vec![10, 9, 8, 7]];
/// assert_eq!(accumulate::solve(&rows), Ok(19));
/// ```
pub fn solve(rows: &[Vec<i64>]) -> Result<i64> {
    check_shape(rows)?;

    let mut sum: Vec<i64> = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let above = sum;
        sum = row
            .iter()
            .enumerate()
            .map(|(j, &value)| {
                let left_up = if j > 0 { Some(above[j - 1]) } else { None };
                let right_up = if j < i { Some(above[j]) } else { None };
                value + left_up.max(right_up).unwrap_or_default()
            })
            .collect();
    }

    Ok(sum.into_iter().max().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TriangleError;

    const TRIANGLE: &str = "
75
95 64
17 47 82
18 35 87 10
20 04 82 47 65
19 01 23 75 03 34
88 02 77 73 07 63 67
99 65 04 28 06 16 70 92
41 41 26 56 83 40 80 70 33
41 48 72 33 47 32 37 16 94 29
53 71 44 65 25 43 91 52 97 51 14
70 11 33 28 77 73 17 78 39 68 17 57
91 71 52 38 17 14 91 43 58 50 27 29 48
63 66 04 68 89 53 67 30 73 16 69 87 40 31
04 62 98 27 23 09 70 98 73 93 38 53 60 04 23
";

    #[test]
    fn test_fifteen_rows() {
        let rows: Vec<Vec<i64>> = TRIANGLE
            .trim()
            .lines()
            .map(|line| {
                line.split_whitespace()
                    .map(|s| s.parse().unwrap())
                    .collect()
            })
            .collect();
        assert_eq!(solve(&rows), Ok(1074));
    }

    #[test]
    fn test_small() {
        assert_eq!(solve(&[vec![5]]), Ok(5));
        assert_eq!(solve(&[vec![1], vec![10, 20]]), Ok(21));
        assert_eq!(solve(&[vec![-1], vec![-5, -2], vec![-1, -9, -3]]), Ok(-6));
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert_eq!(solve(&[]), Err(TriangleError::Empty));
        assert_eq!(
            solve(&[vec![1], vec![2, 3, 4]]),
            Err(TriangleError::Shape { row: 1, expected: 2, found: 3 })
        );
    }
}
