use std::fmt;

use tracing::trace;

use crate::error::{Result, TriangleError};
use crate::key::Key;

/// A triangle of numbers like the following
///
/// ```text
///          1
///        3   2
///      4   6   5
///   10   9   8   7
/// ```
///
/// Row `r` holds exactly `r + 1` values and is addressed by relative [`Key`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triangle {
    rows: Vec<Vec<i64>>,
}

/// Checks that `rows` is non-empty and that row `r` holds `r + 1` values.
pub(crate) fn check_shape(rows: &[Vec<i64>]) -> Result<()> {
    if rows.is_empty() {
        return Err(TriangleError::Empty);
    }
    for (row, values) in rows.iter().enumerate() {
        if values.len() != row + 1 {
            return Err(TriangleError::Shape {
                row,
                expected: row + 1,
                found: values.len(),
            });
        }
    }
    Ok(())
}

impl Triangle {
    /// Builds a triangle from its rows, apex first.
    ///
    /// # Example
    ///
    /// ```
    /// use triangle::{Triangle, TriangleError};
    ///
    /// let t = Triangle::new(vec![vec![1], vec![3, 2]]).unwrap();
    /// assert_eq!(t.rank(), 2);
    ///
    /// let err = Triangle::new(vec![vec![1], vec![3]]).unwrap_err();
    /// assert_eq!(err, TriangleError::Shape { row: 1, expected: 2, found: 1 });
    /// ```
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self> {
        check_shape(&rows)?;
        Ok(Triangle { rows })
    }

    /// Number of rows.
    pub fn rank(&self) -> usize {
        self.rows.len()
    }

    /// The single value of row 0.
    pub fn apex(&self) -> i64 {
        self.rows[0][0]
    }

    pub fn row(&self, row: usize) -> Option<&[i64]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<i64>> {
        self.rows
    }

    /// The keys of `row` from left to right; empty past the last row.
    pub fn keys(&self, row: usize) -> impl DoubleEndedIterator<Item = Key> + ExactSizeIterator + use<> {
        let len = if row < self.rank() { row + 1 } else { 0 };
        Key::row_keys(len)
    }

    fn offset(&self, row: usize, key: Key) -> Result<usize> {
        if row >= self.rank() {
            return Err(TriangleError::Key { row, key });
        }
        key.offset(row + 1).ok_or(TriangleError::Key { row, key })
    }

    /// The value at `key` in `row`.
    ///
    /// # Example
    ///
    /// ```
    /// use triangle::{Key, Triangle};
    ///
    /// let t = Triangle::new(vec![vec![1], vec![3, 2], vec![4, 6, 5]]).unwrap();
    /// assert_eq!(t.get(1, Key::APEX.right()), Ok(2));
    /// assert_eq!(t.get(2, Key::from_half_units(-2)), Ok(4));
    /// assert!(t.get(2, Key::from_half_units(1)).is_err());
    /// ```
    pub fn get(&self, row: usize, key: Key) -> Result<i64> {
        let offset = self.offset(row, key)?;
        Ok(self.rows[row][offset])
    }

    /// Overwrites the value at `key` in `row`.
    pub fn set(&mut self, row: usize, key: Key, value: i64) -> Result<()> {
        let offset = self.offset(row, key)?;
        self.rows[row][offset] = value;
        Ok(())
    }

    /// Replaces every value of `row` at once. `values` must hold `row + 1`
    /// entries.
    pub(crate) fn replace_row(&mut self, row: usize, values: Vec<i64>) {
        debug_assert_eq!(values.len(), row + 1);
        self.rows[row] = values;
    }

    /// Throws away the last `nrows` rows.
    ///
    /// Fails without touching the triangle unless `nrows < rank`, so at least
    /// one row always remains.
    ///
    /// # Example
    ///
    /// ```
    /// use triangle::{Triangle, TriangleError};
    ///
    /// let mut t = Triangle::new(vec![vec![1], vec![3, 2], vec![4, 6, 5]]).unwrap();
    /// assert_eq!(t.truncate(3), Err(TriangleError::Range { requested: 3, rank: 3 }));
    /// t.truncate(2).unwrap();
    /// assert_eq!(t.rank(), 1);
    /// ```
    pub fn truncate(&mut self, nrows: usize) -> Result<()> {
        let rank = self.rank();
        if nrows >= rank {
            return Err(TriangleError::Range {
                requested: nrows,
                rank,
            });
        }
        self.rows.truncate(rank - nrows);
        trace!(discarded = nrows, rank = self.rank(), "truncated triangle");
        Ok(())
    }

    /// The triangle whose tip is `key` in `row`, spanning down to the last row.
    ///
    /// For the triangle in the type docs, `subtriangle(1, Key::APEX.left())`
    /// is
    ///
    /// ```text
    ///      3
    ///    4   6
    ///  10  9   8
    /// ```
    pub fn subtriangle(&self, row: usize, key: Key) -> Result<Triangle> {
        let offset = self.offset(row, key)?;
        Ok(self.subtriangle_at(row, offset))
    }

    /// Same as [`Triangle::subtriangle`] with the tip given by column offset.
    /// The offset must be valid for `row`.
    pub(crate) fn subtriangle_at(&self, row: usize, offset: usize) -> Triangle {
        // Row `row + i` contributes `i + 1` values. The first key drops by half
        // a column each row, which keeps the 0-based start column fixed.
        let rows = self.rows[row..]
            .iter()
            .enumerate()
            .map(|(i, values)| values[offset..=offset + i].to_vec())
            .collect();
        Triangle { rows }
    }

    /// The sub-triangles rooted at the left and right children of the apex,
    /// or `None` for a single-row triangle.
    pub fn children(&self) -> Option<(Triangle, Triangle)> {
        if self.rank() < 2 {
            return None;
        }
        Some((self.subtriangle_at(1, 0), self.subtriangle_at(1, 1)))
    }
}

impl TryFrom<Vec<Vec<i64>>> for Triangle {
    type Error = TriangleError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self> {
        Triangle::new(rows)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, values) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Triangle {
        Triangle::new(vec![vec![1], vec![3, 2], vec![4, 6, 5], vec![10, 9, 8, 7]]).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_shapes() {
        assert_eq!(Triangle::new(vec![]), Err(TriangleError::Empty));
        assert_eq!(
            Triangle::new(vec![vec![1, 2]]),
            Err(TriangleError::Shape { row: 0, expected: 1, found: 2 })
        );
        assert_eq!(
            Triangle::new(vec![vec![1], vec![2, 3], vec![4, 5, 6, 7]]),
            Err(TriangleError::Shape { row: 2, expected: 3, found: 4 })
        );
    }

    #[test]
    fn test_get_by_relative_key() {
        let t = example();
        assert_eq!(t.get(0, Key::APEX), Ok(1));
        assert_eq!(t.get(1, Key::APEX.left()), Ok(3));
        assert_eq!(t.get(1, Key::APEX.right()), Ok(2));
        assert_eq!(t.get(2, Key::APEX), Ok(6));
        assert_eq!(t.get(3, Key::from_f64(-1.5).unwrap()), Ok(10));
        assert_eq!(t.get(3, Key::from_f64(1.5).unwrap()), Ok(7));
    }

    #[test]
    fn test_get_rejects_bad_keys() {
        let t = example();
        // wrong parity
        let half = Key::from_half_units(1);
        assert_eq!(t.get(2, half), Err(TriangleError::Key { row: 2, key: half }));
        // out of span
        let far = Key::from_half_units(4);
        assert_eq!(t.get(2, far), Err(TriangleError::Key { row: 2, key: far }));
        // no such row
        assert_eq!(t.get(4, Key::APEX), Err(TriangleError::Key { row: 4, key: Key::APEX }));
        // extreme keys
        for half_units in [i64::MAX, i64::MIN, i64::MAX - 1] {
            let key = Key::from_half_units(half_units);
            assert_eq!(t.get(1, key), Err(TriangleError::Key { row: 1, key }));
            assert_eq!(t.subtriangle(1, key), Err(TriangleError::Key { row: 1, key }));
        }
    }

    #[test]
    fn test_set() {
        let mut t = example();
        t.set(2, Key::from_half_units(2), 50).unwrap();
        assert_eq!(t.get(2, Key::from_half_units(2)), Ok(50));
        assert!(t.set(0, Key::APEX.right(), 1).is_err());
    }

    #[test]
    fn test_keys() {
        let t = example();
        assert_eq!(t.keys(0).collect::<Vec<_>>(), vec![Key::APEX]);
        assert_eq!(t.keys(3).len(), 4);
        assert_eq!(t.keys(4).len(), 0);
        for row in 0..t.rank() {
            for key in t.keys(row) {
                assert!(t.get(row, key).is_ok());
            }
        }
    }

    #[test]
    fn test_truncate_boundaries() {
        let mut t = example();
        assert_eq!(t.truncate(4), Err(TriangleError::Range { requested: 4, rank: 4 }));
        assert_eq!(t.rank(), 4);

        t.truncate(0).unwrap();
        assert_eq!(t.rank(), 4);

        t.truncate(3).unwrap();
        assert_eq!(t.rank(), 1);
        assert_eq!(t.truncate(1), Err(TriangleError::Range { requested: 1, rank: 1 }));
    }

    #[test]
    fn test_truncate_reduces_rank() {
        for n in 0..4 {
            let mut t = example();
            t.truncate(n).unwrap();
            assert_eq!(t.rank(), 4 - n);
        }
    }

    #[test]
    fn test_subtriangle() {
        let t = example();
        let left = t.subtriangle(1, Key::APEX.left()).unwrap();
        assert_eq!(left.rows(), &[vec![3], vec![4, 6], vec![10, 9, 8]]);

        let right = t.subtriangle(1, Key::APEX.right()).unwrap();
        assert_eq!(right.rows(), &[vec![2], vec![6, 5], vec![9, 8, 7]]);

        let corner = t.subtriangle(3, Key::from_f64(0.5).unwrap()).unwrap();
        assert_eq!(corner.rows(), &[vec![8]]);

        let middle = t.subtriangle(2, Key::APEX).unwrap();
        assert_eq!(middle.rows(), &[vec![6], vec![9, 8]]);
    }

    #[test]
    fn test_subtriangle_rejects_bad_keys() {
        let t = example();
        assert!(t.subtriangle(2, Key::from_half_units(1)).is_err());
        assert!(t.subtriangle(4, Key::APEX).is_err());
    }

    #[test]
    fn test_children() {
        let t = example();
        let (left, right) = t.children().unwrap();
        assert_eq!(left, t.subtriangle(1, Key::APEX.left()).unwrap());
        assert_eq!(right, t.subtriangle(1, Key::APEX.right()).unwrap());

        let single = Triangle::new(vec![vec![5]]).unwrap();
        assert!(single.children().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(example().to_string(), "1\n3 2\n4 6 5\n10 9 8 7");
    }
}
