//! Relative keys addressing a value inside a triangle row.
//!
//! Keys are measured from the apex column. A row of length `n` uses the keys
//! `(1-n)/2, (3-n)/2, ..., (n-1)/2`, so odd rows get whole keys and even rows
//! get half keys:
//!
//! ```text
//!             0
//!        -0.5   0.5
//!      -1     0     1
//!  -1.5  -0.5   0.5   1.5
//! ```
//!
//! The children of key `k` are always `k - 0.5` and `k + 0.5` one row down,
//! whatever the length of either row. [`Key`] stores the doubled key so this
//! stays integer arithmetic.

use std::fmt;

/// A relative key, stored in half units (`Key::from_half_units(1)` is `0.5`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(i64);

impl Key {
    /// The apex key, `0`.
    pub const APEX: Key = Key(0);

    pub const fn from_half_units(half_units: i64) -> Self {
        Key(half_units)
    }

    pub const fn half_units(self) -> i64 {
        self.0
    }

    /// Builds a key from its decimal value.
    ///
    /// Returns `None` unless `value` is a finite multiple of `0.5`.
    ///
    /// # Example
    ///
    /// ```
    /// use triangle::Key;
    ///
    /// assert_eq!(Key::from_f64(-1.5), Some(Key::from_half_units(-3)));
    /// assert_eq!(Key::from_f64(0.25), None);
    /// ```
    pub fn from_f64(value: f64) -> Option<Self> {
        let doubled = value * 2.0;
        if !doubled.is_finite() || doubled.fract() != 0.0 || doubled.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Key(doubled as i64))
    }

    /// The key one row down and half a column to the left.
    pub const fn left(self) -> Self {
        Key(self.0 - 1)
    }

    /// The key one row down and half a column to the right.
    pub const fn right(self) -> Self {
        Key(self.0 + 1)
    }

    /// The leftmost key of a row holding `len` values.
    pub const fn first(len: usize) -> Self {
        Key(1 - len as i64)
    }

    /// The key of the value at 0-based `offset` in a row holding `len` values.
    pub const fn from_offset(offset: usize, len: usize) -> Self {
        Key(2 * offset as i64 + 1 - len as i64)
    }

    /// The 0-based position of this key in a row holding `len` values, if the
    /// key belongs to that row.
    ///
    /// # Example
    ///
    /// ```
    /// use triangle::Key;
    ///
    /// let half = Key::from_half_units(1);
    /// assert_eq!(half.offset(2), Some(1));
    /// assert_eq!(half.offset(4), Some(2));
    /// // wrong parity for an odd row
    /// assert_eq!(half.offset(3), None);
    /// ```
    pub fn offset(self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let shifted = self.0.checked_add(len as i64 - 1)?;
        let span = 2 * (len as i64 - 1);
        if shifted < 0 || shifted > span || shifted % 2 != 0 {
            return None;
        }
        Some((shifted / 2) as usize)
    }

    /// Iterates the keys of a row holding `len` values from left to right.
    pub fn row_keys(len: usize) -> impl DoubleEndedIterator<Item = Key> + ExactSizeIterator {
        (0..len).map(move |offset| Key::from_offset(offset, len))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}", self.0 as f64 / 2.0)
        }
    }
}
