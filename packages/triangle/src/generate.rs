//! Random test triangles.

use std::io::{self, Write};

use rand::Rng;

use crate::store::Triangle;

/// Smallest generated value.
pub const MIN_VALUE: i64 = 1;
/// Largest generated value.
pub const MAX_VALUE: i64 = 10_000;

/// `size` rows of values drawn uniformly from `MIN_VALUE..=MAX_VALUE`.
pub fn random_rows<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<Vec<i64>> {
    (1..=size)
        .map(|len| (0..len).map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE)).collect())
        .collect()
}

/// A random triangle of `size` rows, or `None` when `size` is zero.
pub fn random_triangle<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Option<Triangle> {
    Triangle::new(random_rows(size, rng)).ok()
}

/// Writes `rows` one per line, values separated by single spaces.
pub fn write_rows<W: Write>(rows: &[Vec<i64>], mut out: W) -> io::Result<()> {
    for row in rows {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    out.flush()
}
