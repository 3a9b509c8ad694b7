use std::path::PathBuf;

use crate::key::Key;

/// Contract violations raised by the triangle store and the solvers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriangleError {
    #[error("a triangle needs at least one row")]
    Empty,

    #[error("row {row} has {found} values, expected {expected}")]
    Shape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("key {key} is not present in row {row}")]
    Key { row: usize, key: Key },

    #[error("must discard fewer than {rank} rows; not {requested}")]
    Range { requested: usize, rank: usize },

    #[error("block size must be at least 1; not {0}")]
    BlockSize(usize),
}

/// Errors raised while turning text into a triangle.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: '{token}' is not an integer")]
    InvalidNumber { line: usize, token: String },

    #[error(transparent)]
    Triangle(#[from] TriangleError),
}

pub type Result<T, E = TriangleError> = std::result::Result<T, E>;
