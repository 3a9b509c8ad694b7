use std::fs;
use std::path::Path;

use crate::error::ParseError;
use crate::store::Triangle;

/// Splits text into rows of whitespace separated integers, one row per
/// non-blank line.
///
/// # Example
///
/// ```
/// use triangle::parse::parse_rows;
///
/// let rows = parse_rows("1\n3 2\n\n4 6 5\n").unwrap();
/// assert_eq!(rows, vec![vec![1], vec![3, 2], vec![4, 6, 5]]);
/// ```
pub fn parse_rows(text: &str) -> Result<Vec<Vec<i64>>, ParseError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.split_whitespace()
                .map(|token| {
                    token.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
                        line: i + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<i64>, _>>()
        })
        .collect()
}

pub fn parse_triangle(text: &str) -> Result<Triangle, ParseError> {
    Ok(Triangle::new(parse_rows(text)?)?)
}

/// Reads the file at `path` and builds a [`Triangle`] from it.
pub fn read_triangle_file(path: impl AsRef<Path>) -> Result<Triangle, ParseError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_triangle(&text)
}
