//! Maximum path sums through number triangles.
//!
//! A path starts at the apex and steps to one of the two values diagonally
//! below, down to the base. Three strategies find the best sum:
//!
//! - [`search`]: depth-first search pruned by an upper bound,
//! - [`subtriangles`]: divide and conquer over sub-triangles,
//! - [`reduction`]: bottom-up block reduction, the only one that scales.
//!
//! [`accumulate`] is a plain row-by-row solver used as a reference.

pub mod accumulate;
pub mod direct;
pub mod error;
pub mod generate;
pub mod key;
pub mod parse;
pub mod reduction;
pub mod search;
pub mod store;
pub mod subtriangles;

pub use error::{ParseError, TriangleError};
pub use key::Key;
pub use parse::{parse_rows, parse_triangle, read_triangle_file};
pub use reduction::{DEFAULT_BLOCK_SIZE, Reducer, ReductionOutcome, ReductionStats};
pub use search::{SearchOutcome, SearchStats, suffix_max_bound};
pub use store::Triangle;
