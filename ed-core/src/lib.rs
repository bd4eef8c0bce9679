//! # Edit distances
//!
//! This crate computes two related edit distances between sequences of any
//! symbol type that supports equality:
//! - [`simple_distance`]: the Levenshtein distance, counting single-symbol
//!   insertions, deletions and substitutions.
//! - [`transposition_distance`]: the restricted Damerau-Levenshtein distance,
//!   which also counts swapping two adjacent symbols as a single edit.
//!
//! Both fill a [`CostTable`] over all pairs of prefixes and can return it for
//! inspection.
//!
//! [`simple_distance_recursive`] and [`transposition_distance_recursive`]
//! evaluate the same recurrences top-down without memoization. They take
//! exponential time and only exist to cross-check the tables on short inputs.
//!
//! [`DistanceParams`] selects a metric and evaluator at runtime, and guards the
//! recursive evaluators against inputs that are too long.

mod error;
mod levenshtein;
mod recursive;
mod transposition;

pub mod params;
pub mod table;


pub use ed_types::Cost;
pub use error::{Error, Result};
pub use levenshtein::simple_distance;
pub use params::{DistanceParams, Evaluation, Evaluator, Metric, MAX_RECURSIVE_LEN};
pub use recursive::{simple_distance_recursive, transposition_distance_recursive};
pub use table::CostTable;
pub use transposition::transposition_distance;
