//! Command line harness around `ed-core`.
//!
//! - `ed compare`: print the distances between two strings, optionally with
//!   the full cost tables.
//! - `ed run`: evaluate pairs read from a file or generated at random, and
//!   report per-pair and average stats.
//! - `ed bench`: time the evaluators as a function of the sequence length.
pub mod bench;
pub mod cli;
pub mod display;
pub mod input;
pub mod stats;
