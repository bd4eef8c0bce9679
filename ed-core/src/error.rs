use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The recursive evaluators take exponential time; refuse long inputs.
    #[error(
        "recursive evaluation of sequences of length {len_a} and {len_b} exceeds the limit of {limit} symbols"
    )]
    RecursionLimit {
        len_a: usize,
        len_b: usize,
        limit: usize,
    },
}
