//! Runtime selection of a metric and an evaluator.
use crate::{
    error::{Error, Result},
    levenshtein, recursive, transposition, CostTable,
};
use ed_types::Cost;
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Longest input accepted by the recursive evaluators by default.
pub const MAX_RECURSIVE_LEN: usize = 10;

#[derive(
    clap::ValueEnum, Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash,
)]
pub enum Metric {
    /// Insertions, deletions and substitutions.
    #[default]
    Simple,
    /// Additionally swaps of adjacent symbols.
    Transposition,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Simple, Metric::Transposition];
}

impl Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Simple => write!(f, "Levenshtein"),
            Metric::Transposition => write!(f, "Damerau-Levenshtein"),
        }
    }
}

#[derive(
    clap::ValueEnum, Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash,
)]
pub enum Evaluator {
    /// Fill the DP table.
    #[default]
    Table,
    /// Evaluate the recurrence top-down. Exponential time.
    Recursive,
}

impl Evaluator {
    pub const ALL: [Evaluator; 2] = [Evaluator::Table, Evaluator::Recursive];
}

impl Display for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Evaluator::Table => write!(f, "table"),
            Evaluator::Recursive => write!(f, "recursive"),
        }
    }
}

fn default_max_recursive_len() -> usize {
    MAX_RECURSIVE_LEN
}

/// The result of [`DistanceParams::evaluate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub distance: Cost,
    /// Only the table evaluator produces a table, and only when asked to.
    pub table: Option<CostTable>,
}

/// A metric together with the way to evaluate it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DistanceParams {
    pub metric: Metric,
    pub evaluator: Evaluator,
    /// Inputs longer than this are refused by the recursive evaluator.
    #[serde(default = "default_max_recursive_len")]
    pub max_recursive_len: usize,
}

impl Default for DistanceParams {
    fn default() -> Self {
        Self::new(Metric::default(), Evaluator::default())
    }
}

impl DistanceParams {
    pub fn new(metric: Metric, evaluator: Evaluator) -> Self {
        Self {
            metric,
            evaluator,
            max_recursive_len: MAX_RECURSIVE_LEN,
        }
    }

    /// All metric/evaluator combinations, grouped by metric.
    pub fn all() -> Vec<Self> {
        Metric::ALL
            .into_iter()
            .flat_map(|m| Evaluator::ALL.into_iter().map(move |e| Self::new(m, e)))
            .collect()
    }

    /// A title like `Damerau-Levenshtein (table)`.
    pub fn name(&self) -> String {
        format!("{} ({})", self.metric, self.evaluator)
    }

    /// Compute the distance between `a` and `b`.
    ///
    /// Fails with [`Error::RecursionLimit`] when the recursive evaluator is
    /// selected and either input is longer than `max_recursive_len`.
    pub fn evaluate<T: PartialEq>(
        &self,
        a: &[T],
        b: &[T],
        want_table: bool,
    ) -> Result<Evaluation> {
        trace!(
            "Evaluating {} on sequences of length {} and {}",
            self.name(),
            a.len(),
            b.len()
        );
        let (distance, table) = match self.evaluator {
            Evaluator::Table => match self.metric {
                Metric::Simple => levenshtein::simple_distance(a, b, want_table),
                Metric::Transposition => transposition::transposition_distance(a, b, want_table),
            },
            Evaluator::Recursive => {
                if a.len() > self.max_recursive_len || b.len() > self.max_recursive_len {
                    return Err(Error::RecursionLimit {
                        len_a: a.len(),
                        len_b: b.len(),
                        limit: self.max_recursive_len,
                    });
                }
                let distance = match self.metric {
                    Metric::Simple => recursive::simple_distance_recursive(a, b),
                    Metric::Transposition => recursive::transposition_distance_recursive(a, b),
                };
                (distance, None)
            }
        };
        Ok(Evaluation { distance, table })
    }
}
