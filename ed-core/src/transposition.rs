//! Restricted Damerau-Levenshtein distance, also known as optimal string
//! alignment: Levenshtein plus swapping two adjacent symbols at cost 1.
//!
//! Only transpositions of symbols that are adjacent in both sequences are
//! found; a transposed pair is never edited further.
use crate::{levenshtein::sub_cost, table::CostTable};
use ed_types::Cost;
use std::cmp::min;

/// Whether the last two symbols of `a[..i]` are the last two symbols of
/// `b[..j]` in swapped order.
#[inline]
pub(crate) fn transposed<T: PartialEq>(a: &[T], b: &[T], i: usize, j: usize) -> bool {
    i >= 2 && j >= 2 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1]
}

pub(crate) fn fill<T: PartialEq>(a: &[T], b: &[T]) -> CostTable {
    let mut table = CostTable::with_boundary(a.len(), b.len());
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let delete = table[(i - 1, j)] + 1;
            let insert = table[(i, j - 1)] + 1;
            let subst = table[(i - 1, j - 1)] + sub_cost(&a[i - 1], &b[j - 1]);
            // None when no transposition ends at (i, j).
            let transpose = transposed(a, b, i, j).then(|| table[(i - 2, j - 2)] + 1);
            let cost = min(min(delete, insert), subst);
            table.set(i, j, transpose.map_or(cost, |t| min(cost, t)));
        }
    }
    table
}

/// The minimal number of insertions, deletions, substitutions and swaps of
/// adjacent symbols that transform `a` into `b`.
///
/// Never larger than [`simple_distance`](crate::simple_distance).
///
/// ```
/// use ed_core::transposition_distance;
/// assert_eq!(transposition_distance(b"ab", b"ba", false).0, 1);
/// assert_eq!(transposition_distance(b"qwert", b"qewtr", false).0, 2);
/// ```
pub fn transposition_distance<T: PartialEq>(
    a: &[T],
    b: &[T],
    want_table: bool,
) -> (Cost, Option<CostTable>) {
    let table = fill(a, b);
    (table.distance(), want_table.then_some(table))
}
