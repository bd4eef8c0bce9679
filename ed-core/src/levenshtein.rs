//! Levenshtein distance: single-symbol insertions, deletions and substitutions.
use crate::table::CostTable;
use ed_types::Cost;
use std::cmp::min;

/// 0 for a match, 1 for a substitution.
#[inline]
pub(crate) fn sub_cost<T: PartialEq>(ca: &T, cb: &T) -> Cost {
    if ca == cb {
        0
    } else {
        1
    }
}

/// Fill the table row by row.
pub(crate) fn fill<T: PartialEq>(a: &[T], b: &[T]) -> CostTable {
    let mut table = CostTable::with_boundary(a.len(), b.len());
    for (i0, ca) in a.iter().enumerate() {
        // Change from 0 to 1 based indexing.
        let i = i0 + 1;
        for (j0, cb) in b.iter().enumerate() {
            let j = j0 + 1;
            let delete = table[(i - 1, j)] + 1;
            let insert = table[(i, j - 1)] + 1;
            let subst = table[(i - 1, j - 1)] + sub_cost(ca, cb);
            table.set(i, j, min(min(delete, insert), subst));
        }
    }
    table
}

/// The minimal number of single-symbol insertions, deletions and
/// substitutions that transform `a` into `b`.
///
/// Takes `O(|a|·|b|)` time and memory. When `want_table` is set, the full
/// `(|a|+1) × (|b|+1)` table is returned as well.
///
/// ```
/// use ed_core::simple_distance;
/// let (d, table) = simple_distance(b"kitten", b"sitting", true);
/// assert_eq!(d, 3);
/// assert_eq!(table.unwrap().distance(), 3);
/// ```
pub fn simple_distance<T: PartialEq>(
    a: &[T],
    b: &[T],
    want_table: bool,
) -> (Cost, Option<CostTable>) {
    let table = fill(a, b);
    (table.distance(), want_table.then_some(table))
}
