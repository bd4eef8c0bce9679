//! Top-down evaluation of both recurrences, without memoization.
//!
//! Every call branches into three (or four) calls on shorter prefixes, so the
//! number of calls grows like the Delannoy numbers: about `5.8^n` for two
//! sequences of length `n`. Length 10 takes tens of millions of calls. Use
//! these only to cross-check the table based engines on short inputs;
//! [`DistanceParams`](crate::DistanceParams) refuses longer ones.
use crate::{levenshtein::sub_cost, transposition::transposed};
use ed_types::{len_cost, Cost};
use std::cmp::{max, min};

/// Recursive Levenshtein distance. Exponential time.
pub fn simple_distance_recursive<T: PartialEq>(a: &[T], b: &[T]) -> Cost {
    let (i, j) = (a.len(), b.len());
    if i == 0 || j == 0 {
        return len_cost(max(i, j));
    }
    let delete = simple_distance_recursive(&a[..i - 1], b) + 1;
    let insert = simple_distance_recursive(a, &b[..j - 1]) + 1;
    let subst =
        simple_distance_recursive(&a[..i - 1], &b[..j - 1]) + sub_cost(&a[i - 1], &b[j - 1]);
    min(min(delete, insert), subst)
}

/// Recursive restricted Damerau-Levenshtein distance. Exponential time.
pub fn transposition_distance_recursive<T: PartialEq>(a: &[T], b: &[T]) -> Cost {
    let (i, j) = (a.len(), b.len());
    if i == 0 || j == 0 {
        return len_cost(max(i, j));
    }
    let delete = transposition_distance_recursive(&a[..i - 1], b) + 1;
    let insert = transposition_distance_recursive(a, &b[..j - 1]) + 1;
    let subst = transposition_distance_recursive(&a[..i - 1], &b[..j - 1])
        + sub_cost(&a[i - 1], &b[j - 1]);
    let cost = min(min(delete, insert), subst);
    if transposed(a, b, i, j) {
        min(cost, transposition_distance_recursive(&a[..i - 2], &b[..j - 2]) + 1)
    } else {
        cost
    }
}
