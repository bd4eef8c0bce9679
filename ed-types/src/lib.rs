//! Basic types shared by the edit distance crates.
//!
//! Distances and table entries are [`Cost`]s. The harness and test crates work
//! on byte sequences ([`Seq`] and [`Sequence`]); the distance functions
//! themselves accept slices of any symbol type that can be compared for
//! equality.

pub mod generate;

/// Type for distances and for entries of the DP tables.
pub type Cost = i32;

/// An owned sequence.
pub type Sequence = Vec<u8>;
/// A sequence slice.
pub type Seq<'a> = &'a [u8];

/// Convert a length into a cost.
///
/// Lengths beyond [`Cost::MAX`] saturate, and fail a debug assertion.
#[inline]
pub fn len_cost(len: usize) -> Cost {
    let cost = Cost::try_from(len);
    debug_assert!(cost.is_ok(), "length {len} does not fit in a Cost");
    cost.unwrap_or(Cost::MAX)
}

/// Render a sequence for printing. Invalid UTF-8 is replaced.
pub fn seq_to_string(seq: Seq) -> String {
    String::from_utf8_lossy(seq).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_to_string_roundtrips_ascii() {
        assert_eq!(seq_to_string(b"qwert"), "qwert");
        assert_eq!(seq_to_string(b""), "");
    }

    #[test]
    fn len_cost_in_range() {
        assert_eq!(len_cost(0), 0);
        assert_eq!(len_cost(17), 17);
        assert_eq!(len_cost(Cost::MAX as usize), Cost::MAX);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not fit in a Cost")]
    fn len_cost_overflow() {
        len_cost(Cost::MAX as usize + 1);
    }
}
