//! Random sequences for tests, demos and benchmarks.
//!
//! All functions take the random generator as an argument. Callers that want
//! reproducible runs seed a `rand_chacha::ChaCha8Rng` themselves.
use crate::{Seq, Sequence};
use rand::Rng;

/// The alphabet used by the demo and benchmark harness.
pub const LOWERCASE: Seq<'static> = b"abcdefghijklmnopqrstuvwxyz";
/// A 4 letter alphabet, on which random pairs share many symbols.
pub const DNA: Seq<'static> = b"ACGT";

fn random_symbol(alphabet: Seq, rng: &mut impl Rng) -> u8 {
    alphabet[rng.gen_range(0..alphabet.len())]
}

/// `len` symbols drawn uniformly (with replacement) from `alphabet`.
pub fn random_sequence(len: usize, alphabet: Seq, rng: &mut impl Rng) -> Sequence {
    assert!(
        len == 0 || !alphabet.is_empty(),
        "Cannot draw {len} symbols from an empty alphabet"
    );
    (0..len).map(|_| random_symbol(alphabet, rng)).collect()
}

/// Two independent random sequences of length `len`.
pub fn random_pair(len: usize, alphabet: Seq, rng: &mut impl Rng) -> (Sequence, Sequence) {
    (
        random_sequence(len, alphabet, rng),
        random_sequence(len, alphabet, rng),
    )
}

/// Apply `ceil(e * |a|)` random edits to a copy of `a`.
///
/// Each edit is a substitution, insertion, deletion or swap of two adjacent
/// symbols, chosen uniformly. Edits that do not apply to the current sequence
/// (e.g. deleting from an empty one) are skipped, so the returned sequence is
/// at distance at most that many edits from `a`.
pub fn mutate(a: Seq, e: f32, alphabet: Seq, rng: &mut impl Rng) -> Sequence {
    let mut b = a.to_vec();
    let edits = (e * a.len() as f32).ceil() as usize;
    for _ in 0..edits {
        match rng.gen_range(0..4) {
            // Substitution
            0 if !b.is_empty() => {
                let i = rng.gen_range(0..b.len());
                b[i] = random_symbol(alphabet, rng);
            }
            // Insertion
            1 => {
                let i = rng.gen_range(0..=b.len());
                b.insert(i, random_symbol(alphabet, rng));
            }
            // Deletion
            2 if !b.is_empty() => {
                let i = rng.gen_range(0..b.len());
                b.remove(i);
            }
            // Transposition
            3 if b.len() >= 2 => {
                let i = rng.gen_range(0..b.len() - 1);
                b.swap(i, i + 1);
            }
            _ => {}
        }
    }
    b
}

/// A random sequence of length `n`, and a copy of it with error rate `e`.
pub fn generate_pair(n: usize, e: f32, alphabet: Seq, rng: &mut impl Rng) -> (Sequence, Sequence) {
    let a = random_sequence(n, alphabet, rng);
    let b = mutate(&a, e, alphabet, rng);
    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn sequences_use_alphabet() {
        let rng = &mut ChaCha8Rng::seed_from_u64(31415);
        for len in [0, 1, 5, 100] {
            let s = random_sequence(len, DNA, rng);
            assert_eq!(s.len(), len);
            assert!(s.iter().all(|c| DNA.contains(c)));
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let x = random_pair(20, LOWERCASE, &mut ChaCha8Rng::seed_from_u64(7));
        let y = random_pair(20, LOWERCASE, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(x, y);
    }

    #[test]
    fn mutate_changes_length_by_at_most_the_number_of_edits() {
        let rng = &mut ChaCha8Rng::seed_from_u64(1);
        for n in [0, 1, 2, 10, 50] {
            let (a, b) = generate_pair(n, 0.2, DNA, rng);
            let edits = (0.2 * n as f32).ceil() as usize;
            assert!(a.len().abs_diff(b.len()) <= edits);
        }
    }

    #[test]
    fn zero_error_rate_keeps_sequence() {
        let rng = &mut ChaCha8Rng::seed_from_u64(2);
        let (a, b) = generate_pair(30, 0.0, LOWERCASE, rng);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn empty_alphabet_panics() {
        random_sequence(3, b"", &mut ChaCha8Rng::seed_from_u64(0));
    }
}
