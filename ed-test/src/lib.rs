//! Shared helpers to test distance functions against independent references.
use itertools::Itertools;
use rand::{seq::IteratorRandom, thread_rng, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use ed_types::{generate::*, seq_to_string, Cost, Seq, Sequence};

/// Hand-picked pairs, including the ones used in the documentation.
pub fn test_sequences() -> Vec<(Seq<'static>, Seq<'static>)> {
    vec![
        (b"", b""),
        (b"", b"abc"),
        (b"a", b""),
        (b"ab", b"ba"),
        (b"abc", b"ca"),
        (b"qwert", b"qewtr"),
        (b"kitten", b"sitting"),
        (b"abab", b"baba"),
        (b"aabb", b"abab"),
        (b"TTGGGTCAATCAGCCAGTTTTTA", b"TTTGAGTGGGTCATCACCGATTTTAT"),
        (b"ACTGACCAGT", b"CCGACAGGA"),
        (b"AGTTTTAT", b"ACCGATTTTTA"),
        (b"CTCTCTTCTCTCTCTA", b"CCTCTCTCTCTCCTCTC"),
        (b"AGTGGGTTGCCTTCATTCCG", b"AGTGGTGTCTTCAGGCCTTCATTCCG"),
        (b"GCACGTCGCCCCCCGCCCGCG", b"GCCCGCCCGCCCGCCCCCGCCCCC"),
    ]
}

const FIXED: bool = false;

/// Random pairs over a range of lengths and error rates.
///
/// The second sequence is a mutated copy of the first (see
/// [`ed_types::generate::mutate`]), so transpositions occur regularly.
pub fn gen_seqs() -> impl Iterator<Item = ((Sequence, Sequence), (usize, f32, u64))> {
    let rng = &mut thread_rng();
    let mut ns = vec![
        0usize, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 30, 40, 50,
        60, 70, 80, 90, 100, 150, 200, 255, 256, 257, 300,
    ];
    let mut es = vec![0.0f32, 0.01, 0.05, 0.10, 0.20, 0.30, 0.50, 0.70, 1.0];

    // Pick a random subset of the above. Runs often enough to get good coverage.
    if !FIXED {
        let nl = ns.len();
        ns = ns.into_iter().choose_multiple(rng, nl / 3);
        let el = es.len();
        es = es.into_iter().choose_multiple(rng, el / 3);
    }

    // Run each test on a new random seed for increased coverage over time.
    let seed = if FIXED {
        31415
    } else {
        rng.gen_range(0..u64::MAX)
    };
    ns.into_iter()
        .cartesian_product(es)
        .map(move |(n, e)| {
            let rng = &mut ChaCha8Rng::seed_from_u64(seed);
            (generate_pair(n, e, DNA, rng), (n, e, seed))
        })
}

/// All sequences over `alphabet` of length at most `max_len`, shortest first.
pub fn all_seqs(alphabet: Seq, max_len: usize) -> Vec<Sequence> {
    let mut seqs = vec![vec![]];
    let mut last: Vec<Sequence> = vec![vec![]];
    for _ in 0..max_len {
        last = last
            .iter()
            .cartesian_product(alphabet)
            .map(|(s, &c)| {
                let mut s = s.clone();
                s.push(c);
                s
            })
            .collect();
        seqs.extend(last.iter().cloned());
    }
    seqs
}

/// Reference Levenshtein distance.
pub fn levenshtein(a: Seq, b: Seq) -> Cost {
    triple_accel::levenshtein(a, b) as Cost
}

/// Reference restricted Damerau-Levenshtein (optimal string alignment) distance.
///
/// `triple_accel::rdamerau` is not used: it overestimates some distances,
/// e.g. it gives 2 for `ab` and `aba`.
pub fn rdamerau(a: Seq, b: Seq) -> Cost {
    let (m, n) = (a.len(), b.len());
    let mut d = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in d[0].iter_mut().enumerate() {
        *cell = j;
    }
    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d[i][j] = d[i][j].min(d[i - 2][j - 2] + 1);
            }
        }
    }
    d[m][n] as Cost
}

pub fn test_distance_on_input(
    a: Seq,
    b: Seq,
    distance: impl Fn(Seq, Seq) -> Cost,
    reference: impl Fn(Seq, Seq) -> Cost,
    params: &str,
) {
    // Set to true for local debugging.
    const D: bool = false;

    if D {
        eprintln!("{params}\na {}\nb {}", seq_to_string(a), seq_to_string(b));
    }
    let expected = reference(a, b);
    let cost = distance(a, b);
    assert_eq!(
        expected,
        cost,
        "\n{params}\nlet a = \"{}\".as_bytes();\nlet b = \"{}\".as_bytes();",
        seq_to_string(a),
        seq_to_string(b),
    );
}

/// Test `distance` against `reference` on the hardcoded pairs and on random
/// pairs with length up to `max_n`.
pub fn test_distance_up_to(
    distance: impl Fn(Seq, Seq) -> Cost,
    reference: impl Fn(Seq, Seq) -> Cost,
    max_n: usize,
) {
    for (a, b) in test_sequences() {
        if a.len().max(b.len()) > max_n {
            continue;
        }
        test_distance_on_input(a, b, &distance, &reference, "hardcoded test_sequences");
    }
    for ((a, b), (n, e, seed)) in gen_seqs() {
        if n > max_n {
            continue;
        }
        test_distance_on_input(
            &a,
            &b,
            &distance,
            &reference,
            &format!("seed {seed:>20} n {n:>5} e {e:>.2}"),
        );
    }
}

/// As [`test_distance_up_to`], without a length limit.
pub fn test_distance(distance: impl Fn(Seq, Seq) -> Cost, reference: impl Fn(Seq, Seq) -> Cost) {
    test_distance_up_to(distance, reference, usize::MAX);
}

/// Test `distance` against `reference` on every pair of sequences over
/// `alphabet` of length at most `max_len`.
pub fn test_exhaustive(
    distance: impl Fn(Seq, Seq) -> Cost,
    reference: impl Fn(Seq, Seq) -> Cost,
    alphabet: Seq,
    max_len: usize,
) {
    let seqs = all_seqs(alphabet, max_len);
    for (a, b) in seqs.iter().cartesian_product(&seqs) {
        test_distance_on_input(a, b, &distance, &reference, "exhaustive");
    }
}
