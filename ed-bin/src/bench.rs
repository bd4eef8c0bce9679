//! Timing of each evaluator as a function of the input length.
use crate::cli::{resolve_seed, BenchArgs};
use anyhow::Context;
use ed_core::{DistanceParams, Evaluator};
use ed_types::{
    generate::{random_pair, LOWERCASE},
    Seq,
};
use itertools::Itertools;
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::{hint::black_box, time::Instant};

/// Mean seconds per call of `params` on `(a, b)` over `times` calls.
///
/// `None` when `params` refuses the input.
pub fn time_params(params: &DistanceParams, a: Seq, b: Seq, times: usize) -> Option<f64> {
    params.evaluate(a, b, false).ok()?;
    let times = times.max(1);
    let start = Instant::now();
    for _ in 0..times {
        let _ = black_box(params.evaluate(black_box(a), black_box(b), false));
    }
    Some(start.elapsed().as_secs_f64() / times as f64)
}

/// The timings of all selected evaluators on one random pair.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchRow {
    pub len: usize,
    /// Seconds per call, in the order of the evaluated params.
    pub seconds: Vec<Option<f64>>,
}

fn measure_len(params: &[DistanceParams], len: usize, times: usize, seed: u64) -> BenchRow {
    let rng = &mut ChaCha8Rng::seed_from_u64(seed.wrapping_add(len as u64));
    let (a, b) = random_pair(len, LOWERCASE, rng);
    BenchRow {
        len,
        seconds: params
            .iter()
            .map(|p| time_params(p, &a, &b, times))
            .collect(),
    }
}

/// Time every params on one pair of each length `1..=max_len`.
///
/// The pair of each length only depends on `seed`, so results are comparable
/// between runs. With a `pool`, lengths are measured in parallel on it.
pub fn measure(
    params: &[DistanceParams],
    max_len: usize,
    times: usize,
    seed: u64,
    pool: Option<&rayon::ThreadPool>,
) -> Vec<BenchRow> {
    let lens = 1..max_len + 1;
    match pool {
        Some(pool) => pool.install(|| {
            lens.into_par_iter()
                .map(|len| measure_len(params, len, times, seed))
                .collect()
        }),
        None => lens
            .map(|len| measure_len(params, len, times, seed))
            .collect(),
    }
}

fn format_seconds(s: Option<f64>) -> String {
    s.map_or_else(|| "-".to_string(), |s| format!("{s:.3e}"))
}

/// Render the rows as tab separated values, with one column per params.
pub fn to_tsv(params: &[DistanceParams], rows: &[BenchRow]) -> String {
    let mut out = std::iter::once("len".to_string())
        .chain(params.iter().map(|p| p.name()))
        .join("\t");
    out.push('\n');
    for row in rows {
        let values = row
            .seconds
            .iter()
            .map(|s| s.map_or(String::new(), |s| s.to_string()));
        out += &std::iter::once(row.len.to_string()).chain(values).join("\t");
        out.push('\n');
    }
    out
}

fn print_rows(params: &[DistanceParams], rows: &[BenchRow]) {
    let names = params.iter().map(|p| p.name()).collect_vec();
    println!(
        "{:>5} {}",
        "len",
        names.iter().map(|n| format!("{n:>32}")).join(" ")
    );
    for row in rows {
        println!(
            "{:>5} {}",
            row.len,
            row.seconds
                .iter()
                .map(|&s| format!("{:>32}", format_seconds(s)))
                .join(" ")
        );
    }
}

pub fn run(args: &BenchArgs) -> anyhow::Result<()> {
    let params = args.selection.params();
    let seed = resolve_seed(args.seed);

    for p in &params {
        if p.evaluator == Evaluator::Recursive && args.max_len > p.max_recursive_len {
            warn!(
                "Skipping {} for lengths above {}",
                p.name(),
                p.max_recursive_len
            );
        }
    }

    let pool = if args.threads > 1 {
        Some(
            rayon::ThreadPoolBuilder::new()
                .num_threads(args.threads)
                .build()
                .context("Failed to build the thread pool")?,
        )
    } else {
        None
    };
    info!(
        "Timing {} evaluators on lengths 1..={} using {} thread(s)",
        params.len(),
        args.max_len,
        args.threads.max(1)
    );
    let rows = measure(&params, args.max_len, args.times, seed, pool.as_ref());
    print_rows(&params, &rows);

    if let Some(output) = &args.output {
        std::fs::write(output, to_tsv(&params, &rows))
            .with_context(|| format!("Failed to write {}", output.display()))?;
        let json = output.with_extension("json");
        std::fs::write(&json, serde_json::to_string_pretty(&params)?)
            .with_context(|| format!("Failed to write {}", json.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use ed_core::Metric;

    fn params() -> Vec<DistanceParams> {
        let mut params = DistanceParams::all();
        for p in &mut params {
            p.max_recursive_len = 3;
        }
        params
    }

    #[test]
    fn recursive_is_skipped_beyond_limit() {
        let params = params();
        let rows = measure(&params, 5, 1, 0, None);
        assert_eq!(rows.iter().map(|r| r.len).collect_vec(), [1, 2, 3, 4, 5]);
        for row in &rows {
            for (p, s) in params.iter().zip(&row.seconds) {
                let skipped = p.evaluator == Evaluator::Recursive && row.len > 3;
                assert_eq!(s.is_none(), skipped, "{} at {}", p.name(), row.len);
            }
        }
    }

    #[test]
    fn parallel_keeps_order() {
        let params = vec![DistanceParams::new(Metric::Transposition, Evaluator::Table)];
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(3)
            .build()
            .unwrap();
        let rows = measure(&params, 20, 2, 7, Some(&pool));
        assert_eq!(rows.iter().map(|r| r.len).collect_vec(), (1..=20).collect_vec());
        assert!(rows.iter().all(|r| r.seconds[0].is_some()));
    }

    #[test]
    fn tsv() {
        let params = vec![
            DistanceParams::new(Metric::Simple, Evaluator::Table),
            DistanceParams::new(Metric::Simple, Evaluator::Recursive),
        ];
        let rows = vec![BenchRow {
            len: 12,
            seconds: vec![Some(0.5), None],
        }];
        assert_eq!(
            to_tsv(&params, &rows),
            "len\tLevenshtein (table)\tLevenshtein (recursive)\n12\t0.5\t\n"
        );
    }

    #[test]
    fn refused_input_is_not_timed() {
        let p = DistanceParams {
            max_recursive_len: 1,
            ..DistanceParams::new(Metric::Simple, Evaluator::Recursive)
        };
        assert_eq!(time_params(&p, b"ab", b"ab", 3), None);
        assert!(time_params(&p, b"a", b"b", 3).is_some());
    }
}
