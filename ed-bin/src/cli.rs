use crate::input::read_pairs;
use clap::{Args, Parser, Subcommand};
use ed_core::{DistanceParams, Evaluator, Metric, MAX_RECURSIVE_LEN};
use ed_types::{
    generate::{generate_pair, random_pair},
    Seq, Sequence,
};
use itertools::Itertools;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::{ops::ControlFlow, path::PathBuf, time::Instant};

/// Compute edit distances with and without adjacent transpositions.
#[derive(Parser)]
#[clap(author, about, disable_version_flag(true))]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the distances between two strings.
    Compare(CompareArgs),
    /// Compute distances for pairs read from a file or generated at random.
    Run(RunArgs),
    /// Measure the time per call as a function of the sequence length.
    Bench(BenchArgs),
}

/// Which metrics and evaluators to run.
#[derive(Args, Debug, Clone)]
#[clap(next_help_heading = "Distance")]
pub struct SelectionArgs {
    /// Metric to compute. May be repeated. Defaults to all.
    #[clap(short, long)]
    pub metric: Vec<Metric>,

    /// Evaluator to use. May be repeated. Defaults to all.
    #[clap(short, long)]
    pub evaluator: Vec<Evaluator>,

    /// Refuse recursive evaluation of sequences longer than this.
    #[clap(long, default_value_t = MAX_RECURSIVE_LEN, hide_short_help = true)]
    pub max_recursive_len: usize,
}

impl SelectionArgs {
    /// The selected metric/evaluator combinations, grouped by metric.
    pub fn params(&self) -> Vec<DistanceParams> {
        let metrics = if self.metric.is_empty() {
            Metric::ALL.to_vec()
        } else {
            self.metric.iter().copied().unique().collect()
        };
        let evaluators = if self.evaluator.is_empty() {
            Evaluator::ALL.to_vec()
        } else {
            self.evaluator.iter().copied().unique().collect()
        };
        metrics
            .into_iter()
            .cartesian_product(evaluators)
            .map(|(metric, evaluator)| DistanceParams {
                metric,
                evaluator,
                max_recursive_len: self.max_recursive_len,
            })
            .collect()
    }
}

/// Use the given seed, or draw and log a new one so the run can be repeated.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let seed = ChaCha8Rng::from_entropy().gen_range(0..1_000);
        info!("Seed: {seed}");
        seed
    })
}

/// Options to generate random input pairs.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Length of the generated sequences.
    #[clap(short = 'n', long, default_value_t = 10)]
    pub length: usize,

    /// Number of pairs to generate.
    #[clap(long, default_value_t = 10)]
    pub cnt: usize,

    /// Derive the second sequence from the first by this fraction of random
    /// edits. Without it, both sequences are independent.
    #[clap(long)]
    pub error_rate: Option<f32>,

    /// Symbols to draw from.
    #[clap(long, default_value = "abcdefghijklmnopqrstuvwxyz")]
    pub alphabet: String,

    /// Seed for the random generator. Drawn at random when omitted.
    #[clap(long)]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(resolve_seed(self.seed))
    }

    pub fn generate(&self, rng: &mut impl Rng) -> (Sequence, Sequence) {
        let alphabet = self.alphabet.as_bytes();
        match self.error_rate {
            Some(e) => generate_pair(self.length, e, alphabet, rng),
            None => random_pair(self.length, alphabet, rng),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    pub a: String,
    pub b: String,

    /// Also print the cost tables of the table evaluators.
    #[clap(short, long)]
    pub table: bool,

    #[clap(flatten)]
    pub selection: SelectionArgs,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// A .seq, .txt, or Fasta file (or directory of them) with sequence pairs.
    /// When omitted, pairs are generated.
    #[clap(short, long, display_order = 1)]
    pub input: Option<PathBuf>,

    /// Write the averaged stats of each evaluator as a .tsv.
    #[clap(short, long, display_order = 1)]
    pub output: Option<PathBuf>,

    /// Only print the averaged stats, not a line per pair.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub silent: u8,

    /// Stop processing new pairs after this many seconds.
    #[clap(long)]
    pub timeout: Option<f64>,

    #[clap(flatten)]
    pub selection: SelectionArgs,

    #[clap(flatten, next_help_heading = "Generated input")]
    pub generate: GenerateArgs,
}

impl RunArgs {
    /// Call the given function for each pair in the input.
    pub fn process_input_pairs(
        &self,
        mut run_pair: impl FnMut(Seq, Seq) -> ControlFlow<()>,
    ) -> anyhow::Result<()> {
        let start = Instant::now();
        let mut run_timed_pair = |a: Seq, b: Seq| -> ControlFlow<()> {
            if let Some(t) = self.timeout {
                if start.elapsed().as_secs_f64() > t {
                    info!("Timeout of {t}s reached");
                    return ControlFlow::Break(());
                }
            }
            run_pair(a, b)
        };

        if let Some(input) = &self.input {
            for (a, b) in read_pairs(input)? {
                if let ControlFlow::Break(()) = run_timed_pair(&a, &b) {
                    break;
                }
            }
        } else {
            let rng = &mut self.generate.rng();
            for _ in 0..self.generate.cnt {
                let (a, b) = self.generate.generate(rng);
                if let ControlFlow::Break(()) = run_timed_pair(&a, &b) {
                    break;
                }
            }
        }
        Ok(())
    }
}

#[derive(Args, Debug, Clone)]
pub struct BenchArgs {
    /// Time pairs of every length from 1 up to this.
    #[clap(short = 'n', long, default_value_t = 10)]
    pub max_len: usize,

    /// Number of calls to average over.
    #[clap(short, long, default_value_t = 10)]
    pub times: usize,

    /// Measure this many lengths in parallel.
    #[clap(long, default_value_t = 1)]
    pub threads: usize,

    /// Seed for the random generator. Drawn at random when omitted.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Write the timings as a .tsv, and the evaluated parameters as a .json
    /// next to it.
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    #[clap(flatten)]
    pub selection: SelectionArgs,
}
