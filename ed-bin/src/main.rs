use anyhow::Context;
use clap::Parser;
use ed_bin::{
    bench,
    cli::{Cli, Command, CompareArgs, RunArgs},
    display::format_table,
    stats::Stats,
};
use ed_types::Seq;
use itertools::Itertools;
use log::{debug, warn};
use std::{ops::ControlFlow, time::Instant};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Compare(args) => compare(&args),
        Command::Run(args) => run(&args)?,
        Command::Bench(args) => bench::run(&args)?,
    }
    Ok(())
}

fn compare(args: &CompareArgs) {
    let a = args.a.chars().collect_vec();
    let b = args.b.chars().collect_vec();
    for params in args.selection.params() {
        match params.evaluate(&a, &b, args.table) {
            Ok(r) => {
                println!(
                    "Distance between \"{}\" and \"{}\" according to {} is {}",
                    args.a,
                    args.b,
                    params.name(),
                    r.distance
                );
                if let Some(table) = &r.table {
                    print!("{}", format_table(&a, &b, table));
                }
                println!();
            }
            Err(e) => warn!("{}: {e}", params.name()),
        }
    }
}

fn run(args: &RunArgs) -> anyhow::Result<()> {
    let params = args.selection.params();
    let mut totals = vec![Stats::default(); params.len()];
    let mut skipped = vec![0usize; params.len()];
    let mut header = true;

    args.process_input_pairs(|a: Seq, b: Seq| {
        for (i, p) in params.iter().enumerate() {
            let start = Instant::now();
            match p.evaluate(a, b, false) {
                Ok(r) => {
                    let stats = Stats::new(a, b, r.distance, start.elapsed().as_secs_f64());
                    if args.silent == 0 {
                        stats.print(&p.name(), header);
                        header = false;
                    }
                    totals[i] += stats;
                }
                Err(e) => {
                    debug!("{}: {e}", p.name());
                    skipped[i] += 1;
                }
            }
        }
        ControlFlow::Continue(())
    })?;

    if args.silent == 0 {
        println!();
    }
    for (i, (p, total)) in params.iter().zip(&totals).enumerate() {
        total.print(&p.name(), i == 0);
    }
    for (p, &n) in params.iter().zip(&skipped) {
        if n > 0 {
            warn!("{} skipped {n} pair(s) beyond its length limit", p.name());
        }
    }

    if let Some(output) = &args.output {
        let mut out = String::new();
        for (i, (p, total)) in params.iter().zip(&totals).enumerate() {
            let (titles, values) = total.values();
            if i == 0 {
                out += &format!(
                    "evaluator\t{}\n",
                    titles.iter().map(|x| x.trim()).join("\t")
                );
            }
            out += &format!(
                "{}\t{}\n",
                p.name(),
                values.iter().map(|x| x.trim()).join("\t")
            );
        }
        std::fs::write(output, out)
            .with_context(|| format!("Failed to write {}", output.display()))?;
    }
    Ok(())
}
