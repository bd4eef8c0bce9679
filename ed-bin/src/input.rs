//! Reading sequence pairs from files.
//!
//! Supported formats, chosen by extension:
//! - `.txt`: two lines per pair.
//! - `.seq`: two lines per pair, prefixed by `>` and `<`.
//! - `.fa`, `.fna`, `.fasta`: two records per pair.
use anyhow::{bail, ensure, Context, Result};
use bio::io::fasta;
use ed_types::Sequence;
use itertools::Itertools;
use log::debug;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

/// Read all pairs from `input`, which is a file or a directory of files.
pub fn read_pairs(input: &Path) -> Result<Vec<(Sequence, Sequence)>> {
    let files: Vec<PathBuf> = if input.is_file() {
        vec![input.to_path_buf()]
    } else {
        let mut files = input
            .read_dir()
            .with_context(|| format!("{} is not a file or directory", input.display()))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        files.sort();
        files
    };

    let mut pairs = vec![];
    for f in files {
        debug!("Reading {}", f.display());
        let ext = f.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
        let open = || File::open(&f).with_context(|| format!("Failed to open {}", f.display()));
        match ext {
            "txt" | "seq" => pairs.extend(
                parse_lines(BufReader::new(open()?), ext == "seq")
                    .with_context(|| format!("Failed to parse {}", f.display()))?,
            ),
            "fna" | "fa" | "fasta" => pairs.extend(
                parse_fasta(BufReader::new(open()?))
                    .with_context(|| format!("Failed to parse {}", f.display()))?,
            ),
            ext => bail!(
                "Unknown file extension {ext:?} of {}. Must be in {{seq,txt,fna,fa,fasta}}.",
                f.display()
            ),
        }
    }
    Ok(pairs)
}

/// Pairs of consecutive lines. With `markers`, lines must start with `>` and
/// `<` respectively, which are stripped.
pub fn parse_lines(reader: impl BufRead, markers: bool) -> Result<Vec<(Sequence, Sequence)>> {
    let lines = reader
        .lines()
        .map(|l| l.map(String::into_bytes))
        .collect::<std::io::Result<Vec<_>>>()?;
    ensure!(
        lines.len() % 2 == 0,
        "Expected an even number of lines, found {}",
        lines.len()
    );
    lines
        .into_iter()
        .tuples()
        .enumerate()
        .map(|(idx, (mut a, mut b))| {
            if markers {
                ensure!(
                    a.first() == Some(&b'>') && b.first() == Some(&b'<'),
                    "Pair {idx} does not start with '>' and '<'"
                );
                a.remove(0);
                b.remove(0);
            }
            Ok((a, b))
        })
        .collect()
}

/// Pairs of consecutive Fasta records.
pub fn parse_fasta(reader: impl BufRead) -> Result<Vec<(Sequence, Sequence)>> {
    let records = fasta::Reader::from_bufread(reader)
        .records()
        .collect::<std::io::Result<Vec<_>>>()?;
    ensure!(
        records.len() % 2 == 0,
        "Expected an even number of records, found {}",
        records.len()
    );
    Ok(records
        .iter()
        .tuples()
        .map(|(a, b)| (a.seq().to_vec(), b.seq().to_vec()))
        .collect())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn txt() {
        let pairs = parse_lines(Cursor::new("qwert\nqewtr\n\nabc\n"), false).unwrap();
        assert_eq!(
            pairs,
            vec![
                (b"qwert".to_vec(), b"qewtr".to_vec()),
                (b"".to_vec(), b"abc".to_vec())
            ]
        );
    }

    #[test]
    fn seq() {
        let pairs = parse_lines(Cursor::new(">ACGT\n<AGCT\n"), true).unwrap();
        assert_eq!(pairs, vec![(b"ACGT".to_vec(), b"AGCT".to_vec())]);
        assert!(parse_lines(Cursor::new("ACGT\n<AGCT\n"), true).is_err());
    }

    #[test]
    fn odd_number_of_lines() {
        assert!(parse_lines(Cursor::new("a\nb\nc\n"), false).is_err());
    }

    #[test]
    fn fasta() {
        let input = ">a\nACGT\nAC\n>b\nAGCTAC\n";
        let pairs = parse_fasta(Cursor::new(input)).unwrap();
        assert_eq!(pairs, vec![(b"ACGTAC".to_vec(), b"AGCTAC".to_vec())]);
        assert!(parse_fasta(Cursor::new(">a\nACGT\n")).is_err());
    }
}
