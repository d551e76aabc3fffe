//! Per-record differential calling with the exact signed-rank test.
//!
//! Reads tab-delimited records, pairs foreground and background sample
//! columns, and emits `key \t mean-difference \t p \t W` per record. Comment
//! lines (`#`) pass through untouched; a record that cannot be tested is
//! skipped with a warning rather than aborting the run.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{bail, Context, Result};
use tracing::warn;

use methdiff_core::MethdiffError;
use methdiff_stats::descriptive::mean;
use methdiff_stats::signrank::SignedRankDistribution;
use methdiff_stats::testing::signed_rank_test_with;

use crate::cli::DmrArgs;
use crate::columns::parse_column_spec;

pub fn run(args: DmrArgs) -> Result<()> {
    let fg = parse_column_spec(&args.fg)?;
    let bg = parse_column_spec(&args.bg)?;
    if fg.len() != bg.len() {
        bail!(
            "--fg and --bg must list the same number of columns ({} vs {})",
            fg.len(),
            bg.len(),
        );
    }

    let stdout = io::stdout().lock();
    match &args.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            process(BufReader::new(file), stdout, &fg, &bg, args.offset)
        }
        None => process(io::stdin().lock(), stdout, &fg, &bg, args.offset),
    }
}

fn process<R: BufRead, W: Write>(
    reader: R,
    mut out: W,
    fg: &[usize],
    bg: &[usize],
    offset: usize,
) -> Result<()> {
    // One engine for the whole stream: records share a column layout, so the
    // coefficient table is built once and reused.
    let mut dist = SignedRankDistribution::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() || line.starts_with('#') {
            writeln!(out, "{line}")?;
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        match test_record(&fields, fg, bg, offset, &mut dist) {
            Ok((mean_diff, p, w)) => {
                writeln!(out, "{}\t{mean_diff}\t{p}\t{w}", fields[0])?;
            }
            Err(err) => warn!(line = line_num + 1, error = %err, "record skipped"),
        }
    }
    Ok(())
}

/// Test one record: extract paired differences, run the signed-rank test.
///
/// Pairs whose difference is NaN (missing or non-numeric data on either
/// side) are discarded before the test.
fn test_record(
    fields: &[&str],
    fg: &[usize],
    bg: &[usize],
    offset: usize,
    dist: &mut SignedRankDistribution,
) -> methdiff_core::Result<(f64, f64, u64)> {
    let mut diffs = Vec::with_capacity(fg.len());
    for (&f, &b) in fg.iter().zip(bg) {
        let diff = field_value(fields, f + offset)? - field_value(fields, b + offset)?;
        if !diff.is_nan() {
            diffs.push(diff);
        }
    }
    let result = signed_rank_test_with(dist, &diffs)?;
    let mean_diff = mean(&diffs)?;
    Ok((mean_diff, result.p_value, result.w))
}

fn field_value(fields: &[&str], idx: usize) -> methdiff_core::Result<f64> {
    let s = fields
        .get(idx)
        .ok_or_else(|| MethdiffError::Parse(format!("missing column {idx}")))?;
    s.parse()
        .map_err(|_| MethdiffError::Parse(format!("column {idx}: not a number: {s:?}")))
}

// ── Tests ──────────────────────────────────────────────────────────────────
