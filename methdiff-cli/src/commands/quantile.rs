//! Whole-matrix quantile normalization.
//!
//! Reads a tab-delimited matrix (key column followed by one numeric column
//! per sample), normalizes all sample columns onto a shared distribution,
//! and writes the matrix back in input row order. Unlike the per-record
//! `dmr` loop, a malformed line here is fatal: dropping a row would silently
//! change every column's quantiles.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{bail, Context, Result};

use methdiff_stats::normalization::quantile_normalize;

use crate::cli::QuantileArgs;

pub fn run(args: QuantileArgs) -> Result<()> {
    let stdout = io::stdout().lock();
    match &args.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            process(BufReader::new(file), stdout)
        }
        None => process(io::stdin().lock(), stdout),
    }
}

fn process<R: BufRead, W: Write>(reader: R, mut out: W) -> Result<()> {
    let mut keys: Vec<String> = Vec::new();
    let mut values: Vec<f64> = Vec::new();
    let mut n_samples = 0usize;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split('\t');
        let key = fields.next().unwrap_or_default().to_string();
        let start = values.len();
        for field in fields {
            let v: f64 = field
                .parse()
                .with_context(|| format!("line {}: not a number: {field:?}", line_num + 1))?;
            values.push(v);
        }
        let width = values.len() - start;
        if keys.is_empty() {
            n_samples = width;
        } else if width != n_samples {
            bail!(
                "line {}: expected {n_samples} sample columns, found {width}",
                line_num + 1,
            );
        }
        keys.push(key);
    }

    if keys.is_empty() {
        bail!("no data rows in input");
    }

    let normalized = quantile_normalize(&values, keys.len(), n_samples)?;

    for (i, key) in keys.iter().enumerate() {
        write!(out, "{key}")?;
        for v in &normalized[i * n_samples..(i + 1) * n_samples] {
            write!(out, "\t{v}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────
