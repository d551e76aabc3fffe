//! Quantile normalization for sample matrices.
//!
//! Operates on row-major `&[f64]` slices with dimensions
//! `(n_rows, n_samples)`: one row per measured feature (probe, position),
//! one column per sample.

use methdiff_core::{MethdiffError, Result};

fn validate_matrix(values: &[f64], n_rows: usize, n_samples: usize) -> Result<()> {
    if n_rows == 0 || n_samples == 0 {
        return Err(MethdiffError::InvalidInput(
            "normalization: matrix must have at least 1 row and 1 sample".into(),
        ));
    }
    if values.len() != n_rows * n_samples {
        return Err(MethdiffError::InvalidInput(format!(
            "normalization: values length ({}) != n_rows ({}) * n_samples ({})",
            values.len(),
            n_rows,
            n_samples,
        )));
    }
    Ok(())
}

/// Quantile-normalize a sample matrix so every column shares one empirical
/// distribution.
///
/// 1. Sort each column; the template value for position `i` is the mean of
///    the columns' `i`-th smallest values.
/// 2. Replace each cell by the template value at the cell's rank within its
///    column. Ties rank by row index (ordinal), so the output is
///    deterministic for any input.
///
/// Returns a matrix with the same layout; rows keep their original order.
pub fn quantile_normalize(values: &[f64], n_rows: usize, n_samples: usize) -> Result<Vec<f64>> {
    validate_matrix(values, n_rows, n_samples)?;

    // order[j][i] = row index holding column j's i-th smallest value.
    let mut order: Vec<Vec<usize>> = Vec::with_capacity(n_samples);
    for j in 0..n_samples {
        let mut idx: Vec<usize> = (0..n_rows).collect();
        idx.sort_by(|&a, &b| {
            values[a * n_samples + j]
                .total_cmp(&values[b * n_samples + j])
                .then(a.cmp(&b))
        });
        order.push(idx);
    }

    // Template: mean across columns at each sorted position.
    let mut template = Vec::with_capacity(n_rows);
    for i in 0..n_rows {
        let sum: f64 = (0..n_samples)
            .map(|j| values[order[j][i] * n_samples + j])
            .sum();
        template.push(sum / n_samples as f64);
    }

    let mut out = vec![0.0; values.len()];
    for (j, idx) in order.iter().enumerate() {
        for (rank, &row) in idx.iter().enumerate() {
            out[row * n_samples + j] = template[rank];
        }
    }
    Ok(out)
}

// ── Tests ──────────────────────────────────────────────────────────────────
