//! Descriptive statistics for numeric data.

use methdiff_core::{MethdiffError, Result};

/// Arithmetic mean. Requires at least 1 element.
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(MethdiffError::InvalidInput(
            "mean: data must not be empty".into(),
        ));
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Median. Requires at least 1 element.
///
/// For an even number of elements, returns the mean of the two middle values.
pub fn median(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(MethdiffError::InvalidInput(
            "median: data must not be empty".into(),
        ));
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
