//! Paired signed-rank hypothesis testing.
//!
//! [`signed_rank_test`] is the single entry point a surrounding tool needs:
//! it turns a sequence of paired differences into the statistic `W`, the
//! effective sample size `n`, and the exact two-sided p-value.

use methdiff_core::{MethdiffError, Result, Scored, Summarizable};

use crate::signrank::{w_statistic, SignedRankDistribution};

/// Result of a paired signed-rank test.
#[derive(Debug, Clone)]
pub struct SignedRankTest {
    /// Sum of the ranks of the positive differences.
    pub w: u64,
    /// Number of differences ranked.
    pub n: usize,
    /// Exact two-sided p-value.
    pub p_value: f64,
}

impl Scored for SignedRankTest {
    fn score(&self) -> f64 {
        self.p_value
    }
}

impl Summarizable for SignedRankTest {
    fn summary(&self) -> String {
        format!(
            "Wilcoxon signed-rank test: W={}, n={}, p={:.6}",
            self.w, self.n, self.p_value,
        )
    }
}

/// Exact two-sided Wilcoxon signed-rank test on paired differences.
///
/// Non-finite differences are dropped before ranking. Errors with
/// `InvalidInput` when no usable difference remains.
pub fn signed_rank_test(differences: &[f64]) -> Result<SignedRankTest> {
    let mut dist = SignedRankDistribution::new();
    signed_rank_test_with(&mut dist, differences)
}

/// Same test against a caller-owned engine.
///
/// A per-record loop over inputs with a fixed column count hits the same `n`
/// every time; passing one engine in lets every record after the first reuse
/// the coefficient table.
pub fn signed_rank_test_with(
    dist: &mut SignedRankDistribution,
    differences: &[f64],
) -> Result<SignedRankTest> {
    let (w, n) = w_statistic(differences);
    if n == 0 {
        return Err(MethdiffError::InvalidInput(
            "signed_rank_test: no finite differences".into(),
        ));
    }
    let p_value = dist.p_two_sided(w, n)?;
    Ok(SignedRankTest { w, n, p_value })
}

// ── Tests ──────────────────────────────────────────────────────────────────
