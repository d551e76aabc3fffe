//! Exact null distribution of the Wilcoxon signed-rank statistic.
//!
//! Under the null hypothesis each of the `n` paired differences is equally
//! likely to carry either sign, so the statistic `W` (sum of the ranks of the
//! positive differences, ranked by absolute value) takes values in
//! `[0, n(n+1)/2]` with probabilities proportional to subset-sum counts of
//! `{1, …, n}`. [`SignedRankDistribution`] builds that coefficient table once
//! per `n` and answers distribution queries from it; [`w_statistic`] computes
//! `W` itself.

use std::f64::consts::LN_2;

use methdiff_core::{MethdiffError, Result};

/// Largest supported sample size.
///
/// The coefficient table stores raw subset counts as `f64`; at `n = 1024` the
/// total mass `2^n` reaches the top of the representable range, so larger
/// samples would silently lose the distribution's tails.
pub const MAX_N: usize = 1024;

/// Statistics arriving as `f64` are snapped to an integer within this
/// tolerance before table lookups.
const INT_TOLERANCE: f64 = 1e-7;

fn validate_n(n: usize) -> Result<()> {
    if n == 0 {
        return Err(MethdiffError::InvalidInput(
            "signrank: sample size must be positive".into(),
        ));
    }
    if n > MAX_N {
        return Err(MethdiffError::Numeric(format!(
            "signrank: n = {n} exceeds the supported maximum of {MAX_N}",
        )));
    }
    Ok(())
}

/// Exact null distribution of `W` for a fixed sample size.
///
/// The table is (re)built lazily on first use for a given `n` and reused for
/// every following query with the same `n` — the typical caller runs one test
/// per input record with a fixed number of sample columns, so rebuilds are
/// rare. The struct is the only owner of its table; callers needing
/// concurrency use one instance per worker.
#[derive(Debug, Clone)]
pub struct SignedRankDistribution {
    /// `counts[k]` = number of subsets of `{1, …, n}` summing to `k`, for
    /// `k <= floor(U/2)`; the upper half follows by symmetry.
    counts: Vec<f64>,
    /// The `n` the table was built for; 0 means "no table yet".
    n: usize,
}

impl SignedRankDistribution {
    /// Create an engine with no table; the first query builds one.
    pub fn new() -> Self {
        Self {
            counts: Vec::new(),
            n: 0,
        }
    }

    /// Rebuild the coefficient table unless it already corresponds to `n`.
    ///
    /// Classical 0/1 subset-sum counting: element `j` is folded into the
    /// table with the inner loop descending so each element enters a subset
    /// at most once. Only the lower half (up to `floor(U/2)`) is stored.
    fn ensure_table(&mut self, n: usize) {
        if self.n == n {
            return;
        }
        let u = n * (n + 1) / 2;
        let c = u / 2;
        self.counts = vec![0.0; c + 1];
        if n == 1 {
            self.counts[0] = 1.0;
        } else {
            self.counts[0] = 1.0;
            self.counts[1] = 1.0;
            for j in 2..=n {
                let end = (j * (j + 1) / 2).min(c);
                for i in (j..=end).rev() {
                    self.counts[i] += self.counts[i - j];
                }
            }
        }
        self.n = n;
    }

    /// Table lookup with symmetry and out-of-range handling.
    ///
    /// Requires the table to be built for `self.n`.
    fn count(&self, k: i64) -> f64 {
        let u = (self.n * (self.n + 1) / 2) as i64;
        let c = u / 2;
        if k < 0 || k > u {
            return 0.0;
        }
        let k = if k > c { u - k } else { k };
        self.counts[k as usize]
    }

    /// Number of sign assignments with rank sum `k`, out of `2^n` total.
    ///
    /// Zero outside `[0, n(n+1)/2]`; symmetric about the midpoint.
    pub fn coefficient(&mut self, k: i64, n: usize) -> Result<f64> {
        validate_n(n)?;
        self.ensure_table(n);
        Ok(self.count(k))
    }

    /// Distribution function: `P(W <= x)` when `lower_tail`, `P(W > x)`
    /// otherwise.
    ///
    /// `x` is snapped down to an integer (with a small tolerance for
    /// floating-point statistics). Whichever tail is shorter is summed and
    /// the other obtained as its complement, so both branches report the
    /// requested tail.
    pub fn cdf(&mut self, x: f64, n: usize, lower_tail: bool) -> Result<f64> {
        validate_n(n)?;
        if x.is_nan() {
            return Err(MethdiffError::InvalidInput("signrank cdf: x is NaN".into()));
        }
        let x = (x + INT_TOLERANCE).floor();
        let u = (n * (n + 1) / 2) as f64;
        if x < 0.0 {
            return Ok(if lower_tail { 0.0 } else { 1.0 });
        }
        if x >= u {
            return Ok(if lower_tail { 1.0 } else { 0.0 });
        }
        self.ensure_table(n);

        // Probabilities accumulate as count * 2^-n; raw counts are never
        // summed, so the total mass 2^n staying off-scale is harmless.
        let f = (-(n as f64) * LN_2).exp();
        let midpoint = (n * (n + 1)) as f64 / 4.0;
        if x <= midpoint {
            let mut p = 0.0;
            for i in 0..=(x as i64) {
                p += self.count(i) * f;
            }
            Ok(if lower_tail { p } else { 1.0 - p })
        } else {
            // Shorter tail by symmetry: P(W > x) = P(W < U - x).
            let mut p = 0.0;
            for i in 0..((u - x) as i64) {
                p += self.count(i) * f;
            }
            Ok(if lower_tail { 1.0 - p } else { p })
        }
    }

    /// Probability mass `P(W = x)`; zero when `x` is not within tolerance of
    /// an integer in `[0, n(n+1)/2]`.
    pub fn pmf(&mut self, x: f64, n: usize) -> Result<f64> {
        validate_n(n)?;
        if x.is_nan() {
            return Err(MethdiffError::InvalidInput("signrank pmf: x is NaN".into()));
        }
        if (x - (x + 0.5).floor()).abs() > INT_TOLERANCE {
            return Ok(0.0);
        }
        let x = (x + 0.5).floor();
        let u = (n * (n + 1) / 2) as f64;
        if x < 0.0 || x > u {
            return Ok(0.0);
        }
        self.ensure_table(n);
        // exp(ln count - n ln 2); a zero count gives exp(-inf) = 0.
        Ok((self.count(x as i64).ln() - n as f64 * LN_2).exp())
    }

    /// Smallest `k` with `P(W <= k) >= p`.
    ///
    /// Only the lower-tail, non-log parameterization is implemented; any
    /// other mode is a hard [`MethdiffError::Unsupported`] rather than a
    /// silent wrong answer. For `p > 0.5` the scan runs up the complementary
    /// tail and maps back by symmetry.
    pub fn quantile(&mut self, p: f64, n: usize, lower_tail: bool, log_p: bool) -> Result<u64> {
        validate_n(n)?;
        if log_p || !lower_tail {
            return Err(MethdiffError::Unsupported(
                "signrank quantile: only lower-tail, non-log probabilities are implemented".into(),
            ));
        }
        if p.is_nan() || !(0.0..=1.0).contains(&p) {
            return Err(MethdiffError::InvalidInput(
                "signrank quantile: p must be in [0, 1]".into(),
            ));
        }
        let u = (n * (n + 1) / 2) as u64;
        if p == 0.0 {
            return Ok(0);
        }
        if p == 1.0 {
            return Ok(u);
        }
        self.ensure_table(n);

        let f = (-(n as f64) * LN_2).exp();
        let mut cum = 0.0;
        let mut q: u64 = 0;
        if p <= 0.5 {
            // Fuzz guards against p sitting a rounding error above a step.
            let target = p - 10.0 * f64::EPSILON;
            loop {
                cum += self.count(q as i64) * f;
                if cum >= target {
                    return Ok(q);
                }
                q += 1;
            }
        } else {
            let target = 1.0 - p + 10.0 * f64::EPSILON;
            loop {
                cum += self.count(q as i64) * f;
                if cum > target {
                    return Ok(u - q);
                }
                q += 1;
            }
        }
    }

    /// Exact two-sided p-value for an observed statistic `w`.
    ///
    /// Doubles the probability of the tail `w` falls in: the lower tail
    /// `P(W <= w)` at or below the midpoint `n(n+1)/4`, the upper tail
    /// `P(W >= w)` above it (queried as `P(W > w - 1)`, which keeps the test
    /// symmetric at integer statistics), clamped at 1.
    pub fn p_two_sided(&mut self, w: u64, n: usize) -> Result<f64> {
        validate_n(n)?;
        let midpoint = (n * (n + 1)) as f64 / 4.0;
        let p = if w as f64 > midpoint {
            self.cdf((w - 1) as f64, n, false)?
        } else {
            self.cdf(w as f64, n, true)?
        };
        Ok((2.0 * p).min(1.0))
    }
}

impl Default for SignedRankDistribution {
    fn default() -> Self {
        Self::new()
    }
}

/// Signed-rank statistic `W` of a sequence of paired differences.
///
/// Non-finite entries are dropped. The remaining differences are ranked by
/// absolute value (ascending, 1-based), ties broken by original input
/// position so the statistic is reproducible regardless of sort algorithm.
/// `W` sums the ranks of strictly positive differences; zeros hold their
/// rank but contribute nothing. Returns `(W, n)` where `n` is the number of
/// differences ranked.
pub fn w_statistic(differences: &[f64]) -> (u64, usize) {
    let mut kept: Vec<(usize, f64)> = differences
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, d)| d.is_finite())
        .collect();
    kept.sort_by(|a, b| a.1.abs().total_cmp(&b.1.abs()).then(a.0.cmp(&b.0)));

    let mut w = 0u64;
    for (i, &(_, d)) in kept.iter().enumerate() {
        if d > 0.0 {
            w += i as u64 + 1;
        }
    }
    (w, kept.len())
}

// ── Tests ──────────────────────────────────────────────────────────────────
