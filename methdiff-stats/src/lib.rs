//! Statistical core of the methdiff toolkit.
//!
//! - **Signed-rank distribution** — [`signrank`]: exact null distribution of
//!   the Wilcoxon signed-rank statistic (coefficient table, CDF, PMF,
//!   quantile, two-sided p-value)
//! - **Hypothesis testing** — [`testing`]: the paired signed-rank test over
//!   sequences of differences
//! - **Descriptive statistics** — [`descriptive`]: mean and median
//! - **Normalization** — [`normalization`]: quantile normalization of keyed
//!   sample matrices

pub mod descriptive;
pub mod normalization;
pub mod signrank;
pub mod testing;
