use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "methdiff",
    version,
    about = "Differential methylation calling and matrix normalization"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Call per-record differences with the exact signed-rank test
    Dmr(DmrArgs),
    /// Quantile-normalize a keyed sample matrix
    Quantile(QuantileArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DmrArgs {
    /// Tab-delimited input file; reads stdin when omitted
    pub input: Option<PathBuf>,

    /// Zero-based column indices of the foreground samples, e.g. "1,3,5-8"
    #[arg(long)]
    pub fg: String,

    /// Zero-based column indices of the background samples, paired with --fg
    #[arg(long)]
    pub bg: String,

    /// Offset added to every column index
    #[arg(long, default_value_t = 0)]
    pub offset: usize,
}

#[derive(Args, Debug, Clone)]
pub struct QuantileArgs {
    /// Tab-delimited input file (key column + numeric columns); stdin when omitted
    pub input: Option<PathBuf>,
}
