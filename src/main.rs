mod cli;
mod error;
mod matrix;
mod model;
mod output;
mod reader;
mod similarity;

use std::path::PathBuf;

use crate::error::Result;
use clap::Parser;
use miette::IntoDiagnostic;

/// Compute pairwise Jaccard similarity matrices from a genotype call table.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Input genotype table (tab-separated VCF, e.g. ipyrad output).
    #[arg(value_hint = clap::ValueHint::FilePath)]
    input: PathBuf,

    /// Number of metadata lines to skip before the table header.
    #[arg(short = 'N', long, default_value_t = 10)]
    skiplines: usize,

    /// Output file for the mean similarity matrix.
    #[arg(short, long, default_value = "Jaccob_sim_means.csv")]
    outfile: PathBuf,

    /// Number of worker threads for the pairwise pass.
    #[arg(short, long)]
    threads: Option<usize>,
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    cli::run(&args)
}

fn main() -> miette::Result<()> {
    try_main().into_diagnostic()
}
