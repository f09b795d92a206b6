use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
pub struct Args {
    /// Output destination.
    ///
    /// By default, matches are written to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Input features (BED, single nucleotide).
    pub bed: PathBuf,

    /// Input queries.
    ///
    /// Each line is a chromosome name, lower bound, and upper bound.
    pub query: PathBuf,
}
