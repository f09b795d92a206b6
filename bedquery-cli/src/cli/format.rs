use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
pub struct Args {
    /// Output destination.
    ///
    /// By default, records are written to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Input features (BED, single nucleotide).
    pub src: PathBuf,
}
