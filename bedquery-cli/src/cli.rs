pub mod format;
pub mod query;

use clap::{Parser, Subcommand};

#[derive(Subcommand)]
pub enum Command {
    /// Rewrite single-nucleotide BED records in canonical form.
    Format(format::Args),
    /// Extract the features contained by each query interval.
    Query(query::Args),
}

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}
