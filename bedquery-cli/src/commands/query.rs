use std::io::{self, Write};

use bedquery_core::{query::ProcessQueryError, reader::ReadError};
use thiserror::Error;
use tracing::info;

use crate::{cli::query, fs};

pub fn query(args: query::Args) -> Result<(), QueryError> {
    let bed_src = &args.bed;

    info!(src = ?bed_src, "reading features");

    let reader = fs::open(bed_src).map_err(QueryError::OpenFeatures)?;
    let table = bedquery_core::build(reader)?;

    info!(
        record_count = table.len(),
        chromosome_count = table.chromosome_count(),
        "read features"
    );

    let query_src = &args.query;

    info!(src = ?query_src, "processing queries");

    let reader = fs::open(query_src).map_err(QueryError::OpenQueries)?;
    let mut writer = fs::create(args.output.as_ref()).map_err(QueryError::CreateOutput)?;

    let summary = bedquery_core::process_query(&table, reader, &mut writer)?;
    writer.flush()?;

    info!(
        query_count = summary.query_count,
        hit_count = summary.hit_count,
        "done"
    );

    Ok(())
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("could not open features")]
    OpenFeatures(#[source] io::Error),
    #[error("could not open queries")]
    OpenQueries(#[source] io::Error),
    #[error("could not create output")]
    CreateOutput(#[source] io::Error),
    #[error("invalid features")]
    InvalidFeatures(#[from] ReadError),
    #[error("invalid queries")]
    InvalidQueries(#[from] ProcessQueryError),
}
