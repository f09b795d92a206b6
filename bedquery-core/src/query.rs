use std::{
    io::{self, BufRead, Write},
    num::ParseIntError,
    str::FromStr,
};

use thiserror::Error;
use tracing::debug;

use crate::{
    fields,
    reader::read_line,
    record::write_record,
    table::FeatureTable,
};

/// A query interval.
///
/// The bounds are compared against feature positions as given and may be
/// negative.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Query {
    chrom: String,
    lower: i64,
    upper: i64,
}

impl Query {
    pub fn new<C>(chrom: C, lower: i64, upper: i64) -> Self
    where
        C: Into<String>,
    {
        Self {
            chrom: chrom.into(),
            lower,
            upper,
        }
    }

    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    pub fn lower(&self) -> i64 {
        self.lower
    }

    pub fn upper(&self) -> i64 {
        self.upper
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseError {
    #[error("invalid field count: expected 3, got {actual}")]
    InvalidFieldCount { actual: usize },
    #[error("invalid lower bound")]
    InvalidLower(#[source] ParseIntError),
    #[error("invalid upper bound")]
    InvalidUpper(#[source] ParseIntError),
}

impl FromStr for Query {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<_> = fields::split(s).collect();

        let [chrom, raw_lower, raw_upper] = fields[..] else {
            return Err(ParseError::InvalidFieldCount {
                actual: fields.len(),
            });
        };

        let lower = fields::parse_position(raw_lower).map_err(ParseError::InvalidLower)?;
        let upper = fields::parse_position(raw_upper).map_err(ParseError::InvalidUpper)?;

        Ok(Self::new(chrom, lower, upper))
    }
}

/// Returns whether a feature lies entirely within the query bounds.
///
/// This is containment, not overlap: a feature that only intersects the bounds
/// does not match. Both comparisons are inclusive.
pub fn is_contained(lower: i64, upper: i64, start: u64, end: u64) -> bool {
    i128::from(lower) <= i128::from(start) && i128::from(upper) >= i128::from(end)
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    pub query_count: u64,
    pub hit_count: u64,
}

#[derive(Debug, Error)]
pub enum ProcessQueryError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("invalid query at line {line_number}")]
    InvalidQuery {
        line_number: usize,
        #[source]
        source: ParseError,
    },
}

/// Writes the features contained by each query in the reader.
///
/// Matches are written in query order and then in table order. The first
/// invalid query aborts processing; output for earlier queries is kept, but
/// the summary is not returned. The error's line number is one past the last
/// query processed.
pub fn process_query<R, W>(
    table: &FeatureTable,
    mut reader: R,
    writer: &mut W,
) -> Result<Summary, ProcessQueryError>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    let mut line_number = 0;
    let mut summary = Summary::default();

    loop {
        line.clear();

        if read_line(&mut reader, &mut line)? == 0 {
            break;
        }

        line_number += 1;

        let query: Query = line
            .parse()
            .map_err(|source| ProcessQueryError::InvalidQuery {
                line_number,
                source,
            })?;

        for record in table.get(query.chrom()) {
            if is_contained(query.lower(), query.upper(), record.start(), record.end()) {
                write_record(writer, record)?;
                summary.hit_count += 1;
            }
        }

        summary.query_count += 1;
    }

    debug!(
        query_count = summary.query_count,
        hit_count = summary.hit_count,
        "processed queries"
    );

    Ok(summary)
}
