use std::{
    fmt,
    io::{self, Write},
    num::ParseIntError,
    str::FromStr,
};

use thiserror::Error;

use crate::fields;

const DELIMITER: char = '\t';
const FIELD_COUNT: usize = 4;

/// A single-nucleotide feature.
///
/// Positions are 0-based and half-open, so `end` is always `start + 1`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    chrom: String,
    start: u64,
    end: u64,
    name: String,
}

impl Record {
    /// Creates a record covering the single position `start`.
    pub fn new<C, N>(chrom: C, start: u64, name: N) -> Result<Self, ParseError>
    where
        C: Into<String>,
        N: Into<String>,
    {
        let end = start
            .checked_add(1)
            .ok_or(ParseError::InvalidInterval { start, end: start })?;

        Ok(Self {
            chrom: chrom.into(),
            start,
            end,
            name: name.into(),
        })
    }

    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseError {
    #[error("invalid field count: expected 4, got {actual}")]
    InvalidFieldCount { actual: usize },
    #[error("invalid start")]
    InvalidStart(#[source] ParseIntError),
    #[error("invalid end")]
    InvalidEnd(#[source] ParseIntError),
    #[error("invalid interval: expected a single nucleotide, got [{start}, {end})")]
    InvalidInterval { start: u64, end: u64 },
}

impl ParseError {
    /// Returns whether the line itself is malformed, as opposed to describing an
    /// interval that is not a single nucleotide.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, Self::InvalidInterval { .. })
    }
}

impl FromStr for Record {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<_> = fields::split(s).collect();

        let [chrom, raw_start, raw_end, name] = fields[..] else {
            return Err(ParseError::InvalidFieldCount {
                actual: fields.len(),
            });
        };

        let start: u64 = fields::parse_position(raw_start).map_err(ParseError::InvalidStart)?;
        let end: u64 = fields::parse_position(raw_end).map_err(ParseError::InvalidEnd)?;

        if start.checked_add(1) != Some(end) {
            return Err(ParseError::InvalidInterval { start, end });
        }

        Ok(Self {
            chrom: chrom.into(),
            start,
            end,
            name: name.into(),
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
            self.chrom, self.start, self.end, self.name
        )
    }
}

/// Writes a record as a tab-delimited line.
pub fn write_record<W>(writer: &mut W, record: &Record) -> io::Result<()>
where
    W: Write,
{
    writeln!(writer, "{record}")
}
