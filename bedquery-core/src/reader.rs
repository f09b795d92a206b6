use std::io::{self, BufRead};

use thiserror::Error;

use crate::record::{self, Record};

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("invalid record at line {line_number}")]
    InvalidRecord {
        line_number: usize,
        #[source]
        source: record::ParseError,
    },
}

/// An iterator over records read from a line-oriented stream.
pub struct Records<R> {
    inner: R,
    line: String,
    line_number: usize,
}

impl<R> Records<R>
where
    R: BufRead,
{
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: String::new(),
            line_number: 0,
        }
    }

    /// Returns the number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R> Iterator for Records<R>
where
    R: BufRead,
{
    type Item = Result<Record, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.line.clear();

        match read_line(&mut self.inner, &mut self.line) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;

                let result = self
                    .line
                    .parse()
                    .map_err(|source| ReadError::InvalidRecord {
                        line_number: self.line_number,
                        source,
                    });

                Some(result)
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

pub(crate) fn read_line<R>(reader: &mut R, buf: &mut String) -> io::Result<usize>
where
    R: BufRead,
{
    const LINE_FEED: char = '\n';
    const CARRIAGE_RETURN: char = '\r';

    match reader.read_line(buf)? {
        0 => Ok(0),
        n => {
            if buf.ends_with(LINE_FEED) {
                buf.pop();

                if buf.ends_with(CARRIAGE_RETURN) {
                    buf.pop();
                }
            }

            Ok(n)
        }
    }
}
