use std::io::{self, Write};

use bedquery_core::{
    reader::{ReadError, Records},
    record::write_record,
};
use thiserror::Error;
use tracing::info;

use crate::{cli::format, fs};

pub fn format(args: format::Args) -> Result<(), FormatError> {
    let src = &args.src;

    info!(src = ?src, "formatting records");

    let reader = fs::open(src).map_err(FormatError::OpenSource)?;
    let mut writer = fs::create(args.output.as_ref()).map_err(FormatError::CreateOutput)?;

    let record_count = format_records(reader, &mut writer)?;
    writer.flush()?;

    info!(record_count, "done");

    Ok(())
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("could not open source")]
    OpenSource(#[source] io::Error),
    #[error("could not create output")]
    CreateOutput(#[source] io::Error),
    #[error("invalid records")]
    InvalidRecords(#[from] ReadError),
}

fn format_records<R, W>(reader: R, writer: &mut W) -> Result<usize, FormatError>
where
    R: io::BufRead,
    W: Write,
{
    let mut records = Records::new(reader);

    for result in records.by_ref() {
        let record = result?;
        write_record(writer, &record)?;
    }

    // Every line is a record.
    Ok(records.line_number())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_records() -> Result<(), FormatError> {
        let data = b"chr1 20_100 20_101 foo\nchr2\t8   9\tbar\r\n";

        let mut buf = Vec::new();
        let record_count = format_records(&data[..], &mut buf)?;

        assert_eq!(record_count, 2);
        assert_eq!(buf, b"chr1\t20100\t20101\tfoo\nchr2\t8\t9\tbar\n");

        Ok(())
    }

    #[test]
    fn test_format_records_with_invalid_record() {
        let data = b"chr1 20100 20101 foo\nchr1 20100 20201 foo\n";
        let mut buf = Vec::new();

        assert!(matches!(
            format_records(&data[..], &mut buf),
            Err(FormatError::InvalidRecords(ReadError::InvalidRecord {
                line_number: 2,
                ..
            }))
        ));
    }
}
