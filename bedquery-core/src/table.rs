use std::io::BufRead;

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    reader::{ReadError, Records},
    record::Record,
};

/// Records grouped by chromosome.
///
/// Records keep their insertion order within a chromosome. Chromosomes are
/// iterated in the order they were first seen.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FeatureTable {
    records: IndexMap<String, Vec<Record>>,
    len: usize,
}

impl FeatureTable {
    pub fn insert(&mut self, record: Record) {
        if let Some(records) = self.records.get_mut(record.chrom()) {
            records.push(record);
        } else {
            self.records.insert(record.chrom().into(), vec![record]);
        }

        self.len += 1;
    }

    /// Returns the records on the given chromosome.
    ///
    /// An unknown chromosome has no records.
    pub fn get(&self, chrom: &str) -> &[Record] {
        self.records.get(chrom).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn chromosomes(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn chromosome_count(&self) -> usize {
        self.records.len()
    }

    /// Returns the total number of records.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Extend<Record> for FeatureTable {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Record>,
    {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<Record> for FeatureTable {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut table = Self::default();
        table.extend(iter);
        table
    }
}

/// Builds a table from every record in the reader.
///
/// The first invalid record aborts the build.
pub fn build<R>(reader: R) -> Result<FeatureTable, ReadError>
where
    R: BufRead,
{
    let mut table = FeatureTable::default();

    for result in Records::new(reader) {
        let record = result?;
        table.insert(record);
    }

    debug!(
        record_count = table.len(),
        chromosome_count = table.chromosome_count(),
        "built feature table"
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    #[test]
    fn test_build() -> Result<(), Box<dyn std::error::Error>> {
        const DATA: &[u8] = b"\
chrom1 201 202 foo
chrom1 304 305 bar
chrom1 20100 20101 bas
chrom7 207 208 qux
chrom20 506 507 qax";

        let table = build(DATA)?;

        assert_eq!(
            table.get("chrom1"),
            [
                Record::new("chrom1", 201, "foo")?,
                Record::new("chrom1", 304, "bar")?,
                Record::new("chrom1", 20100, "bas")?,
            ]
        );

        assert_eq!(table.get("chrom7"), [Record::new("chrom7", 207, "qux")?]);
        assert_eq!(table.get("chrom20"), [Record::new("chrom20", 506, "qax")?]);
        assert!(table.get("chromX").is_empty());

        assert_eq!(table.len(), 5);
        assert_eq!(table.chromosome_count(), 3);

        let chromosomes: Vec<_> = table.chromosomes().collect();
        assert_eq!(chromosomes, ["chrom1", "chrom7", "chrom20"]);

        Ok(())
    }

    #[test]
    fn test_build_with_invalid_record() {
        const DATA: &[u8] = b"chrom1 201 202 foo\nchrom1 304 405 bar\nchrom7 207 208 qux\n";

        assert!(matches!(
            build(DATA),
            Err(ReadError::InvalidRecord {
                line_number: 2,
                source: record::ParseError::InvalidInterval { start: 304, end: 405 },
            })
        ));
    }

    #[test]
    fn test_build_with_empty_input() -> Result<(), ReadError> {
        let table = build(&b""[..])?;
        assert!(table.is_empty());
        assert_eq!(table.chromosome_count(), 0);
        Ok(())
    }

    #[test]
    fn test_insert_keeps_chromosome_order() -> Result<(), record::ParseError> {
        let table: FeatureTable = [
            Record::new("chr2", 8, "a")?,
            Record::new("chr1", 5, "b")?,
            Record::new("chr2", 3, "c")?,
        ]
        .into_iter()
        .collect();

        assert_eq!(
            table.get("chr2"),
            [Record::new("chr2", 8, "a")?, Record::new("chr2", 3, "c")?]
        );
        assert_eq!(table.get("chr1"), [Record::new("chr1", 5, "b")?]);

        Ok(())
    }
}
