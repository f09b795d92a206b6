//! Field splitting shared by record and query lines.

use std::{num::ParseIntError, str::FromStr};

const DIGIT_GROUP_SEPARATOR: char = '_';

/// Splits a line into fields on any run of whitespace.
///
/// Leading and trailing whitespace never produce empty fields.
pub fn split(s: &str) -> impl Iterator<Item = &str> {
    s.split_whitespace()
}

/// Parses a base-10 integer, ignoring `_` digit group separators.
///
/// Feature positions are parsed as `u64`. Query bounds are parsed as `i64`.
///
/// ```
/// use bedquery_core::fields::parse_position;
/// assert_eq!(parse_position::<u64>("20_100"), Ok(20100));
/// assert_eq!(parse_position::<i64>("-5"), Ok(-5));
/// ```
pub fn parse_position<N>(s: &str) -> Result<N, ParseIntError>
where
    N: FromStr<Err = ParseIntError>,
{
    if s.contains(DIGIT_GROUP_SEPARATOR) {
        s.replace(DIGIT_GROUP_SEPARATOR, "").parse()
    } else {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        let actual: Vec<_> = split("chr1 20100\t20101\nfoo").collect();
        assert_eq!(actual, ["chr1", "20100", "20101", "foo"]);

        let actual: Vec<_> = split("  chr1 \t\t 20100   ").collect();
        assert_eq!(actual, ["chr1", "20100"]);

        assert_eq!(split("").count(), 0);
        assert_eq!(split(" \t ").count(), 0);
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position::<u64>("0"), Ok(0));
        assert_eq!(parse_position::<u64>("20100"), Ok(20100));
        assert_eq!(parse_position::<u64>("20_100"), Ok(20100));
        assert_eq!(parse_position::<u64>("1_000_000"), Ok(1000000));

        assert!(parse_position::<u64>("").is_err());
        assert!(parse_position::<u64>("_").is_err());
        assert!(parse_position::<u64>("-8").is_err());
        assert!(parse_position::<u64>("ten").is_err());
        assert!(parse_position::<u64>("13.0").is_err());
    }

    #[test]
    fn test_parse_position_with_signed_integers() {
        assert_eq!(parse_position::<i64>("-8"), Ok(-8));
        assert_eq!(parse_position::<i64>("-1_000"), Ok(-1000));
        assert_eq!(parse_position::<i64>("400"), Ok(400));

        assert!(parse_position::<i64>("-").is_err());
        assert!(parse_position::<i64>("minus8").is_err());
    }
}
