//! Single-nucleotide BED features indexed by chromosome and queried by
//! containment.

pub mod fields;
pub mod query;
pub mod reader;
pub mod record;
pub mod table;

pub use self::{
    query::{Query, is_contained, process_query},
    record::Record,
    table::{FeatureTable, build},
};
