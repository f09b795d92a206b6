mod format;
mod query;

pub use self::{format::format, query::query};
