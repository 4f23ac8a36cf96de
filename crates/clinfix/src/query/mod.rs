//! Reviewer-facing data queries generated from raw datasets.

mod dates;
mod generator;
mod query;

pub use dates::parse_date;
pub use generator::QueryGenerator;
pub use query::{Query, QueryKind};
