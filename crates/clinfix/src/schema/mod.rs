//! Per-column type inference, computed once per dataset.

mod column;
mod table;
mod types;

pub use column::ColumnProfile;
pub use table::DatasetProfile;
pub use types::ColumnKind;
