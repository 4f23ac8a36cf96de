//! Repairs applied to a copy of the raw dataset.

mod age;
mod engine;
mod operations;

pub use age::{format_number, AgeAssessment, AgeRangeCorrector};
pub use engine::{CleaningOutcome, TransformEngine};
pub use operations::{RowAudit, TransformChange, TransformOperation, TransformResult};
