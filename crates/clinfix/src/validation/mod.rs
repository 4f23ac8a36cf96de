//! Data-quality findings and the validators that produce them.

mod finding;
mod ledger;
mod validators;

pub use finding::{Evidence, Finding, IssueCategory, Severity};
pub use ledger::IssueLedger;
pub use validators::{
    AgeRangeValidator, DuplicateKeyValidator, InvalidNumericValidator, MissingValueValidator,
    ValidationEngine, Validator,
};
