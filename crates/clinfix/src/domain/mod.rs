//! Clinical domain classification and structural checks.

mod classifier;
mod config;
mod structure;

pub use classifier::DomainClassifier;
pub use config::{Domain, DomainConfig};
pub use structure::StructureValidator;
