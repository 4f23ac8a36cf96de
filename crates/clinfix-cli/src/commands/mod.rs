//! CLI command implementations.

pub mod classify;
pub mod queries;
pub mod validate;

mod table;
