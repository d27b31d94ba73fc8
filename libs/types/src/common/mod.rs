//! Identifier wrappers and validation errors shared across the workspace

pub mod errors;
pub mod identifiers;
