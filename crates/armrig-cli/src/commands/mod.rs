//! CLI command implementations

pub mod distribute;
pub mod fractions;
pub mod json_output;
pub mod validate;
