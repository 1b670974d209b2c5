//! Command implementations.

pub mod convert;
pub mod json_output;
