//! text-to-morse CLI library.
//!
//! Argument definitions, parameter sanitization, logging setup, and the
//! convert command that drives rendering and encoding.

pub mod cli_args;
pub mod commands;
pub mod config;
pub mod logging;
