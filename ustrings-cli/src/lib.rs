//! ustrings CLI library
//!
//! This library provides the command-line driver around `ustrings-core`:
//! argument and config-file handling, opening inputs in order, and the
//! shared output sink.

pub mod commands;
pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
