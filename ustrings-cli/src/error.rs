//! Error handling for the CLI application

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// An input file could not be opened
    #[error("failed to open input {}: {source}", path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created
    #[error("failed to create output {}: {source}", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
