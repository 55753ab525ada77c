//! Error types for the scanning core
//!
//! Decoding problems and read failures never appear here: the decoder
//! absorbs the former as replacement code points and treats the latter as
//! end of stream. The only failures a scan can report are a rejected
//! configuration and a sink that refuses output.

use thiserror::Error;

/// Core scanning errors
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration rejected by the builder
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Writing an emitted line to the output sink failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_invalid_configuration_display() {
        let error = CoreError::InvalidConfiguration("min_run_length must be at least 1".into());
        assert_eq!(
            error.to_string(),
            "invalid configuration: min_run_length must be at least 1"
        );
    }

    #[test]
    fn test_output_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let error: CoreError = io_err.into();
        assert!(matches!(error, CoreError::Output(_)));
        assert!(error.to_string().contains("pipe closed"));
    }
}
