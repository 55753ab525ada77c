//! Output sink shared by every scanned file

use crate::error::{CliError, CliResult};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Open the output sink: the given file, or stdout when `path` is `None`
///
/// The sink is buffered. The driver flushes it after every input file.
pub fn open_sink(path: Option<&Path>) -> CliResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::OutputOpen {
                path: path.to_path_buf(),
                source,
            })?;
            log::debug!("Writing output to {}", path.display());
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
