//! Scans input files one after another into a single sink

use crate::error::CliResult;
use crate::input::FileReader;
use anyhow::Context;
use std::io::Write;
use std::path::PathBuf;
use ustrings_core::Scanner;

/// Totals over every file scanned
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DriverSummary {
    pub files: usize,
    pub bytes: u64,
    pub runs_emitted: u64,
}

/// Scan `paths` in order, appending every file's output to `sink`
///
/// Each file is opened only when its turn comes. The first file that cannot
/// be opened aborts the whole run; files after it are never touched. Output
/// from earlier files has already been flushed by then.
pub fn scan_files<W: Write + ?Sized>(
    scanner: &Scanner,
    paths: &[PathBuf],
    sink: &mut W,
) -> CliResult<DriverSummary> {
    let mut totals = DriverSummary::default();

    for path in paths {
        let mut reader = FileReader::open(path)?;
        let summary = scanner
            .scan(&mut reader, sink)
            .with_context(|| format!("Failed to scan {}", path.display()))?;
        sink.flush().context("Failed to flush output")?;

        log::debug!(
            "{}: {} bytes, {} code points, {} strings{}",
            path.display(),
            summary.bytes_consumed,
            summary.code_points,
            summary.runs_emitted,
            if summary.trailing_run_discarded {
                ", trailing run dropped"
            } else {
                ""
            }
        );

        totals.files += 1;
        totals.bytes += summary.bytes_consumed;
        totals.runs_emitted += summary.runs_emitted;
    }

    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::fs;
    use tempfile::TempDir;
    use ustrings_core::Configuration;

    fn scanner() -> Scanner {
        Scanner::new(Configuration::default()).unwrap()
    }

    #[test]
    fn test_files_scanned_in_argument_order() {
        let temp_dir = TempDir::new().unwrap();
        let b = temp_dir.path().join("b.bin");
        let a = temp_dir.path().join("a.bin");
        fs::write(&b, b"\x00second file\x00").unwrap();
        fs::write(&a, b"\x00first file\x00").unwrap();

        let mut out = Vec::new();
        let totals = scan_files(&scanner(), &[b, a], &mut out).unwrap();

        assert_eq!(out, b"second file\nfirst file\n");
        assert_eq!(
            totals,
            DriverSummary {
                files: 2,
                bytes: 25,
                runs_emitted: 2,
            }
        );
    }

    #[test]
    fn test_no_separator_between_files() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.bin");
        let b = temp_dir.path().join("b.bin");
        fs::write(&a, b"alpha").unwrap();
        fs::write(&b, b"\x00bravo\x00").unwrap();

        let mut out = Vec::new();
        scan_files(&scanner(), &[a, b], &mut out).unwrap();

        // The open run at the end of the first file does not carry over
        assert_eq!(out, b"bravo\n");
    }

    #[test]
    fn test_open_failure_stops_processing() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.bin");
        let missing = temp_dir.path().join("missing.bin");
        let third = temp_dir.path().join("third.bin");
        fs::write(&first, b"\x00from the first\x00").unwrap();
        fs::write(&third, b"\x00from the third\x00").unwrap();

        let mut out = Vec::new();
        let error = scan_files(&scanner(), &[first, missing.clone(), third], &mut out).unwrap_err();

        assert_eq!(out, b"from the first\n");
        match error.downcast_ref::<CliError>() {
            Some(CliError::InputOpen { path, .. }) => assert_eq!(path, &missing),
            other => panic!("expected InputOpen, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_path_list() {
        let mut out = Vec::new();
        let totals = scan_files(&scanner(), &[], &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(totals, DriverSummary::default());
    }
}
