//! Opening input files for scanning

use crate::error::CliError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Opens input files as buffered byte streams
pub struct FileReader;

impl FileReader {
    /// Open a file for scanning
    pub fn open(path: &Path) -> Result<BufReader<File>, CliError> {
        let file = File::open(path).map_err(|source| CliError::InputOpen {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_open_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("data.bin");
        fs::write(&file_path, b"\x00\x01binary\xff").unwrap();

        let mut reader = FileReader::open(&file_path).unwrap();
        let mut content = Vec::new();
        reader.read_to_end(&mut content).unwrap();
        assert_eq!(content, b"\x00\x01binary\xff");
    }

    #[test]
    fn test_open_nonexistent_file() {
        let path = Path::new("/nonexistent/file.bin");
        let result = FileReader::open(path);

        match result {
            Err(CliError::InputOpen { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected InputOpen, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_open_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("no_read.bin");
        fs::write(&file_path, "content").unwrap();

        let mut permissions = fs::metadata(&file_path).unwrap().permissions();
        permissions.set_mode(0o000);
        fs::set_permissions(&file_path, permissions).unwrap();

        // Root ignores file modes, so only check the error shape when it fails
        if let Err(error) = FileReader::open(&file_path) {
            assert!(matches!(error, CliError::InputOpen { .. }));
        }

        let mut permissions = fs::metadata(&file_path).unwrap().permissions();
        permissions.set_mode(0o644);
        fs::set_permissions(&file_path, permissions).unwrap();
    }
}
