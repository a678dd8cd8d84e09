//! File I/O primitives with consistent error handling.

use crate::core::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read file contents as UTF-8 text with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Read raw file bytes. Binary-safe; used for image and font payloads.
pub fn read_bytes(path: &Path, operation: &str) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Write raw bytes to a file with standardized error handling.
pub fn write_bytes(path: &Path, bytes: &[u8], operation: &str) -> Result<()> {
    fs::write(path, bytes)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Create a directory (and parents) if it does not already exist.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("create {}", dir.display())))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn read_file_returns_error_for_missing_file() {
        let result = read_file(Path::new("/nonexistent/path.txt"), "test read");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn write_then_read_bytes_round_trips_binary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo.png");
        let payload = [0x89u8, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00];

        write_bytes(&path, &payload, "test write").unwrap();
        let read_back = read_bytes(&path, "test read").unwrap();
        assert_eq!(read_back, payload);
    }

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("dist").join("idm").join("js");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Second call on an existing directory is a no-op
        ensure_dir(&nested).unwrap();
    }
}
