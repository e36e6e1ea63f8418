//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Write content to file with standardized error handling.
///
/// Truncates in place. There is no temp-file-then-rename step, so a failed
/// write leaves whatever the filesystem kept.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn read_file_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "<button className=\"px-4 py-2\">").unwrap();

        let content = read_file(temp.path(), "read page").unwrap();
        assert!(content.contains("px-4 py-2"));
    }

    #[test]
    fn read_file_returns_error_for_missing_file() {
        let result = read_file(Path::new("/nonexistent/Page.tsx"), "read Page.tsx");
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
        assert_eq!(err.details["context"], "read Page.tsx");
    }

    #[test]
    fn write_file_truncates_existing_content() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "a much longer original body").unwrap();

        write_file(temp.path(), "short", "write page").unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert_eq!(content, "short");
    }

    #[test]
    fn write_file_returns_error_for_invalid_path() {
        let result = write_file(
            Path::new("/nonexistent/dir/Page.tsx"),
            "content",
            "write Page.tsx",
        );
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }
}
