use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{map_io_err, PatchError, PatchResult};

/// Read a file's contents as UTF-8 text.
///
/// The handle is opened, fully consumed and closed before this returns.
pub fn read_text(path: impl AsRef<Path>) -> PatchResult<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    let bytes = fs::read(path).map_err(map_io_err(path))?;
    let size = bytes.len();
    let content = String::from_utf8(bytes).map_err(|e| PatchError::encoding(path, e))?;

    debug!("Read {} bytes from {}", size, path.display());
    Ok(content)
}

/// Overwrite a file with UTF-8 text.
///
/// Parent directories are never created.
pub fn write_text(path: impl AsRef<Path>, content: &str) -> PatchResult<()> {
    let path = path.as_ref();
    debug!("Writing {} bytes to {}", content.len(), path.display());

    fs::write(path, content).map_err(map_io_err(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_operations() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        fs::write(&file_path, "").unwrap();
        write_text(&file_path, "Hello, world!").unwrap();

        let content = read_text(&file_path).unwrap();
        assert_eq!(content, "Hello, world!");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("missing.js");

        let err = read_text(&file_path).unwrap_err();
        assert!(matches!(err, PatchError::NotFound { .. }));
        assert!(!file_path.exists());
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("latin1.txt");
        fs::write(&file_path, [b'm', 0xF3, b'v', b'i', b'l']).unwrap();

        let err = read_text(&file_path).unwrap_err();
        assert!(matches!(err, PatchError::Encoding { .. }));
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nope").join("file.txt");

        assert!(write_text(&file_path, "x").is_err());
        assert!(!dir.path().join("nope").exists());
    }
}
