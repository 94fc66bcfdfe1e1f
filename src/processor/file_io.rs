//! # File I/O Module
//!
//! Whole-file read/write primitives for the processor, plus the on-disk
//! modification date lookup. All operations are plain synchronous filesystem
//! calls; handles are closed when they go out of scope on every path.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use super::header::DATE_FORMAT;

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Read full file content.
  pub fn read_full_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Write file content, overwriting in place. No backup is retained.
  pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }

  /// The file's on-disk modification date, formatted `DD.MM.YYYY` in local
  /// time.
  pub fn modification_date(path: &Path) -> Result<String> {
    let modified = std::fs::metadata(path)
      .and_then(|metadata| metadata.modified())
      .with_context(|| format!("Failed to read modification time: {}", path.display()))?;
    Ok(DateTime::<Local>::from(modified).format(DATE_FORMAT).to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_read_write_roundtrip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("file.cpp");
    FileIO::write_file(&path, "int x;\n").unwrap();
    assert_eq!(FileIO::read_full_content(&path).unwrap(), "int x;\n");
  }

  #[test]
  fn test_modification_date_format() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("file.cpp");
    FileIO::write_file(&path, "").unwrap();

    let date = FileIO::modification_date(&path).unwrap();
    // DD.MM.YYYY
    assert_eq!(date.len(), 10);
    let parts: Vec<_> = date.split('.').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].len(), 2);
    assert_eq!(parts[1].len(), 2);
    assert_eq!(parts[2].len(), 4);
  }

  #[test]
  fn test_missing_file_is_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("absent.cpp");
    assert!(FileIO::read_full_content(&path).is_err());
    assert!(FileIO::modification_date(&path).is_err());
  }
}
