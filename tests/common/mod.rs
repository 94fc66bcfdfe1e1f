#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

/// A source file header in the shape the updater expects.
///
/// `version` and `date` land in the `\version` and `\date` fields.
pub fn source_with_header(version: &str, date: &str, body: &str) -> String {
  format!(
    "//!\n\
     //! \\file       widget.cpp\n\
     //! \\author     Jane Doe <jane@example.com>\n\
     //! \\version    {version}\n\
     //! \\date       {date} (last updated)\n\
     //!\n\
     \n\
     {body}"
  )
}

/// Writes `content` to `relative` under `dir`, creating parent directories.
pub fn write_file(dir: &Path, relative: &str, content: &str) -> Result<PathBuf> {
  let path = dir.join(relative);
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  std::fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(path)
}

/// Writes a `.commitscrub.toml` that replays `status_text` through `cat`,
/// making the end-to-end path runnable without a version-control client.
pub fn write_status_fixture(dir: &Path, status_text: &str) -> Result<()> {
  write_file(dir, "status.txt", status_text)?;
  write_file(dir, ".commitscrub.toml", "status-command = \"cat status.txt\"\n")?;
  Ok(())
}

/// Sets a file's modification time via `touch -t` (format `YYYYMMDDhhmm`).
pub fn set_modification_time(path: &Path, stamp: &str) -> Result<()> {
  let status = Command::new("touch")
    .arg("-t")
    .arg(stamp)
    .arg(path)
    .status()
    .with_context(|| format!("Failed to run touch on {}", path.display()))?;
  if !status.success() {
    anyhow::bail!("touch -t {} failed for {}", stamp, path.display());
  }
  Ok(())
}

/// Today's date in the header format, for asserting date rewrites.
pub fn today() -> String {
  chrono::Local::now().format("%d.%m.%Y").to_string()
}
