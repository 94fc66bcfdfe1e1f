//! # Output Module
//!
//! This module centralizes all user-facing terminal output for the
//! commitscrub tool. It provides consistent formatting, colors, and symbols.
//!
//! The terminal output is a convenience layer only; the authoritative record
//! of a run is the log file written by [`crate::report::RunLog`].

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::processor::FileOutcome;
use crate::report::RunSummary;

/// Symbols used in output
pub mod symbols {
  /// Nothing to do / clean working copy
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Status command failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// File was scrubbed and written back
  pub const UPDATED: &str = "\u{21bb}"; // ↻
}

/// Print the initial "Checking working copy..." message.
pub fn print_start_message(working_dir: &Path, command: &str) {
  if is_quiet() {
    return;
  }

  println!("Checking working copy in {}...", working_dir.display());
  if is_verbose() {
    eprintln!("Status command: {}", command);
  }
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the list of files that were scrubbed and written back.
///
/// In quiet mode, just the file paths are printed (for scripting).
pub fn print_scrubbed_files(outcomes: &[FileOutcome], working_dir: &Path) {
  let written: Vec<_> = outcomes.iter().filter(|outcome| outcome.written).collect();
  if written.is_empty() {
    return;
  }

  if is_quiet() {
    for outcome in &written {
      println!("{}", make_relative_path(&outcome.path, working_dir));
    }
    return;
  }

  let count = written.len();
  println!(
    "{} {} {} scrubbed:",
    symbols::UPDATED.if_supports_color(Stream::Stdout, |s| s.green()),
    count,
    if count == 1 { "file" } else { "files" }
  );
  for outcome in &written {
    println!(
      "  {} ({})",
      make_relative_path(&outcome.path, working_dir),
      outcome.modification_date
    );
  }
}

/// Print the all-clean message for runs that changed nothing.
pub fn print_all_clean() {
  if is_quiet() {
    return;
  }
  println!(
    "{} Working copy is clean, nothing to scrub.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Print the status-command failure notice.
///
/// Goes to stderr; details are in the log file.
pub fn print_status_failure(command: &str, exit_code: i32) {
  eprintln!(
    "{} Status command {:?} failed with exit code {}; no files were touched.",
    symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()),
    command,
    exit_code
  );
}

/// Print the end-of-run summary line.
pub fn print_summary(summary: &RunSummary) {
  if is_quiet() {
    return;
  }

  println!(
    "Examined {} candidate {}, scrubbed {} in {:.2}s.",
    summary.candidates,
    if summary.candidates == 1 { "file" } else { "files" },
    summary.files_written,
    summary.duration_secs
  );
}

/// Print where the run log was written (verbose only).
pub fn print_log_location(path: &Path) {
  if is_verbose() {
    eprintln!("Run log written to {}", path.display());
  }
}

/// Converts a path to a string relative to the working directory when
/// possible, for friendlier display.
fn make_relative_path(path: &Path, working_dir: &Path) -> String {
  if path.is_relative() {
    return path.display().to_string();
  }

  pathdiff::diff_paths(path, working_dir)
    .unwrap_or_else(|| path.to_path_buf())
    .display()
    .to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_make_relative_path_keeps_relative_input() {
    assert_eq!(make_relative_path(Path::new("src/foo.cpp"), Path::new("/work")), "src/foo.cpp");
  }

  #[test]
  fn test_make_relative_path_strips_working_dir() {
    assert_eq!(
      make_relative_path(Path::new("/work/src/foo.cpp"), Path::new("/work")),
      "src/foo.cpp"
    );
  }
}
