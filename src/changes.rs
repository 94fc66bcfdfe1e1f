//! # Changes Module
//!
//! This module parses the line-oriented output of the status command into
//! typed entries and narrows them down to candidate files.
//!
//! Each status line carries a one-character change state, six filler
//! characters and the reported path. Parsing is done with an anchored regex
//! with named fields rather than positional slicing, so blank and short lines
//! fall out naturally instead of needing index guards.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use tracing::trace;

use crate::file_filter::FileFilter;
use crate::verbose_log;

/// One status line: `<state><6 filler chars><path>`.
static STATUS_LINE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(?P<state>.).{6}(?P<path>.+)$").expect("status line regex must compile"));

/// Change state reported for a working-copy file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeState {
  /// The file has local modifications.
  Modified,
  /// The file is scheduled for addition.
  Added,
  /// Any other state (conflicted, deleted, unversioned, ...).
  Other(char),
}

impl ChangeState {
  pub const fn from_char(state: char) -> Self {
    match state {
      'M' => ChangeState::Modified,
      'A' => ChangeState::Added,
      other => ChangeState::Other(other),
    }
  }

  /// Whether files in this state are eligible for processing.
  pub const fn is_candidate(self) -> bool {
    matches!(self, ChangeState::Modified | ChangeState::Added)
  }
}

/// A single parsed line of status output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
  pub state: ChangeState,
  /// The path exactly as the status command reported it.
  pub path: String,
}

/// Parses raw status text into entries, in order of appearance.
///
/// Blank lines and lines too short to carry a state and a path are silently
/// skipped; they are noise, not data.
pub fn parse_status_lines(stdout: &str) -> Vec<StatusEntry> {
  stdout
    .split('\n')
    .filter_map(|line| {
      let captures = STATUS_LINE.captures(line)?;
      let state = captures["state"].chars().next()?;
      Some(StatusEntry {
        state: ChangeState::from_char(state),
        path: captures["path"].to_string(),
      })
    })
    .collect()
}

/// Narrows parsed entries down to candidate files.
///
/// A path is accepted when its change state is eligible, it names an existing
/// regular file under `working_dir`, and the filter accepts it. Order of the
/// returned candidates matches the order of appearance in the status output.
pub fn collect_candidates(
  entries: &[StatusEntry],
  working_dir: &Path,
  filter: &dyn FileFilter,
) -> Result<Vec<PathBuf>> {
  let mut candidates = Vec::new();

  for entry in entries {
    trace!("Status entry {:?} {}", entry.state, entry.path);
    if !entry.state.is_candidate() {
      continue;
    }

    let reported = PathBuf::from(&entry.path);
    if !working_dir.join(&reported).is_file() {
      verbose_log!("Skipping: {} (not an existing file)", reported.display());
      continue;
    }

    if filter.should_process(&reported)?.should_process {
      candidates.push(reported);
    }
  }

  Ok(candidates)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::file_filter::create_default_filter;

  #[test]
  fn test_parse_states_and_paths() {
    let entries = parse_status_lines("M      src/foo.cpp\nA      src/bar.h\n?      notes.txt\n");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].state, ChangeState::Modified);
    assert_eq!(entries[0].path, "src/foo.cpp");
    assert_eq!(entries[1].state, ChangeState::Added);
    assert_eq!(entries[1].path, "src/bar.h");
    assert_eq!(entries[2].state, ChangeState::Other('?'));
  }

  #[test]
  fn test_parse_skips_blank_and_short_lines() {
    let entries = parse_status_lines("\nM\nM      \nM      x.cpp\n\n");
    // Only the full line survives; a line with a state but no path is noise.
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, "x.cpp");
  }

  #[test]
  fn test_parse_preserves_order() {
    let entries = parse_status_lines("M      b.cpp\nM      a.cpp\n");
    let paths: Vec<_> = entries.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["b.cpp", "a.cpp"]);
  }

  #[test]
  fn test_collect_candidates_filters_state_extension_and_existence() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(temp_dir.path().join("src")).unwrap();
    std::fs::write(temp_dir.path().join("src/foo.cpp"), "int x;\n").unwrap();
    std::fs::write(temp_dir.path().join("src/bar.h"), "int y;\n").unwrap();
    std::fs::write(temp_dir.path().join("notes.txt"), "hello\n").unwrap();

    let stdout = "M      src/foo.cpp\n\
                  ?      src/bar.h\n\
                  A      notes.txt\n\
                  M      src/gone.cpp\n";
    let entries = parse_status_lines(stdout);
    let filter = create_default_filter(&[]);
    let candidates = collect_candidates(&entries, temp_dir.path(), &filter).unwrap();

    // bar.h is unversioned, notes.txt has the wrong extension, gone.cpp does
    // not exist on disk.
    assert_eq!(candidates, vec![PathBuf::from("src/foo.cpp")]);
  }

  #[test]
  fn test_collect_candidates_keeps_status_order() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("b.cpp"), "").unwrap();
    std::fs::write(temp_dir.path().join("a.h"), "").unwrap();

    let entries = parse_status_lines("M      b.cpp\nA      a.h\n");
    let filter = create_default_filter(&[]);
    let candidates = collect_candidates(&entries, temp_dir.path(), &filter).unwrap();
    assert_eq!(candidates, vec![PathBuf::from("b.cpp"), PathBuf::from("a.h")]);
  }
}
