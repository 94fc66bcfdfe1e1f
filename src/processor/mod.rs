//! # Processor Module
//!
//! This module contains the core per-file pipeline: read a candidate file,
//! normalize its whitespace, refresh the header metadata and write the result
//! back only when the content actually changed.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and writing operations
//! - [`whitespace`] - Tab and trailing-whitespace normalization
//! - [`header`] - Header comment extraction and metadata field rewrites
//!
//! The [`Processor`] struct is the main entry point, orchestrating the
//! submodules and recording every decision on the [`RunLog`].

mod file_io;
pub mod header;
pub mod whitespace;

use std::path::{Path, PathBuf};

use anyhow::Result;
pub use file_io::FileIO;
pub use header::{FieldStatus, MetadataOutcome, TARGET_VERSION};
use tracing::debug;
pub use whitespace::NormalizeOutcome;

use crate::changes::{collect_candidates, parse_status_lines};
use crate::file_filter::{CompositeFilter, create_default_filter};
use crate::report::RunLog;

/// One candidate file in flight through the pipeline.
///
/// Created when the file is read, mutated through normalization and metadata
/// update, and persisted only when the content changed.
struct FileRevision {
  path: PathBuf,
  original: String,
  modified: String,
  modification_date: String,
}

impl FileRevision {
  fn is_dirty(&self) -> bool {
    self.modified != self.original
  }
}

/// Result of processing one candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
  /// The path as reported by the status command.
  pub path: PathBuf,
  /// The effective modification date used for the header rewrite.
  pub modification_date: String,
  /// Whether the file content changed and was written back.
  pub written: bool,
}

/// Processor for the commit hygiene pipeline.
///
/// The `Processor` is responsible for:
/// - Narrowing status output down to candidate files
/// - Normalizing whitespace in each candidate
/// - Refreshing the header metadata fields
/// - Writing changed files back in place
/// - Recording every outcome on the run log
pub struct Processor {
  /// Target working directory; reported paths are resolved against it.
  working_dir: PathBuf,

  /// Filter deciding which reported paths are source candidates.
  filter: CompositeFilter,

  /// Today's date, formatted `DD.MM.YYYY`. Injected at construction so the
  /// pipeline stays deterministic under test.
  today: String,
}

impl Processor {
  /// Creates a new processor.
  ///
  /// # Parameters
  ///
  /// * `working_dir` - Directory the status command ran in
  /// * `extensions` - Extension allowlist; empty means the built-in defaults
  /// * `today` - Current date formatted `DD.MM.YYYY`
  pub fn new(working_dir: PathBuf, extensions: &[String], today: String) -> Self {
    Self {
      working_dir,
      filter: create_default_filter(extensions),
      today,
    }
  }

  pub fn working_dir(&self) -> &Path {
    &self.working_dir
  }

  /// Parses status output and returns the candidate files, in order of
  /// appearance.
  pub fn candidates_from_status(&self, status_stdout: &str) -> Result<Vec<PathBuf>> {
    let entries = parse_status_lines(status_stdout);
    debug!("Parsed {} status entries", entries.len());
    collect_candidates(&entries, &self.working_dir, &self.filter)
  }

  /// Processes every candidate in order.
  ///
  /// Appends the "Modified source files:" section to the log (or the
  /// no-candidates note) and returns one outcome per candidate.
  pub fn process_all(&self, candidates: &[PathBuf], log: &mut RunLog) -> Result<Vec<FileOutcome>> {
    if candidates.is_empty() {
      log.note("No modified source files found.");
      return Ok(Vec::new());
    }

    log.note("Modified source files:");
    candidates.iter().map(|candidate| self.process_file(candidate, log)).collect()
  }

  /// Runs the whitespace and metadata pipeline on a single candidate.
  ///
  /// The file is written back only if its content changed; the log records
  /// the entry line, every INFO/WARNING for the file and, when a write
  /// happened, a save confirmation naming the path and the modification date
  /// used.
  pub fn process_file(&self, reported: &Path, log: &mut RunLog) -> Result<FileOutcome> {
    let full_path = self.working_dir.join(reported);
    let mut modification_date = FileIO::modification_date(&full_path)?;
    log.note(format!("{}  {}", modification_date, reported.display()));

    let original = FileIO::read_full_content(&full_path)?;

    let (normalized, whitespace) = whitespace::normalize(&original);
    if whitespace.tabs_replaced {
      log.info("Tabs in the file will be replaced.");
      // The whitespace edit is itself a fresh change; the on-disk timestamp
      // no longer describes it.
      modification_date = self.today.clone();
    }
    if whitespace.trailing_whitespace {
      log.info("Trailing whitespace in the file will be removed.");
    }

    let (updated, metadata) = header::update_metadata(&normalized, &modification_date);
    match metadata {
      None => log.warning("No file comment found in the file."),
      Some(outcome) => {
        match outcome.date {
          FieldStatus::Rewritten => log.info("The updated date in the file will be updated."),
          FieldStatus::Missing => log.warning("No updated date found in the file comment."),
          FieldStatus::Current => {}
        }
        match outcome.version {
          FieldStatus::Rewritten => {
            log.info(format!("The version number in the file will be changed to \"{}\".", TARGET_VERSION));
          }
          FieldStatus::Missing => log.warning("No version number found in the file comment."),
          FieldStatus::Current => {}
        }
      }
    }

    let revision = FileRevision {
      path: full_path,
      original,
      modified: updated,
      modification_date,
    };

    let written = revision.is_dirty();
    if written {
      debug!("Writing {}", revision.path.display());
      FileIO::write_file(&revision.path, &revision.modified)?;
      log.note(format!("    Saved {} ({})", reported.display(), revision.modification_date));
    } else {
      debug!("No content change for {}", revision.path.display());
    }

    Ok(FileOutcome {
      path: reported.to_path_buf(),
      modification_date: revision.modification_date,
      written,
    })
  }
}
