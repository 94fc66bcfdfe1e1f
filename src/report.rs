//! # Report Module
//!
//! This module provides the run log that accumulates diagnostics across a
//! whole run, plus the summary and JSON report output.
//!
//! Diagnostics are collected in memory and flushed exactly once at the end of
//! the run. There is no streaming log: a crash mid-run loses the log for that
//! run, which is acceptable for an advisory pre-commit tool.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// A single diagnostic record accumulated during a run.
///
/// The variants map to the line classes of the classic log format:
/// verbatim captured command output, un-leveled progress notes, and
/// INFO/WARNING/ERROR entries for individual files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "lowercase")]
pub enum Diagnostic {
  /// Verbatim text captured from the status command (may span lines).
  Output(String),
  /// Un-leveled progress line, printed as-is.
  Note(String),
  /// A change the tool is about to make to a file.
  Info(String),
  /// A non-fatal problem, e.g. a missing metadata field.
  Warning(String),
  /// A failure that stops processing, e.g. a failed status command.
  Error(String),
}

impl std::fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Diagnostic::Output(text) | Diagnostic::Note(text) => write!(f, "{}", text),
      Diagnostic::Info(message) => write!(f, "    INFO: {}", message),
      Diagnostic::Warning(message) => write!(f, "    WARNING: {}", message),
      Diagnostic::Error(message) => write!(f, "ERROR: {}", message),
    }
  }
}

/// Ordered collection of diagnostics for one run.
///
/// The log is passed down through the pipeline as a mutable collector and
/// rendered once, at exit, into the log file.
#[derive(Debug, Default)]
pub struct RunLog {
  entries: Vec<Diagnostic>,
}

impl RunLog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn output(&mut self, text: impl Into<String>) {
    self.entries.push(Diagnostic::Output(text.into()));
  }

  pub fn note(&mut self, text: impl Into<String>) {
    self.entries.push(Diagnostic::Note(text.into()));
  }

  pub fn info(&mut self, message: impl Into<String>) {
    self.entries.push(Diagnostic::Info(message.into()));
  }

  pub fn warning(&mut self, message: impl Into<String>) {
    self.entries.push(Diagnostic::Warning(message.into()));
  }

  pub fn error(&mut self, message: impl Into<String>) {
    self.entries.push(Diagnostic::Error(message.into()));
  }

  /// All diagnostics collected so far, in insertion order.
  pub fn entries(&self) -> &[Diagnostic] {
    &self.entries
  }

  /// Whether any WARNING or ERROR diagnostics were recorded.
  pub fn has_problems(&self) -> bool {
    self
      .entries
      .iter()
      .any(|d| matches!(d, Diagnostic::Warning(_) | Diagnostic::Error(_)))
  }

  /// Renders the log as text: one entry per line, joined with `\n`, with a
  /// trailing newline.
  pub fn render(&self) -> String {
    let mut rendered = self
      .entries
      .iter()
      .map(|entry| entry.to_string())
      .collect::<Vec<_>>()
      .join("\n");
    rendered.push('\n');
    rendered
  }

  /// Writes the rendered log to `path`, replacing any previous log file.
  pub fn flush_to(&self, path: &Path) -> Result<()> {
    fs::write(path, self.render()).with_context(|| format!("Failed to write log file: {}", path.display()))
  }
}

/// Aggregate counts for one run, used for terminal output and reports.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
  /// Number of candidate files examined.
  pub candidates: usize,
  /// Number of files whose content changed and was written back.
  pub files_written: usize,
  /// Whether the status command failed (nonzero exit).
  pub status_failed: bool,
  /// Wall-clock duration of the run in seconds.
  pub duration_secs: f64,
}

/// Serializable view of a whole run for the JSON report.
#[derive(Debug, Serialize)]
struct RunReport<'a> {
  summary: &'a RunSummary,
  diagnostics: &'a [Diagnostic],
}

/// Writes a JSON report of the run to `path`.
///
/// The report contains the run summary and every diagnostic in log order, so
/// it carries the same information as the text log in machine-readable form.
pub fn write_json_report(path: &Path, summary: &RunSummary, log: &RunLog) -> Result<()> {
  let report = RunReport {
    summary,
    diagnostics: log.entries(),
  };
  let content = serde_json::to_string_pretty(&report).context("Failed to serialize run report")?;
  fs::write(path, content).with_context(|| format!("Failed to write report to {}", path.display()))
}
