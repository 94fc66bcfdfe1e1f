//! # Status Module
//!
//! This module runs the version-control status command and captures its
//! output. The command is treated as an opaque line-oriented collaborator: it
//! is executed once per run through the platform shell, with no retry and no
//! timeout, and its streams are handed back to the caller for parsing.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use tracing::debug;

/// Captured result of one status command invocation.
#[derive(Debug)]
pub struct StatusOutput {
  /// Standard output, with line endings normalized to `\n`.
  pub stdout: String,
  /// Standard error, with line endings normalized to `\n`.
  pub stderr: String,
  /// Process exit code. `-1` when the process was terminated by a signal.
  pub exit_code: i32,
}

impl StatusOutput {
  /// Whether the command completed successfully.
  pub const fn success(&self) -> bool {
    self.exit_code == 0
  }
}

/// Runs `command` through the platform shell in `working_dir` and captures
/// both streams and the exit code.
///
/// A nonzero exit code is not an error here: callers decide how to report it.
/// Only a failure to launch the shell itself is propagated as an error.
pub fn run_status(command: &str, working_dir: &Path) -> Result<StatusOutput> {
  debug!("Running status command {:?} in {}", command, working_dir.display());

  let output = shell_command(command)
    .current_dir(working_dir)
    .output()
    .with_context(|| format!("Failed to run status command: {}", command))?;

  let exit_code = output.status.code().unwrap_or(-1);
  debug!("Status command exited with code {}", exit_code);

  Ok(StatusOutput {
    stdout: normalize_line_endings(&String::from_utf8_lossy(&output.stdout)),
    stderr: normalize_line_endings(&String::from_utf8_lossy(&output.stderr)),
    exit_code,
  })
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
  let mut cmd = Command::new("sh");
  cmd.arg("-c").arg(command);
  cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
  let mut cmd = Command::new("cmd");
  cmd.arg("/C").arg(command);
  cmd
}

/// Replaces `\r\n` sequences with `\n` so downstream parsing only has to deal
/// with one line-ending convention.
fn normalize_line_endings(text: &str) -> String {
  text.replace("\r\n", "\n")
}
