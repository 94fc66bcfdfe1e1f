//! # Workspace Module
//!
//! This module resolves the working directory commitscrub operates on and the
//! location of the log file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Target working directory selection.
pub enum Workspace {
  /// Working directory taken from the hook's third argument.
  HookArgument { root: PathBuf },
  /// Working directory of the commitscrub process itself.
  CurrentDirectory { root: PathBuf },
}

impl Workspace {
  pub fn root(&self) -> &Path {
    match self {
      Self::HookArgument { root } | Self::CurrentDirectory { root } => root.as_path(),
    }
  }

  pub const fn is_from_hook(&self) -> bool {
    matches!(self, Self::HookArgument { .. })
  }
}

/// Resolves the target working directory from the hook arguments.
///
/// With three hook arguments the third one names the working directory (the
/// first two are temp-file paths from the hook calling convention, accepted
/// but unused). With no arguments the process working directory is used.
pub fn resolve_workspace(hook_args: &[String]) -> Result<Workspace> {
  if let [_path_file, _message_file, working_dir] = hook_args {
    let root = PathBuf::from(working_dir);
    if !root.is_dir() {
      anyhow::bail!("Working directory does not exist: {}", root.display());
    }
    return Ok(Workspace::HookArgument { root });
  }

  let root = std::env::current_dir().with_context(|| "Failed to get current directory")?;
  Ok(Workspace::CurrentDirectory { root })
}

/// Resolves the log file location.
///
/// Relative names land in the directory containing the running executable;
/// absolute paths are honored as-is.
pub fn resolve_log_path(log_file: &Path) -> Result<PathBuf> {
  if log_file.is_absolute() {
    return Ok(log_file.to_path_buf());
  }

  let executable = std::env::current_exe().with_context(|| "Failed to locate the running executable")?;
  let executable_dir = executable
    .parent()
    .with_context(|| "Failed to resolve the executable directory")?;
  Ok(executable_dir.join(log_file))
}
