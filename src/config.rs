//! # Configuration Module
//!
//! This module provides configuration support for commitscrub, allowing users
//! to override the status command, the log file name and the source-file
//! extension allowlist.
//!
//! Configuration can be specified in a `.commitscrub.toml` file in the target
//! working directory or via the `COMMITSCRUB_CONFIG` environment variable.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".commitscrub.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "COMMITSCRUB_CONFIG";

/// Status command used when no configuration overrides it.
pub const DEFAULT_STATUS_COMMAND: &str = "svn status";

/// Log file name used when no configuration overrides it.
pub const DEFAULT_LOG_FILENAME: &str = "start_commit_hook.log";

/// Configuration for extension-based candidate filtering.
///
/// If `include` is specified, only files with those extensions are treated as
/// source candidates; otherwise the built-in defaults apply.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct ExtensionConfig {
  /// If specified, only process files with these extensions.
  #[serde(default)]
  pub include: Option<Vec<String>>,
}

/// Main configuration struct for commitscrub.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
  /// Command line executed through the shell to obtain working-copy status.
  #[serde(default, rename = "status-command")]
  pub status_command: Option<String>,

  /// Name of the log file written next to the executable. An absolute path
  /// is honored as-is.
  #[serde(default, rename = "log-file")]
  pub log_file: Option<String>,

  /// Extension-based candidate filtering configuration.
  #[serde(default)]
  pub extensions: ExtensionConfig,
}

impl Config {
  /// The effective status command.
  pub fn status_command(&self) -> &str {
    self.status_command.as_deref().unwrap_or(DEFAULT_STATUS_COMMAND)
  }

  /// The effective log file name.
  pub fn log_file(&self) -> &str {
    self.log_file.as_deref().unwrap_or(DEFAULT_LOG_FILENAME)
  }

  /// The effective extension allowlist; empty means built-in defaults.
  pub fn extension_allowlist(&self) -> Vec<String> {
    self.extensions.include.clone().unwrap_or_default()
  }

  fn validate(&self) -> Result<(), ConfigError> {
    if let Some(command) = &self.status_command
      && command.trim().is_empty()
    {
      return Err(ConfigError::InvalidValue {
        field: "status-command",
        reason: "must not be empty".to_string(),
      });
    }

    if let Some(log_file) = &self.log_file
      && log_file.trim().is_empty()
    {
      return Err(ConfigError::InvalidValue {
        field: "log-file",
        reason: "must not be empty".to_string(),
      });
    }

    if let Some(include) = &self.extensions.include {
      if include.is_empty() {
        return Err(ConfigError::InvalidValue {
          field: "extensions.include",
          reason: "must list at least one extension".to_string(),
        });
      }
      for extension in include {
        if extension.trim_start_matches('.').is_empty() {
          return Err(ConfigError::InvalidValue {
            field: "extensions.include",
            reason: format!("invalid extension entry: {:?}", extension),
          });
        }
      }
    }

    Ok(())
  }
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A configuration value is invalid.
  #[error("Invalid config value for '{field}': {reason}")]
  InvalidValue { field: &'static str, reason: String },
}

/// Loads the configuration for a run.
///
/// Resolution order: explicit `--config` path, then the `COMMITSCRUB_CONFIG`
/// environment variable, then `.commitscrub.toml` in the working directory.
/// Returns `Ok(None)` when no config file exists or `no_config` is set; a
/// config file that exists but cannot be read or parsed is an error.
pub fn load_config(cli_path: Option<&Path>, working_dir: &Path, no_config: bool) -> Result<Option<Config>, ConfigError> {
  if no_config {
    verbose_log!("Skipping config file (--no-config)");
    return Ok(None);
  }

  let path = match cli_path {
    Some(path) => Some(path.to_path_buf()),
    None => match std::env::var(CONFIG_ENV_VAR) {
      Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
      _ => {
        let default_path = working_dir.join(DEFAULT_CONFIG_FILENAME);
        default_path.is_file().then_some(default_path)
      }
    },
  };

  let Some(path) = path else {
    return Ok(None);
  };

  verbose_log!("Loading config from {}", path.display());
  let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
    path: path.clone(),
    source,
  })?;

  let config: Config = toml::from_str(&content).map_err(|source| ConfigError::ParseError { path, source })?;
  config.validate()?;

  Ok(Some(config))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.status_command(), "svn status");
    assert_eq!(config.log_file(), "start_commit_hook.log");
    assert!(config.extension_allowlist().is_empty());
  }

  #[test]
  fn test_parse_full_config() {
    let config: Config = toml::from_str(
      r#"
        status-command = "git status --porcelain"
        log-file = "hygiene.log"

        [extensions]
        include = ["cpp", "h", "hpp"]
      "#,
    )
    .unwrap();

    assert_eq!(config.status_command(), "git status --porcelain");
    assert_eq!(config.log_file(), "hygiene.log");
    assert_eq!(config.extension_allowlist(), vec!["cpp", "h", "hpp"]);
  }

  #[test]
  fn test_validate_rejects_empty_status_command() {
    let config: Config = toml::from_str(r#"status-command = "  ""#).unwrap();
    assert!(config.validate().is_err());
  }

  #[test]
  fn test_validate_rejects_empty_extension_list() {
    let config: Config = toml::from_str("[extensions]\ninclude = []\n").unwrap();
    assert!(config.validate().is_err());
  }

  #[test]
  fn test_load_config_from_working_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
      temp_dir.path().join(DEFAULT_CONFIG_FILENAME),
      "status-command = \"cat status.txt\"\n",
    )
    .unwrap();

    let config = load_config(None, temp_dir.path(), false).unwrap().unwrap();
    assert_eq!(config.status_command(), "cat status.txt");
  }

  #[test]
  fn test_load_config_absent_is_none() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(load_config(None, temp_dir.path(), false).unwrap().is_none());
  }

  #[test]
  fn test_no_config_skips_existing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join(DEFAULT_CONFIG_FILENAME), "log-file = \"x.log\"\n").unwrap();
    assert!(load_config(None, temp_dir.path(), true).unwrap().is_none());
  }
}
