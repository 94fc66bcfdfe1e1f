//! # File Filter Module
//!
//! This module contains components for deciding which reported paths become
//! candidate files, based on criteria such as the source-file extension
//! allowlist.

use std::path::Path;

use anyhow::Result;

use crate::verbose_log;

/// Extensions treated as source files when no configuration overrides them.
pub const DEFAULT_EXTENSIONS: &[&str] = &["cpp", "h"];

/// Result of a file filtering operation.
pub struct FilterResult {
  /// Whether the file should be processed
  pub should_process: bool,
  /// Reason why the file should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the file should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the file should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter files based on certain criteria.
pub trait FileFilter: Send + Sync {
  /// Determines whether a file should be processed.
  fn should_process(&self, path: &Path) -> Result<FilterResult>;
}

/// Filter that accepts only files whose extension is on the allowlist.
///
/// Extensions are compared case-insensitively and stored without the leading
/// dot, so `"cpp"` matches `foo.cpp`, `foo.CPP` and `foo.Cpp` alike.
pub struct ExtensionFilter {
  extensions: Vec<String>,
}

impl ExtensionFilter {
  /// Creates a filter from a list of extensions (with or without leading
  /// dots, any case).
  pub fn new(extensions: &[String]) -> Self {
    let extensions = extensions
      .iter()
      .map(|ext| ext.trim_start_matches('.').to_lowercase())
      .filter(|ext| !ext.is_empty())
      .collect();
    Self { extensions }
  }

  /// Creates a filter with the built-in source extensions.
  pub fn with_defaults() -> Self {
    Self::new(&DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect::<Vec<_>>())
  }
}

impl FileFilter for ExtensionFilter {
  fn should_process(&self, path: &Path) -> Result<FilterResult> {
    let extension = path
      .extension()
      .map(|ext| ext.to_string_lossy().to_lowercase())
      .unwrap_or_default();

    if self.extensions.iter().any(|allowed| *allowed == extension) {
      Ok(FilterResult::process())
    } else {
      verbose_log!("Skipping: {} (extension not recognized)", path.display());
      Ok(FilterResult::skip("Extension not recognized"))
    }
  }
}

/// Filter that combines multiple filters.
pub struct CompositeFilter {
  filters: Vec<Box<dyn FileFilter>>,
}

impl CompositeFilter {
  /// Creates a new CompositeFilter with the given filters.
  pub fn new(filters: Vec<Box<dyn FileFilter>>) -> Self {
    Self { filters }
  }

  /// Adds a filter to this CompositeFilter.
  #[allow(dead_code)]
  pub fn add_filter(&mut self, filter: Box<dyn FileFilter>) {
    self.filters.push(filter);
  }
}

impl FileFilter for CompositeFilter {
  fn should_process(&self, path: &Path) -> Result<FilterResult> {
    for filter in &self.filters {
      let result = filter.should_process(path)?;
      if !result.should_process {
        return Ok(result);
      }
    }
    Ok(FilterResult::process())
  }
}

/// Constructs the candidate filter for a run.
///
/// # Parameters
///
/// * `extensions` - Extension allowlist; empty means the built-in defaults
///
/// # Returns
///
/// A new CompositeFilter with the configured filters.
pub fn create_default_filter(extensions: &[String]) -> CompositeFilter {
  let extension_filter = if extensions.is_empty() {
    ExtensionFilter::with_defaults()
  } else {
    ExtensionFilter::new(extensions)
  };
  CompositeFilter::new(vec![Box::new(extension_filter)])
}
