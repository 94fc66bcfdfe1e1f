//! # Run Command
//!
//! This module implements the single command of the tool: check the working
//! copy status and scrub the modified source files. It wires the status
//! collector, the change parser, the processor and the run log together.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use tracing::debug;

use crate::config::load_config;
use crate::info_log;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{
  print_all_clean, print_blank_line, print_log_location, print_scrubbed_files, print_start_message,
  print_status_failure, print_summary,
};
use crate::processor::Processor;
use crate::processor::header::DATE_FORMAT;
use crate::report::{RunLog, RunSummary, write_json_report};
use crate::status::run_status;
use crate::workspace::{resolve_log_path, resolve_workspace};

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
  /// Hook arguments: either none (scrub the current directory) or exactly
  /// three - PATH_FILE MESSAGE_FILE WORKING_DIR, as passed by a start-commit
  /// hook. The first two are accepted and ignored.
  #[arg(value_name = "HOOK_ARGS")]
  pub hook_args: Vec<String>,

  /// Path to config file (default: .commitscrub.toml in the working
  /// directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Log file location (default: start_commit_hook.log next to the
  /// executable)
  #[arg(long, value_name = "FILE")]
  pub log_file: Option<PathBuf>,

  /// Generate a JSON report of the run and save it to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl RunArgs {
  /// Validate the arguments and return an error if invalid
  fn validate(&self) -> Result<(), String> {
    match self.hook_args.len() {
      0 | 3 => Ok(()),
      n => Err(format!(
        "Expected no hook arguments or exactly three (PATH_FILE MESSAGE_FILE WORKING_DIR), got {}",
        n
      )),
    }
  }
}

/// Run the scrub with the given arguments
pub fn run_hook(args: RunArgs) -> Result<()> {
  // Validate arguments
  if let Err(e) = args.validate() {
    eprintln!("ERROR: {e}");
    process::exit(1);
  }

  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set verbose mode for output formatting and the info_log! macro
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let workspace = resolve_workspace(&args.hook_args)?;
  let working_dir = workspace.root().to_path_buf();
  if workspace.is_from_hook() {
    debug!("Working directory from hook arguments: {}", working_dir.display());
  } else {
    debug!("Working directory from process environment: {}", working_dir.display());
  }

  // Load configuration file if present
  let config = load_config(args.config.as_deref(), &working_dir, args.no_config)
    .context("Failed to load configuration")?
    .unwrap_or_default();

  let status_command = config.status_command().to_string();
  let extensions = config.extension_allowlist();
  let log_file = args.log_file.clone().unwrap_or_else(|| PathBuf::from(config.log_file()));
  let log_path = resolve_log_path(&log_file)?;

  print_start_message(&working_dir, &status_command);

  // Start timing
  let start_time = Instant::now();

  let mut log = RunLog::new();
  log.note("Checking status of working copy files...");
  log.note(format!("{}> {}", working_dir.display(), status_command));

  let status = run_status(&status_command, &working_dir)?;

  let (summary, outcomes) = if status.success() {
    log.output(status.stdout.clone());

    let today = Local::now().format(DATE_FORMAT).to_string();
    let processor = Processor::new(working_dir.clone(), &extensions, today);

    let candidates = processor.candidates_from_status(&status.stdout)?;
    debug!("{} candidate files", candidates.len());

    let outcomes = processor.process_all(&candidates, &mut log)?;
    let summary = RunSummary {
      candidates: candidates.len(),
      files_written: outcomes.iter().filter(|outcome| outcome.written).count(),
      status_failed: false,
      duration_secs: start_time.elapsed().as_secs_f64(),
    };
    (summary, outcomes)
  } else {
    // The status command is the authority on the working copy; without it no
    // file is touched this run.
    log.output(status.stderr.clone());
    log.error(format!(
      "Command \"{}\" returned exit code {}.",
      status_command, status.exit_code
    ));
    let summary = RunSummary {
      candidates: 0,
      files_written: 0,
      status_failed: true,
      duration_secs: start_time.elapsed().as_secs_f64(),
    };
    (summary, Vec::new())
  };

  log.flush_to(&log_path)?;
  print_log_location(&log_path);

  // Print the outcome
  print_blank_line();
  if summary.status_failed {
    print_status_failure(&status_command, status.exit_code);
  } else if summary.files_written == 0 {
    print_all_clean();
  } else {
    print_scrubbed_files(&outcomes, &working_dir);
  }
  print_blank_line();
  print_summary(&summary);

  // Generate JSON report if requested
  if let Some(ref output_path) = args.report_json {
    if let Err(e) = write_json_report(output_path, &summary, &log) {
      eprintln!("Error generating JSON report: {}", e);
    } else {
      info_log!("Generated JSON report at {}", output_path.display());
    }
  }

  Ok(())
}
