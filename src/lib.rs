//! # commitscrub
//!
//! A pre-commit working-copy hygiene tool: before a commit, it asks the
//! version-control client which source files are modified or added,
//! normalizes their whitespace (tabs become spaces, trailing whitespace goes
//! away) and refreshes the metadata fields embedded in their header comments
//! (the "last updated" date and the version number).
//!
//! The version-control client is an external collaborator: its status command
//! is run once per working directory and its line-oriented output is parsed,
//! never reimplemented. Everything else is linear, single-pass text
//! processing - one working directory, processed serially, with all
//! diagnostics collected into a log file that is written once at the end of
//! the run.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::{Path, PathBuf};
//!
//! use commitscrub::processor::Processor;
//! use commitscrub::report::RunLog;
//!
//! fn main() -> anyhow::Result<()> {
//!     let processor = Processor::new(
//!         PathBuf::from("/work/project"), // working directory
//!         &[],                            // extension allowlist (empty = defaults)
//!         "05.08.2026".to_string(),       // today, DD.MM.YYYY
//!     );
//!
//!     let mut log = RunLog::new();
//!     let candidates = processor.candidates_from_status("M      src/widget.cpp\n")?;
//!     let outcomes = processor.process_all(&candidates, &mut log)?;
//!
//!     for outcome in &outcomes {
//!         if outcome.written {
//!             println!("scrubbed {}", outcome.path.display());
//!         }
//!     }
//!
//!     log.flush_to(Path::new("start_commit_hook.log"))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`status`] - Runs the status command and captures its streams
//! * [`changes`] - Parses status output into candidate files
//! * [`processor`] - Whitespace normalization and header metadata updates
//! * [`report`] - The run log and report output
//!
//! [`status`]: crate::status
//! [`changes`]: crate::changes
//! [`processor`]: crate::processor
//! [`report`]: crate::report

pub mod changes;
pub mod cli;
pub mod config;
pub mod file_filter;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod status;
pub mod workspace;
