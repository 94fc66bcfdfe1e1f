//! # commitscrub
//!
//! A pre-commit working-copy hygiene tool.

use anyhow::Result;
use commitscrub::cli::{Cli, run_hook};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_hook(cli.run_args)
}
