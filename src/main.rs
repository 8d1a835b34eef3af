//! ctxpack - Pack selected files into one annotated document for LLM context
//!
//! ctxpack provides:
//! - Deterministic resolution of files and directories (hidden entries pruned)
//! - A single text document with a header, table of contents and per-file blocks
//! - Optional token statistics for context budgeting

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod flows;
mod logger;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logger::initialize_logger(cli.verbose, cli.quiet);
    cli::run(cli)
}
