//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::paths::discover_project_root;
use crate::core::render::RenderConfig;
use crate::core::tokenizer::TokenModel;
use crate::flows::pack::{PackOptions, StatsMode};

/// ctxpack - pack files and folders into one annotated document for LLM context.
#[derive(Parser, Debug)]
#[command(name = "ctxpack")]
#[command(
    author,
    version,
    about,
    long_about = r#"ctxpack concatenates the files you select (directories are walked
recursively, hidden entries skipped) into a single text document with a
header, a numbered table of contents and one block per file.

The document is written to stdout unless --output is given.

Examples:
    ctxpack pack src Cargo.toml
    ctxpack pack . --output context.txt --stats
    ctxpack list src
    ctxpack languages
"#
)]
pub struct Cli {
    /// Project root used for display paths.
    #[arg(
        long,
        global = true,
        env = "CTXPACK_ROOT",
        value_name = "ROOT",
        long_help = "Project root used for display paths.\n\n\
Files under ROOT are shown relative to it; files outside are shown with their\n\
absolute path. When omitted, the nearest ancestor of the current directory that\n\
contains .git, Cargo.toml, package.json, pyproject.toml or go.mod is used. If\n\
none is found, all paths are shown absolute."
    )]
    pub root: Option<PathBuf>,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output on stderr. This is useful when piping to files or\n\
when your terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (errors only).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pack files and directories into one document.
    #[command(
        long_about = "Resolve PATHS into a flat file list and render the packed document.\n\n\
Directories are walked recursively in name order. Files and directories whose\n\
name starts with '.' are skipped inside directories; a file named directly is\n\
always included. Files that cannot be read as UTF-8 text are listed in the\n\
table of contents, left out of the body and reported as warnings.\n\n\
Examples:\n\
  ctxpack pack src tests/cli.rs\n\
  ctxpack pack . --output context.txt\n\
  ctxpack pack src --stats --token-model o200k\n"
    )]
    Pack {
        /// Files and directories to include.
        #[arg(value_name = "PATHS", num_args = 0..)]
        paths: Vec<PathBuf>,

        /// Write the document to FILE instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Show pack statistics on stderr.
        #[arg(
            long,
            long_help = "Print pack statistics (file counts, characters, token estimate) to stderr."
        )]
        stats: bool,

        /// Print pack statistics as one JSON line on stderr.
        #[arg(long)]
        stats_json: bool,

        /// Token model used for statistics (cl100k/o200k/heuristic).
        #[arg(long, default_value = "cl100k", value_name = "MODEL")]
        token_model: String,
    },

    /// List the files a pack would include, as JSON lines.
    #[command(
        long_about = "Resolve PATHS exactly like `pack` and emit one JSON object per file with\n\
its absolute path, display path, size and language. File contents are not read.\n\n\
Example:\n\
  ctxpack list src --pretty\n"
    )]
    List {
        /// Files and directories to resolve.
        #[arg(value_name = "PATHS", num_args = 0..)]
        paths: Vec<PathBuf>,

        /// Pretty-print JSON output with indentation.
        #[arg(long)]
        pretty: bool,
    },

    /// Print the extension to language table.
    Languages,
}

/// Pick the project root: explicit flag first, then marker discovery from `cwd`
pub fn project_root(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    match explicit {
        Some(root) => Some(root.canonicalize().unwrap_or_else(|e| {
            warn!(
                "Cannot resolve --root {}: {}; paths outside it are shown absolute",
                root.display(),
                e
            );
            root.to_path_buf()
        })),
        None => discover_project_root(&cwd.canonicalize().unwrap_or_else(|_| cwd.to_path_buf())),
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let root = project_root(cli.root.as_deref(), &cwd);
    debug!("Project root: {:?}", root);

    match cli.command {
        Commands::Pack {
            paths,
            output,
            stats,
            stats_json,
            token_model,
        } => {
            let model: TokenModel = token_model
                .parse()
                .map_err(anyhow::Error::msg)
                .context("Invalid --token-model")?;
            let stats_mode = if stats_json {
                StatsMode::Json
            } else if stats {
                StatsMode::Text
            } else {
                StatsMode::Off
            };
            let opts = PackOptions {
                entry_points: paths,
                project_root: root,
                generated_at: Utc::now(),
            };
            crate::flows::pack::run_pack(opts, output.as_deref(), stats_mode, model)
        }

        Commands::List { paths, pretty } => crate::flows::list::run_list(
            &paths,
            root.as_deref(),
            RenderConfig::with_pretty(pretty),
        ),

        Commands::Languages => crate::flows::list::run_languages(),
    }
}
