//! Context packing flow - Resolve entry points and render the packed document
//!
//! This is the whole invocation policy: an empty selection or a selection
//! without visible files is "nothing to pack", resolution errors are fatal,
//! unreadable files are warnings.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::core::error::PackError;
use crate::core::format::format_document;
use crate::core::model::{NothingReason, PackOutcome, PackedDocument};
use crate::core::resolve::resolve;
use crate::core::tokenizer::{count_tokens, TokenModel};

/// Options for pack command
#[derive(Debug, Clone)]
pub struct PackOptions {
    /// Files and directories selected by the caller
    pub entry_points: Vec<PathBuf>,
    /// Root for display paths; absolute paths are shown when `None`
    pub project_root: Option<PathBuf>,
    /// Time stamped into the document header
    pub generated_at: DateTime<Utc>,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            entry_points: Vec::new(),
            project_root: None,
            generated_at: Utc::now(),
        }
    }
}

/// Pack result statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackStats {
    pub files_listed: usize,
    pub files_included: usize,
    pub files_skipped: usize,
    pub total_chars: usize,
    pub estimated_tokens: usize,
    /// Token model used for counting
    pub token_model: String,
}

impl PackStats {
    pub fn from_document(doc: &PackedDocument, model: TokenModel) -> Self {
        Self {
            files_listed: doc.listed,
            files_included: doc.included,
            files_skipped: doc.skipped(),
            total_chars: doc.text.chars().count(),
            estimated_tokens: count_tokens(&doc.text, model),
            token_model: model.to_string(),
        }
    }
}

/// Resolve the entry points and render them into one document
pub fn pack_context(opts: &PackOptions) -> Result<PackOutcome, PackError> {
    if opts.entry_points.is_empty() {
        return Ok(PackOutcome::NothingToPack(NothingReason::NoEntryPoints));
    }

    let files = resolve(&opts.entry_points)?;
    if files.is_empty() {
        return Ok(PackOutcome::NothingToPack(NothingReason::NoFiles));
    }

    let doc = format_document(&files, opts.project_root.as_deref(), opts.generated_at);
    Ok(PackOutcome::Packed(doc))
}

/// Print the user-facing "nothing to pack" notice
pub fn report_nothing(reason: NothingReason) {
    eprintln!("{} {}", "Nothing to pack:".yellow().bold(), reason);
}

fn print_stats(stats: &PackStats, json: bool) {
    if json {
        if let Ok(line) = serde_json::to_string(stats) {
            eprintln!("{}", line);
        }
        return;
    }

    eprintln!("{}", "Pack Statistics:".bold());
    eprintln!("   Files listed:   {}", stats.files_listed);
    eprintln!("   Files included: {}", stats.files_included);
    if stats.files_skipped > 0 {
        eprintln!(
            "   {} {}",
            "Files skipped: ".yellow(),
            stats.files_skipped.to_string().yellow()
        );
    }
    eprintln!("   Characters:     {}", stats.total_chars);
    eprintln!(
        "   Tokens:         {} (model: {})",
        stats.estimated_tokens, stats.token_model
    );
    eprintln!();
}

/// How the pack command reports statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsMode {
    #[default]
    Off,
    Text,
    Json,
}

/// Run the pack command
pub fn run_pack(
    opts: PackOptions,
    output: Option<&Path>,
    stats_mode: StatsMode,
    token_model: TokenModel,
) -> Result<()> {
    let doc = match pack_context(&opts)? {
        PackOutcome::Packed(doc) => doc,
        PackOutcome::NothingToPack(reason) => {
            report_nothing(reason);
            return Ok(());
        }
    };

    if !doc.warnings.is_empty() {
        warn!(
            "{} of {} files could not be read and were left out",
            doc.skipped(),
            doc.listed
        );
    }

    match output {
        Some(path) => {
            fs::write(path, &doc.text).map_err(|source| PackError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            info!("Wrote {} files to {}", doc.included, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(doc.text.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write packed document to stdout")?;
        }
    }

    match stats_mode {
        StatsMode::Off => {}
        StatsMode::Text => print_stats(&PackStats::from_document(&doc, token_model), false),
        StatsMode::Json => print_stats(&PackStats::from_document(&doc, token_model), true),
    }

    Ok(())
}
