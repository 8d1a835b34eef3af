//! Listing flow - show what a pack would contain without reading file contents

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::language::{language_for, LANGUAGES};
use crate::core::model::{FileEntry, NothingReason};
use crate::core::paths::{display_path, normalize_path};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::resolve::resolve;
use crate::flows::pack::report_nothing;

/// Resolve entry points into file entries
pub fn list_files(entry_points: &[PathBuf], project_root: Option<&Path>) -> Result<Vec<FileEntry>> {
    let files = resolve(entry_points)?;

    Ok(files
        .iter()
        .map(|path| FileEntry {
            path: normalize_path(path),
            display_path: display_path(path, project_root),
            size: fs::metadata(path).ok().map(|m| m.len()),
            language: language_for(path).map(str::to_string),
        })
        .collect())
}

/// Run the list command
pub fn run_list(
    entry_points: &[PathBuf],
    project_root: Option<&Path>,
    config: RenderConfig,
) -> Result<()> {
    if entry_points.is_empty() {
        report_nothing(NothingReason::NoEntryPoints);
        return Ok(());
    }

    let entries = list_files(entry_points, project_root)?;
    if entries.is_empty() {
        report_nothing(NothingReason::NoFiles);
        return Ok(());
    }

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render_jsonl(&entries));

    Ok(())
}

/// Run the languages command
pub fn run_languages() -> Result<()> {
    for (ext, id) in LANGUAGES {
        println!(".{}\t{}", ext, id);
    }
    Ok(())
}
