//! Formatter - renders the packed document
//!
//! Layout:
//! - title, total file count and generation time
//! - a numbered table of contents with one line per input file
//! - one block per readable file: `#` banner with path, size, modification
//!   time and language, then the content (fenced when the language is known)
//!
//! Files that cannot be read stay in the table of contents but get no block;
//! they are returned as warnings instead.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::file_reader::read_text_file;
use crate::core::language::language_for;
use crate::core::model::PackedDocument;
use crate::core::paths::display_path;
use crate::core::util::{format_size_kb, format_system_time, format_timestamp};

/// Document title line
pub const TITLE: &str = "# Project Context Pack";

/// Width of the divider lines
pub const DIVIDER_WIDTH: usize = 80;

/// Prefix of the line carrying the generation time
pub const GENERATED_PREFIX: &str = "# Generated: ";

fn divider(c: char) -> String {
    std::iter::repeat(c).take(DIVIDER_WIDTH).collect()
}

/// Render `files` into one document.
///
/// `project_root` controls the display paths; `generated_at` is the only
/// input that is not derived from the files themselves.
pub fn format_document(
    files: &[PathBuf],
    project_root: Option<&Path>,
    generated_at: DateTime<Utc>,
) -> PackedDocument {
    let total = files.len();
    let display: Vec<String> = files
        .iter()
        .map(|f| display_path(f, project_root))
        .collect();

    let mut output = String::new();
    output.push_str(TITLE);
    output.push('\n');
    output.push_str(&format!("# Total files: {}\n", total));
    output.push_str(&format!(
        "{}{}\n",
        GENERATED_PREFIX,
        format_timestamp(generated_at)
    ));
    output.push('\n');

    output.push_str("# Files included:\n");
    for (i, path) in display.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, path));
    }
    output.push_str(&divider('='));
    output.push_str("\n\n");

    let mut warnings = Vec::new();
    let mut included = 0;

    for (i, (file, shown)) in files.iter().zip(&display).enumerate() {
        let content = match read_text_file(file) {
            Ok(c) => c,
            Err(warning) => {
                warn!("Skipping {}", warning);
                warnings.push(warning);
                continue;
            }
        };
        debug!("Packing {} ({} bytes)", shown, content.size);

        let language = language_for(file);

        output.push_str(&divider('#'));
        output.push('\n');
        output.push_str(&format!("# FILE {}/{}: {}\n", i + 1, total, shown));
        output.push_str(&format!(
            "# Size: {} | Modified: {}\n",
            format_size_kb(content.size),
            format_system_time(content.modified)
        ));
        if let Some(lang) = language {
            output.push_str(&format!("# Language: {}\n", lang));
        }
        output.push_str(&divider('#'));
        output.push_str("\n\n");

        if let Some(lang) = language {
            output.push_str(&format!("```{}\n", lang));
        }
        output.push_str(&content.text);
        if !content.text.is_empty() && !content.text.ends_with('\n') {
            output.push('\n');
        }
        if language.is_some() {
            output.push_str("```\n");
        }
        output.push_str(&divider('='));
        output.push_str("\n\n");

        included += 1;
    }

    PackedDocument {
        text: output,
        listed: total,
        included,
        warnings,
    }
}
