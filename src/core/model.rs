//! Pack Model
//!
//! Data carried between the resolver, the formatter and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::file_reader::FileWarning;

/// A resolved file as reported by `ctxpack list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Absolute path, using '/' as separator
    pub path: String,

    /// Path shown in the document (relative to the project root when possible)
    pub display_path: String,

    /// File size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Language identifier derived from the extension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// The rendered document plus what happened while rendering it
#[derive(Debug, Clone)]
pub struct PackedDocument {
    /// The full document text
    pub text: String,

    /// Number of files listed in the table of contents
    pub listed: usize,

    /// Number of files whose content made it into the document
    pub included: usize,

    /// Files that were listed but could not be read
    pub warnings: Vec<FileWarning>,
}

impl PackedDocument {
    /// Number of files skipped because they could not be read
    pub fn skipped(&self) -> usize {
        self.listed - self.included
    }
}

/// Why there was nothing to pack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NothingReason {
    /// The caller supplied no entry points
    NoEntryPoints,
    /// The entry points resolved to zero files
    NoFiles,
}

impl fmt::Display for NothingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NothingReason::NoEntryPoints => write!(f, "no files or folders selected"),
            NothingReason::NoFiles => write!(f, "the selection contains no visible files"),
        }
    }
}

/// Result of a pack invocation that did not fail
#[derive(Debug, Clone)]
pub enum PackOutcome {
    Packed(PackedDocument),
    NothingToPack(NothingReason),
}

#[cfg(test)]
impl PackOutcome {
    /// The document, if one was produced
    pub fn document(&self) -> Option<&PackedDocument> {
        match self {
            PackOutcome::Packed(doc) => Some(doc),
            PackOutcome::NothingToPack(_) => None,
        }
    }
}
