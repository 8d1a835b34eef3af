//! File reading for the formatter
//!
//! Every selected file is read once, in full. Files that cannot be read or
//! are not valid UTF-8 text are reported as a [`FileWarning`] instead of
//! failing the whole pack:
//! - Missing or permission-denied files
//! - Binary files (NUL byte in the first 8 KiB)
//! - Files with invalid UTF-8 sequences

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// How many leading bytes are inspected for NUL when sniffing binary content
pub const BINARY_SNIFF_LEN: usize = 8192;

/// Warning codes for file operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningCode {
    /// File could not be opened or read
    FileUnreadable,
    /// File appears to be binary
    BinaryFile,
    /// File contains invalid UTF-8
    InvalidEncoding,
}

impl WarningCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::FileUnreadable => "FILE_UNREADABLE",
            WarningCode::BinaryFile => "BINARY_FILE",
            WarningCode::InvalidEncoding => "INVALID_ENCODING",
        }
    }
}

/// A structured, non-fatal warning about one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileWarning {
    /// Warning code
    pub code: WarningCode,

    /// Warning message
    pub message: String,

    /// Path of the offending file
    pub path: String,
}

impl FileWarning {
    /// Create a new warning
    pub fn new(code: WarningCode, message: impl Into<String>, path: &Path) -> Self {
        Self {
            code,
            message: message.into(),
            path: path.display().to_string(),
        }
    }
}

impl fmt::Display for FileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.code.as_str(), self.path, self.message)
    }
}

/// Text content of a file plus the metadata shown in its header
#[derive(Debug, Clone)]
pub struct FileContent {
    pub text: String,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

/// Read a file as UTF-8 text
pub fn read_text_file(path: &Path) -> Result<FileContent, FileWarning> {
    let bytes = fs::read(path).map_err(|e| {
        FileWarning::new(
            WarningCode::FileUnreadable,
            format!("Cannot read file: {}", e),
            path,
        )
    })?;

    let check_len = std::cmp::min(BINARY_SNIFF_LEN, bytes.len());
    if bytes[..check_len].contains(&0) {
        return Err(FileWarning::new(
            WarningCode::BinaryFile,
            "File appears to be binary (contains null bytes)",
            path,
        ));
    }

    let size = bytes.len() as u64;
    let text = String::from_utf8(bytes).map_err(|_| {
        FileWarning::new(
            WarningCode::InvalidEncoding,
            "File contains invalid UTF-8 sequences",
            path,
        )
    })?;

    // Metadata failures only cost us the timestamp
    let modified = fs::metadata(path).and_then(|m| m.modified()).ok();

    Ok(FileContent {
        text,
        size,
        modified,
    })
}
