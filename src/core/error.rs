//! Error types for resolution and output

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors of a pack invocation
#[derive(Error, Debug)]
pub enum PackError {
    /// An entry point does not exist or cannot be read
    #[error("cannot access entry point {}: {source}", .path.display())]
    EntryPoint {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed below an entry point
    #[error("failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Writing the packed document failed
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
