//! Extension to language identifier table
//!
//! The identifiers double as Markdown fence annotations.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

/// Every known extension (without the dot) and its language identifier
pub const LANGUAGES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("html", "html"),
    ("css", "css"),
    ("json", "json"),
    ("md", "markdown"),
    ("java", "java"),
    ("cpp", "cpp"),
    ("c", "c"),
    ("go", "go"),
    ("rb", "ruby"),
    ("php", "php"),
    ("rs", "rust"),
    ("swift", "swift"),
    ("sh", "shell"),
    ("jsx", "javascriptreact"),
    ("tsx", "typescriptreact"),
    ("vue", "vue"),
];

static BY_EXTENSION: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LANGUAGES.iter().copied().collect());

/// Language identifier for a path, or `None` when the extension is unmapped
pub fn language_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    BY_EXTENSION.get(ext.as_str()).copied()
}
