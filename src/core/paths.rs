//! Path normalization utilities
//!
//! Display paths use '/' as separator and are relative to the project root
//! when the file lies under it.

use std::path::{Path, PathBuf};

/// Files or directories whose presence marks a project root
pub const PROJECT_MARKERS: &[&str] = &[
    ".git",
    "Cargo.toml",
    "package.json",
    "pyproject.toml",
    "go.mod",
];

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Path shown in the table of contents and file headers
pub fn display_path(path: &Path, project_root: Option<&Path>) -> String {
    project_root
        .and_then(|root| make_relative(path, root))
        .filter(|rel| !rel.is_empty())
        .unwrap_or_else(|| normalize_path(path))
}

/// Check if a path is hidden (starts with '.')
///
/// Works on the raw name, so names that are not valid UTF-8 are still caught.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.as_encoded_bytes().starts_with(b"."))
        .unwrap_or(false)
}

/// Find the nearest ancestor of `start` (inclusive) holding a project marker
pub fn discover_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| PROJECT_MARKERS.iter().any(|m| dir.join(m).exists()))
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("src/main.rs");
        assert_eq!(normalize_path(path), "src/main.rs");
    }

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(Path::new(".git")));
        assert!(is_hidden(Path::new("sub/.env")));
        assert!(!is_hidden(Path::new("src")));
        assert!(!is_hidden(Path::new("main.rs")));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_hidden_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        assert!(is_hidden(Path::new(OsStr::from_bytes(b".secret\xff"))));
        assert!(!is_hidden(Path::new(OsStr::from_bytes(b"visible\xff"))));
    }

    #[test]
    fn test_is_hidden_empty_filename() {
        assert!(!is_hidden(Path::new("/")));
    }

    #[test]
    fn test_make_relative() {
        let root = Path::new("/project");
        let path = Path::new("/project/src/main.rs");
        assert_eq!(make_relative(path, root), Some("src/main.rs".to_string()));
    }

    #[test]
    fn test_make_relative_not_under_root() {
        let root = Path::new("/project");
        let path = Path::new("/other/file.rs");
        assert_eq!(make_relative(path, root), None);
    }

    #[test]
    fn test_display_path_under_root() {
        let root = Path::new("/proj");
        assert_eq!(
            display_path(Path::new("/proj/sub/b.js"), Some(root)),
            "sub/b.js"
        );
    }

    #[test]
    fn test_display_path_outside_root_is_absolute() {
        let root = Path::new("/proj");
        assert_eq!(
            display_path(Path::new("/elsewhere/c.py"), Some(root)),
            "/elsewhere/c.py"
        );
    }

    #[test]
    fn test_display_path_without_root() {
        assert_eq!(display_path(Path::new("/proj/a.py"), None), "/proj/a.py");
    }

    #[test]
    fn test_display_path_is_root_itself() {
        // A file selected as the root would otherwise display as ""
        let root = Path::new("/proj/a.py");
        assert_eq!(display_path(root, Some(root)), "/proj/a.py");
    }

    #[test]
    fn test_discover_project_root() {
        let temp = tempfile::tempdir().unwrap();
        let project = temp.path().join("proj");
        let nested = project.join("src/deep");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(project.join("Cargo.toml"), "[package]\n").unwrap();

        assert_eq!(discover_project_root(&nested), Some(project.clone()));
        assert_eq!(discover_project_root(&project), Some(project));
    }

    #[test]
    fn test_discover_project_root_git_dir() {
        let temp = tempfile::tempdir().unwrap();
        let project = temp.path().join("repo");
        std::fs::create_dir_all(project.join(".git")).unwrap();
        std::fs::create_dir_all(project.join("lib")).unwrap();

        assert_eq!(discover_project_root(&project.join("lib")), Some(project));
    }
}
