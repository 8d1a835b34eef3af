//! Resolver - expands entry points into a flat file list
//!
//! Directories are walked with walkdir in file-name order. Hidden entries
//! below an entry point are pruned, together with everything under a hidden
//! directory. Files selected directly are always kept.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::error::PackError;
use crate::core::paths::is_hidden;

/// Resolve entry points into absolute file paths, in entry order.
///
/// Only regular files are returned; pipes, sockets and devices are skipped
/// so that reading the list can never block. Fails on the first entry point
/// that does not exist or cannot be read; no partial list is returned. Files
/// reachable from two entry points are listed twice.
pub fn resolve(entry_points: &[PathBuf]) -> Result<Vec<PathBuf>, PackError> {
    let mut files = Vec::new();

    for entry in entry_points {
        let path = entry
            .canonicalize()
            .map_err(|source| PackError::EntryPoint {
                path: entry.clone(),
                source,
            })?;

        let metadata = fs::metadata(&path).map_err(|source| PackError::EntryPoint {
            path: entry.clone(),
            source,
        })?;

        if metadata.is_dir() {
            let before = files.len();
            walk_dir(&path, &mut files)?;
            debug!(
                "Resolved {} files under {}",
                files.len() - before,
                path.display()
            );
        } else if metadata.is_file() {
            debug!("Resolved file {}", path.display());
            files.push(path);
        } else {
            warn!("Skipping {}: not a regular file", path.display());
        }
    }

    Ok(files)
}

/// Append every visible file under `dir` to `files`
fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), PackError> {
    let walker = WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                if let Some(ancestor) = err.loop_ancestor() {
                    warn!(
                        "Skipping symlink loop at {} (points back to {})",
                        err.path().unwrap_or(dir).display(),
                        ancestor.display()
                    );
                    continue;
                }
                if err.depth() > 0 && is_dangling_link(&err) {
                    warn!(
                        "Skipping dangling symlink {}",
                        err.path().unwrap_or(dir).display()
                    );
                    continue;
                }
                let path = err.path().unwrap_or(dir).to_path_buf();
                return Err(PackError::Walk { path, source: err });
            }
        };

        let file_type = entry.file_type();
        if file_type.is_file() {
            files.push(entry.into_path());
        } else if !file_type.is_dir() {
            warn!("Skipping {}: not a regular file", entry.path().display());
        }
    }

    Ok(())
}

fn is_dangling_link(err: &walkdir::Error) -> bool {
    let not_found = err
        .io_error()
        .map(|e| e.kind() == ErrorKind::NotFound)
        .unwrap_or(false);
    let is_link = err
        .path()
        .and_then(|p| fs::symlink_metadata(p).ok())
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    not_found && is_link
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|f| {
                f.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_resolve_empty_input() {
        assert!(resolve(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_resolve_mixed_entry_points() {
        let temp = tempdir().unwrap();
        let root = temp.path().canonicalize().unwrap();
        fs::write(root.join("a.py"), "print('a')\n").unwrap();
        fs::create_dir_all(root.join("sub/.git")).unwrap();
        fs::write(root.join("sub/b.js"), "let b;\n").unwrap();
        fs::write(root.join("sub/.env"), "SECRET=1\n").unwrap();
        fs::write(root.join("sub/.git/config"), "[core]\n").unwrap();

        let files = resolve(&[root.join("a.py"), root.join("sub")]).unwrap();
        assert_eq!(names(&files, &root), vec!["a.py", "sub/b.js"]);
    }

    #[test]
    fn test_resolve_sorted_by_name() {
        let temp = tempdir().unwrap();
        let root = temp.path().canonicalize().unwrap();
        File::create(root.join("b.txt")).unwrap();
        File::create(root.join("a.txt")).unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        File::create(root.join("sub/zz.md")).unwrap();

        let files = resolve(&[root.clone()]).unwrap();
        assert_eq!(names(&files, &root), vec!["a.txt", "b.txt", "sub/zz.md"]);
    }

    #[test]
    fn test_resolve_prunes_hidden_at_every_depth() {
        let temp = tempdir().unwrap();
        let root = temp.path().canonicalize().unwrap();
        fs::create_dir_all(root.join("src/.cache/deep")).unwrap();
        File::create(root.join("src/lib.rs")).unwrap();
        File::create(root.join("src/.hidden.rs")).unwrap();
        File::create(root.join("src/.cache/deep/visible.rs")).unwrap();

        let files = resolve(&[root.clone()]).unwrap();
        assert_eq!(names(&files, &root), vec!["src/lib.rs"]);
        for file in &files {
            for component in file.strip_prefix(&root).unwrap().components() {
                assert!(!component.as_os_str().to_string_lossy().starts_with('.'));
            }
        }
    }

    #[test]
    fn test_resolve_direct_hidden_file_is_kept() {
        let temp = tempdir().unwrap();
        let root = temp.path().canonicalize().unwrap();
        fs::write(root.join(".env"), "X=1\n").unwrap();

        let files = resolve(&[root.join(".env")]).unwrap();
        assert_eq!(names(&files, &root), vec![".env"]);
    }

    #[test]
    fn test_resolve_hidden_entry_directory_is_walked() {
        let temp = tempdir().unwrap();
        let root = temp.path().canonicalize().unwrap();
        fs::create_dir(root.join(".config")).unwrap();
        File::create(root.join(".config/settings.json")).unwrap();

        let files = resolve(&[root.join(".config")]).unwrap();
        assert_eq!(names(&files, &root), vec![".config/settings.json"]);
    }

    #[test]
    fn test_resolve_no_dedup() {
        let temp = tempdir().unwrap();
        let root = temp.path().canonicalize().unwrap();
        File::create(root.join("a.rs")).unwrap();

        let files = resolve(&[root.join("a.rs"), root.clone()]).unwrap();
        assert_eq!(names(&files, &root), vec!["a.rs", "a.rs"]);
    }

    #[test]
    fn test_resolve_missing_entry_fails() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("ok.rs")).unwrap();
        let missing = temp.path().join("missing.rs");

        let err = resolve(&[temp.path().join("ok.rs"), missing.clone()]).unwrap_err();
        match err {
            PackError::EntryPoint { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_relative_entry_is_absolute() {
        let files = resolve(&[PathBuf::from("Cargo.toml")]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].is_absolute());
    }

    #[test]
    fn test_resolve_empty_directory() {
        let temp = tempdir().unwrap();
        assert!(resolve(&[temp.path().to_path_buf()]).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_survives_symlink_loop() {
        let temp = tempdir().unwrap();
        let root = temp.path().canonicalize().unwrap();
        fs::create_dir(root.join("dir")).unwrap();
        File::create(root.join("dir/file.rs")).unwrap();
        std::os::unix::fs::symlink(&root, root.join("dir/loop")).unwrap();

        let files = resolve(&[root.clone()]).unwrap();
        assert_eq!(names(&files, &root), vec!["dir/file.rs"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_skips_dangling_symlink() {
        let temp = tempdir().unwrap();
        let root = temp.path().canonicalize().unwrap();
        File::create(root.join("real.rs")).unwrap();
        std::os::unix::fs::symlink(root.join("gone.rs"), root.join("link.rs")).unwrap();

        let files = resolve(&[root.clone()]).unwrap();
        assert_eq!(names(&files, &root), vec!["real.rs"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_skips_special_files_in_directory() {
        use std::os::unix::net::UnixListener;

        let temp = tempdir().unwrap();
        let root = temp.path().canonicalize().unwrap();
        File::create(root.join("ok.rs")).unwrap();
        let _listener = UnixListener::bind(root.join("sock.txt")).unwrap();

        let files = resolve(&[root.clone()]).unwrap();
        assert_eq!(names(&files, &root), vec!["ok.rs"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_skips_fifo_in_directory() {
        let temp = tempdir().unwrap();
        let root = temp.path().canonicalize().unwrap();
        File::create(root.join("ok.rs")).unwrap();
        let made = std::process::Command::new("mkfifo")
            .arg(root.join("pipe.txt"))
            .status()
            .map(|s| s.success())
            .unwrap_or(false);
        if !made {
            return;
        }

        let files = resolve(&[root.clone()]).unwrap();
        assert_eq!(names(&files, &root), vec!["ok.rs"]);
        assert!(files.iter().all(|f| f.is_file()));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_skips_special_entry_point() {
        use std::os::unix::net::UnixListener;

        let temp = tempdir().unwrap();
        let root = temp.path().canonicalize().unwrap();
        File::create(root.join("a.rs")).unwrap();
        let _listener = UnixListener::bind(root.join("named.sock")).unwrap();

        let files = resolve(&[root.join("named.sock"), root.join("a.rs")]).unwrap();
        assert_eq!(names(&files, &root), vec!["a.rs"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_resolve_prunes_non_utf8_hidden_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = tempdir().unwrap();
        let root = temp.path().canonicalize().unwrap();
        File::create(root.join("ok.rs")).unwrap();
        File::create(root.join(OsStr::from_bytes(b".secret\xff"))).unwrap();
        fs::create_dir(root.join(OsStr::from_bytes(b".cache\xfe"))).unwrap();
        File::create(root.join(OsStr::from_bytes(b".cache\xfe")).join("inner.rs")).unwrap();

        let files = resolve(&[root.clone()]).unwrap();
        assert_eq!(names(&files, &root), vec!["ok.rs"]);
    }
}
