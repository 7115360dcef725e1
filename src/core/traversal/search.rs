use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::core::error::FsError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Lazy walk yielding every entry below a root whose file name equals the
/// target exactly. Enumeration order is whatever the OS hands back.
///
/// The first enumeration failure is yielded once as an error and ends the
/// walk. Symbolic links are reported but never followed.
pub struct Search {
    root: PathBuf,
    target: OsString,
    entries: walkdir::IntoIter,
    finished: bool,
}

pub fn search(root: &Path, target: &str) -> Search {
    debug!(root = %root.display(), target, "starting search");
    Search {
        root: root.to_path_buf(),
        target: OsString::from(target),
        entries: WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .into_iter(),
        finished: false,
    }
}

impl Iterator for Search {
    type Item = Result<SearchMatch, FsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.entries.next() {
                None => {
                    self.finished = true;
                    return None;
                }
                Some(Ok(entry)) => {
                    if entry.file_name() == self.target.as_os_str() {
                        return Some(Ok(SearchMatch {
                            path: entry.path().to_path_buf(),
                            is_dir: entry.file_type().is_dir(),
                        }));
                    }
                }
                Some(Err(err)) => {
                    self.finished = true;
                    let path = err.path().unwrap_or(self.root.as_path()).to_path_buf();
                    let source: io::Error = err.into();
                    debug!(path = %path.display(), error = %source, "search aborted");
                    return Some(Err(FsError::io(path, source)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_finds_every_match() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("a");
        fs::create_dir_all(root.join("b")).unwrap();
        fs::write(root.join("x.txt"), b"").unwrap();
        fs::write(root.join("b/x.txt"), b"").unwrap();
        fs::write(root.join("b/y.txt"), b"").unwrap();

        let mut found: Vec<PathBuf> = search(&root, "x.txt")
            .map(|m| m.unwrap().path)
            .collect();
        found.sort();

        assert_eq!(found, vec![root.join("b/x.txt"), root.join("x.txt")]);
    }

    #[test]
    fn test_exact_case_sensitive_match() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("Notes.txt"), b"").unwrap();
        fs::write(temp.path().join("notes.txt.bak"), b"").unwrap();

        assert_eq!(search(temp.path(), "notes.txt").count(), 0);
        assert_eq!(search(temp.path(), "*.txt").count(), 0);
        assert_eq!(search(temp.path(), "Notes.txt").count(), 1);
    }

    #[test]
    fn test_directories_flagged() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("one/target")).unwrap();
        fs::write(temp.path().join("target"), b"file").unwrap();

        let mut found: Vec<SearchMatch> = search(temp.path(), "target")
            .collect::<Result<_, _>>()
            .unwrap();
        found.sort_by(|a, b| a.path.cmp(&b.path));

        assert_eq!(found.len(), 2);
        assert!(found[0].is_dir);
        assert_eq!(found[0].path, temp.path().join("one/target"));
        assert!(!found[1].is_dir);
    }

    #[test]
    fn test_root_itself_not_reported() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("same");
        fs::create_dir(&root).unwrap();

        assert_eq!(search(&root, "same").count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_stops_walk() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        let locked = temp.path().join("target");
        fs::create_dir_all(locked.join("inner")).unwrap();
        fs::write(locked.join("inner/target"), b"").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users read through mode bits; nothing to observe then.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let results: Vec<_> = search(temp.path(), "target").collect();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(results.len(), 2);
        let found = results[0].as_ref().unwrap();
        assert_eq!(found.path, locked);
        assert!(found.is_dir);
        let err = results[1].as_ref().unwrap_err();
        assert_eq!(err.path(), locked);
    }

    #[test]
    fn test_missing_root_yields_single_error() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("vanished");

        let results: Vec<_> = search(&root, "anything").collect();
        assert_eq!(results.len(), 1);
        let err = results.into_iter().next().unwrap().unwrap_err();
        assert_eq!(err.path(), root);
    }
}
